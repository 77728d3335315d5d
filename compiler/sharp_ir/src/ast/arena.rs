//! Arena allocation for the flat syntax tree.

use super::{Expr, ExprId, PatId, Pattern, Stmt, StmtId, Ty, TyId};

/// Contiguous storage for every node of one parse.
///
/// Child references are typed indices. Speculative parsing takes an
/// [`ArenaMark`] and truncates back to it on rollback, so nodes built by a
/// discarded attempt never become reachable.
#[derive(Clone, Default, Debug, PartialEq, Eq, Hash)]
pub struct SyntaxArena {
    exprs: Vec<Expr>,
    types: Vec<Ty>,
    patterns: Vec<Pattern>,
    stmts: Vec<Stmt>,
}

/// Pool lengths at a point in time.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ArenaMark {
    exprs: u32,
    types: u32,
    patterns: u32,
    stmts: u32,
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "pool sizes are bounded by token count, which fits in u32 spans"
)]
fn next_index(len: usize) -> u32 {
    len as u32
}

impl SyntaxArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-size pools from the token count.
    pub fn with_capacity(token_count: usize) -> Self {
        SyntaxArena {
            exprs: Vec::with_capacity(token_count),
            types: Vec::with_capacity(token_count / 4),
            patterns: Vec::with_capacity(token_count / 4),
            stmts: Vec::with_capacity(token_count / 8),
        }
    }

    // ===== Allocation =====

    #[inline]
    pub fn alloc_expr(&mut self, expr: Expr) -> ExprId {
        let id = ExprId::from_raw(next_index(self.exprs.len()));
        self.exprs.push(expr);
        id
    }

    #[inline]
    pub fn alloc_ty(&mut self, ty: Ty) -> TyId {
        let id = TyId::from_raw(next_index(self.types.len()));
        self.types.push(ty);
        id
    }

    #[inline]
    pub fn alloc_pattern(&mut self, pattern: Pattern) -> PatId {
        let id = PatId::from_raw(next_index(self.patterns.len()));
        self.patterns.push(pattern);
        id
    }

    #[inline]
    pub fn alloc_stmt(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::from_raw(next_index(self.stmts.len()));
        self.stmts.push(stmt);
        id
    }

    // ===== Access =====

    /// # Panics
    /// Panics if `id` is out of bounds.
    #[inline]
    #[track_caller]
    pub fn expr(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn ty(&self, id: TyId) -> &Ty {
        &self.types[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn pattern(&self, id: PatId) -> &Pattern {
        &self.patterns[id.index()]
    }

    #[inline]
    #[track_caller]
    pub fn stmt(&self, id: StmtId) -> &Stmt {
        &self.stmts[id.index()]
    }

    pub fn expr_count(&self) -> usize {
        self.exprs.len()
    }

    pub fn ty_count(&self) -> usize {
        self.types.len()
    }

    pub fn pattern_count(&self) -> usize {
        self.patterns.len()
    }

    // ===== Rollback =====

    pub fn mark(&self) -> ArenaMark {
        ArenaMark {
            exprs: next_index(self.exprs.len()),
            types: next_index(self.types.len()),
            patterns: next_index(self.patterns.len()),
            stmts: next_index(self.stmts.len()),
        }
    }

    /// Drop every node allocated after `mark`.
    pub fn truncate(&mut self, mark: ArenaMark) {
        self.exprs.truncate(mark.exprs as usize);
        self.types.truncate(mark.types as usize);
        self.patterns.truncate(mark.patterns as usize);
        self.stmts.truncate(mark.stmts as usize);
    }
}
