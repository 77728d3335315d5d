//! Pattern nodes.

use super::{ExprId, NameColon, PatId, SeparatedList, TyId};
use crate::{Span, Token};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Pattern {
    pub kind: PatternKind,
    pub span: Span,
}

impl Pattern {
    pub fn new(kind: PatternKind, span: Span) -> Self {
        Pattern { kind, span }
    }
}

/// Binding target of a pattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum Designation {
    Single(Token),
    /// `_`
    Discard(Token),
    Parenthesized {
        open: Token,
        designations: SeparatedList<Designation>,
        close: Token,
    },
}

impl Designation {
    pub fn span(&self) -> Span {
        match self {
            Designation::Single(tok) | Designation::Discard(tok) => tok.span,
            Designation::Parenthesized { open, close, .. } => open.span.to(close.span),
        }
    }
}

/// Prefix of a subpattern.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum SubpatternName {
    /// `Name:`
    Name(NameColon),
    /// `A.B.C:` (extended property pattern)
    Expression { expr: ExprId, colon: Token },
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Subpattern {
    pub prefix: Option<SubpatternName>,
    pub pattern: PatId,
}

/// `( subpattern, ... )`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PositionalClause {
    pub open: Token,
    pub subpatterns: SeparatedList<Subpattern>,
    pub close: Token,
}

/// `{ name: subpattern, ... }`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct PropertyClause {
    pub open: Token,
    pub subpatterns: SeparatedList<Subpattern>,
    pub close: Token,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum PatternKind {
    Discard(Token),
    Var {
        var_kw: Token,
        designation: Designation,
    },
    Declaration {
        ty: TyId,
        designation: Designation,
    },
    Constant(ExprId),
    /// Has at least one of `ty`, `positional` and `property`.
    Recursive {
        ty: Option<TyId>,
        positional: Option<PositionalClause>,
        property: Option<PropertyClause>,
        designation: Option<Designation>,
    },
    Relational {
        op: Token,
        operand: ExprId,
    },
    Type(TyId),
    And {
        left: PatId,
        and_kw: Token,
        right: PatId,
    },
    Or {
        left: PatId,
        or_kw: Token,
        right: PatId,
    },
    Not {
        not_kw: Token,
        operand: PatId,
    },
    Parenthesized {
        open: Token,
        inner: PatId,
        close: Token,
    },
    List {
        open: Token,
        patterns: SeparatedList<PatId>,
        close: Token,
        designation: Option<Designation>,
    },
    /// `..` or `.. pattern` inside a list pattern.
    Slice {
        dot_dot: Token,
        pattern: Option<PatId>,
    },
}
