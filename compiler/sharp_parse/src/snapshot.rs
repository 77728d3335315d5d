//! Parser snapshots for speculative parsing.
//!
//! Snapshots enable the parser to:
//! - Try a parse speculatively
//! - Examine the result
//! - Decide whether to keep or discard it
//!
//! # When to Use Each Approach
//!
//! ## Simple Lookahead (prefer when possible)
//!
//! Use direct token checks when the decision only needs one or two tokens:
//!
//! ```ignore
//! let is_var_pattern = self.cursor.check_contextual(ContextualKind::Var)
//!     && matches!(self.cursor.peek_kind_at(1), TokenKind::Ident | TokenKind::LParen);
//! ```
//!
//! ## `look_ahead()`
//!
//! Use for scanners that walk an unbounded number of tokens but never build
//! nodes, such as the type scanner behind generic disambiguation:
//!
//! ```ignore
//! let is_generic = self.look_ahead(|p| p.scan_type_argument_list(mode));
//! ```
//!
//! ## `try_parse()`
//!
//! Use to attempt a full production and keep it only when it succeeds:
//!
//! ```ignore
//! let ty = self.try_parse(|p| {
//!     let ty = p.parse_type(mode);
//!     p.can_token_follow_type_in_pattern(precedence).then_some(ty)
//! });
//! ```
//!
//! ## `snapshot()` / `restore()`
//!
//! Use when the keep-or-discard decision depends on what follows the
//! speculative parse:
//!
//! ```ignore
//! let snapshot = self.snapshot();
//! let arm = self.parse_switch_arm();
//! if self.cursor.position() == before && !self.check(TokenKind::Comma) {
//!     self.restore(snapshot);
//! }
//! ```
//!
//! # Design Notes
//!
//! Speculative productions here allocate nodes and may report diagnostics,
//! so a snapshot captures every mutable counter of the parser. Restoring
//! truncates the arena and the diagnostic list back to their marks; nothing
//! a discarded attempt produced stays reachable.

use crate::context::ParseContext;
use sharp_ir::ArenaMark;

/// State needed to rewind the parser after a speculative parse.
#[derive(Clone, Copy, Debug)]
pub struct ParserSnapshot {
    pub(crate) cursor_pos: usize,
    pub(crate) pending_skip: Option<u32>,
    pub(crate) last_end: u32,
    pub(crate) context: ParseContext,
    pub(crate) diagnostics_len: usize,
    pub(crate) arena: ArenaMark,
    pub(crate) depth: u32,
}

impl ParserSnapshot {
    #[inline]
    #[expect(
        clippy::too_many_arguments,
        reason = "one argument per captured counter"
    )]
    pub(crate) fn new(
        cursor_pos: usize,
        pending_skip: Option<u32>,
        last_end: u32,
        context: ParseContext,
        diagnostics_len: usize,
        arena: ArenaMark,
        depth: u32,
    ) -> Self {
        Self {
            cursor_pos,
            pending_skip,
            last_end,
            context,
            diagnostics_len,
            arena,
            depth,
        }
    }
}
