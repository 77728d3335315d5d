//! Grammar Modules
//!
//! Parsing implementations for expressions, types, patterns and statements.
//!
//! # Organization
//!
//! Each module extends `Parser` with methods for specific grammar productions:
//!
//! - [`expr`]: precedence climbing, terms, postfix operators, lambdas
//! - [`ty`]: types, plus the non-building type scanner used for disambiguation
//! - [`pattern`]: patterns, combinators, positional/property/list clauses
//! - [`switch`]: switch expressions and switch statements
//! - [`stmt`]: statements and compilation units
//!
//! # Design
//!
//! - **Never fail**: productions return a node, synthesizing missing tokens
//!   and placeholders instead of erroring out.
//! - **Speculation**: ambiguous prefixes are resolved by scanning with
//!   `look_ahead` or by parsing from a snapshot and rolling back.
//! - **Context flags**: `ParseContext` controls context-sensitive parsing
//!   (`when` as a keyword, generic-name commitment in patterns).
//! - **Progress**: every loop either consumes a token or stops.

mod expr;
mod pattern;
mod stmt;
mod switch;
mod ty;

pub(crate) use expr::Precedence;
pub(crate) use ty::TypeMode;

use sharp_ir::ast::SeparatedList;
use sharp_ir::{ContextualKind, TokenKind};

use crate::recovery::TokenSet;
use crate::{ParseErrorKind, Parser};

/// How a comma-separated list treats a trailing separator.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum Trailing {
    Allowed,
    /// A trailing comma gets a placeholder item (and its diagnostic).
    Placeholder,
}

impl Parser<'_> {
    /// `when` acting as the guard keyword.
    #[inline]
    pub(crate) fn at_when_keyword(&self) -> bool {
        self.context.when_is_keyword() && self.cursor.check_contextual(ContextualKind::When)
    }

    /// Parse `item (, item)*` up to `close`, which is left for the caller.
    ///
    /// A gap (`(,` or `,,`) gets a `placeholder`. Two items without a comma
    /// between them get a missing comma. The list stops at `close`, at a
    /// token in `terminators`, and at the guard keyword `when`; any other
    /// token that cannot start an item is skipped with a diagnostic.
    pub(crate) fn parse_separated<T>(
        &mut self,
        close: TokenKind,
        terminators: TokenSet,
        trailing: Trailing,
        is_item_start: impl Fn(&Self) -> bool,
        mut parse_item: impl FnMut(&mut Self) -> T,
        mut placeholder: impl FnMut(&mut Self) -> T,
    ) -> SeparatedList<T> {
        let mut list = SeparatedList::new();
        let mut need_separator = false;
        loop {
            let kind = self.current_kind();
            if kind == close
                || kind == TokenKind::Eof
                || terminators.contains(&kind)
                || self.at_when_keyword()
            {
                break;
            }
            if kind == TokenKind::Comma {
                if !need_separator {
                    let item = placeholder(self);
                    list.push_item(item);
                }
                let comma = self.advance();
                list.push_separator(comma);
                need_separator = false;
                continue;
            }
            if is_item_start(self) {
                if need_separator {
                    let span = self.current_span();
                    self.error(
                        ParseErrorKind::MissingToken {
                            expected: TokenKind::Comma,
                        },
                        span,
                    );
                    list.push_separator(self.cursor.missing(TokenKind::Comma));
                }
                let before = self.cursor.position();
                let item = parse_item(self);
                list.push_item(item);
                need_separator = true;
                if self.cursor.position() == before {
                    // The item synthesized everything; step over the token.
                    self.skip_unexpected();
                }
                continue;
            }
            self.skip_unexpected();
        }
        if trailing == Trailing::Placeholder && list.has_trailing_separator() {
            let item = placeholder(self);
            list.push_item(item);
        }
        list
    }
}
