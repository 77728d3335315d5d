//! Postfix Expression Parsing
//!
//! Calls, element access, member access, `++`/`--` and `!`, plus the
//! argument lists they share.

use sharp_ir::ast::{Argument, ArgumentList, ExprKind};
use sharp_ir::{ExprId, TokenKind};

use crate::error::ErrorContext;
use crate::grammar::{Trailing, TypeMode};
use crate::recovery::STRUCTURAL;
use crate::{Feature, ParseErrorKind, Parser};

impl Parser<'_> {
    /// Apply postfix operators to `expr`, which started at `start`.
    pub(crate) fn parse_postfix(&mut self, mut expr: ExprId, start: u32) -> ExprId {
        loop {
            expr = match self.current_kind() {
                TokenKind::LParen => {
                    let args = self.parse_argument_list();
                    self.alloc_expr(ExprKind::Invocation { callee: expr, args }, start)
                }
                TokenKind::LBracket => {
                    let args = self.parse_bracketed_argument_list();
                    self.alloc_expr(
                        ExprKind::ElementAccess {
                            receiver: expr,
                            args,
                        },
                        start,
                    )
                }
                TokenKind::PlusPlus | TokenKind::MinusMinus | TokenKind::Bang => {
                    let op = self.advance();
                    self.alloc_expr(ExprKind::Postfix { operand: expr, op }, start)
                }
                TokenKind::Dot | TokenKind::Arrow | TokenKind::ColonColon => {
                    let operator = self.advance();
                    let mode = self.expression_name_mode();
                    let name = self.parse_simple_name(mode);
                    self.alloc_expr(
                        ExprKind::MemberAccess {
                            receiver: expr,
                            operator,
                            name,
                        },
                        start,
                    )
                }
                _ => return expr,
            };
        }
    }

    /// `( args )`
    pub(crate) fn parse_argument_list(&mut self) -> ArgumentList {
        self.parse_delimited_arguments(TokenKind::RParen)
    }

    /// `[ args ]`, with a placeholder index when empty.
    fn parse_bracketed_argument_list(&mut self) -> ArgumentList {
        self.parse_delimited_arguments(TokenKind::RBracket)
    }

    fn parse_delimited_arguments(&mut self, close: TokenKind) -> ArgumentList {
        self.in_error_context(ErrorContext::ArgumentList, |p| {
            let open = p.advance();
            let mut args = p.parse_separated(
                close,
                STRUCTURAL,
                Trailing::Placeholder,
                Self::can_start_argument,
                Self::parse_argument,
                Self::missing_argument,
            );
            // An element access needs at least one index.
            if close == TokenKind::RBracket && args.is_empty() {
                let placeholder = p.missing_argument();
                args.push_item(placeholder);
            }
            let close = p.expect(close);
            ArgumentList { open, args, close }
        })
    }

    pub(crate) fn can_start_argument(&self) -> bool {
        self.can_start_expression()
            || matches!(
                self.current_kind(),
                TokenKind::Ref | TokenKind::Out | TokenKind::In
            )
    }

    /// `name: ref e`, `out var x`, `out T x`
    fn parse_argument(&mut self) -> Argument {
        let name_colon = self.parse_name_colon();
        let ref_kind = match self.current_kind() {
            TokenKind::Ref | TokenKind::Out | TokenKind::In => Some(self.advance()),
            _ => None,
        };
        let expr = if ref_kind.is_some_and(|t| t.kind == TokenKind::Out) {
            let expr = self.parse_expression_or_declaration(TypeMode::AfterOut, false);
            let node = self.arena.expr(expr);
            if matches!(node.kind, ExprKind::Declaration { .. }) {
                let span = node.span;
                self.check_feature(Feature::OutVariableDeclaration, span);
            }
            expr
        } else {
            self.parse_expression()
        };
        Argument {
            name_colon,
            ref_kind,
            expr,
        }
    }

    /// Placeholder for an empty argument slot.
    pub(crate) fn missing_argument(&mut self) -> Argument {
        let span = self.current_span();
        self.error(ParseErrorKind::ExpressionExpected, span);
        Argument {
            name_colon: None,
            ref_kind: None,
            expr: self.missing_name_expr(),
        }
    }
}
