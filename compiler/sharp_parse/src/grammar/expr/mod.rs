//! Expression Parsing
//!
//! Precedence climbing over [`Precedence`]. A sub-expression is a prefix
//! form or a term, followed by every binary operator that binds at least as
//! tightly as the caller's level. `?:` is attached last, and only when the
//! caller's level admits a conditional.
//!
//! # Modules
//!
//! - `operators`: operator table, `>>` composition
//! - `primary`: terms, parenthesized forms, casts, lambdas, `new`
//! - `postfix`: calls, indexing, member access, argument lists

mod operators;
mod postfix;
mod primary;

use sharp_ir::ast::{Designation, ExprKind, SeparatedList};
use sharp_ir::{ContextualKind, ExprId, TokenKind};

use super::ty::NameMode;
use super::TypeMode;
use crate::recovery::EXPR_START;
use crate::{Feature, ParseErrorKind, Parser};
use operators::{expression_precedence, OperatorForm};

pub(crate) use operators::binary_precedence;

/// Binding levels, loosest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum Precedence {
    /// Assignment and lambdas.
    Expression,
    Conditional,
    Coalescing,
    ConditionalOr,
    ConditionalAnd,
    LogicalOr,
    LogicalXor,
    LogicalAnd,
    Equality,
    Relational,
    Shift,
    Additive,
    Multiplicative,
    Switch,
    Range,
    Unary,
    Cast,
    PointerIndirection,
    AddressOf,
    Primary,
}

impl Parser<'_> {
    /// Parse a full expression, assignments and lambdas included.
    pub(crate) fn parse_expression(&mut self) -> ExprId {
        self.parse_sub_expression(Precedence::Expression)
    }

    /// Parse an expression whose operators all bind at least as tightly as
    /// `precedence`.
    pub(crate) fn parse_sub_expression(&mut self, precedence: Precedence) -> ExprId {
        self.guarded(
            |p| p.parse_sub_expression_core(precedence),
            Self::missing_name_expr,
        )
    }

    fn parse_sub_expression_core(&mut self, precedence: Precedence) -> ExprId {
        let start = self.current_span().start;
        let kind = self.current_kind();
        let left = if let Some(operand_precedence) = self.match_prefix_operator() {
            let op = self.advance();
            if op.kind == TokenKind::Caret {
                self.check_feature(Feature::Ranges, op.span);
            }
            let operand = self.parse_sub_expression(operand_precedence);
            self.alloc_expr(ExprKind::Prefix { op, operand }, start)
        } else if kind == TokenKind::DotDot {
            let op = self.advance();
            self.check_feature(Feature::Ranges, op.span);
            let end = self.parse_range_end();
            self.alloc_expr(
                ExprKind::Range {
                    start: None,
                    op,
                    end,
                },
                start,
            )
        } else if kind == TokenKind::Throw {
            return self.parse_throw_expression(precedence);
        } else if self.is_possible_deconstruction_left(precedence) {
            self.parse_declaration_expression(TypeMode::Normal, true)
        } else {
            self.parse_term(precedence)
        };
        self.parse_expression_continued(left, precedence)
    }

    /// Continue `left` with binary operators binding at least as tightly as
    /// `precedence`, then a conditional if `precedence` admits one.
    pub(crate) fn parse_expression_continued(
        &mut self,
        mut left: ExprId,
        precedence: Precedence,
    ) -> ExprId {
        let start = self.arena.expr(left).span.start;
        while let Some(op) = self.match_binary_operator() {
            if op.precedence < precedence
                || (op.precedence == precedence && !op.is_right_associative())
            {
                break;
            }
            let left_precedence = expression_precedence(self.arena.expr(left));
            let op_token = if op.token_count > 1 {
                self.cursor.advance_composite(op.kind, op.token_count)
            } else {
                self.advance()
            };
            if op.precedence > left_precedence {
                // `x switch { ... } .. 2` still groups as written.
                self.error(
                    ParseErrorKind::PrecedenceWarning { operator: op.kind },
                    op_token.span,
                );
            }
            left = match op.form {
                OperatorForm::Binary => {
                    let right = self.parse_sub_expression(op.precedence);
                    self.alloc_expr(
                        ExprKind::Binary {
                            left,
                            op: op_token,
                            right,
                        },
                        start,
                    )
                }
                OperatorForm::Assignment => {
                    let value = self.parse_sub_expression(Precedence::Expression);
                    self.alloc_expr(
                        ExprKind::Assignment {
                            target: left,
                            op: op_token,
                            value,
                        },
                        start,
                    )
                }
                OperatorForm::Range => {
                    self.check_feature(Feature::Ranges, op_token.span);
                    let end = self.parse_range_end();
                    self.alloc_expr(
                        ExprKind::Range {
                            start: Some(left),
                            op: op_token,
                            end,
                        },
                        start,
                    )
                }
                OperatorForm::As => {
                    let ty = self.parse_type(TypeMode::AsExpression);
                    self.alloc_expr(
                        ExprKind::As {
                            operand: left,
                            as_kw: op_token,
                            ty,
                        },
                        start,
                    )
                }
                OperatorForm::Is => self.parse_is_expression(left, op_token, start),
                OperatorForm::Switch => self.parse_switch_expression(left, op_token, start),
            };
        }

        if self.check(TokenKind::Question) && precedence <= Precedence::Conditional {
            let question = self.advance();
            let when_true = self.parse_expression();
            let colon = self.expect(TokenKind::Colon);
            let when_false = self.parse_expression();
            left = self.alloc_expr(
                ExprKind::Conditional {
                    condition: left,
                    question,
                    when_true,
                    colon,
                    when_false,
                },
                start,
            );
        }
        left
    }

    /// Optional right operand of `..`.
    fn parse_range_end(&mut self) -> Option<ExprId> {
        if self.can_start_expression() {
            Some(self.parse_sub_expression(Precedence::Range))
        } else {
            None
        }
    }

    fn parse_throw_expression(&mut self, precedence: Precedence) -> ExprId {
        let start = self.current_span().start;
        let throw_kw = self.advance();
        self.check_feature(Feature::ThrowExpression, throw_kw.span);
        if precedence > Precedence::Coalescing {
            self.error(ParseErrorKind::ThrowExpressionMisplaced, throw_kw.span);
        }
        let operand = self.parse_sub_expression(Precedence::Coalescing);
        self.alloc_expr(ExprKind::Throw { throw_kw, operand }, start)
    }

    #[inline]
    pub(crate) fn can_start_expression(&self) -> bool {
        EXPR_START.contains(&self.current_kind())
    }

    /// Name mode for identifiers in expression position.
    pub(crate) fn expression_name_mode(&self) -> NameMode {
        if self.context.in_pattern() {
            NameMode::Pattern
        } else {
            NameMode::Expression
        }
    }

    /// `var (a, b) = ...` at the start of an assignment.
    fn is_possible_deconstruction_left(&mut self, precedence: Precedence) -> bool {
        if precedence > Precedence::Expression
            || self.peek_kind_at(1) != TokenKind::LParen
            || !self.cursor.check_contextual(ContextualKind::Var)
        {
            return false;
        }
        self.look_ahead(|p| {
            p.advance();
            p.scan_designation(true) && p.check(TokenKind::Eq)
        })
    }

    /// `out x` or `out T x`, `(T a, var b)` elements.
    pub(crate) fn parse_expression_or_declaration(
        &mut self,
        mode: TypeMode,
        permit_tuple_designation: bool,
    ) -> ExprId {
        if self.is_possible_declaration_expression(mode, permit_tuple_designation) {
            self.parse_declaration_expression(mode, permit_tuple_designation)
        } else {
            self.parse_expression()
        }
    }

    /// `T designation`. The caller has scanned it.
    fn parse_declaration_expression(&mut self, mode: TypeMode, permit_tuple: bool) -> ExprId {
        let start = self.current_span().start;
        let is_var = self.cursor.check_contextual(ContextualKind::Var);
        let ty = self.parse_type(mode);
        let designation = if permit_tuple && is_var && self.check(TokenKind::LParen) {
            self.parse_designation()
        } else {
            self.parse_single_designation()
        };
        self.alloc_expr(ExprKind::Declaration { ty, designation }, start)
    }

    /// `x`, `_` or `(a, (b, _))`.
    pub(crate) fn parse_designation(&mut self) -> Designation {
        if !self.check(TokenKind::LParen) {
            return self.parse_single_designation();
        }
        self.guarded(
            |p| {
                let open = p.advance();
                let mut designations = SeparatedList::new();
                loop {
                    designations.push_item(p.parse_designation());
                    match p.eat(TokenKind::Comma) {
                        Some(comma) => designations.push_separator(comma),
                        None => break,
                    }
                }
                let close = p.expect(TokenKind::RParen);
                Designation::Parenthesized {
                    open,
                    designations,
                    close,
                }
            },
            |p| Designation::Single(p.cursor.missing(TokenKind::Ident)),
        )
    }

    pub(crate) fn parse_single_designation(&mut self) -> Designation {
        if self.cursor.check_contextual(ContextualKind::Underscore) {
            Designation::Discard(self.advance())
        } else {
            Designation::Single(self.expect_ident())
        }
    }
}
