//! Conversions between types, expressions and patterns.
//!
//! A name parsed as a type in pattern position may really be a constant,
//! and `e is A.B` is a type test even though `A.B` was parsed as a
//! constant. These helpers rebuild the node on the other side, reusing the
//! original tokens.

use sharp_ir::ast::{Expr, ExprKind, PatternKind, SimpleName, Ty, TyKind};
use sharp_ir::{ExprId, PatId, Token, TokenKind, TyId};

use crate::grammar::Precedence;
use crate::{Feature, ParseContext, Parser};

impl Parser<'_> {
    /// Rebuild a name or qualified name type as an expression.
    ///
    /// Generic names convert only when `permit_type_args` is set; the left
    /// side of a qualified name always permits them.
    pub(crate) fn convert_type_to_expression(
        &mut self,
        ty: TyId,
        permit_type_args: bool,
    ) -> Option<ExprId> {
        let node = self.arena.ty(ty).clone();
        let kind = match node.kind {
            TyKind::Name(name) => {
                if name.type_args.is_some() && !permit_type_args {
                    return None;
                }
                ExprKind::Name(name)
            }
            TyKind::Qualified { left, dot, right } => {
                if right.type_args.is_some() && !permit_type_args {
                    return None;
                }
                let receiver = self.convert_type_to_expression(left, true)?;
                ExprKind::MemberAccess {
                    receiver,
                    operator: dot,
                    name: right,
                }
            }
            _ => return None,
        };
        Some(self.arena.alloc_expr(Expr::new(kind, node.span)))
    }

    /// Rebuild a name or member-access chain as a type.
    pub(crate) fn convert_expression_to_type(&mut self, expr: ExprId) -> Option<TyId> {
        let node = self.arena.expr(expr).clone();
        let kind = match node.kind {
            ExprKind::Name(name) => TyKind::Name(name),
            ExprKind::MemberAccess {
                receiver,
                operator,
                name,
            } if matches!(operator.kind, TokenKind::Dot | TokenKind::ColonColon) => {
                let left = self.convert_expression_to_type(receiver)?;
                TyKind::Qualified {
                    left,
                    dot: operator,
                    right: name,
                }
            }
            _ => return None,
        };
        Some(self.arena.alloc_ty(Ty::new(kind, node.span)))
    }

    /// The expression a subpattern prefix (`a.b:`) was parsed as.
    pub(crate) fn convert_pattern_to_expression(&mut self, pattern: PatId) -> Option<ExprId> {
        match self.arena.pattern(pattern).kind {
            PatternKind::Constant(expr) => Some(expr),
            PatternKind::Type(ty) => self.convert_type_to_expression(ty, true),
            _ => None,
        }
    }

    /// `e is T` or `e is pattern`, with `is` already consumed.
    pub(crate) fn parse_is_expression(&mut self, operand: ExprId, is_kw: Token, start: u32) -> ExprId {
        let context = self
            .context
            .with(ParseContext::IN_PATTERN)
            .without(ParseContext::WHEN_IS_KEYWORD);
        let pattern =
            self.with_context(context, |p| p.parse_pattern(Precedence::Relational, true));

        let as_type = match self.arena.pattern(pattern).kind {
            PatternKind::Type(ty) => Some(ty),
            PatternKind::Constant(expr) => self.convert_expression_to_type(expr),
            PatternKind::Discard(token) => {
                let name = SimpleName::plain(token);
                Some(self.arena.alloc_ty(Ty::new(TyKind::Name(name), token.span)))
            }
            _ => None,
        };
        let kind = match as_type {
            Some(ty) => ExprKind::IsType {
                operand,
                is_kw,
                ty,
            },
            None => {
                self.check_feature(Feature::PatternMatching, is_kw.span);
                self.gate_pattern_features(pattern);
                ExprKind::IsPattern {
                    operand,
                    is_kw,
                    pattern,
                }
            }
        };
        self.alloc_expr(kind, start)
    }

    /// The legacy `case` value for a label pattern: a constant, or a
    /// predefined or named type read back as an expression.
    pub(crate) fn case_label_value(&mut self, pattern: PatId) -> Option<ExprId> {
        let ty = match self.arena.pattern(pattern).kind {
            PatternKind::Constant(expr) => return Some(expr),
            PatternKind::Type(ty) => ty,
            _ => return None,
        };
        let node = self.arena.ty(ty);
        match node.kind {
            TyKind::Predefined(keyword) => {
                let span = node.span;
                Some(
                    self.arena
                        .alloc_expr(Expr::new(ExprKind::PredefinedType(keyword), span)),
                )
            }
            TyKind::Name(_) | TyKind::Qualified { .. } => {
                self.convert_type_to_expression(ty, true)
            }
            _ => None,
        }
    }
}
