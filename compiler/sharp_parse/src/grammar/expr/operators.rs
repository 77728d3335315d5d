//! Operator Matching Helpers
//!
//! Maps the token at the cursor to a binary operator and its precedence.
//! `>>` and `>>=` are never lexed; they are composed here from adjacent `>`
//! tokens so that nested type argument lists close one `>` at a time.

use sharp_ir::ast::{Expr, ExprKind};
use sharp_ir::TokenKind;

use super::Precedence;
use crate::Parser;

/// How an operator combines its operands.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum OperatorForm {
    Binary,
    Assignment,
    Range,
    Switch,
    Is,
    As,
}

/// An operator at the cursor, not yet consumed.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct MatchedOperator {
    pub kind: TokenKind,
    /// Tokens the operator spans (2 for a composed `>>`).
    pub token_count: usize,
    pub precedence: Precedence,
    pub form: OperatorForm,
}

impl MatchedOperator {
    fn new(kind: TokenKind, precedence: Precedence, form: OperatorForm) -> Self {
        MatchedOperator {
            kind,
            token_count: 1,
            precedence,
            form,
        }
    }

    pub(crate) fn is_right_associative(&self) -> bool {
        matches!(self.form, OperatorForm::Assignment)
            || self.kind == TokenKind::QuestionQuestion
    }
}

/// Precedence of a binary operator token.
pub(crate) fn binary_precedence(kind: TokenKind) -> Option<Precedence> {
    let prec = match kind {
        TokenKind::QuestionQuestion => Precedence::Coalescing,
        TokenKind::PipePipe => Precedence::ConditionalOr,
        TokenKind::AmpAmp => Precedence::ConditionalAnd,
        TokenKind::Pipe => Precedence::LogicalOr,
        TokenKind::Caret => Precedence::LogicalXor,
        TokenKind::Amp => Precedence::LogicalAnd,
        TokenKind::EqEq | TokenKind::NotEq => Precedence::Equality,
        TokenKind::Lt
        | TokenKind::Gt
        | TokenKind::LtEq
        | TokenKind::GtEq
        | TokenKind::Is
        | TokenKind::As => Precedence::Relational,
        TokenKind::Shl | TokenKind::Shr => Precedence::Shift,
        TokenKind::Plus | TokenKind::Minus => Precedence::Additive,
        TokenKind::Star | TokenKind::Slash | TokenKind::Percent => Precedence::Multiplicative,
        TokenKind::Switch => Precedence::Switch,
        TokenKind::DotDot => Precedence::Range,
        _ => return None,
    };
    Some(prec)
}

/// Precedence an already-built expression binds at.
pub(crate) fn expression_precedence(expr: &Expr) -> Precedence {
    match &expr.kind {
        ExprKind::Lambda { .. } | ExprKind::Assignment { .. } => Precedence::Expression,
        ExprKind::Conditional { .. } => Precedence::Conditional,
        ExprKind::Binary { op, .. } => {
            binary_precedence(op.kind).unwrap_or(Precedence::Primary)
        }
        ExprKind::IsType { .. } | ExprKind::IsPattern { .. } | ExprKind::As { .. } => {
            Precedence::Relational
        }
        ExprKind::Switch { .. } => Precedence::Switch,
        ExprKind::Range { .. } => Precedence::Range,
        ExprKind::Throw { .. } => Precedence::Coalescing,
        ExprKind::Prefix { op, .. } => match op.kind {
            TokenKind::Star => Precedence::PointerIndirection,
            TokenKind::Amp => Precedence::AddressOf,
            _ => Precedence::Unary,
        },
        ExprKind::Cast { .. } => Precedence::Cast,
        _ => Precedence::Primary,
    }
}

impl Parser<'_> {
    /// The binary, assignment, `is`, `as`, `switch` or `..` operator at the
    /// cursor.
    pub(crate) fn match_binary_operator(&self) -> Option<MatchedOperator> {
        let kind = self.current_kind();
        if kind == TokenKind::Gt {
            if let Some(composite) = self.cursor.composite_gt_at(0) {
                let (precedence, form) = if composite == TokenKind::ShrEq {
                    (Precedence::Expression, OperatorForm::Assignment)
                } else {
                    (Precedence::Shift, OperatorForm::Binary)
                };
                return Some(MatchedOperator {
                    kind: composite,
                    token_count: 2,
                    precedence,
                    form,
                });
            }
        }
        if kind.is_assignment_operator() {
            return Some(MatchedOperator::new(
                kind,
                Precedence::Expression,
                OperatorForm::Assignment,
            ));
        }
        // `switch` without `{` ends the expression.
        if kind == TokenKind::Switch && self.peek_kind_at(1) != TokenKind::LBrace {
            return None;
        }
        let precedence = binary_precedence(kind)?;
        let form = match kind {
            TokenKind::Is => OperatorForm::Is,
            TokenKind::As => OperatorForm::As,
            TokenKind::Switch => OperatorForm::Switch,
            TokenKind::DotDot => OperatorForm::Range,
            _ => OperatorForm::Binary,
        };
        Some(MatchedOperator::new(kind, precedence, form))
    }

    /// Prefix operator at the cursor and the precedence of its operand.
    pub(crate) fn match_prefix_operator(&self) -> Option<Precedence> {
        match self.current_kind() {
            TokenKind::Plus
            | TokenKind::Minus
            | TokenKind::Bang
            | TokenKind::Tilde
            | TokenKind::PlusPlus
            | TokenKind::MinusMinus
            | TokenKind::Caret => Some(Precedence::Unary),
            TokenKind::Star => Some(Precedence::PointerIndirection),
            TokenKind::Amp => Some(Precedence::AddressOf),
            _ => None,
        }
    }
}
