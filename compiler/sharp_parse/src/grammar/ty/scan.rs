//! Type Scanning
//!
//! Recognizers that decide, before anything is built, whether the tokens
//! ahead read as a type, a cast, a declaration or a lambda header. Scanners
//! advance the cursor freely; callers run them inside `look_ahead`.

use sharp_ir::{ContextualKind, TokenKind};
use sharp_stack::ensure_sufficient_stack;
use tracing::debug;

use super::{NameMode, Suffix, TypeMode};
use crate::recovery::{TokenSet, GENERIC_FOLLOW};
use crate::{Parser, MAX_NESTING_DEPTH};

/// What a scanned type could be.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum ScanTypeFlags {
    NotType,
    /// Only a type fits: predefined types, arrays.
    MustBeType,
    /// `A<B>`: a generic type or a generic method name.
    GenericTypeOrExpression,
    /// `A`, `A.B`: reads as either.
    NonGenericTypeOrExpression,
    /// Ends in `?`.
    NullableType,
    /// Ends in `*` after a name: `A * b` could be a multiplication.
    PointerOrMultiplication,
    TupleType,
}

/// Tokens that end an expression, so `(T)` before them is a parenthesized
/// expression rather than a cast.
const CAST_BLOCKERS: TokenSet = TokenSet::new()
    .with(TokenKind::As)
    .with(TokenKind::Is)
    .with(TokenKind::Semicolon)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::LBrace)
    .with(TokenKind::RBrace)
    .with(TokenKind::Comma)
    .with(TokenKind::Eq)
    .with(TokenKind::PlusEq)
    .with(TokenKind::MinusEq)
    .with(TokenKind::StarEq)
    .with(TokenKind::SlashEq)
    .with(TokenKind::PercentEq)
    .with(TokenKind::AmpEq)
    .with(TokenKind::CaretEq)
    .with(TokenKind::PipeEq)
    .with(TokenKind::ShlEq)
    .with(TokenKind::QuestionQuestionEq)
    .with(TokenKind::Question)
    .with(TokenKind::Colon)
    .with(TokenKind::PipePipe)
    .with(TokenKind::AmpAmp)
    .with(TokenKind::Pipe)
    .with(TokenKind::Caret)
    .with(TokenKind::Amp)
    .with(TokenKind::EqEq)
    .with(TokenKind::NotEq)
    .with(TokenKind::Lt)
    .with(TokenKind::LtEq)
    .with(TokenKind::Gt)
    .with(TokenKind::GtEq)
    .with(TokenKind::Shl)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::Star)
    .with(TokenKind::Slash)
    .with(TokenKind::Percent)
    .with(TokenKind::PlusPlus)
    .with(TokenKind::MinusMinus)
    .with(TokenKind::LBracket)
    .with(TokenKind::Dot)
    .with(TokenKind::Arrow)
    .with(TokenKind::QuestionQuestion)
    .with(TokenKind::Switch)
    .with(TokenKind::FatArrow)
    .with(TokenKind::DotDot)
    .with(TokenKind::Eof);

pub(crate) fn can_follow_cast(kind: TokenKind) -> bool {
    !CAST_BLOCKERS.contains(&kind)
}

impl Parser<'_> {
    /// Scan one type, stopping where `parse_type(mode)` would stop.
    pub(crate) fn scan_type(&mut self, mode: TypeMode) -> ScanTypeFlags {
        if self.depth >= MAX_NESTING_DEPTH {
            return ScanTypeFlags::NotType;
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| self.scan_type_core(mode));
        self.depth -= 1;
        result
    }

    fn scan_type_core(&mut self, mode: TypeMode) -> ScanTypeFlags {
        let kind = self.current_kind();
        let mut result = if kind == TokenKind::Ident {
            self.scan_named_type()
        } else if kind.is_predefined_type() {
            self.advance();
            ScanTypeFlags::MustBeType
        } else if kind == TokenKind::LParen {
            self.advance();
            let tuple = self.scan_tuple_type();
            if mode == TypeMode::DefinitePattern && !self.check(TokenKind::LBracket) {
                // `(A, B)` in a pattern is a positional pattern unless an
                // array rank follows.
                return ScanTypeFlags::NotType;
            }
            tuple
        } else {
            ScanTypeFlags::NotType
        };
        if result == ScanTypeFlags::NotType {
            return result;
        }

        let mut last = Suffix::None;
        loop {
            match self.current_kind() {
                TokenKind::Question if self.question_is_nullable(last, mode) => {
                    self.advance();
                    result = ScanTypeFlags::NullableType;
                    last = Suffix::Nullable;
                }
                TokenKind::Star if self.star_is_pointer(last, mode) => {
                    self.advance();
                    if matches!(
                        result,
                        ScanTypeFlags::GenericTypeOrExpression
                            | ScanTypeFlags::NonGenericTypeOrExpression
                    ) {
                        result = ScanTypeFlags::PointerOrMultiplication;
                    }
                    last = Suffix::Pointer;
                }
                TokenKind::LBracket if self.rank_follows(TypeMode::Normal) => {
                    self.advance();
                    while self.eat(TokenKind::Comma).is_some() {}
                    self.advance();
                    result = ScanTypeFlags::MustBeType;
                    last = Suffix::Array;
                }
                _ => break,
            }
        }
        result
    }

    fn scan_named_type(&mut self) -> ScanTypeFlags {
        let mut result = self.scan_named_type_part();
        while result != ScanTypeFlags::NotType
            && matches!(self.current_kind(), TokenKind::Dot | TokenKind::ColonColon)
            && self.peek_kind_at(1) == TokenKind::Ident
        {
            self.advance();
            result = self.scan_named_type_part();
        }
        result
    }

    fn scan_named_type_part(&mut self) -> ScanTypeFlags {
        self.advance();
        if !self.check(TokenKind::Lt) {
            return ScanTypeFlags::NonGenericTypeOrExpression;
        }
        if self.scan_type_argument_list() {
            ScanTypeFlags::GenericTypeOrExpression
        } else {
            ScanTypeFlags::NotType
        }
    }

    /// `< type, ... >` with the cursor on `<`.
    pub(crate) fn scan_type_argument_list(&mut self) -> bool {
        if self.eat(TokenKind::Lt).is_none() {
            return false;
        }
        loop {
            if self.scan_type(TypeMode::Normal) == ScanTypeFlags::NotType {
                return false;
            }
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        self.eat(TokenKind::Gt).is_some()
    }

    /// Elements of a tuple type after `(`; needs two or more.
    fn scan_tuple_type(&mut self) -> ScanTypeFlags {
        let mut count = 0;
        loop {
            if self.scan_type(TypeMode::Normal) == ScanTypeFlags::NotType {
                return ScanTypeFlags::NotType;
            }
            self.eat(TokenKind::Ident);
            count += 1;
            if self.eat(TokenKind::Comma).is_none() {
                break;
            }
        }
        if count < 2 || self.eat(TokenKind::RParen).is_none() {
            return ScanTypeFlags::NotType;
        }
        ScanTypeFlags::TupleType
    }

    /// Decide whether `name <` at the cursor opens type arguments.
    ///
    /// Type context always commits. Elsewhere the argument list has to scan
    /// and the token after `>` has to be one that cannot continue a
    /// less-than comparison.
    pub(crate) fn type_arguments_commit(&mut self, mode: NameMode) -> bool {
        if mode == NameMode::Type {
            return true;
        }
        let commit = self.look_ahead(|p| {
            if !p.scan_type_argument_list() {
                return false;
            }
            let next = p.current();
            // `a < b >> c`: the `>` is the first half of a shift.
            if matches!(next.kind, TokenKind::Gt | TokenKind::GtEq)
                && next.full_span.start == p.cursor.last_end()
                && next.span.start == next.full_span.start
            {
                return false;
            }
            if GENERIC_FOLLOW.contains(&next.kind) {
                return true;
            }
            let after = p.peek_kind_at(1);
            match mode {
                NameMode::Pattern => matches!(next.kind, TokenKind::Ident | TokenKind::LBrace),
                NameMode::TupleFirst => next.kind == TokenKind::Ident && after == TokenKind::Comma,
                NameMode::TupleLater => {
                    next.kind == TokenKind::Ident
                        && matches!(after, TokenKind::Comma | TokenKind::RParen)
                }
                NameMode::Type | NameMode::Expression => false,
            }
        });
        debug!(?mode, commit, "generic name decision");
        commit
    }

    /// `(T) operand` with the cursor on `(`.
    pub(crate) fn scan_cast(&mut self, for_pattern: bool) -> bool {
        if self.eat(TokenKind::LParen).is_none() {
            return false;
        }
        let mode = if for_pattern {
            TypeMode::DefinitePattern
        } else {
            TypeMode::Normal
        };
        let ty = self.scan_type(mode);
        if ty == ScanTypeFlags::NotType || self.eat(TokenKind::RParen).is_none() {
            return false;
        }
        let next = self.current();
        if for_pattern
            && (next.is_contextual(ContextualKind::When)
                || next.is_contextual(ContextualKind::And)
                || next.is_contextual(ContextualKind::Or))
        {
            return false;
        }
        let next = next.kind;
        match ty {
            ScanTypeFlags::MustBeType
            | ScanTypeFlags::NullableType
            | ScanTypeFlags::PointerOrMultiplication => {
                !for_pattern
                    || matches!(
                        next,
                        TokenKind::Plus
                            | TokenKind::Minus
                            | TokenKind::Amp
                            | TokenKind::Star
                            | TokenKind::DotDot
                    )
                    || can_follow_cast(next)
            }
            _ => can_follow_cast(next),
        }
    }

    /// A parenthesized lambda header `( ... ) =>` at the cursor.
    pub(crate) fn is_parenthesized_lambda(&mut self) -> bool {
        if !self.check(TokenKind::LParen) {
            return false;
        }
        match self.peek_kind_at(1) {
            TokenKind::RParen => return self.peek_kind_at(2) == TokenKind::FatArrow,
            TokenKind::Ident if self.peek_kind_at(2) == TokenKind::RParen => {
                return self.peek_kind_at(3) == TokenKind::FatArrow;
            }
            _ => {}
        }
        self.look_ahead(|p| {
            p.advance();
            loop {
                let implicit = p.check(TokenKind::Ident)
                    && matches!(p.peek_kind_at(1), TokenKind::Comma | TokenKind::RParen);
                if implicit {
                    p.advance();
                } else {
                    if p.scan_type(TypeMode::Normal) == ScanTypeFlags::NotType
                        || p.eat(TokenKind::Ident).is_none()
                    {
                        return false;
                    }
                }
                match p.current_kind() {
                    TokenKind::Comma => {
                        p.advance();
                    }
                    TokenKind::RParen => {
                        p.advance();
                        return p.check(TokenKind::FatArrow);
                    }
                    _ => return false,
                }
            }
        })
    }

    /// A local or tuple-element declaration (`T x`, `var (a, b)`) at the
    /// cursor.
    pub(crate) fn is_possible_declaration_expression(
        &mut self,
        mode: TypeMode,
        permit_tuple_designation: bool,
    ) -> bool {
        let kind = self.current_kind();
        if !(kind == TokenKind::Ident || kind.is_predefined_type() || kind == TokenKind::LParen) {
            return false;
        }
        let is_var = self.cursor.check_contextual(ContextualKind::Var);
        self.look_ahead(|p| {
            if p.scan_type(mode) == ScanTypeFlags::NotType {
                return false;
            }
            if !p.scan_designation(permit_tuple_designation && is_var) {
                return false;
            }
            match mode {
                TypeMode::FirstElementOfPossibleTupleLiteral => p.check(TokenKind::Comma),
                TypeMode::AfterTupleComma => {
                    p.check(TokenKind::Comma) || p.check(TokenKind::RParen)
                }
                _ => true,
            }
        })
    }

    /// `name` or, when permitted, `( designation, ... )`.
    pub(crate) fn scan_designation(&mut self, permit_tuple: bool) -> bool {
        if permit_tuple && self.check(TokenKind::LParen) {
            if self.depth >= MAX_NESTING_DEPTH {
                return false;
            }
            self.depth += 1;
            self.advance();
            let ok = loop {
                if !ensure_sufficient_stack(|| self.scan_designation(true)) {
                    break false;
                }
                if self.eat(TokenKind::Comma).is_none() {
                    break self.eat(TokenKind::RParen).is_some();
                }
            };
            self.depth -= 1;
            return ok;
        }
        self.eat(TokenKind::Ident).is_some()
    }

    /// `T x = ...;`, `T x;`, `T x, y;` at the cursor.
    pub(crate) fn is_possible_local_declaration(&mut self) -> bool {
        let kind = self.current_kind();
        if !(kind == TokenKind::Ident || kind.is_predefined_type() || kind == TokenKind::LParen) {
            return false;
        }
        self.look_ahead(|p| {
            if p.scan_type(TypeMode::Normal) == ScanTypeFlags::NotType {
                return false;
            }
            if p.eat(TokenKind::Ident).is_none() {
                return false;
            }
            matches!(
                p.current_kind(),
                TokenKind::Eq | TokenKind::Semicolon | TokenKind::Comma | TokenKind::Eof
            )
        })
    }
}
