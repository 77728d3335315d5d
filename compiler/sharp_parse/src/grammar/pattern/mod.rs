//! Pattern Parsing
//!
//! Patterns after `is`, in switch expression arms and in `case` labels.
//!
//! # Grammar
//!
//! ```text
//! pattern     = conjunction ( "or" conjunction )*
//! conjunction = negation ( "and" negation )*
//! negation    = "not"* primary
//! primary     = "_" | relational | list | slice | type-led | constant
//! ```
//!
//! The type-led path parses a type speculatively and keeps it only if the
//! next token can follow a type in a pattern; otherwise it rolls back and
//! the input is read as a constant expression.

mod clauses;
mod convert;

use sharp_ir::ast::{Designation, ExprKind, Pattern, PatternKind, TyKind};
use sharp_ir::{ContextualKind, PatId, TokenKind, TyId};
use tracing::debug;

use super::expr::binary_precedence;
use super::{Precedence, Trailing, TypeMode};
use crate::error::ErrorContext;
use crate::recovery::{TokenSet, CLAUSE_TERMINATORS, EXPR_START, PATTERN_RECOVERY};
use crate::{Feature, ParseErrorKind, ParseOutcome, Parser};

/// Tokens that may begin a pattern.
pub(crate) fn can_start_pattern(kind: TokenKind) -> bool {
    EXPR_START.contains(&kind)
        || matches!(
            kind,
            TokenKind::LBracket
                | TokenKind::LBrace
                | TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::EqEq
                | TokenKind::NotEq
        )
}

impl Parser<'_> {
    /// Parse a pattern whose constant operands bind at least as tightly as
    /// `precedence`. `after_is` selects the type mode for a leading type.
    pub(crate) fn parse_pattern(&mut self, precedence: Precedence, after_is: bool) -> PatId {
        self.guarded(
            |p| p.parse_disjunctive_pattern(precedence, after_is),
            Self::placeholder_pattern,
        )
    }

    fn parse_disjunctive_pattern(&mut self, precedence: Precedence, after_is: bool) -> PatId {
        let start = self.current_span().start;
        let mut left = self.parse_conjunctive_pattern(precedence, after_is);
        while self.cursor.check_contextual(ContextualKind::Or) {
            let or_kw = self.advance();
            self.check_feature(Feature::LogicalPatterns, or_kw.span);
            let right = self.parse_conjunctive_pattern(precedence, after_is);
            left = self.alloc_pattern(PatternKind::Or { left, or_kw, right }, start);
        }
        left
    }

    fn parse_conjunctive_pattern(&mut self, precedence: Precedence, after_is: bool) -> PatId {
        let start = self.current_span().start;
        let mut left = self.parse_negated_pattern(precedence, after_is);
        while self.cursor.check_contextual(ContextualKind::And) {
            let and_kw = self.advance();
            self.check_feature(Feature::LogicalPatterns, and_kw.span);
            let right = self.parse_negated_pattern(precedence, after_is);
            left = self.alloc_pattern(
                PatternKind::And {
                    left,
                    and_kw,
                    right,
                },
                start,
            );
        }
        left
    }

    /// `not not p` folds right to left without recursion.
    fn parse_negated_pattern(&mut self, precedence: Precedence, after_is: bool) -> PatId {
        let mut nots = Vec::new();
        while self.cursor.check_contextual(ContextualKind::Not)
            && can_start_pattern(self.peek_kind_at(1))
        {
            let not_kw = self.advance();
            self.check_feature(Feature::LogicalPatterns, not_kw.span);
            nots.push(not_kw);
        }
        let mut pattern = self.parse_primary_pattern(precedence, after_is);
        while let Some(not_kw) = nots.pop() {
            let start = not_kw.span.start;
            pattern = self.alloc_pattern(
                PatternKind::Not {
                    not_kw,
                    operand: pattern,
                },
                start,
            );
        }
        pattern
    }

    fn parse_primary_pattern(&mut self, precedence: Precedence, after_is: bool) -> PatId {
        if PATTERN_RECOVERY.contains(&self.current_kind()) {
            return self.missing_pattern();
        }
        let outcome = crate::one_of!(
            self,
            self.parse_discard_pattern(),
            self.parse_relational_pattern(),
            self.parse_list_pattern(),
            self.parse_slice_pattern(),
            self.parse_type_led_pattern(precedence, after_is),
        );
        self.accept_pattern(outcome, precedence)
    }

    /// Resolve the primary alternatives. When none applies, the input is a
    /// constant expression.
    fn accept_pattern(&mut self, outcome: ParseOutcome<PatId>, precedence: Precedence) -> PatId {
        match outcome {
            ParseOutcome::ConsumedOk { value } => value,
            ParseOutcome::EmptyErr { expected, position } => {
                debug!(
                    position,
                    declined = expected.count(),
                    "no pattern form applies; reading a constant"
                );
                let expr = self.parse_sub_expression(precedence);
                let span = self.arena.expr(expr).span;
                self.arena
                    .alloc_pattern(Pattern::new(PatternKind::Constant(expr), span))
            }
        }
    }

    fn decline<T>(&self, expected: TokenKind) -> ParseOutcome<T> {
        ParseOutcome::empty_err(TokenSet::single(expected), self.offset())
    }

    /// `_`, unless it is a type or the start of an expression.
    fn parse_discard_pattern(&mut self) -> ParseOutcome<PatId> {
        let is_discard = self.cursor.check_contextual(ContextualKind::Underscore)
            && !matches!(
                self.peek_kind_at(1),
                TokenKind::LParen | TokenKind::LBrace | TokenKind::Dot | TokenKind::ColonColon
            )
            && !(self.peek_kind_at(1) == TokenKind::Ident
                && self.is_valid_pattern_designation_at(1));
        if !is_discard {
            return self.decline(TokenKind::Ident);
        }
        let start = self.current_span().start;
        let token = self.advance();
        ParseOutcome::consumed_ok(self.alloc_pattern(PatternKind::Discard(token), start))
    }

    /// `< e`, `>= e`, ...
    fn parse_relational_pattern(&mut self) -> ParseOutcome<PatId> {
        if !self.current_kind().is_relational_pattern_operator() {
            return self.decline(TokenKind::Lt);
        }
        let start = self.current_span().start;
        let op = self.advance();
        self.check_feature(Feature::RelationalPattern, op.span);
        let operand = self.parse_sub_expression(Precedence::Shift);
        ParseOutcome::consumed_ok(self.alloc_pattern(PatternKind::Relational { op, operand }, start))
    }

    /// `[p, p, ..] designation`
    fn parse_list_pattern(&mut self) -> ParseOutcome<PatId> {
        if !self.check(TokenKind::LBracket) {
            return self.decline(TokenKind::LBracket);
        }
        let start = self.current_span().start;
        let pattern = self.in_error_context(ErrorContext::ListPattern, |p| {
            let open = p.advance();
            p.check_feature(Feature::ListPattern, open.span);
            let patterns = p.parse_separated(
                TokenKind::RBracket,
                CLAUSE_TERMINATORS,
                Trailing::Allowed,
                |p| can_start_pattern(p.current_kind()),
                |p| p.parse_pattern(Precedence::Conditional, false),
                Self::missing_pattern,
            );
            let close = p.expect(TokenKind::RBracket);
            let designation = p.parse_optional_designation();
            p.alloc_pattern(
                PatternKind::List {
                    open,
                    patterns,
                    close,
                    designation,
                },
                start,
            )
        });
        ParseOutcome::consumed_ok(pattern)
    }

    /// `..` or `.. p` inside a list pattern.
    fn parse_slice_pattern(&mut self) -> ParseOutcome<PatId> {
        if !self.check(TokenKind::DotDot) {
            return self.decline(TokenKind::DotDot);
        }
        let start = self.current_span().start;
        let dot_dot = self.advance();
        self.check_feature(Feature::ListPattern, dot_dot.span);
        let kind = self.current_kind();
        let pattern = if can_start_pattern(kind) && !PATTERN_RECOVERY.contains(&kind) {
            Some(self.parse_pattern(Precedence::Conditional, false))
        } else {
            None
        };
        ParseOutcome::consumed_ok(self.alloc_pattern(PatternKind::Slice { dot_dot, pattern }, start))
    }

    /// Patterns that start with a type or with `(` / `{`.
    fn parse_type_led_pattern(
        &mut self,
        precedence: Precedence,
        after_is: bool,
    ) -> ParseOutcome<PatId> {
        let start = self.current_span().start;
        let ty = if self.looks_like_type_of_pattern() {
            let mode = if after_is {
                TypeMode::AfterIs
            } else {
                TypeMode::DefinitePattern
            };
            self.try_parse(|p| {
                let ty = p.parse_type(mode);
                p.can_token_follow_type_in_pattern(precedence).then_some(ty)
            })
        } else {
            None
        };
        match self.parse_pattern_continued(ty, precedence, start) {
            Some(pattern) => ParseOutcome::consumed_ok(pattern),
            None => self.decline(TokenKind::Ident),
        }
    }

    fn looks_like_type_of_pattern(&mut self) -> bool {
        let kind = self.current_kind();
        if kind.is_predefined_type() {
            return true;
        }
        if kind == TokenKind::Ident {
            return !(self.cursor.check_contextual(ContextualKind::Nameof)
                && self.peek_kind_at(1) == TokenKind::LParen);
        }
        if kind == TokenKind::LParen {
            // Only `(A, B)[]` reads as a type here.
            return self.look_ahead(|p| {
                p.scan_type(TypeMode::DefinitePattern) != super::ty::ScanTypeFlags::NotType
            });
        }
        false
    }

    /// Whether the token after a type lets the type stand in a pattern.
    fn can_token_follow_type_in_pattern(&self, precedence: Precedence) -> bool {
        match self.current_kind() {
            TokenKind::LParen
            | TokenKind::LBrace
            | TokenKind::Ident
            | TokenKind::RBracket
            | TokenKind::RParen
            | TokenKind::Comma
            | TokenKind::Semicolon => true,
            TokenKind::Dot | TokenKind::Arrow | TokenKind::Bang => false,
            kind => match binary_precedence(kind) {
                Some(op) => op <= precedence,
                None => true,
            },
        }
    }

    /// Finish a pattern after an optional leading type.
    fn parse_pattern_continued(
        &mut self,
        ty: Option<TyId>,
        precedence: Precedence,
        start: u32,
    ) -> Option<PatId> {
        if let Some(var_kw) = ty.and_then(|ty| self.var_keyword(ty)) {
            if self.check(TokenKind::LParen) || self.is_valid_pattern_designation_at(0) {
                let designation = self.parse_designation();
                return Some(self.alloc_pattern(PatternKind::Var { var_kw, designation }, start));
            }
        }

        if self.check(TokenKind::LParen)
            && (ty.is_some() || !self.look_ahead(|p| p.scan_cast(true)))
        {
            return Some(self.parse_positional_pattern(ty, precedence, start));
        }

        if self.check(TokenKind::LBrace) {
            let property = self.parse_property_clause();
            let designation = self.parse_optional_designation();
            self.check_feature(Feature::RecursivePatterns, property.open.span);
            return Some(self.alloc_pattern(
                PatternKind::Recursive {
                    ty,
                    positional: None,
                    property: Some(property),
                    designation,
                },
                start,
            ));
        }

        let ty = ty?;
        if self.is_valid_pattern_designation_at(0) {
            let designation = self.parse_single_designation();
            return Some(self.alloc_pattern(PatternKind::Declaration { ty, designation }, start));
        }
        if matches!(self.arena.ty(ty).kind, TyKind::Pointer { .. }) {
            let span = self.current_span();
            self.error(ParseErrorKind::IdentifierExpected, span);
            let designation = Designation::Single(self.cursor.missing(TokenKind::Ident));
            return Some(self.alloc_pattern(PatternKind::Declaration { ty, designation }, start));
        }
        if let Some(expr) = self.convert_type_to_expression(ty, false) {
            let expr = self.parse_expression_continued(expr, precedence);
            let span = self.arena.expr(expr).span;
            return Some(
                self.arena
                    .alloc_pattern(Pattern::new(PatternKind::Constant(expr), span)),
            );
        }
        Some(self.alloc_pattern(PatternKind::Type(ty), start))
    }

    /// `Type(...) {...} designation`, or a parenthesized pattern or
    /// expression when only `( p )` is present.
    fn parse_positional_pattern(
        &mut self,
        ty: Option<TyId>,
        precedence: Precedence,
        start: u32,
    ) -> PatId {
        let positional = self.parse_positional_clause();
        let property = if self.check(TokenKind::LBrace) {
            Some(self.parse_property_clause())
        } else {
            None
        };
        let designation = self.parse_optional_designation();

        let lone = ty.is_none()
            && property.is_none()
            && designation.is_none()
            && positional.subpatterns.len() == 1
            && !positional.subpatterns.has_trailing_separator();
        if lone {
            if let Some(inner) = positional
                .subpatterns
                .items
                .first()
                .filter(|sub| sub.prefix.is_none())
                .map(|sub| sub.pattern)
            {
                let (open, close) = (positional.open, positional.close);
                let constant = match self.arena.pattern(inner).kind {
                    PatternKind::Constant(expr) => Some(expr),
                    _ => None,
                };
                if let Some(expr) = constant {
                    // `(1) + 2`: a parenthesized constant keeps going.
                    let paren = self.alloc_expr(
                        ExprKind::Parenthesized {
                            open,
                            inner: expr,
                            close,
                        },
                        start,
                    );
                    let expr = self.parse_expression_continued(paren, precedence);
                    let span = self.arena.expr(expr).span;
                    return self
                        .arena
                        .alloc_pattern(Pattern::new(PatternKind::Constant(expr), span));
                }
                self.check_feature(Feature::ParenthesizedPattern, open.span);
                return self.alloc_pattern(PatternKind::Parenthesized { open, inner, close }, start);
            }
        }

        self.check_feature(Feature::RecursivePatterns, positional.open.span);
        self.alloc_pattern(
            PatternKind::Recursive {
                ty,
                positional: Some(positional),
                property,
                designation,
            },
            start,
        )
    }

    /// The `var` token when `ty` is the bare name `var`.
    fn var_keyword(&self, ty: TyId) -> Option<sharp_ir::Token> {
        match &self.arena.ty(ty).kind {
            TyKind::Name(name)
                if name.type_args.is_none()
                    && name.identifier.is_contextual(ContextualKind::Var) =>
            {
                Some(name.identifier)
            }
            _ => None,
        }
    }

    /// Whether the identifier at offset `n` names a pattern variable.
    ///
    /// `when` is the guard keyword where the context says so. `and` and
    /// `or` are designations only when what follows cannot continue a
    /// pattern.
    pub(crate) fn is_valid_pattern_designation_at(&self, n: usize) -> bool {
        let token = self.cursor.peek(n);
        if token.kind != TokenKind::Ident {
            return false;
        }
        if token.is_contextual(ContextualKind::When) {
            return !self.context.when_is_keyword();
        }
        if token.is_contextual(ContextualKind::And) || token.is_contextual(ContextualKind::Or) {
            let next = self.peek_kind_at(n + 1);
            return match next {
                TokenKind::RParen
                | TokenKind::RBracket
                | TokenKind::RBrace
                | TokenKind::Comma
                | TokenKind::Semicolon
                | TokenKind::Question
                | TokenKind::Colon
                | TokenKind::FatArrow
                | TokenKind::Eof => true,
                TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::Ident
                | TokenKind::LBrace
                | TokenKind::LParen
                | TokenKind::LBracket => false,
                _ => !EXPR_START.contains(&next),
            };
        }
        true
    }

    /// A single designation when one is present.
    fn parse_optional_designation(&mut self) -> Option<Designation> {
        if self.is_valid_pattern_designation_at(0) {
            Some(self.parse_single_designation())
        } else {
            None
        }
    }

    pub(crate) fn alloc_pattern(&mut self, kind: PatternKind, start: u32) -> PatId {
        let span = self.span_from(start);
        self.arena.alloc_pattern(Pattern::new(kind, span))
    }

    /// `MissingPattern` at the cursor plus a placeholder. Consumes nothing.
    pub(crate) fn missing_pattern(&mut self) -> PatId {
        let span = self.current_span();
        self.error(ParseErrorKind::MissingPattern, span);
        self.placeholder_pattern()
    }

    /// Constant pattern over a missing name.
    fn placeholder_pattern(&mut self) -> PatId {
        let expr = self.missing_name_expr();
        let span = self.arena.expr(expr).span;
        self.arena
            .alloc_pattern(Pattern::new(PatternKind::Constant(expr), span))
    }

    /// Report version-gated forms anywhere in a pattern tree.
    ///
    /// Type and discard patterns are only known to be patterns once the
    /// enclosing construct has decided not to convert them, so they are
    /// checked here rather than where they are parsed.
    pub(crate) fn gate_pattern_features(&mut self, root: PatId) {
        let mut stack = vec![root];
        let mut found = Vec::new();
        while let Some(id) = stack.pop() {
            let pattern = self.arena.pattern(id);
            match &pattern.kind {
                PatternKind::Type(_) => found.push((Feature::TypePattern, pattern.span)),
                PatternKind::Discard(token) => found.push((Feature::DiscardPattern, token.span)),
                PatternKind::Recursive {
                    positional,
                    property,
                    ..
                } => {
                    let positional = positional.iter().flat_map(|c| c.subpatterns.iter());
                    let property = property.iter().flat_map(|c| c.subpatterns.iter());
                    stack.extend(positional.chain(property).map(|sub| sub.pattern));
                }
                PatternKind::And { left, right, .. } | PatternKind::Or { left, right, .. } => {
                    stack.push(*right);
                    stack.push(*left);
                }
                PatternKind::Not { operand: inner, .. }
                | PatternKind::Parenthesized { inner, .. } => stack.push(*inner),
                PatternKind::List { patterns, .. } => stack.extend(patterns.iter().copied()),
                PatternKind::Slice { pattern, .. } => stack.extend(*pattern),
                PatternKind::Var { .. }
                | PatternKind::Declaration { .. }
                | PatternKind::Constant(_)
                | PatternKind::Relational { .. } => {}
            }
        }
        found.sort_by_key(|(_, span)| span.start);
        for (feature, span) in found {
            self.check_feature(feature, span);
        }
    }
}
