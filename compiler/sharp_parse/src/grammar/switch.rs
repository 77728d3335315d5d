//! Switch Parsing
//!
//! `e switch { pattern when guard => value, ... }` and the `switch`
//! statement with its `case`/`default` sections. Both parse patterns with
//! `when` as the guard keyword.

use sharp_ir::ast::{
    ExprKind, PatternKind, SeparatedList, StmtKind, SwitchArm, SwitchLabel, SwitchSection,
    SwitchStatement, WhenClause,
};
use sharp_ir::{ContextualKind, ExprId, StmtId, Token, TokenKind};

use super::Precedence;
use crate::error::ErrorContext;
use crate::{Feature, ParseContext, ParseErrorKind, Parser};

/// Context for patterns in arms and labels.
const SWITCH_PATTERN: ParseContext = ParseContext::WHEN_IS_KEYWORD.union(ParseContext::IN_PATTERN);

impl Parser<'_> {
    /// Arms of `governing switch { ... }`, with `switch` already consumed.
    pub(crate) fn parse_switch_expression(
        &mut self,
        governing: ExprId,
        switch_kw: Token,
        start: u32,
    ) -> ExprId {
        self.check_feature(Feature::SwitchExpression, switch_kw.span);
        self.in_error_context(ErrorContext::SwitchExpression, |p| {
            let open = p.expect(TokenKind::LBrace);
            let arms = p.parse_switch_arms();
            let close = p.expect(TokenKind::RBrace);
            p.alloc_expr(
                ExprKind::Switch {
                    governing,
                    switch_kw,
                    open,
                    arms,
                    close,
                },
                start,
            )
        })
    }

    fn parse_switch_arms(&mut self) -> SeparatedList<SwitchArm> {
        let mut arms = SeparatedList::new();
        while !self.check(TokenKind::RBrace) && !self.cursor.is_at_end() {
            let snapshot = self.snapshot();
            let before = self.cursor.position();
            let arm = self.in_error_context(ErrorContext::SwitchArm, Self::parse_switch_arm);
            if self.cursor.position() == before && !self.check(TokenKind::Comma) {
                self.restore(snapshot);
                break;
            }
            arms.push_item(arm);

            match self.current_kind() {
                TokenKind::RBrace | TokenKind::Eof | TokenKind::RParen | TokenKind::RBracket => {
                    break
                }
                TokenKind::Comma => {
                    let comma = self.advance();
                    arms.push_separator(comma);
                }
                TokenKind::Semicolon => {
                    let span = self.current_span();
                    self.error(
                        ParseErrorKind::MissingToken {
                            expected: TokenKind::Comma,
                        },
                        span,
                    );
                    let comma = self.cursor.missing(TokenKind::Comma);
                    self.cursor.skip();
                    arms.push_separator(comma);
                }
                _ => {
                    let span = self.current_span();
                    self.error(
                        ParseErrorKind::MissingToken {
                            expected: TokenKind::Comma,
                        },
                        span,
                    );
                    arms.push_separator(self.cursor.missing(TokenKind::Comma));
                }
            }
        }
        arms
    }

    fn parse_switch_arm(&mut self) -> SwitchArm {
        if self.check(TokenKind::Case) {
            let span = self.current_span();
            self.error(ParseErrorKind::BadCaseInSwitchArm, span);
            self.cursor.skip();
        }
        let pattern =
            self.with_context(SWITCH_PATTERN, |p| p.parse_pattern(Precedence::Coalescing, false));
        self.gate_pattern_features(pattern);
        let when_clause = self.parse_when_clause(Precedence::Coalescing);

        // `pattern : value` is a common slip for `=>`.
        let arrow = if self.check(TokenKind::Colon) {
            let span = self.current_span();
            self.error(
                ParseErrorKind::MissingToken {
                    expected: TokenKind::FatArrow,
                },
                span,
            );
            let arrow = self.cursor.missing(TokenKind::FatArrow);
            self.cursor.skip();
            arrow
        } else {
            self.expect(TokenKind::FatArrow)
        };
        let expr = self.with_context(ParseContext::new(), Self::parse_expression);
        SwitchArm {
            pattern,
            when_clause,
            arrow,
            expr,
        }
    }

    /// `when condition`; the condition starts from a clean context.
    fn parse_when_clause(&mut self, precedence: Precedence) -> Option<WhenClause> {
        if !self.cursor.check_contextual(ContextualKind::When) {
            return None;
        }
        let when_kw = self.advance();
        let condition =
            self.with_context(ParseContext::new(), |p| p.parse_sub_expression(precedence));
        Some(WhenClause { when_kw, condition })
    }

    // Switch statement

    /// `switch (e) { sections }`
    pub(crate) fn parse_switch_statement(&mut self) -> StmtId {
        let start = self.current_span().start;
        self.in_error_context(ErrorContext::SwitchStatement, |p| {
            let switch_kw = p.advance();
            let (open_paren, governing, close_paren) = p.parse_switch_governing();
            let open_brace = p.expect(TokenKind::LBrace);
            let mut sections = Vec::new();
            loop {
                match p.current_kind() {
                    TokenKind::RBrace | TokenKind::Eof | TokenKind::RParen | TokenKind::RBracket => {
                        break
                    }
                    _ if p.at_switch_label() => sections.push(p.parse_switch_section()),
                    _ => p.skip_unexpected(),
                }
            }
            let close_brace = p.expect(TokenKind::RBrace);
            p.alloc_stmt(
                StmtKind::Switch(SwitchStatement {
                    switch_kw,
                    open_paren,
                    governing,
                    close_paren,
                    open_brace,
                    sections,
                    close_brace,
                }),
                start,
            )
        })
    }

    /// The governing expression and its parentheses.
    ///
    /// A tuple supplies its own parentheses. Anything else starting with `(`
    /// that is not a plain parenthesized expression gets missing ones.
    fn parse_switch_governing(&mut self) -> (Option<Token>, ExprId, Option<Token>) {
        if !self.check(TokenKind::LParen) {
            let open = self.expect(TokenKind::LParen);
            let expr = self.parse_expression();
            let close = self.expect(TokenKind::RParen);
            return (Some(open), expr, Some(close));
        }
        let expr = self.parse_expression();
        let node = self.arena.expr(expr);
        match node.kind {
            ExprKind::Parenthesized { open, inner, close } => (Some(open), inner, Some(close)),
            ExprKind::Tuple { .. } => (None, expr, None),
            _ => {
                let span = node.span;
                self.error(
                    ParseErrorKind::MissingToken {
                        expected: TokenKind::LParen,
                    },
                    span,
                );
                let open = Token::missing(TokenKind::LParen, span.start);
                let close = self.cursor.missing(TokenKind::RParen);
                (Some(open), expr, Some(close))
            }
        }
    }

    fn at_switch_label(&self) -> bool {
        self.check(TokenKind::Case)
            || (self.check(TokenKind::Default) && self.peek_kind_at(1) != TokenKind::LParen)
    }

    fn parse_switch_section(&mut self) -> SwitchSection {
        let mut labels = Vec::new();
        while self.at_switch_label() {
            labels.push(self.parse_switch_label());
        }
        let mut stmts = Vec::new();
        loop {
            match self.current_kind() {
                TokenKind::RBrace | TokenKind::Eof | TokenKind::RParen | TokenKind::RBracket => {
                    break
                }
                _ if self.at_switch_label() => break,
                _ if !self.can_start_statement() => self.skip_unexpected(),
                _ => {
                    let before = self.cursor.position();
                    stmts.push(self.parse_statement());
                    if self.cursor.position() == before {
                        self.skip_unexpected();
                    }
                }
            }
        }
        SwitchSection { labels, stmts }
    }

    /// `case value:`, `case pattern when guard:` or `default:`.
    fn parse_switch_label(&mut self) -> SwitchLabel {
        self.in_error_context(ErrorContext::CaseLabel, |p| {
            if p.check(TokenKind::Default) {
                let default_kw = p.advance();
                let colon = p.expect(TokenKind::Colon);
                return SwitchLabel::Default { default_kw, colon };
            }
            let case_kw = p.advance();
            if p.check(TokenKind::Colon) {
                let span = p.current_span();
                p.error(ParseErrorKind::ExpressionExpected, span);
                let value = p.missing_name_expr();
                let colon = p.advance();
                return SwitchLabel::Case {
                    case_kw,
                    value,
                    colon,
                };
            }

            let pattern = p.with_context(SWITCH_PATTERN, |p| {
                p.parse_pattern(Precedence::Conditional, false)
            });
            let when_clause = p.parse_when_clause(Precedence::Expression);
            let colon = p.expect(TokenKind::Colon);

            if when_clause.is_none() {
                if let Some(value) = p.case_label_value(pattern) {
                    return SwitchLabel::Case {
                        case_kw,
                        value,
                        colon,
                    };
                }
            }
            if let PatternKind::Discard(token) = p.arena.pattern(pattern).kind {
                p.error(ParseErrorKind::DiscardPatternInSwitchStatement, token.span);
            }
            p.check_feature(Feature::PatternMatching, case_kw.span);
            p.gate_pattern_features(pattern);
            SwitchLabel::CasePattern {
                case_kw,
                pattern,
                when_clause,
                colon,
            }
        })
    }
}
