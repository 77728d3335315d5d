//! Positional and property clauses of recursive patterns.

use sharp_ir::ast::{PositionalClause, PropertyClause, SeparatedList, Subpattern, SubpatternName};
use sharp_ir::TokenKind;

use super::can_start_pattern;
use crate::error::ErrorContext;
use crate::grammar::{Precedence, Trailing};
use crate::recovery::CLAUSE_TERMINATORS;
use crate::{Feature, Parser};

impl Parser<'_> {
    /// `( subpattern, ... )`
    pub(crate) fn parse_positional_clause(&mut self) -> PositionalClause {
        self.in_error_context(ErrorContext::PositionalPattern, |p| {
            let open = p.advance();
            let subpatterns = p.parse_subpatterns(TokenKind::RParen);
            let close = p.expect(TokenKind::RParen);
            PositionalClause {
                open,
                subpatterns,
                close,
            }
        })
    }

    /// `{ name: subpattern, ... }`
    pub(crate) fn parse_property_clause(&mut self) -> PropertyClause {
        self.in_error_context(ErrorContext::PropertyPattern, |p| {
            let open = p.advance();
            let subpatterns = p.parse_subpatterns(TokenKind::RBrace);
            let close = p.expect(TokenKind::RBrace);
            PropertyClause {
                open,
                subpatterns,
                close,
            }
        })
    }

    fn parse_subpatterns(&mut self, close: TokenKind) -> SeparatedList<Subpattern> {
        self.parse_separated(
            close,
            CLAUSE_TERMINATORS,
            Trailing::Allowed,
            |p| can_start_pattern(p.current_kind()),
            Self::parse_subpattern,
            |p| Subpattern {
                prefix: None,
                pattern: p.missing_pattern(),
            },
        )
    }

    /// `name: p`, `a.b.c: p` or `p`.
    fn parse_subpattern(&mut self) -> Subpattern {
        if let Some(name_colon) = self.parse_name_colon() {
            let pattern = self.parse_pattern(Precedence::Conditional, false);
            return Subpattern {
                prefix: Some(SubpatternName::Name(name_colon)),
                pattern,
            };
        }

        let pattern = self.parse_pattern(Precedence::Conditional, false);
        if self.check(TokenKind::Colon) {
            if let Some(expr) = self.convert_pattern_to_expression(pattern) {
                let colon = self.advance();
                let span = self.arena.expr(expr).span;
                self.check_feature(Feature::ExtendedPropertyPatterns, span);
                let pattern = self.parse_pattern(Precedence::Conditional, false);
                return Subpattern {
                    prefix: Some(SubpatternName::Expression { expr, colon }),
                    pattern,
                };
            }
        }
        Subpattern {
            prefix: None,
            pattern,
        }
    }
}
