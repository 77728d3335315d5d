use super::*;
use crate::ast::{Expr, Pattern};
use crate::{Span, TokenKind};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, start: u32, end: u32) -> Token {
    Token::new(kind, Span::new(start, end))
}

#[test]
fn test_is_pattern_visits_in_source_order() {
    // x is (1, _)
    let mut arena = SyntaxArena::new();
    let x = arena.alloc_expr(Expr::new(
        ExprKind::Name(SimpleName::plain(tok(TokenKind::Ident, 0, 1))),
        Span::new(0, 1),
    ));
    let one = arena.alloc_expr(Expr::new(
        ExprKind::Literal(tok(TokenKind::NumericLiteral, 6, 7)),
        Span::new(6, 7),
    ));
    let one_pat = arena.alloc_pattern(Pattern::new(PatternKind::Constant(one), Span::new(6, 7)));
    let discard = arena.alloc_pattern(Pattern::new(
        PatternKind::Discard(tok(TokenKind::Ident, 9, 10)),
        Span::new(9, 10),
    ));
    let mut subpatterns = SeparatedList::new();
    subpatterns.push_item(Subpattern {
        prefix: None,
        pattern: one_pat,
    });
    subpatterns.push_separator(tok(TokenKind::Comma, 7, 8));
    subpatterns.push_item(Subpattern {
        prefix: None,
        pattern: discard,
    });
    let recursive = arena.alloc_pattern(Pattern::new(
        PatternKind::Recursive {
            ty: None,
            positional: Some(PositionalClause {
                open: tok(TokenKind::LParen, 5, 6),
                subpatterns,
                close: tok(TokenKind::RParen, 10, 11),
            }),
            property: None,
            designation: None,
        },
        Span::new(5, 11),
    ));
    let is = arena.alloc_expr(Expr::new(
        ExprKind::IsPattern {
            operand: x,
            is_kw: tok(TokenKind::Is, 2, 4),
            pattern: recursive,
        },
        Span::new(0, 11),
    ));

    let mut collector = TokenCollector::default();
    collector.visit_expr(is, &arena);
    let starts: Vec<u32> = collector.tokens.iter().map(|t| t.span.start).collect();
    assert_eq!(starts, vec![0, 2, 5, 6, 7, 9, 10]);
}

#[test]
fn test_missing_tokens_are_visited() {
    struct CountMissing(usize);

    impl<'ast> Visitor<'ast> for CountMissing {
        fn visit_token(&mut self, token: &'ast Token) {
            if token.is_missing() {
                self.0 += 1;
            }
        }
    }

    let mut arena = SyntaxArena::new();
    let inner = arena.alloc_expr(Expr::new(
        ExprKind::Name(SimpleName::plain(Token::missing(TokenKind::Ident, 1))),
        Span::point(1),
    ));
    let paren = arena.alloc_expr(Expr::new(
        ExprKind::Parenthesized {
            open: tok(TokenKind::LParen, 0, 1),
            inner,
            close: Token::missing(TokenKind::RParen, 1),
        },
        Span::new(0, 1),
    ));

    let mut counter = CountMissing(0);
    counter.visit_expr(paren, &arena);
    assert_eq!(counter.0, 2);
}
