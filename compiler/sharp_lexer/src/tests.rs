use super::*;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).iter().map(|t| t.kind).collect()
}

fn reconstruct(source: &str, tokens: &TokenList) -> String {
    tokens.iter().map(|t| t.full_text(source)).collect()
}

#[test]
fn test_keywords_and_contextual_words() {
    let tokens = lex("x is var when _ and @is");
    let got: Vec<_> = tokens.iter().map(|t| (t.kind, t.contextual)).collect();
    assert_eq!(
        got,
        vec![
            (TokenKind::Ident, ContextualKind::None),
            (TokenKind::Is, ContextualKind::None),
            (TokenKind::Ident, ContextualKind::Var),
            (TokenKind::Ident, ContextualKind::When),
            (TokenKind::Ident, ContextualKind::Underscore),
            (TokenKind::Ident, ContextualKind::And),
            (TokenKind::Ident, ContextualKind::None),
            (TokenKind::Eof, ContextualKind::None),
        ]
    );
    assert!(tokens[6].flags.contains(TokenFlags::VERBATIM));
}

#[test]
fn test_shift_right_is_two_tokens() {
    assert_eq!(
        kinds("a >> b >>= c << d"),
        vec![
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::Gt,
            TokenKind::Ident,
            TokenKind::Gt,
            TokenKind::GtEq,
            TokenKind::Ident,
            TokenKind::Shl,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_range_after_number() {
    assert_eq!(
        kinds("1..2 .5 1.5f 0xFFu"),
        vec![
            TokenKind::NumericLiteral,
            TokenKind::DotDot,
            TokenKind::NumericLiteral,
            TokenKind::NumericLiteral,
            TokenKind::NumericLiteral,
            TokenKind::NumericLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_string_forms() {
    assert_eq!(
        kinds(r#""a\"b" @"x""y" $"{a}" 'c' '\n'"#),
        vec![
            TokenKind::StringLiteral,
            TokenKind::StringLiteral,
            TokenKind::StringLiteral,
            TokenKind::CharLiteral,
            TokenKind::CharLiteral,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_verbatim_strings() {
    let source = "@\"a\"\"b\" $@\"{x}\" @$\"c\nd\" @\"\"";
    let tokens = lex(source);
    let texts: Vec<_> = tokens.iter().map(|t| t.text(source)).collect();
    assert_eq!(
        texts,
        vec!["@\"a\"\"b\"", "$@\"{x}\"", "@$\"c\nd\"", "@\"\"", ""]
    );
    assert!(tokens.as_slice()[..4]
        .iter()
        .all(|t| t.kind == TokenKind::StringLiteral));
}

#[test]
fn test_unterminated_verbatim_string_reaches_eof() {
    let source = "x = @\"open\n;";
    let tokens = lex(source);
    assert_eq!(tokens[2].kind, TokenKind::StringLiteral);
    assert_eq!(tokens[2].text(source), "@\"open\n;");
    assert_eq!(tokens[3].kind, TokenKind::Eof);
}

#[test]
fn test_trailing_trivia_stops_at_newline() {
    let source = "a // one\n  b";
    let tokens = lex(source);
    assert_eq!(tokens[0].full_text(source), "a // one\n");
    assert_eq!(tokens[1].full_text(source), "  b");
    assert!(tokens[1].has_newline_before());
    assert!(!tokens[0].has_newline_before());
}

#[test]
fn test_block_comment_newline_sets_flag() {
    let source = "a /* x\n y */ b";
    let tokens = lex(source);
    assert!(tokens[1].has_newline_before());
    assert_eq!(reconstruct(source, &tokens), source);
}

#[test]
fn test_unterminated_block_comment_reaches_eof() {
    let source = "a /* never closed";
    let tokens = lex(source);
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[1].kind, TokenKind::Eof);
    assert_eq!(reconstruct(source, &tokens), source);
}

#[test]
fn test_error_tokens_for_unknown_characters() {
    let source = "a # b";
    assert_eq!(
        kinds(source),
        vec![
            TokenKind::Ident,
            TokenKind::Error,
            TokenKind::Ident,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_eof_owns_final_trivia() {
    let source = "a\n\n  // tail\n";
    let tokens = lex(source);
    let eof = tokens[tokens.len() - 1];
    assert_eq!(eof.kind, TokenKind::Eof);
    assert_eq!(eof.full_text(source), "\n  // tail\n");
    assert_eq!(reconstruct(source, &tokens), source);
}

#[test]
fn test_empty_source() {
    let tokens = lex("");
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].kind, TokenKind::Eof);
}

proptest! {
    #![proptest_config(ProptestConfig { cases: 256, ..ProptestConfig::default() })]

    #[test]
    fn full_spans_tile_source(source in "\\PC{0,64}") {
        let tokens = lex(&source);
        prop_assert_eq!(reconstruct(&source, &tokens), source.clone());

        let mut expected_start = 0;
        for token in &tokens {
            prop_assert_eq!(token.full_span.start, expected_start);
            prop_assert!(token.full_span.start <= token.span.start);
            prop_assert!(token.span.end <= token.full_span.end);
            expected_start = token.full_span.end;
        }
    }
}
