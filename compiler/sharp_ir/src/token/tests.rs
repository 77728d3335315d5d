use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_all_is_in_discriminant_order() {
    for (index, kind) in TokenKind::ALL.iter().enumerate() {
        assert_eq!(kind.discriminant_index() as usize, index, "{kind:?}");
    }
}

#[test]
fn test_predefined_type_range() {
    assert!(TokenKind::Int.is_predefined_type());
    assert!(TokenKind::Void.is_predefined_type());
    assert!(TokenKind::Bool.is_predefined_type());
    assert!(!TokenKind::As.is_predefined_type());
    assert!(!TokenKind::Ident.is_predefined_type());
}

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword_from_str("switch"), Some(TokenKind::Switch));
    assert_eq!(TokenKind::keyword_from_str("string"), Some(TokenKind::String));
    // Contextual keywords are identifiers.
    assert_eq!(TokenKind::keyword_from_str("var"), None);
    assert_eq!(TokenKind::keyword_from_str("when"), None);
}

#[test]
fn test_contextual_classification() {
    assert_eq!(ContextualKind::from_ident("and"), ContextualKind::And);
    assert_eq!(ContextualKind::from_ident("_"), ContextualKind::Underscore);
    assert_eq!(ContextualKind::from_ident("__"), ContextualKind::None);
}

#[test]
fn test_missing_token_is_zero_width() {
    let tok = Token::missing(TokenKind::RParen, 7);
    assert!(tok.is_missing());
    assert!(tok.span.is_empty());
    assert!(tok.full_span.is_empty());
    assert_eq!(tok.full_text("abcdefghij"), "");
}

#[test]
fn test_token_text() {
    let src = "  foo  ";
    let mut tok = Token::new(TokenKind::Ident, Span::new(2, 5));
    tok.full_span = Span::new(0, 7);
    assert_eq!(tok.text(src), "foo");
    assert_eq!(tok.full_text(src), src);
}
