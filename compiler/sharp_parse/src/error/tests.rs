use super::*;
use crate::options::{Feature, LanguageVersion};
use pretty_assertions::assert_eq;
use sharp_ir::TokenKind;

#[test]
fn test_messages_quote_fixed_text() {
    let missing = ParseErrorKind::MissingToken {
        expected: TokenKind::FatArrow,
    };
    assert_eq!(missing.to_string(), "`=>` expected");

    let unexpected = ParseErrorKind::UnexpectedToken {
        found: TokenKind::Ident,
    };
    assert_eq!(unexpected.to_string(), "unexpected identifier");

    let keyword = ParseErrorKind::UnexpectedToken {
        found: TokenKind::Case,
    };
    assert_eq!(keyword.to_string(), "unexpected `case`");
}

#[test]
fn test_feature_unavailable_message() {
    let kind = ParseErrorKind::FeatureUnavailable {
        feature: Feature::RelationalPattern,
        current: LanguageVersion::V8,
        required: LanguageVersion::V9,
    };
    assert_eq!(
        kind.to_string(),
        "relational pattern is not available in language version 8.0; use 9.0 or later"
    );
    assert_eq!(kind.code(), ErrorCode::E1007);
}

#[test]
fn test_severity_follows_code() {
    let warning = ParseError::new(
        ParseErrorKind::PrecedenceWarning {
            operator: TokenKind::DotDot,
        },
        Span::new(0, 2),
    );
    assert!(warning.is_warning());
    assert_eq!(warning.severity(), Severity::Warning);

    let error = ParseError::new(ParseErrorKind::MissingPattern, Span::new(0, 1));
    assert!(!error.is_warning());
    assert_eq!(error.severity(), Severity::Error);
}

#[test]
fn test_every_kind_has_parser_code() {
    let kinds = [
        ParseErrorKind::MissingToken {
            expected: TokenKind::Comma,
        },
        ParseErrorKind::UnexpectedToken {
            found: TokenKind::Semicolon,
        },
        ParseErrorKind::MissingPattern,
        ParseErrorKind::ExpressionExpected,
        ParseErrorKind::IdentifierExpected,
        ParseErrorKind::TypeExpected,
        ParseErrorKind::ThrowExpressionMisplaced,
        ParseErrorKind::BadCaseInSwitchArm,
        ParseErrorKind::DiscardPatternInSwitchStatement,
        ParseErrorKind::NestingTooDeep,
    ];
    for kind in kinds {
        assert!(kind.code().is_parser_error(), "{kind:?}");
    }
}

#[test]
fn test_to_diagnostic() {
    let output = crate::parse_statement(
        "switch (x) { case _: break; }",
        &crate::ParseOptions::default(),
    );
    assert_eq!(output.diagnostics.len(), 1);
    let diag = output.diagnostics[0].to_diagnostic();

    assert_eq!(diag.code, ErrorCode::E1010);
    assert!(diag.is_error());
    assert_eq!(diag.span(), Span::new(18, 19));
    assert_eq!(diag.label.message, "while parsing a case label");
    assert_eq!(diag.notes.len(), 1);
}

#[test]
fn test_to_diagnostic_defaults_label() {
    let diag = ParseError::new(ParseErrorKind::IdentifierExpected, Span::point(3)).to_diagnostic();
    assert_eq!(diag.label.message, "here");
    assert!(diag.notes.is_empty());
}
