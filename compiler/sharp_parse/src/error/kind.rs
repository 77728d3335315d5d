//! The closed set of parser diagnostics.

use sharp_diagnostic::{ErrorCode, Severity};
use sharp_ir::TokenKind;

use crate::options::{Feature, LanguageVersion};

/// What went wrong. Formatting arguments are typed, never pre-rendered.
#[derive(Clone, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("{} expected", quoted(.expected))]
    MissingToken { expected: TokenKind },

    #[error("unexpected {}", quoted(.found))]
    UnexpectedToken { found: TokenKind },

    #[error("pattern missing")]
    MissingPattern,

    #[error("expression expected")]
    ExpressionExpected,

    #[error("identifier expected")]
    IdentifierExpected,

    #[error("type expected")]
    TypeExpected,

    #[error("{feature} is not available in language version {current}; use {required} or later")]
    FeatureUnavailable {
        feature: Feature,
        current: LanguageVersion,
        required: LanguageVersion,
    },

    #[error("the precedence of {} may not be what was intended; add parentheses", quoted(.operator))]
    PrecedenceWarning { operator: TokenKind },

    #[error("a throw expression is not allowed in this context")]
    ThrowExpressionMisplaced,

    #[error("unexpected `case` in a switch expression arm")]
    BadCaseInSwitchArm,

    #[error("the discard pattern is not permitted as a case label in a switch statement")]
    DiscardPatternInSwitchStatement,

    #[error("nesting is too deep")]
    NestingTooDeep,
}

/// Keywords and punctuation are shown in backticks; other kinds by name.
fn quoted(kind: &TokenKind) -> String {
    match kind.text() {
        Some(text) => format!("`{text}`"),
        None => kind.friendly_name().to_string(),
    }
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            ParseErrorKind::UnexpectedToken { .. } => ErrorCode::E1001,
            ParseErrorKind::ExpressionExpected => ErrorCode::E1002,
            ParseErrorKind::MissingToken { .. } => ErrorCode::E1003,
            ParseErrorKind::IdentifierExpected => ErrorCode::E1004,
            ParseErrorKind::TypeExpected => ErrorCode::E1005,
            ParseErrorKind::MissingPattern => ErrorCode::E1006,
            ParseErrorKind::FeatureUnavailable { .. } => ErrorCode::E1007,
            ParseErrorKind::ThrowExpressionMisplaced => ErrorCode::E1008,
            ParseErrorKind::BadCaseInSwitchArm => ErrorCode::E1009,
            ParseErrorKind::DiscardPatternInSwitchStatement => ErrorCode::E1010,
            ParseErrorKind::NestingTooDeep => ErrorCode::E1011,
            ParseErrorKind::PrecedenceWarning { .. } => ErrorCode::W1001,
        }
    }

    pub fn severity(&self) -> Severity {
        Severity::of(self.code())
    }

    /// Follow-up advice attached to the rendered diagnostic.
    pub fn note(&self) -> Option<&'static str> {
        match self {
            ParseErrorKind::DiscardPatternInSwitchStatement => Some(
                "use `case var _:` for a discard pattern, or `case @_:` for a constant named `_`",
            ),
            ParseErrorKind::BadCaseInSwitchArm => {
                Some("switch expression arms are written `pattern => expression`")
            }
            _ => None,
        }
    }
}
