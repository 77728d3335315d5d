//! Error context for "while parsing X" messages.

/// Context describing what was being parsed when an error occurred.
///
/// This is distinct from `ParseContext` (the bitfield for context-sensitive
/// parsing behavior).
///
/// # Usage
///
/// ```ignore
/// self.in_error_context(ErrorContext::SwitchArm, |p| p.parse_switch_arm())
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorContext {
    // === Expressions ===
    ArgumentList,
    TupleExpression,
    SwitchExpression,
    SwitchArm,
    Lambda,
    ObjectCreation,

    // === Patterns ===
    PositionalPattern,
    PropertyPattern,
    ListPattern,

    // === Types ===
    TypeArguments,
    TupleType,

    // === Statements ===
    Block,
    SwitchStatement,
    CaseLabel,
    LocalDeclaration,
}

impl ErrorContext {
    /// Phrase suitable for "while parsing {description}".
    pub fn description(self) -> &'static str {
        match self {
            Self::ArgumentList => "an argument list",
            Self::TupleExpression => "a tuple expression",
            Self::SwitchExpression => "a switch expression",
            Self::SwitchArm => "a switch expression arm",
            Self::Lambda => "a lambda expression",
            Self::ObjectCreation => "an object creation expression",
            Self::PositionalPattern => "a positional pattern",
            Self::PropertyPattern => "a property pattern",
            Self::ListPattern => "a list pattern",
            Self::TypeArguments => "type arguments",
            Self::TupleType => "a tuple type",
            Self::Block => "a block",
            Self::SwitchStatement => "a switch statement",
            Self::CaseLabel => "a case label",
            Self::LocalDeclaration => "a local declaration",
        }
    }

    /// Short noun phrase without article.
    pub fn label(self) -> &'static str {
        match self {
            Self::ArgumentList => "argument list",
            Self::TupleExpression => "tuple expression",
            Self::SwitchExpression => "switch expression",
            Self::SwitchArm => "switch expression arm",
            Self::Lambda => "lambda expression",
            Self::ObjectCreation => "object creation expression",
            Self::PositionalPattern => "positional pattern",
            Self::PropertyPattern => "property pattern",
            Self::ListPattern => "list pattern",
            Self::TypeArguments => "type arguments",
            Self::TupleType => "tuple type",
            Self::Block => "block",
            Self::SwitchStatement => "switch statement",
            Self::CaseLabel => "case label",
            Self::LocalDeclaration => "local declaration",
        }
    }
}
