//! Parse options and language-version feature gating.
//!
//! Gating never changes the tree the parser builds. A construct newer than
//! the selected version parses exactly as it would on the latest version and
//! additionally carries a `FeatureUnavailable` diagnostic at its first token.

use std::fmt;
use std::str::FromStr;

/// Language versions the parser distinguishes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum LanguageVersion {
    V7,
    V7_1,
    V7_2,
    V7_3,
    V8,
    V9,
    V10,
    V11,
    V12,
    Preview,
}

impl LanguageVersion {
    /// Newest released version.
    pub const LATEST: LanguageVersion = LanguageVersion::V12;

    pub fn as_str(self) -> &'static str {
        match self {
            LanguageVersion::V7 => "7.0",
            LanguageVersion::V7_1 => "7.1",
            LanguageVersion::V7_2 => "7.2",
            LanguageVersion::V7_3 => "7.3",
            LanguageVersion::V8 => "8.0",
            LanguageVersion::V9 => "9.0",
            LanguageVersion::V10 => "10.0",
            LanguageVersion::V11 => "11.0",
            LanguageVersion::V12 => "12.0",
            LanguageVersion::Preview => "preview",
        }
    }
}

impl Default for LanguageVersion {
    fn default() -> Self {
        Self::LATEST
    }
}

impl fmt::Display for LanguageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a language version string is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown language version `{0}`")]
pub struct UnknownLanguageVersion(pub String);

impl FromStr for LanguageVersion {
    type Err = UnknownLanguageVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let version = match lower.as_str() {
            "7" | "7.0" => LanguageVersion::V7,
            "7.1" => LanguageVersion::V7_1,
            "7.2" => LanguageVersion::V7_2,
            "7.3" => LanguageVersion::V7_3,
            "8" | "8.0" => LanguageVersion::V8,
            "9" | "9.0" => LanguageVersion::V9,
            "10" | "10.0" => LanguageVersion::V10,
            "11" | "11.0" => LanguageVersion::V11,
            "12" | "12.0" | "latest" | "default" => LanguageVersion::LATEST,
            "preview" => LanguageVersion::Preview,
            _ => return Err(UnknownLanguageVersion(s.to_string())),
        };
        Ok(version)
    }
}

/// A version-gated syntactic construct.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Feature {
    PatternMatching,
    ThrowExpression,
    Tuples,
    OutVariableDeclaration,
    DefaultLiteral,
    RecursivePatterns,
    DiscardPattern,
    SwitchExpression,
    Ranges,
    ParenthesizedPattern,
    TypePattern,
    RelationalPattern,
    LogicalPatterns,
    ExtendedPropertyPatterns,
    ListPattern,
}

impl Feature {
    /// Oldest version that accepts the feature.
    pub fn required_version(self) -> LanguageVersion {
        match self {
            Feature::PatternMatching
            | Feature::ThrowExpression
            | Feature::Tuples
            | Feature::OutVariableDeclaration => LanguageVersion::V7,
            Feature::DefaultLiteral => LanguageVersion::V7_1,
            Feature::RecursivePatterns
            | Feature::DiscardPattern
            | Feature::SwitchExpression
            | Feature::Ranges => LanguageVersion::V8,
            Feature::ParenthesizedPattern
            | Feature::TypePattern
            | Feature::RelationalPattern
            | Feature::LogicalPatterns => LanguageVersion::V9,
            Feature::ExtendedPropertyPatterns => LanguageVersion::V10,
            Feature::ListPattern => LanguageVersion::V11,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Feature::PatternMatching => "pattern matching",
            Feature::ThrowExpression => "throw expression",
            Feature::Tuples => "tuples",
            Feature::OutVariableDeclaration => "out variable declaration",
            Feature::DefaultLiteral => "default literal",
            Feature::RecursivePatterns => "recursive patterns",
            Feature::DiscardPattern => "discard pattern",
            Feature::SwitchExpression => "switch expression",
            Feature::Ranges => "ranges",
            Feature::ParenthesizedPattern => "parenthesized pattern",
            Feature::TypePattern => "type pattern",
            Feature::RelationalPattern => "relational pattern",
            Feature::LogicalPatterns => "pattern combinators",
            Feature::ExtendedPropertyPatterns => "extended property patterns",
            Feature::ListPattern => "list pattern",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options for one parse. Passed explicitly and never mutated.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct ParseOptions {
    pub language_version: LanguageVersion,
}

impl ParseOptions {
    pub fn new(language_version: LanguageVersion) -> Self {
        ParseOptions { language_version }
    }

    #[inline]
    pub fn is_available(&self, feature: Feature) -> bool {
        self.language_version >= feature.required_version()
    }
}
