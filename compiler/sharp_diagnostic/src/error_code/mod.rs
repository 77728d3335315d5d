//! Error codes for parser diagnostics.
//!
//! Each code is a stable identifier (`E1003`) usable for lookups and tests.
//! The `E1xxx` range holds syntax errors, `W1xxx` syntax warnings.

use std::fmt;

/// Error codes for all parser diagnostics.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    /// Unexpected token
    E1001,
    /// Expression expected
    E1002,
    /// Expected token missing
    E1003,
    /// Identifier expected
    E1004,
    /// Type expected
    E1005,
    /// Pattern missing
    E1006,
    /// Feature not available in the selected language version
    E1007,
    /// `throw` expression not allowed here
    E1008,
    /// `case` keyword inside a switch expression arm
    E1009,
    /// Discard pattern used as a switch statement case label
    E1010,
    /// Nesting too deep
    E1011,

    /// Operator precedence may not be what was intended
    W1001,
}

impl ErrorCode {
    /// All codes, for exhaustive testing.
    pub const ALL: &[ErrorCode] = &[
        ErrorCode::E1001,
        ErrorCode::E1002,
        ErrorCode::E1003,
        ErrorCode::E1004,
        ErrorCode::E1005,
        ErrorCode::E1006,
        ErrorCode::E1007,
        ErrorCode::E1008,
        ErrorCode::E1009,
        ErrorCode::E1010,
        ErrorCode::E1011,
        ErrorCode::W1001,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
            ErrorCode::E1011 => "E1011",
            ErrorCode::W1001 => "W1001",
        }
    }

    /// One-line description of what the code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expression expected",
            ErrorCode::E1003 => "expected token missing",
            ErrorCode::E1004 => "identifier expected",
            ErrorCode::E1005 => "type expected",
            ErrorCode::E1006 => "pattern missing",
            ErrorCode::E1007 => "feature not available in this language version",
            ErrorCode::E1008 => "throw expression not allowed in this context",
            ErrorCode::E1009 => "`case` is not valid in a switch expression arm",
            ErrorCode::E1010 => "discard pattern not allowed as a case label",
            ErrorCode::E1011 => "nesting too deep",
            ErrorCode::W1001 => "operator precedence may be surprising",
        }
    }

    /// Check if this is a syntax error code (E1xxx range).
    pub fn is_parser_error(&self) -> bool {
        self.as_str().starts_with("E1")
    }

    /// Check if this is a warning code (Wxxx range).
    pub fn is_warning(&self) -> bool {
        matches!(self, ErrorCode::W1001)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Parse a code string like `"E1003"`. Case-insensitive.
impl std::str::FromStr for ErrorCode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.to_uppercase();
        Self::ALL
            .iter()
            .find(|code| code.as_str() == upper)
            .copied()
            .ok_or(())
    }
}

#[cfg(test)]
mod tests;
