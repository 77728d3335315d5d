//! Parse context flags for context-sensitive parsing.
//!
//! The same tokens mean different things depending on the enclosing
//! construct: `when` ends a pattern inside a switch arm but is an ordinary
//! designator elsewhere, and an identifier after `A<B>` commits to a generic
//! name only in pattern positions.

/// Context flags for parsing.
///
/// Multiple flags can be combined using bitwise OR.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParseContext(u16);

impl ParseContext {
    /// No special context.
    pub const NONE: Self = Self(0);

    /// Parsing a pattern or the operand right after `is`, `case` or `out`.
    /// An identifier or `{` after `>` commits to a generic name.
    pub const IN_PATTERN: Self = Self(1 << 0);

    /// `when` is the guard keyword (switch arms and case labels).
    pub const WHEN_IS_KEYWORD: Self = Self(1 << 1);

    /// Create a new context with no flags set.
    #[inline]
    pub const fn new() -> Self {
        Self::NONE
    }

    /// Check if a flag is set.
    #[inline]
    pub const fn has(self, flag: Self) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Add a flag to the context.
    #[inline]
    #[must_use]
    pub const fn with(self, flag: Self) -> Self {
        Self(self.0 | flag.0)
    }

    /// Remove a flag from the context.
    #[inline]
    #[must_use]
    pub const fn without(self, flag: Self) -> Self {
        Self(self.0 & !flag.0)
    }

    /// Combine two contexts (union of flags).
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    #[inline]
    pub const fn in_pattern(self) -> bool {
        self.has(Self::IN_PATTERN)
    }

    #[inline]
    pub const fn when_is_keyword(self) -> bool {
        self.has(Self::WHEN_IS_KEYWORD)
    }
}
