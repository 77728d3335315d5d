//! Progress-aware outcome for alternative productions.
//!
//! | Variant | Meaning |
//! |---------|---------|
//! | `ConsumedOk` | Committed to this parse path and built a node |
//! | `EmptyErr` | Declined without consuming; try the next alternative |
//!
//! Most productions in this parser never fail: they synthesize missing
//! tokens and report diagnostics to the sink. `ParseOutcome` is used where a
//! production has to decline, such as the primary-pattern alternatives, where
//! a type-led reading that does not pass its follow check yields `EmptyErr`
//! so the next alternative runs from the same position.
//!
//! ## Usage
//!
//! ```ignore
//! fn parse_primary_pattern(&mut self) -> ParseOutcome<PatId> {
//!     one_of!(self,
//!         self.parse_discard_pattern(),
//!         self.parse_relational_pattern(),
//!         self.parse_type_led_pattern(),
//!     )
//! }
//! ```

use crate::recovery::TokenSet;

/// Either a committed result or a soft decline.
#[derive(Debug)]
pub enum ParseOutcome<T> {
    /// Consumed input and succeeded.
    ConsumedOk { value: T },

    /// No input consumed. Try the next alternative.
    EmptyErr {
        /// Set of token kinds that would have been valid here.
        expected: TokenSet,
        /// Byte offset in the source where the mismatch occurred.
        position: usize,
    },
}

impl<T> ParseOutcome<T> {
    #[inline]
    pub fn consumed_ok(value: T) -> Self {
        Self::ConsumedOk { value }
    }

    #[inline]
    pub fn empty_err(expected: TokenSet, position: usize) -> Self {
        Self::EmptyErr { expected, position }
    }
}

/// Try parsing alternatives in order, rewinding between them.
///
/// - `ConsumedOk`: return this result immediately
/// - `EmptyErr`: restore, accumulate expected tokens, try the next alternative
///
/// If every alternative declines, the result is an `EmptyErr` carrying the
/// union of their expected sets and the furthest position.
///
/// The parser (`$self`) must have `snapshot()`, `restore()` and `offset()`.
#[macro_export]
macro_rules! one_of {
    ($self:expr, $first:expr $(, $rest:expr)* $(,)?) => {{
        let original = $self.snapshot();
        let accumulated_expected = $crate::recovery::TokenSet::new();
        let last_position: usize = $self.offset();
        $crate::one_of!(@rest $self, original, accumulated_expected, last_position, $first $(, $rest)*)
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr $(,)?) => {{
        $crate::ParseOutcome::EmptyErr {
            expected: $accumulated,
            position: $last_pos,
        }
    }};

    (@rest $self:expr, $original:expr, $accumulated:expr, $last_pos:expr, $next:expr $(, $rest:expr)* $(,)?) => {{
        match $next {
            outcome @ $crate::ParseOutcome::ConsumedOk { .. } => outcome,
            $crate::ParseOutcome::EmptyErr { expected, position } => {
                let mut acc = $accumulated;
                acc.union_with(&expected);
                let new_pos = $last_pos.max(position);
                $self.restore($original);
                $crate::one_of!(@rest $self, $original, acc, new_pos $(, $rest)*)
            }
        }
    }};
}

#[cfg(test)]
mod tests;
