//! Error recovery for the parser.
//!
//! Provides token sets and synchronization for continuing parsing after errors.
//! Uses bitset-based O(1) membership testing inspired by Go's parser.
//!
//! Skipped tokens are never dropped: the cursor folds them into the leading
//! trivia of the next consumed token, so the tree stays lossless.

use super::cursor::Cursor;
use sharp_ir::TokenKind;

/// A set of token kinds using bitset representation for O(1) membership testing.
///
/// Each bit in the u128 corresponds to a `TokenKind` discriminant index.
///
/// # Example
/// ```ignore
/// const CLOSERS: TokenSet = TokenSet::new()
///     .with(TokenKind::RParen)
///     .with(TokenKind::RBrace);
///
/// if CLOSERS.contains(&TokenKind::RParen) {
///     // O(1) lookup
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TokenSet(u128);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Create a token set containing a single token kind.
    #[inline]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn single(kind: TokenKind) -> Self {
        Self(1u128 << kind.discriminant_index())
    }

    /// Add a token kind to this set (builder pattern for const contexts).
    #[inline]
    #[must_use]
    #[allow(
        clippy::needless_pass_by_value,
        reason = "const fn builder API; by-value required for static init"
    )]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u128 << kind.discriminant_index()))
    }

    /// Union of two token sets.
    #[inline]
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Check if this set contains a token kind.
    #[inline]
    pub const fn contains(&self, kind: &TokenKind) -> bool {
        (self.0 & (1u128 << kind.discriminant_index())) != 0
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Count the number of token kinds in this set.
    #[inline]
    pub const fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Union with another set (non-const mutation).
    #[inline]
    pub fn union_with(&mut self, other: &Self) {
        self.0 |= other.0;
    }
}

impl Default for TokenSet {
    fn default() -> Self {
        Self::new()
    }
}

// Pre-defined token sets. These are computed at compile time using const fn.

/// Tokens that end a primary pattern before it starts.
/// A pattern position holding one of these gets a placeholder.
pub const PATTERN_RECOVERY: TokenSet = TokenSet::new()
    .with(TokenKind::Comma)
    .with(TokenKind::Semicolon)
    .with(TokenKind::RBrace)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::FatArrow)
    .with(TokenKind::Eof);

/// Tokens owned by a construct enclosing a subpattern clause.
/// A clause stops at these instead of skipping them.
pub const CLAUSE_TERMINATORS: TokenSet = TokenSet::new()
    .with(TokenKind::FatArrow)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Colon)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Eof);

/// Closers, `;` and `Eof`. Never skipped by a construct that does not own them.
pub const STRUCTURAL: TokenSet = TokenSet::new()
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Eof);

/// Tokens after `>` that commit `name<...>` to a generic name in
/// expression context.
pub const GENERIC_FOLLOW: TokenSet = TokenSet::new()
    .with(TokenKind::LParen)
    .with(TokenKind::RParen)
    .with(TokenKind::RBracket)
    .with(TokenKind::RBrace)
    .with(TokenKind::Colon)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Comma)
    .with(TokenKind::Dot)
    .with(TokenKind::Question)
    .with(TokenKind::EqEq)
    .with(TokenKind::NotEq)
    .with(TokenKind::Pipe)
    .with(TokenKind::Caret)
    .with(TokenKind::AmpAmp)
    .with(TokenKind::PipePipe)
    .with(TokenKind::Amp)
    .with(TokenKind::LBracket)
    .with(TokenKind::Lt)
    .with(TokenKind::LtEq)
    .with(TokenKind::Gt)
    .with(TokenKind::GtEq)
    .with(TokenKind::FatArrow)
    .with(TokenKind::Eof);

/// Tokens that can begin an expression.
pub const EXPR_START: TokenSet = TokenSet::new()
    .with(TokenKind::Ident)
    .with(TokenKind::NumericLiteral)
    .with(TokenKind::StringLiteral)
    .with(TokenKind::CharLiteral)
    .with(TokenKind::True)
    .with(TokenKind::False)
    .with(TokenKind::Null)
    .with(TokenKind::This)
    .with(TokenKind::Base)
    .with(TokenKind::New)
    .with(TokenKind::Default)
    .with(TokenKind::TypeOf)
    .with(TokenKind::SizeOf)
    .with(TokenKind::Checked)
    .with(TokenKind::Unchecked)
    .with(TokenKind::Throw)
    .with(TokenKind::LParen)
    .with(TokenKind::Bang)
    .with(TokenKind::Tilde)
    .with(TokenKind::Plus)
    .with(TokenKind::Minus)
    .with(TokenKind::PlusPlus)
    .with(TokenKind::MinusMinus)
    .with(TokenKind::Amp)
    .with(TokenKind::Star)
    .with(TokenKind::Caret)
    .with(TokenKind::DotDot)
    .union(PREDEFINED_TYPES);

/// `bool` through `void`.
pub const PREDEFINED_TYPES: TokenSet = TokenSet::new()
    .with(TokenKind::Bool)
    .with(TokenKind::Byte)
    .with(TokenKind::SByte)
    .with(TokenKind::Short)
    .with(TokenKind::UShort)
    .with(TokenKind::Int)
    .with(TokenKind::UInt)
    .with(TokenKind::Long)
    .with(TokenKind::ULong)
    .with(TokenKind::Char)
    .with(TokenKind::Float)
    .with(TokenKind::Double)
    .with(TokenKind::Decimal)
    .with(TokenKind::String)
    .with(TokenKind::Object)
    .with(TokenKind::Void);

/// Tokens that can begin a statement, beyond those that begin an expression.
pub const STMT_START: TokenSet = TokenSet::new()
    .with(TokenKind::LBrace)
    .with(TokenKind::Semicolon)
    .with(TokenKind::Switch)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Return)
    .with(TokenKind::Break)
    .with(TokenKind::Continue)
    .union(EXPR_START);

/// Where statement-level recovery stops skipping.
pub const STMT_RECOVERY: TokenSet = STMT_START.union(STRUCTURAL).with(TokenKind::Case);

/// Advance the cursor until reaching a token in the recovery set or EOF.
///
/// Skipped tokens become leading trivia of the next consumed token.
/// Returns `true` if a recovery token was found, `false` if EOF was reached.
pub fn synchronize(cursor: &mut Cursor<'_>, recovery: TokenSet) -> bool {
    while !cursor.is_at_end() {
        if recovery.contains(&cursor.current_kind()) {
            return true;
        }
        cursor.skip();
    }
    false
}
