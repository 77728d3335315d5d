//! Token cursor for navigating the token stream.
//!
//! Provides low-level token access, lookahead, and consumption methods.
//! Tokens skipped by error recovery are not dropped: the cursor remembers
//! where the skipped run started and folds it into the leading trivia of the
//! next token it hands out.

use sharp_ir::{ContextualKind, Span, Token, TokenFlags, TokenKind, TokenList};
use tracing::trace;

/// Cursor for navigating tokens.
///
/// Invariant: the token slice is non-empty and ends with `Eof`, so `pos`
/// always indexes a valid token.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    /// Full-span start of skipped tokens not yet attached to a consumed token.
    pending_skip: Option<u32>,
    /// Own-span end of the last consumed token.
    last_end: u32,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at the start of the token stream.
    ///
    /// # Panics
    /// Panics if `tokens` does not end with `Eof`.
    pub fn new(tokens: &'a TokenList) -> Self {
        let slice = tokens.as_slice();
        assert!(
            slice.last().is_some_and(|t| t.kind == TokenKind::Eof),
            "token list must end with Eof"
        );
        Cursor {
            tokens: slice,
            pos: 0,
            pending_skip: None,
            last_end: slice.first().map_or(0, |t| t.full_span.start),
        }
    }

    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Current position in the token stream.
    ///
    /// Used for progress tracking: compare positions before and after
    /// parsing to determine if tokens were consumed.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub(crate) fn pending_skip(&self) -> Option<u32> {
        self.pending_skip
    }

    #[inline]
    pub(crate) fn last_end(&self) -> u32 {
        self.last_end
    }

    /// Reset position and skip state. Used by snapshot restore.
    pub(crate) fn reset(&mut self, pos: usize, pending_skip: Option<u32>, last_end: u32) {
        debug_assert!(
            pos < self.tokens.len(),
            "cursor position {} out of bounds (max {})",
            pos,
            self.tokens.len()
        );
        self.pos = pos;
        self.pending_skip = pending_skip;
        self.last_end = last_end;
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_span(&self) -> Span {
        self.current().span
    }

    /// Token at offset `n` from the current one, clamped to `Eof`.
    #[inline]
    pub fn peek(&self, n: usize) -> &Token {
        let last = self.tokens.len() - 1;
        &self.tokens[(self.pos + n).min(last)]
    }

    /// `peek_kind_at(0)` is the current token, `peek_kind_at(1)` the next.
    #[inline]
    pub fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.peek(n).kind
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Current token is an identifier with the given contextual meaning.
    #[inline]
    pub fn check_contextual(&self, kind: ContextualKind) -> bool {
        self.current().is_contextual(kind)
    }

    /// Tokens at `n` and `n + 1` touch with no trivia between them.
    pub fn adjacent_at(&self, n: usize) -> bool {
        let first = self.peek(n);
        let second = self.peek(n + 1);
        second.kind != TokenKind::Eof
            && first.full_span.end == first.span.end
            && second.full_span.start == second.span.start
            && first.span.end == second.span.start
    }

    /// `>>` or `>>=` formed by adjacent tokens at offset `n`.
    pub fn composite_gt_at(&self, n: usize) -> Option<TokenKind> {
        if self.peek_kind_at(n) != TokenKind::Gt || !self.adjacent_at(n) {
            return None;
        }
        match self.peek_kind_at(n + 1) {
            TokenKind::Gt => Some(TokenKind::Shr),
            TokenKind::GtEq => Some(TokenKind::ShrEq),
            _ => None,
        }
    }

    /// Consume the current token and return it.
    ///
    /// Pending skipped text becomes part of the returned token's full span.
    /// At `Eof` the cursor does not move; the entry point owns `Eof`.
    pub fn advance(&mut self) -> Token {
        let mut token = *self.current();
        trace!(
            pos = self.pos,
            kind = token.kind.friendly_name(),
            span_start = token.span.start,
            span_end = token.span.end,
            "advance"
        );
        if let Some(start) = self.pending_skip.take() {
            token.full_span.start = start;
            token.flags |= TokenFlags::SKIPPED_BEFORE;
        }
        if token.kind != TokenKind::Eof {
            self.pos += 1;
            self.last_end = token.span.end;
        }
        token
    }

    /// Consume `count` adjacent tokens as one token of `kind`.
    pub fn advance_composite(&mut self, kind: TokenKind, count: usize) -> Token {
        debug_assert!(count >= 1);
        let mut token = self.advance();
        for _ in 1..count {
            let next = self.advance();
            token.span = token.span.merge(next.span);
            token.full_span.end = next.full_span.end;
        }
        token.kind = kind;
        token
    }

    /// Consume the current token if it matches `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        if self.check(kind) {
            Some(self.advance())
        } else {
            None
        }
    }

    /// Skip the current token as trivia of the next consumed token.
    ///
    /// Returns the skipped token's span. `Eof` is never skipped.
    pub fn skip(&mut self) -> Span {
        let token = *self.current();
        if token.kind == TokenKind::Eof {
            return token.span;
        }
        trace!(pos = self.pos, kind = token.kind.friendly_name(), "skip");
        if self.pending_skip.is_none() {
            self.pending_skip = Some(token.full_span.start);
        }
        self.pos += 1;
        token.span
    }

    /// Zero-width token at the end of the last consumed token.
    pub fn missing(&self, kind: TokenKind) -> Token {
        Token::missing(kind, self.last_end)
    }
}
