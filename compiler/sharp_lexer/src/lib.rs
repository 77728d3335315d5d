//! Reference lexer for the sharp parser.
//!
//! Produces a [`TokenList`] whose full spans tile the source exactly:
//!
//! - A token's trailing trivia runs up to and including the first line break
//!   after it.
//! - Everything else between two tokens is leading trivia of the second.
//! - The final `Eof` token owns whatever trivia remains.
//!
//! Lexing never fails. Characters that start no token become `Error` tokens.
//! `>>` is always lexed as two `>` tokens; the parser composes shifts.

mod raw_token;

use logos::Logos;
use raw_token::RawToken;
use sharp_ir::{ContextualKind, Span, Token, TokenFlags, TokenKind, TokenList};

/// Lex source code into a `TokenList` terminated by `Eof`.
///
/// # Panics
/// Panics if the source is larger than `u32::MAX` bytes.
pub fn lex(source: &str) -> TokenList {
    if u32::try_from(source.len()).is_err() {
        panic!("source exceeds {} bytes", u32::MAX);
    }

    let mut builder = Builder::new(source);
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        if result.is_err() {
            // Error tokens cover whole characters.
            let end = logos.span().end;
            let boundary = (end..=source.len())
                .find(|&i| source.is_char_boundary(i))
                .unwrap_or(source.len());
            logos.bump(boundary - end);
        }
        let span = offset_span(logos.span());
        match result {
            Ok(raw) if raw.is_trivia() => builder.trivia(raw, span),
            Ok(raw) => builder.token(
                raw.kind(logos.slice()),
                raw == RawToken::VerbatimIdent,
                span,
            ),
            Err(()) => builder.token(TokenKind::Error, false, span),
        }
    }

    let tokens = builder.finish();
    tracing::trace!(count = tokens.len(), "lexed");
    tokens
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "source length checked against u32::MAX in `lex`"
)]
fn offset_span(range: std::ops::Range<usize>) -> Span {
    Span::new(range.start as u32, range.end as u32)
}

/// Folds trivia into the full spans of the surrounding tokens.
struct Builder<'src> {
    source: &'src str,
    tokens: TokenList,
    /// Start of the next token's leading trivia.
    leading_start: u32,
    /// Whether the previous token's trailing trivia already ended at a newline.
    trailing_closed: bool,
    newline_before: bool,
}

impl<'src> Builder<'src> {
    fn new(source: &'src str) -> Self {
        Builder {
            source,
            tokens: TokenList::with_capacity(source.len() / 4),
            leading_start: 0,
            trailing_closed: true,
            newline_before: false,
        }
    }

    fn trivia(&mut self, raw: RawToken, span: Span) {
        let has_newline = raw == RawToken::Newline
            || (raw == RawToken::BlockComment
                && self.source[span.to_range()].contains(|c| c == '\n' || c == '\r'));

        if !self.trailing_closed {
            // Still on the previous token's line: extend its trailing trivia.
            if let Some(prev) = self.tokens.last_mut() {
                prev.full_span.end = span.end;
            }
            self.leading_start = span.end;
            if has_newline {
                self.trailing_closed = true;
                self.newline_before = true;
            }
            return;
        }

        if has_newline {
            self.newline_before = true;
        }
    }

    fn token(&mut self, kind: TokenKind, verbatim: bool, span: Span) {
        let mut token = Token::new(kind, span);
        token.full_span = Span::new(self.leading_start, span.end);
        if self.newline_before {
            token.flags |= TokenFlags::NEWLINE_BEFORE;
        }
        if kind == TokenKind::Ident {
            if verbatim {
                token.flags |= TokenFlags::VERBATIM;
            } else {
                token.contextual = ContextualKind::from_ident(&self.source[span.to_range()]);
            }
        }
        self.tokens.push(token);

        self.leading_start = span.end;
        self.trailing_closed = false;
        self.newline_before = false;
    }

    fn finish(mut self) -> TokenList {
        let end = offset_span(0..self.source.len()).end;
        let mut eof = Token::new(TokenKind::Eof, Span::point(end));
        eof.full_span = Span::new(self.leading_start, end);
        if self.newline_before {
            eof.flags |= TokenFlags::NEWLINE_BEFORE;
        }
        self.tokens.push(eof);
        self.tokens
    }
}

#[cfg(test)]
mod tests;
