//! Raw token definition.
//!
//! `RawToken` is the logos-derived tokenizer output before trivia is folded
//! into full spans. Whitespace, newlines and comments are real tokens here;
//! `lex` attaches them to their neighbours.

use logos::{Lexer, Logos};
use sharp_ir::TokenKind;

/// Raw token from logos (trivia included).
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawToken {
    // Trivia
    #[regex(r"[ \t\x0B\x0C]+")]
    Whitespace,
    #[regex(r"\r\n|\n|\r")]
    Newline,
    #[regex(r"//[^\r\n]*")]
    LineComment,
    #[token("/*", block_comment)]
    BlockComment,

    // Literals
    #[regex(r"[0-9][0-9_]*(\.[0-9][0-9_]*)?([eE][+-]?[0-9]+)?[a-zA-Z]*")]
    #[regex(r"\.[0-9][0-9_]*([eE][+-]?[0-9]+)?[a-zA-Z]*")]
    #[regex(r"0[xX][0-9a-fA-F_]+[a-zA-Z]*")]
    Number,
    #[regex(r#""([^"\\\r\n]|\\.)*""#)]
    #[regex(r#"\$"([^"\\\r\n]|\\.)*""#)]
    String,
    /// `@"..."` with `""` as the only escape. May span lines; unterminated
    /// runs to the end of input.
    #[token("@\"", verbatim_string)]
    #[token("@$\"", verbatim_string)]
    #[token("$@\"", verbatim_string)]
    VerbatimString,
    /// Unterminated regular string: runs to the end of the line.
    #[regex(r#"\$?"([^"\\\r\n]|\\.)*"#)]
    UnterminatedString,
    #[regex(r"'([^'\\\r\n]|\\[^\r\n][^'\r\n]*)'")]
    Char,

    // Identifiers and keywords
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
    #[regex(r"@[a-zA-Z_][a-zA-Z0-9_]*")]
    VerbatimIdent,

    // Punctuation
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token(";")]
    Semicolon,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token("..")]
    DotDot,
    #[token(":")]
    Colon,
    #[token("::")]
    ColonColon,
    #[token("?")]
    Question,
    #[token("??")]
    QuestionQuestion,
    #[token("??=")]
    QuestionQuestionEq,
    #[token("=>")]
    FatArrow,
    #[token("=")]
    Eq,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("!")]
    Bang,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token("&")]
    Amp,
    #[token("&&")]
    AmpAmp,
    #[token("|")]
    Pipe,
    #[token("||")]
    PipePipe,
    #[token("^")]
    Caret,
    #[token("~")]
    Tilde,
    #[token("++")]
    PlusPlus,
    #[token("--")]
    MinusMinus,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("%=")]
    PercentEq,
    #[token("&=")]
    AmpEq,
    #[token("|=")]
    PipeEq,
    #[token("^=")]
    CaretEq,
    #[token("<<")]
    Shl,
    #[token("<<=")]
    ShlEq,
    #[token("->")]
    Arrow,
}

/// Consume a block comment body; an unterminated comment runs to end of input.
fn block_comment(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder();
    let len = rest.find("*/").map_or(rest.len(), |end| end + 2);
    lex.bump(len);
}

fn verbatim_string(lex: &mut Lexer<'_, RawToken>) {
    let rest = lex.remainder().as_bytes();
    let mut i = 0;
    while i < rest.len() {
        if rest[i] == b'"' {
            if rest.get(i + 1) == Some(&b'"') {
                i += 2;
                continue;
            }
            lex.bump(i + 1);
            return;
        }
        i += 1;
    }
    lex.bump(rest.len());
}

impl RawToken {
    pub(crate) fn is_trivia(self) -> bool {
        matches!(
            self,
            RawToken::Whitespace
                | RawToken::Newline
                | RawToken::LineComment
                | RawToken::BlockComment
        )
    }

    /// Token kind of a non-trivia raw token. Identifier text decides keywords.
    pub(crate) fn kind(self, slice: &str) -> TokenKind {
        match self {
            RawToken::Ident => TokenKind::keyword_from_str(slice).unwrap_or(TokenKind::Ident),
            RawToken::VerbatimIdent => TokenKind::Ident,
            RawToken::Number => TokenKind::NumericLiteral,
            RawToken::String | RawToken::VerbatimString | RawToken::UnterminatedString => {
                TokenKind::StringLiteral
            }
            RawToken::Char => TokenKind::CharLiteral,
            RawToken::Whitespace
            | RawToken::Newline
            | RawToken::LineComment
            | RawToken::BlockComment => TokenKind::Error,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Dot => TokenKind::Dot,
            RawToken::DotDot => TokenKind::DotDot,
            RawToken::Colon => TokenKind::Colon,
            RawToken::ColonColon => TokenKind::ColonColon,
            RawToken::Question => TokenKind::Question,
            RawToken::QuestionQuestion => TokenKind::QuestionQuestion,
            RawToken::QuestionQuestionEq => TokenKind::QuestionQuestionEq,
            RawToken::FatArrow => TokenKind::FatArrow,
            RawToken::Eq => TokenKind::Eq,
            RawToken::EqEq => TokenKind::EqEq,
            RawToken::NotEq => TokenKind::NotEq,
            RawToken::Bang => TokenKind::Bang,
            RawToken::Lt => TokenKind::Lt,
            RawToken::LtEq => TokenKind::LtEq,
            RawToken::Gt => TokenKind::Gt,
            RawToken::GtEq => TokenKind::GtEq,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Star => TokenKind::Star,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Percent => TokenKind::Percent,
            RawToken::Amp => TokenKind::Amp,
            RawToken::AmpAmp => TokenKind::AmpAmp,
            RawToken::Pipe => TokenKind::Pipe,
            RawToken::PipePipe => TokenKind::PipePipe,
            RawToken::Caret => TokenKind::Caret,
            RawToken::Tilde => TokenKind::Tilde,
            RawToken::PlusPlus => TokenKind::PlusPlus,
            RawToken::MinusMinus => TokenKind::MinusMinus,
            RawToken::PlusEq => TokenKind::PlusEq,
            RawToken::MinusEq => TokenKind::MinusEq,
            RawToken::StarEq => TokenKind::StarEq,
            RawToken::SlashEq => TokenKind::SlashEq,
            RawToken::PercentEq => TokenKind::PercentEq,
            RawToken::AmpEq => TokenKind::AmpEq,
            RawToken::PipeEq => TokenKind::PipeEq,
            RawToken::CaretEq => TokenKind::CaretEq,
            RawToken::Shl => TokenKind::Shl,
            RawToken::ShlEq => TokenKind::ShlEq,
            RawToken::Arrow => TokenKind::Arrow,
        }
    }
}
