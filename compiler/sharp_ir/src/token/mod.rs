//! Token types produced by the lexer and consumed by the parser.
//!
//! `TokenKind` is a fieldless `#[repr(u8)]` enum so the parser's recovery
//! sets can be built as `u128` bitsets over the discriminant. Token text is
//! never stored; it is recovered by slicing the source with the token's span.

mod list;

pub use list::TokenList;

use crate::Span;
use bitflags::bitflags;
use std::fmt;

macro_rules! token_kinds {
    (
        special { $($s_variant:ident => $s_name:literal,)* }
        keyword { $($k_variant:ident => $k_text:literal,)* }
        punct { $($p_variant:ident => $p_text:literal,)* }
    ) => {
        /// The closed set of token kinds.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        #[repr(u8)]
        pub enum TokenKind {
            $($s_variant,)*
            $($k_variant,)*
            $($p_variant,)*
        }

        impl TokenKind {
            /// Every kind, indexed by discriminant.
            pub const ALL: &'static [TokenKind] = &[
                $(TokenKind::$s_variant,)*
                $(TokenKind::$k_variant,)*
                $(TokenKind::$p_variant,)*
            ];

            /// Fixed source text of keyword and punctuation kinds.
            pub const fn text(self) -> Option<&'static str> {
                match self {
                    $(TokenKind::$s_variant => None,)*
                    $(TokenKind::$k_variant => Some($k_text),)*
                    $(TokenKind::$p_variant => Some($p_text),)*
                }
            }

            /// Human-readable name used in diagnostics.
            pub const fn friendly_name(self) -> &'static str {
                match self {
                    $(TokenKind::$s_variant => $s_name,)*
                    $(TokenKind::$k_variant => $k_text,)*
                    $(TokenKind::$p_variant => $p_text,)*
                }
            }

            /// Keyword lookup for the lexer.
            pub fn keyword_from_str(text: &str) -> Option<TokenKind> {
                match text {
                    $($k_text => Some(TokenKind::$k_variant),)*
                    _ => None,
                }
            }
        }
    };
}

token_kinds! {
    special {
        Ident => "identifier",
        NumericLiteral => "numeric literal",
        StringLiteral => "string literal",
        CharLiteral => "character literal",
        Error => "invalid character",
        Eof => "end of file",
    }
    keyword {
        // Predefined types; keep contiguous, see `is_predefined_type`.
        Bool => "bool",
        Byte => "byte",
        SByte => "sbyte",
        Short => "short",
        UShort => "ushort",
        Int => "int",
        UInt => "uint",
        Long => "long",
        ULong => "ulong",
        Char => "char",
        Float => "float",
        Double => "double",
        Decimal => "decimal",
        String => "string",
        Object => "object",
        Void => "void",
        // Reserved keywords.
        As => "as",
        Base => "base",
        Break => "break",
        Case => "case",
        Checked => "checked",
        Const => "const",
        Continue => "continue",
        Default => "default",
        Do => "do",
        Else => "else",
        False => "false",
        For => "for",
        Foreach => "foreach",
        If => "if",
        In => "in",
        Is => "is",
        New => "new",
        Null => "null",
        Out => "out",
        Params => "params",
        Ref => "ref",
        Return => "return",
        SizeOf => "sizeof",
        StackAlloc => "stackalloc",
        Switch => "switch",
        This => "this",
        Throw => "throw",
        True => "true",
        TypeOf => "typeof",
        Unchecked => "unchecked",
        While => "while",
    }
    punct {
        LParen => "(",
        RParen => ")",
        LBrace => "{",
        RBrace => "}",
        LBracket => "[",
        RBracket => "]",
        Semicolon => ";",
        Comma => ",",
        Dot => ".",
        DotDot => "..",
        Colon => ":",
        ColonColon => "::",
        Question => "?",
        QuestionQuestion => "??",
        QuestionQuestionEq => "??=",
        FatArrow => "=>",
        Eq => "=",
        EqEq => "==",
        NotEq => "!=",
        Bang => "!",
        Lt => "<",
        LtEq => "<=",
        Gt => ">",
        GtEq => ">=",
        Plus => "+",
        Minus => "-",
        Star => "*",
        Slash => "/",
        Percent => "%",
        Amp => "&",
        AmpAmp => "&&",
        Pipe => "|",
        PipePipe => "||",
        Caret => "^",
        Tilde => "~",
        PlusPlus => "++",
        MinusMinus => "--",
        PlusEq => "+=",
        MinusEq => "-=",
        StarEq => "*=",
        SlashEq => "/=",
        PercentEq => "%=",
        AmpEq => "&=",
        PipeEq => "|=",
        CaretEq => "^=",
        Shl => "<<",
        ShlEq => "<<=",
        Arrow => "->",
        // Composed by the parser from adjacent `>` tokens; never lexed.
        Shr => ">>",
        ShrEq => ">>=",
    }
}

// `TokenSet` in the parser is a u128 bitset over discriminants.
const _: () = assert!(TokenKind::ALL.len() <= 128);

impl TokenKind {
    /// Discriminant as a dense index.
    #[inline]
    pub const fn discriminant_index(self) -> u8 {
        self as u8
    }

    /// `bool`, `int`, `string`, ... `void`.
    #[inline]
    pub const fn is_predefined_type(self) -> bool {
        let idx = self as u8;
        idx >= TokenKind::Bool as u8 && idx <= TokenKind::Void as u8
    }

    /// Literal tokens (numbers, strings, chars, `true`, `false`, `null`).
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::NumericLiteral
                | TokenKind::StringLiteral
                | TokenKind::CharLiteral
                | TokenKind::True
                | TokenKind::False
                | TokenKind::Null
        )
    }

    /// Simple and compound assignment operators.
    #[inline]
    pub const fn is_assignment_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Eq
                | TokenKind::PlusEq
                | TokenKind::MinusEq
                | TokenKind::StarEq
                | TokenKind::SlashEq
                | TokenKind::PercentEq
                | TokenKind::AmpEq
                | TokenKind::PipeEq
                | TokenKind::CaretEq
                | TokenKind::ShlEq
                | TokenKind::ShrEq
                | TokenKind::QuestionQuestionEq
        )
    }

    /// Relational operators usable as a relational pattern prefix.
    #[inline]
    pub const fn is_relational_pattern_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Lt
                | TokenKind::LtEq
                | TokenKind::Gt
                | TokenKind::GtEq
                | TokenKind::EqEq
                | TokenKind::NotEq
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.friendly_name())
    }
}

/// Contextual classification of an identifier token.
///
/// These words stay ordinary identifiers; the parser consults this tag only
/// in the structural slot where the contextual meaning applies. Verbatim
/// identifiers (`@var`) are always `None`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[repr(u8)]
pub enum ContextualKind {
    #[default]
    None,
    Var,
    Underscore,
    Nameof,
    When,
    And,
    Or,
    Not,
}

impl ContextualKind {
    /// Classify identifier text.
    pub fn from_ident(text: &str) -> Self {
        match text {
            "var" => ContextualKind::Var,
            "_" => ContextualKind::Underscore,
            "nameof" => ContextualKind::Nameof,
            "when" => ContextualKind::When,
            "and" => ContextualKind::And,
            "or" => ContextualKind::Or,
            "not" => ContextualKind::Not,
            _ => ContextualKind::None,
        }
    }
}

bitflags! {
    /// Per-token metadata.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TokenFlags: u8 {
        /// Synthesized by error recovery; zero width.
        const MISSING = 1 << 0;
        /// A line break occurs in this token's leading trivia.
        const NEWLINE_BEFORE = 1 << 1;
        /// Leading trivia contains tokens skipped by error recovery.
        const SKIPPED_BEFORE = 1 << 2;
        /// Identifier written with the `@` verbatim prefix.
        const VERBATIM = 1 << 3;
    }
}

/// A token with its own span and its full span including trivia.
///
/// Full spans of the consumed tokens tile the source: concatenating
/// `source[full_span]` for every token in tree order yields the input.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub contextual: ContextualKind,
    pub flags: TokenFlags,
    /// The token's own text.
    pub span: Span,
    /// Leading trivia, text and trailing trivia.
    pub full_span: Span,
}

impl Token {
    /// Token without trivia.
    #[inline]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Token {
            kind,
            contextual: ContextualKind::None,
            flags: TokenFlags::empty(),
            span,
            full_span: span,
        }
    }

    /// Zero-width placeholder for an expected but absent token.
    #[inline]
    pub const fn missing(kind: TokenKind, at: u32) -> Self {
        Token {
            kind,
            contextual: ContextualKind::None,
            flags: TokenFlags::MISSING,
            span: Span::point(at),
            full_span: Span::point(at),
        }
    }

    #[inline]
    pub const fn is_missing(&self) -> bool {
        self.flags.contains(TokenFlags::MISSING)
    }

    #[inline]
    pub const fn has_newline_before(&self) -> bool {
        self.flags.contains(TokenFlags::NEWLINE_BEFORE)
    }

    /// Identifier with the given contextual classification.
    #[inline]
    pub fn is_contextual(&self, kind: ContextualKind) -> bool {
        self.kind == TokenKind::Ident && self.contextual == kind
    }

    /// The token's own text.
    pub fn text<'s>(&self, source: &'s str) -> &'s str {
        self.span.text(source)
    }

    /// The token's text including trivia.
    pub fn full_text<'s>(&self, source: &'s str) -> &'s str {
        self.full_span.text(source)
    }
}

#[cfg(test)]
mod tests;
