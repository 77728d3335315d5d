//! Syntax model for the sharp parser.
//!
//! - [`Span`]: byte ranges into the source
//! - [`Token`], [`TokenKind`], [`TokenList`]: the lexer/parser interface
//! - [`ast`]: arena-allocated syntax tree
//! - [`visit`]: source-order traversal

pub mod ast;
mod span;
mod token;
pub mod visit;

pub use ast::{ArenaMark, ExprId, PatId, StmtId, SyntaxArena, TyId};
pub use span::Span;
pub use token::{ContextualKind, Token, TokenFlags, TokenKind, TokenList};
