//! Recursive descent parser for a C#-family expression, pattern and
//! statement grammar.
//!
//! Produces a flat, lossless syntax tree in a [`SyntaxArena`]. Parsing never
//! fails: every problem becomes a [`ParseError`] in the output and the parser
//! continues with the most plausible fragment, synthesizing zero-width
//! missing tokens and folding skipped input into the trivia of the next
//! token. Walking the tree reproduces the source byte for byte.
//!
//! # Entry points
//!
//! - [`parse_expression`], [`parse_statement`], [`parse_compilation_unit`]
//! - [`parse_batch`] for many independent inputs on the rayon pool
//! - [`Parser`] for token lists that did not come from `sharp_lexer`

mod context;
mod cursor;
mod error;
mod grammar;
mod options;
mod outcome;
pub mod recovery;
mod snapshot;

pub use context::ParseContext;
pub use cursor::Cursor;
pub use error::{ErrorContext, ParseError, ParseErrorKind};
pub use options::{Feature, LanguageVersion, ParseOptions, UnknownLanguageVersion};
pub use outcome::ParseOutcome;
pub use recovery::{synchronize, TokenSet};
pub use snapshot::ParserSnapshot;

use rayon::prelude::*;
use sharp_ir::ast::{CompilationUnit, Expr, ExprKind, SimpleName};
use sharp_ir::visit::{TokenCollector, Visitor};
use sharp_ir::{ExprId, Span, StmtId, SyntaxArena, Token, TokenKind, TokenList};
use sharp_stack::ensure_sufficient_stack;
use tracing::debug;

/// Nesting limit for expressions, patterns, types and statements.
pub const MAX_NESTING_DEPTH: u32 = 256;

/// Which production the parser starts from.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Expression,
    Statement,
    CompilationUnit,
}

/// Parser state.
///
/// One parser handles one input. It owns its cursor, arena, context and
/// diagnostics; nothing is shared between parsers.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    arena: SyntaxArena,
    context: ParseContext,
    diagnostics: Vec<ParseError>,
    depth: u32,
    options: ParseOptions,
}

impl<'a> Parser<'a> {
    /// Create a new parser.
    ///
    /// # Panics
    /// Panics if `tokens` does not end with `Eof`.
    pub fn new(tokens: &'a TokenList, options: ParseOptions) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            arena: SyntaxArena::with_capacity(tokens.len()),
            context: ParseContext::new(),
            diagnostics: Vec::new(),
            depth: 0,
            options,
        }
    }

    /// Run `entry` over the whole token list.
    ///
    /// `source` must be the text the tokens were lexed from; it is kept in
    /// the output for [`ParseOutput::reconstruct`].
    pub fn parse(mut self, entry: EntryPoint, source: &str) -> ParseOutput {
        let root = match entry {
            EntryPoint::Expression => Root::Expr(self.parse_expression()),
            EntryPoint::Statement => Root::Stmt(self.parse_statement()),
            EntryPoint::CompilationUnit => Root::CompilationUnit(self.parse_compilation_unit_body()),
        };
        self.finish(root, source)
    }

    /// Skip trailing input into `Eof` and package the result.
    fn finish(mut self, root: Root, source: &str) -> ParseOutput {
        if !self.cursor.is_at_end() {
            let found = self.current_kind();
            let span = self.current_span();
            self.error(ParseErrorKind::UnexpectedToken { found }, span);
            while !self.cursor.is_at_end() {
                self.cursor.skip();
            }
        }
        let eof = self.cursor.advance();
        ParseOutput {
            arena: self.arena,
            root,
            eof,
            diagnostics: self.diagnostics,
            source: source.to_string(),
        }
    }

    // Cursor delegation methods

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn peek_kind_at(&self, n: usize) -> TokenKind {
        self.cursor.peek_kind_at(n)
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        self.cursor.eat(kind)
    }

    // Speculation

    /// Capture every mutable counter for a later [`Parser::restore`].
    pub fn snapshot(&self) -> ParserSnapshot {
        ParserSnapshot::new(
            self.cursor.position(),
            self.cursor.pending_skip(),
            self.cursor.last_end(),
            self.context,
            self.diagnostics.len(),
            self.arena.mark(),
            self.depth,
        )
    }

    /// Rewind to `snapshot`, discarding nodes and diagnostics made since.
    pub fn restore(&mut self, snapshot: ParserSnapshot) {
        if snapshot.cursor_pos != self.cursor.position() {
            debug!(
                from = self.cursor.position(),
                to = snapshot.cursor_pos,
                "speculative parse rolled back"
            );
        }
        self.cursor.reset(
            snapshot.cursor_pos,
            snapshot.pending_skip,
            snapshot.last_end,
        );
        self.context = snapshot.context;
        self.diagnostics.truncate(snapshot.diagnostics_len);
        self.arena.truncate(snapshot.arena);
        self.depth = snapshot.depth;
    }

    /// Byte offset of the current token, for `ParseOutcome::EmptyErr`.
    #[inline]
    pub fn offset(&self) -> usize {
        self.current_span().start as usize
    }

    /// Run a scanner and always rewind afterwards.
    pub(crate) fn look_ahead<T>(&mut self, scan: impl FnOnce(&mut Self) -> T) -> T {
        let snapshot = self.snapshot();
        let result = scan(self);
        self.restore(snapshot);
        result
    }

    /// Keep the production only when it returns `Some`.
    pub(crate) fn try_parse<T>(&mut self, parse: impl FnOnce(&mut Self) -> Option<T>) -> Option<T> {
        let snapshot = self.snapshot();
        let result = parse(self);
        if result.is_none() {
            self.restore(snapshot);
        }
        result
    }

    // Diagnostics

    #[cold]
    pub(crate) fn error(&mut self, kind: ParseErrorKind, span: Span) {
        self.diagnostics.push(ParseError::new(kind, span));
    }

    /// Report a gated construct when the selected version predates it.
    pub(crate) fn check_feature(&mut self, feature: Feature, span: Span) {
        if !self.options.is_available(feature) {
            self.error(
                ParseErrorKind::FeatureUnavailable {
                    feature,
                    current: self.options.language_version,
                    required: feature.required_version(),
                },
                span,
            );
        }
    }

    /// The current token, or a missing one with a `MissingToken` diagnostic.
    pub(crate) fn expect(&mut self, kind: TokenKind) -> Token {
        if let Some(token) = self.eat(kind) {
            return token;
        }
        let span = self.current_span();
        self.error(ParseErrorKind::MissingToken { expected: kind }, span);
        self.cursor.missing(kind)
    }

    /// Any identifier, or a missing one with `IdentifierExpected`.
    pub(crate) fn expect_ident(&mut self) -> Token {
        if let Some(token) = self.eat(TokenKind::Ident) {
            return token;
        }
        let span = self.current_span();
        self.error(ParseErrorKind::IdentifierExpected, span);
        self.cursor.missing(TokenKind::Ident)
    }

    /// Skip the current token with an `UnexpectedToken` diagnostic.
    ///
    /// `Eof` is reported but never skipped.
    pub(crate) fn skip_unexpected(&mut self) {
        let found = self.current_kind();
        let span = self.current_span();
        self.error(ParseErrorKind::UnexpectedToken { found }, span);
        self.cursor.skip();
    }

    /// Label diagnostics raised inside `parse` with "while parsing ...".
    ///
    /// The innermost construct wins; diagnostics that already carry a
    /// context keep it.
    pub(crate) fn in_error_context<T>(
        &mut self,
        context: ErrorContext,
        parse: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let start = self.diagnostics.len();
        let result = parse(self);
        for diagnostic in self.diagnostics.iter_mut().skip(start) {
            if diagnostic.context.is_none() {
                diagnostic.context = Some(format!("while parsing {}", context.description()));
            }
        }
        result
    }

    /// Run `parse` with `context` in place of the current flags.
    pub(crate) fn with_context<T>(
        &mut self,
        context: ParseContext,
        parse: impl FnOnce(&mut Self) -> T,
    ) -> T {
        let saved = self.context;
        self.context = context;
        let result = parse(self);
        self.context = saved;
        result
    }

    // Nesting

    /// Run one recursive step under the depth limit and the stack guard.
    ///
    /// Past [`MAX_NESTING_DEPTH`] the rest of the bracketed construct is
    /// skipped and `fallback` builds a placeholder.
    pub(crate) fn guarded<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> T,
        fallback: impl FnOnce(&mut Self) -> T,
    ) -> T {
        if self.depth >= MAX_NESTING_DEPTH {
            self.nesting_too_deep();
            return fallback(self);
        }
        self.depth += 1;
        let result = ensure_sufficient_stack(|| parse(self));
        self.depth -= 1;
        result
    }

    /// One diagnostic per parse, then skip to the unmatched closer.
    fn nesting_too_deep(&mut self) {
        let reported = self
            .diagnostics
            .iter()
            .any(|d| d.kind == ParseErrorKind::NestingTooDeep);
        if !reported {
            debug!(depth = self.depth, "nesting limit reached");
            let span = self.current_span();
            self.error(ParseErrorKind::NestingTooDeep, span);
        }
        let mut open = 0u32;
        loop {
            match self.current_kind() {
                TokenKind::Eof => break,
                TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace => open += 1,
                TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace => {
                    if open == 0 {
                        break;
                    }
                    open -= 1;
                }
                _ => {}
            }
            self.cursor.skip();
        }
    }

    // Node helpers

    /// Span from `start` to the end of the last consumed token.
    pub(crate) fn span_from(&self, start: u32) -> Span {
        let end = self.cursor.last_end();
        if end > start {
            Span::new(start, end)
        } else {
            Span::point(start)
        }
    }

    pub(crate) fn alloc_expr(&mut self, kind: ExprKind, start: u32) -> ExprId {
        let span = self.span_from(start);
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// Missing-identifier placeholder. Consumes nothing.
    pub(crate) fn missing_name_expr(&mut self) -> ExprId {
        let identifier = self.cursor.missing(TokenKind::Ident);
        let span = Span::point(identifier.span.start);
        self.arena
            .alloc_expr(Expr::new(ExprKind::Name(SimpleName::plain(identifier)), span))
    }
}

/// What the parse started from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Root {
    Expr(ExprId),
    Stmt(StmtId),
    CompilationUnit(CompilationUnit),
}

/// Parse result: the tree, the `Eof` token holding trailing trivia, and
/// every diagnostic in the order it was raised.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ParseOutput {
    pub arena: SyntaxArena,
    pub root: Root,
    pub eof: Token,
    pub diagnostics: Vec<ParseError>,
    pub source: String,
}

impl ParseOutput {
    /// Any diagnostic that is not a warning.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| !d.is_warning())
    }

    pub fn errors(&self) -> impl Iterator<Item = &ParseError> {
        self.diagnostics.iter().filter(|d| !d.is_warning())
    }

    /// Root expression, if parsed from [`EntryPoint::Expression`].
    pub fn expr(&self) -> Option<ExprId> {
        match self.root {
            Root::Expr(id) => Some(id),
            _ => None,
        }
    }

    /// Root statement, if parsed from [`EntryPoint::Statement`].
    pub fn stmt(&self) -> Option<StmtId> {
        match self.root {
            Root::Stmt(id) => Some(id),
            _ => None,
        }
    }

    /// Every token in tree order, ending with `Eof`.
    pub fn tokens(&self) -> Vec<Token> {
        let mut collector = TokenCollector::default();
        match &self.root {
            Root::Expr(id) => collector.visit_expr(*id, &self.arena),
            Root::Stmt(id) => collector.visit_stmt(*id, &self.arena),
            Root::CompilationUnit(unit) => {
                for stmt in &unit.stmts {
                    collector.visit_stmt(*stmt, &self.arena);
                }
            }
        }
        collector.visit_token(&self.eof);
        collector.tokens
    }

    /// Concatenate the full text of every token in tree order.
    ///
    /// Equals the source for any input, well-formed or not.
    pub fn reconstruct(&self) -> String {
        let mut text = String::with_capacity(self.source.len());
        for token in self.tokens() {
            text.push_str(token.full_text(&self.source));
        }
        text
    }
}

/// Parse `source` as a single expression.
pub fn parse_expression(source: &str, options: &ParseOptions) -> ParseOutput {
    let _span = tracing::debug_span!("parse_expression", len = source.len()).entered();
    parse_source(source, options, EntryPoint::Expression)
}

/// Parse `source` as a single statement.
pub fn parse_statement(source: &str, options: &ParseOptions) -> ParseOutput {
    let _span = tracing::debug_span!("parse_statement", len = source.len()).entered();
    parse_source(source, options, EntryPoint::Statement)
}

/// Parse `source` as a sequence of statements.
pub fn parse_compilation_unit(source: &str, options: &ParseOptions) -> ParseOutput {
    let _span = tracing::debug_span!("parse_compilation_unit", len = source.len()).entered();
    parse_source(source, options, EntryPoint::CompilationUnit)
}

/// Parse independent compilation units in parallel.
///
/// Results are in input order and identical to parsing each one with
/// [`parse_compilation_unit`].
pub fn parse_batch(sources: &[&str], options: &ParseOptions) -> Vec<ParseOutput> {
    let _span = tracing::debug_span!("parse_batch", count = sources.len()).entered();
    sources
        .par_iter()
        .map(|source| parse_compilation_unit(source, options))
        .collect()
}

fn parse_source(source: &str, options: &ParseOptions, entry: EntryPoint) -> ParseOutput {
    let tokens = sharp_lexer::lex(source);
    let output = Parser::new(&tokens, *options).parse(entry, source);
    debug!(
        nodes = output.arena.expr_count() + output.arena.pattern_count(),
        diagnostics = output.diagnostics.len(),
        "parse finished"
    );
    output
}

#[cfg(test)]
mod tests;
