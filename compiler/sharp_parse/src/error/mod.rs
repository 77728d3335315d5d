//! Parse errors.
//!
//! Every problem the parser finds becomes a [`ParseError`] in the parser's
//! sink; none of them stop the parse. [`ParseError::to_diagnostic`] renders
//! one into the shared `sharp_diagnostic` format.

mod context;
mod kind;

pub use context::ErrorContext;
pub use kind::ParseErrorKind;

use sharp_diagnostic::{Diagnostic, ErrorCode, Severity};
use sharp_ir::Span;

/// A diagnostic produced during parsing.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Location of the error.
    pub span: Span,
    /// "while parsing ..." context, set by the innermost enclosing construct.
    pub context: Option<String>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            context: None,
        }
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    #[inline]
    pub fn severity(&self) -> Severity {
        self.kind.severity()
    }

    #[inline]
    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }

    /// Rendered message.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }

    /// Render into the shared diagnostic format. The label carries the
    /// "while parsing ..." context when there is one.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diagnostic = Diagnostic::new(self.code(), self.message(), self.span);
        if let Some(context) = &self.context {
            diagnostic = diagnostic.with_label(context.as_str());
        }
        match self.kind.note() {
            Some(note) => diagnostic.with_note(note),
            None => diagnostic,
        }
    }
}

#[cfg(test)]
mod tests;
