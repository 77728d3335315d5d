//! Parser diagnostics in a form independent of the parser's own error type.

use sharp_ir::Span;
use std::fmt;

use crate::ErrorCode;

/// Errors stop nothing but make a parse unclean; warnings are advisory.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Severity {
    Error,
    Warning,
}

impl Severity {
    /// Severity implied by a code's `E`/`W` prefix.
    pub fn of(code: ErrorCode) -> Self {
        if code.is_warning() {
            Severity::Warning
        } else {
            Severity::Error
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The location a diagnostic points at, with a short caption.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

/// One reported problem: code, severity, message, a primary label and
/// optional notes.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "diagnostics should be reported or returned, not silently dropped"]
pub struct Diagnostic {
    pub code: ErrorCode,
    pub severity: Severity,
    pub message: String,
    pub label: Label,
    pub notes: Vec<String>,
}

impl Diagnostic {
    /// A diagnostic at `span`. Severity follows the code; the label caption
    /// starts out as "here".
    #[cold]
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Diagnostic {
            code,
            severity: Severity::of(code),
            message: message.into(),
            label: Label {
                span,
                message: "here".to_string(),
            },
            notes: Vec::new(),
        }
    }

    /// Replace the label caption.
    pub fn with_label(mut self, message: impl Into<String>) -> Self {
        self.label.message = message.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    #[inline]
    pub fn span(&self) -> Span {
        self.label.span
    }

    #[inline]
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]: {}", self.severity, self.code, self.message)?;
        write!(f, "\n  --> {:?}: {}", self.label.span, self.label.message)?;
        for note in &self.notes {
            write!(f, "\n  = note: {note}")?;
        }
        Ok(())
    }
}
