//! The core diagnostic type for the Tributary loader.
//!
//! A [`Diagnostic`] represents a single error or warning with optional
//! error code, labeled source spans, and help text.

use std::fmt;

use serde_json::error::Category;
use tributary_core::error_code::ErrorCode;

use crate::span::Span;

/// Whether a diagnostic stops the document from loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    /// Reported, but the document still loads.
    Warning,
}

impl Severity {
    pub fn is_error(self) -> bool {
        self == Severity::Error
    }

    pub fn is_warning(self) -> bool {
        self == Severity::Warning
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
        })
    }
}

/// A message pinned to the part of the document it describes.
#[derive(Debug, Clone)]
pub struct Label {
    span: Span,
    message: String,
}

impl Label {
    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// A diagnostic message with source location information.
///
/// # Example
///
/// ```text
/// error[E001]: expected `,` or `}`
///   --> data/jmu.json:4:5
///    |
///  4 |     "name": "Housing"
///    |     ^ unexpected character
///    |
///    = help: check for a missing comma between fields
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    severity: Severity,
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Create a warning diagnostic.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    /// Get the severity of this diagnostic.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Point at the offending part of the document.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label {
            span,
            message: message.into(),
        });
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            severity,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Format: "error[E001]: message" or "error: message"
        write!(f, "{}", self.severity)?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}

/// Convert a `serde_json` error into a located diagnostic.
///
/// `document` names what was being loaded ("dataset", "literal diagram") and
/// appears in the help text.
pub(crate) fn from_json_error(err: &serde_json::Error, source: &str, document: &str) -> Diagnostic {
    let (code, label, help) = match err.classify() {
        Category::Syntax => (
            ErrorCode::E001,
            "invalid JSON here",
            format!("the {document} must be a well-formed JSON document"),
        ),
        Category::Data => (
            ErrorCode::E002,
            "unexpected value here",
            format!("the {document} does not match the expected shape; check field names and value types"),
        ),
        Category::Eof => (
            ErrorCode::E003,
            "input ends here",
            format!("the {document} ends early; check for unclosed brackets or quotes"),
        ),
        Category::Io => (
            ErrorCode::E004,
            "read failed here",
            format!("the {document} could not be read"),
        ),
    };

    // serde_json appends " at line L column C" to its messages; the span carries that instead.
    let full = err.to_string();
    let message = full
        .rsplit_once(" at line ")
        .map_or(full.as_str(), |(message, _)| message)
        .to_string();

    let diagnostic = Diagnostic::error(message).with_code(code).with_help(help);
    if err.line() == 0 {
        return diagnostic;
    }
    diagnostic.with_label(Span::at_line_column(source, err.line(), err.column()), label)
}
