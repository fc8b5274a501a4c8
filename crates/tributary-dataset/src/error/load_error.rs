//! The LoadError type for wrapping loader diagnostics.
//!
//! [`LoadError`] wraps one or more [`Diagnostic`]s produced while reading a
//! dataset or literal diagram document.

use std::fmt;

use crate::error::Diagnostic;

/// Error type for document loading.
///
/// Wraps one or more diagnostics.
#[derive(Debug)]
pub struct LoadError {
    diagnostics: Vec<Diagnostic>,
}

impl LoadError {
    /// Create a new load error from diagnostics.
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Get all diagnostics in this error.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.diagnostics.first() {
            write!(f, "{}", first)?;
            if self.diagnostics.len() > 1 {
                write!(f, " (+{} more)", self.diagnostics.len() - 1)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for LoadError {}

impl From<Diagnostic> for LoadError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self {
            diagnostics: vec![diagnostic],
        }
    }
}

impl From<Vec<Diagnostic>> for LoadError {
    fn from(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }
}

#[cfg(test)]
mod tests {
    use tributary_core::error_code::ErrorCode;

    use super::*;

    #[test]
    fn test_display_single() {
        let err = LoadError::from(Diagnostic::error("trailing comma").with_code(ErrorCode::E001));
        assert_eq!(err.to_string(), "error[E001]: trailing comma");
    }

    #[test]
    fn test_display_counts_extra_diagnostics() {
        let err = LoadError::new(vec![
            Diagnostic::error("first"),
            Diagnostic::error("second"),
            Diagnostic::error("third"),
        ]);
        assert_eq!(err.to_string(), "error: first (+2 more)");
        assert_eq!(err.diagnostics().len(), 3);
    }
}
