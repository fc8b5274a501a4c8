//! Error types for Tributary operations.
//!
//! This module provides the main error type [`TributaryError`] which wraps
//! the error conditions that can occur while loading input, building charts,
//! and exporting a report.

use std::io;

use thiserror::Error;

use tributary_dataset::LoadError;

use crate::build::BuildError;

/// The main error type for Tributary operations.
///
/// # Diagnostic Variants
///
/// The `Load` variant contains located diagnostics together with the source
/// document, so callers can render the offending snippet. `Chart` names the
/// chart a build failure belongs to.
#[derive(Debug, Error)]
pub enum TributaryError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Load { err: LoadError, src: String },

    /// The build error is part of the message and is not reported again as
    /// the error source.
    #[error("Chart {index} ({title}): {error}")]
    Chart {
        index: usize,
        title: String,
        error: BuildError,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for TributaryError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl TributaryError {
    /// Create a new `Load` error with the associated source document.
    pub fn new_load_error(err: LoadError, src: impl Into<String>) -> Self {
        Self::Load {
            err,
            src: src.into(),
        }
    }

    /// Attach chart context to a build failure.
    ///
    /// `index` is 1-based, matching the order charts appear in a report.
    pub fn in_chart(index: usize, title: impl Into<String>, error: impl Into<BuildError>) -> Self {
        Self::Chart {
            index,
            title: title.into(),
            error: error.into(),
        }
    }
}
