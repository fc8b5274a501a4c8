//! Export functionality for Tributary reports.
//!
//! This module provides the [`Exporter`] trait that defines the interface for
//! turning built charts into an output document. It is the final stage in
//! the Tributary processing pipeline.
//!
//! # Pipeline Position
//!
//! ```text
//! Dataset JSON
//!     ↓ load
//! Cost Records
//!     ↓ build
//! Charts (validated diagrams)
//!     ↓ export (this module)
//! Output Document
//! ```
//!
//! # Available Backends
//!
//! - [`html`] - standalone HTML page drawing each chart with d3-sankey
//! - [`json`] - the diagram descriptions as JSON, for other renderers
//!
//! # Error Handling
//!
//! Export operations return [`Error`]. [`Error`] converts into
//! [`TributaryError::Export`] at the crate boundary.
//!
//! [`TributaryError::Export`]: crate::TributaryError::Export

/// HTML export backend.
pub mod html;
/// JSON export backend.
pub mod json;

use crate::charts::Chart;

/// Abstraction for report export backends.
pub trait Exporter {
    /// Exports the charts of a report, in order, to the backend's format.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the charts cannot be converted to the
    /// target format, or [`Error::Serialize`] if encoding chart data fails.
    fn export_charts(&mut self, charts: &[Chart]) -> Result<String, Error>;
}

/// Errors that can occur during report export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// Chart data could not be encoded as JSON.
    Serialize(serde_json::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Serialize(err) => write!(f, "Serialization error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialize(err)
    }
}
