//! Error and diagnostic system for the Tributary dataset loader.
//!
//! This module provides:
//! - Located diagnostics for documents that fail to load ([`Diagnostic`], [`LoadError`])
//! - Record shape errors for records that lack what a chart needs ([`ShapeError`])
//!
//! # Example
//!
//! ```
//! # use tributary_dataset::error::Diagnostic;
//! # use tributary_dataset::Span;
//! # use tributary_core::error_code::ErrorCode;
//!
//! let diag = Diagnostic::error("expected `,` or `}`")
//!     .with_code(ErrorCode::E001)
//!     .with_label(Span::new(40..41), "unexpected character")
//!     .with_help("check for a missing comma between fields");
//! ```

mod diagnostic;
mod load_error;
mod shape;

pub(crate) use diagnostic::from_json_error;

pub use diagnostic::{Diagnostic, Label, Severity};
pub use load_error::LoadError;
pub use shape::{RecordRef, ShapeError};
