//! Error codes for the Tributary diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Dataset loading errors
//! - `E1xx` - Record shape errors
//! - `E2xx` - Graph integrity errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Dataset Loading Errors (E0xx)
    // =========================================================================
    /// Invalid JSON syntax.
    ///
    /// The document is not well-formed JSON.
    E001,

    /// Unexpected document shape.
    ///
    /// The document is valid JSON but a value has the wrong type or a
    /// required field such as `student-costs` is missing.
    E002,

    /// Unexpected end of input.
    ///
    /// The document ended before a complete JSON value was read.
    E003,

    /// Unreadable input.
    ///
    /// The document could not be read from disk.
    E004,

    // =========================================================================
    // Record Shape Errors (E1xx)
    // =========================================================================
    /// Missing record field.
    ///
    /// A record selected for a chart lacks a field its kind requires.
    E100,

    /// Invalid amount.
    ///
    /// An amount computed for a selected record is NaN, infinite, or negative.
    E101,

    /// Unexpected record kind.
    ///
    /// A record was viewed as a kind its `type` does not match.
    E102,

    // =========================================================================
    // Graph Integrity Errors (E2xx)
    // =========================================================================
    /// Dangling link endpoint.
    ///
    /// A link references a node name absent from the diagram.
    E200,

    /// Duplicate node.
    ///
    /// Two nodes in one literal diagram share a name.
    E201,

    /// Invalid link value.
    ///
    /// A link carries a NaN, infinite, or negative value.
    E202,

    /// Circular link.
    ///
    /// The links form a cycle, which the Sankey layout cannot place.
    E203,
}

impl ErrorCode {
    /// Returns the code as a string, e.g. `"E200"`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E002 => "E002",
            ErrorCode::E003 => "E003",
            ErrorCode::E004 => "E004",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
            ErrorCode::E202 => "E202",
            ErrorCode::E203 => "E203",
        }
    }

    /// Returns a short description of the error code.
    pub fn description(&self) -> &'static str {
        match self {
            // Dataset loading errors
            ErrorCode::E001 => "invalid JSON syntax",
            ErrorCode::E002 => "unexpected document shape",
            ErrorCode::E003 => "unexpected end of input",
            ErrorCode::E004 => "unreadable input",
            // Record shape errors
            ErrorCode::E100 => "missing record field",
            ErrorCode::E101 => "invalid amount",
            ErrorCode::E102 => "unexpected record kind",
            // Graph integrity errors
            ErrorCode::E200 => "dangling link endpoint",
            ErrorCode::E201 => "duplicate node",
            ErrorCode::E202 => "invalid link value",
            ErrorCode::E203 => "circular link",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
