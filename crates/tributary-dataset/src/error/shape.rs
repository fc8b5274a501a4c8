//! Errors raised when a record lacks what its chart needs.

use std::fmt;

use thiserror::Error;
use tributary_core::error_code::ErrorCode;

/// Identifies a record of the `student-costs` array in error messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    index: usize,
    kind: String,
    name: String,
}

impl RecordRef {
    pub fn new(index: usize, kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            index,
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Position of the record in the `student-costs` array.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The record's `type` field.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "record #{} `{}` ({})", self.index, self.name, self.kind)
    }
}

/// A selected record cannot produce a flow.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("{record} is missing required field `{field}`")]
    MissingField {
        record: RecordRef,
        field: &'static str,
    },

    #[error("{record} has invalid amount {value}; amounts must be finite and non-negative")]
    InvalidAmount { record: RecordRef, value: f64 },

    #[error("{record} is not a `{expected}` record")]
    UnexpectedKind {
        record: RecordRef,
        expected: &'static str,
    },
}

impl ShapeError {
    /// The record this error is about.
    pub fn record(&self) -> &RecordRef {
        match self {
            Self::MissingField { record, .. }
            | Self::InvalidAmount { record, .. }
            | Self::UnexpectedKind { record, .. } => record,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingField { .. } => ErrorCode::E100,
            Self::InvalidAmount { .. } => ErrorCode::E101,
            Self::UnexpectedKind { .. } => ErrorCode::E102,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = ShapeError::MissingField {
            record: RecordRef::new(3, "Auxiliary Comprehensive Fee Component", "Athletics"),
            field: "amount",
        };
        assert_eq!(
            err.to_string(),
            "record #3 `Athletics` (Auxiliary Comprehensive Fee Component) is missing required field `amount`"
        );
        assert_eq!(err.code(), ErrorCode::E100);
        assert_eq!(err.record().index(), 3);
    }

    #[test]
    fn test_invalid_amount_code() {
        let err = ShapeError::InvalidAmount {
            record: RecordRef::new(0, "student itemized", "Housing"),
            value: -1.0,
        };
        assert_eq!(err.code(), ErrorCode::E101);
        assert_eq!(err.record().name(), "Housing");
    }
}
