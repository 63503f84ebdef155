//! Errors raised when a dish field cannot be read.

use thiserror::Error;

/// Coarse classification shared by every error in the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A field that had to be read was absent
    MissingField,
    /// A field was present but had the wrong shape
    TypeMismatch,
    /// A step produced a dish whose time is earlier than its input's
    TimeReversed,
    /// A time that is not a finite, non-negative number of minutes
    InvalidTime,
}

/// Failure to read a specific field of a dish.
///
/// Accumulating operations never produce this: absent fields count as zero
/// there. It only arises where a step has to read a field's value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DishError {
    #[error("missing field '{field}'")]
    MissingField { field: String },

    #[error("field '{field}' is {found}, expected {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl DishError {
    pub fn missing(field: &str) -> Self {
        Self::MissingField {
            field: field.to_string(),
        }
    }

    pub fn mismatch(field: &str, expected: &'static str, found: &'static str) -> Self {
        Self::TypeMismatch {
            field: field.to_string(),
            expected,
            found,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingField { .. } => ErrorKind::MissingField,
            Self::TypeMismatch { .. } => ErrorKind::TypeMismatch,
        }
    }

    /// Name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::MissingField { field } | Self::TypeMismatch { field, .. } => field,
        }
    }
}
