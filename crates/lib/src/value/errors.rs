//! Error types for value coercion.
//!
//! This module defines the failures raised by [`Value`](super::Value) and
//! the typed wrappers when an input does not have the shape a view needs,
//! when parsing or narrowing a scalar fails, or when a call violates an
//! argument contract.

use thiserror::Error;

/// Structured error types for value coercion.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ValueError {
    /// The input does not have the shape the requested view needs
    #[error("Type mismatch: expected {expected}, found {actual}")]
    TypeMismatch {
        expected: &'static str,
        actual: String,
    },

    /// Parsing text into the target type failed
    #[error("Could not parse \"{input}\" as {target}: {reason}")]
    ParseFailed {
        target: &'static str,
        input: String,
        reason: String,
    },

    /// A numeric operation produced NaN or an infinity
    #[error("Numeric result of {operation} is not finite")]
    NotFinite { operation: &'static str },

    /// A fractional number where an integer is required
    #[error("Value {value} is not integer-valued")]
    NotInteger { value: f64 },

    /// A number does not fit the target range
    #[error("Value {value} is out of range for {target}")]
    OutOfRange { value: String, target: &'static str },

    /// An element of a collection does not satisfy the projection target
    #[error("Cannot project collection to {target}: element {key}: {reason}")]
    ProjectionFailed {
        target: &'static str,
        key: String,
        reason: String,
    },

    /// `split` was called with an empty delimiter
    #[error("Delimiter must not be empty")]
    EmptyDelimiter,

    /// A transform chain was called without any transform
    #[error("{operation} requires at least one callback")]
    MissingCallback { operation: &'static str },

    /// Unknown scalar cast target name
    #[error("Invalid type \"{name}\" (accepted values: integer, int, float, string, boolean, bool)")]
    UnknownScalarType { name: String },
}

impl ValueError {
    /// Shorthand for a type mismatch against a raw value's type name
    pub(crate) fn mismatch(expected: &'static str, actual: &crate::raw::RawValue) -> Self {
        ValueError::TypeMismatch {
            expected,
            actual: actual.type_name().to_string(),
        }
    }

    /// Check if this error is a shape/type mismatch
    pub fn is_type_error(&self) -> bool {
        matches!(self, ValueError::TypeMismatch { .. })
    }

    /// Check if this error is a parsing, narrowing or projection failure
    pub fn is_conversion_error(&self) -> bool {
        matches!(
            self,
            ValueError::ParseFailed { .. }
                | ValueError::NotFinite { .. }
                | ValueError::NotInteger { .. }
                | ValueError::OutOfRange { .. }
                | ValueError::ProjectionFailed { .. }
        )
    }

    /// Check if this error is an argument contract violation
    pub fn is_argument_error(&self) -> bool {
        matches!(
            self,
            ValueError::EmptyDelimiter
                | ValueError::MissingCallback { .. }
                | ValueError::UnknownScalarType { .. }
        )
    }
}

impl From<ValueError> for crate::Error {
    fn from(err: ValueError) -> Self {
        crate::Error::Value(err)
    }
}
