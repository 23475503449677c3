//!
//! Tessella: an immutable data-modeling toolkit.
//!
//! This library turns untyped, loosely structured input into persistent maps
//! and strongly typed views, failing loudly when shapes do not match.
//!
//! ## Core Concepts
//!
//! * **Raw values (`raw::RawValue`)**: The dynamic input model. Scalars, ordered keyed groups, nested maps and handles to externally convertible entities.
//! * **Maps (`map::Map`)**: Persistent, insertion-ordered, string-keyed containers. Every mutator returns a new map and leaves the receiver untouched.
//! * **Values (`value::Value`)**: Transient routing wrappers that coerce one raw value into a map, a collection or a scalar view:
//!     * **ScalarValue (`value::ScalarValue`)**: Any scalar with string, number, boolean and date views.
//!     * **NumberValue (`value::NumberValue`)**: Integers and floats with narrowing and rounding.
//!     * **StringValue (`value::StringValue`)**: Text with trimming, case mapping and splitting.
//!     * **CollectionValue (`value::CollectionValue`)**: Groups projected into uniformly typed sequences.
//! * **Typed sequences (`collection`)**: Immutable ordered sequences of strings, numbers, integers and objects.
//!
//! ```
//! use tessella::{map::Map, raw::Group};
//!
//! let user = Map::from_group(Group::record([
//!     ("id", tessella::raw::RawValue::from(1)),
//!     ("name", "John".into()),
//!     ("email", "john@example.com".into()),
//! ]))?;
//!
//! let public = user.remove(&["email"]);
//! assert_eq!(public.len(), 2);
//! assert_eq!(user.len(), 3);
//! assert_eq!(public.get_value("name")?.string()?, "John");
//! # Ok::<(), tessella::Error>(())
//! ```

pub mod collection;
pub mod map;
pub mod raw;
pub mod value;

/// Re-export the `Map` struct for easier access.
pub use map::Map;
/// Re-export the dispatcher `Value` for easier access.
pub use value::Value;

/// Result type used throughout the Tessella library.
pub type Result<T> = std::result::Result<T, Error>;

/// Broad classification of every failure the library reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The input is not the expected grouping, scalar or number shape
    ShapeMismatch,
    /// A read of an absent key without a usable default
    KeyNotFound,
    /// A duplicate or already existing key
    KeyConflict,
    /// A missing argument or a broken callback contract
    ArgumentViolation,
    /// Parsing, narrowing or collection projection failed
    ConversionFailure,
}

/// Common error type for the Tessella library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured map errors from the map module
    #[error(transparent)]
    Map(map::MapError),

    /// Structured coercion errors from the value module
    #[error(transparent)]
    Value(value::ValueError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Map(_) => "map",
            Error::Value(_) => "value",
        }
    }

    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Map(map_err) => {
                if map_err.is_not_found() {
                    ErrorKind::KeyNotFound
                } else if map_err.is_conflict() {
                    ErrorKind::KeyConflict
                } else if map_err.is_shape_error() {
                    ErrorKind::ShapeMismatch
                } else {
                    ErrorKind::ArgumentViolation
                }
            }
            Error::Value(value_err) => {
                if value_err.is_type_error() {
                    ErrorKind::ShapeMismatch
                } else if value_err.is_argument_error() {
                    ErrorKind::ArgumentViolation
                } else {
                    ErrorKind::ConversionFailure
                }
            }
        }
    }

    /// Check if this error indicates a key was not found.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::KeyNotFound
    }

    /// Check if this error indicates a key conflict.
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::KeyConflict
    }

    /// Check if this error indicates a shape mismatch.
    pub fn is_shape_mismatch(&self) -> bool {
        self.kind() == ErrorKind::ShapeMismatch
    }

    /// Check if this error indicates an argument contract violation.
    pub fn is_argument_violation(&self) -> bool {
        self.kind() == ErrorKind::ArgumentViolation
    }

    /// Check if this error indicates a conversion failure.
    pub fn is_conversion_failure(&self) -> bool {
        self.kind() == ErrorKind::ConversionFailure
    }
}
