//! Error types for map operations.
//!
//! Map operations fail fast: invalid input shapes, reads of absent keys, key
//! collisions and missing arguments are reported immediately and never
//! recovered internally.

use thiserror::Error;

/// Structured error types for [`Map`](super::Map) operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum MapError {
    /// The construction input is not a grouping, a map or absent
    #[error("Invalid input type \"{actual}\" (allowed: group, map, null)")]
    InvalidInput { actual: String },

    /// The construction input contains a non-string key
    #[error("Only string keys are allowed, found key {key}")]
    NonStringKey { key: String },

    /// A read of an absent key without a usable default
    #[error("Key \"{key}\" does not exist")]
    KeyNotFound { key: String },

    /// One or more requested keys are absent
    #[error("Keys not found: {}", keys.join(", "))]
    KeysNotFound { keys: Vec<String> },

    /// A rename target already exists
    #[error("Key \"{key}\" already exists")]
    KeyExists { key: String },

    /// A key transform produced the same key twice
    #[error("Duplicated key \"{key}\"")]
    DuplicateKey { key: String },

    /// An operation that needs at least one key was called with none
    #[error("{operation} requires at least one key")]
    MissingKeys { operation: &'static str },
}

impl MapError {
    /// Check if this error reports absent keys
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            MapError::KeyNotFound { .. } | MapError::KeysNotFound { .. }
        )
    }

    /// Check if this error reports a key collision
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            MapError::KeyExists { .. } | MapError::DuplicateKey { .. }
        )
    }

    /// Check if this error reports an invalid input shape
    pub fn is_shape_error(&self) -> bool {
        matches!(
            self,
            MapError::InvalidInput { .. } | MapError::NonStringKey { .. }
        )
    }

    /// Get the offending key for single-key errors
    pub fn key(&self) -> Option<&str> {
        match self {
            MapError::NonStringKey { key }
            | MapError::KeyNotFound { key }
            | MapError::KeyExists { key }
            | MapError::DuplicateKey { key } => Some(key),
            _ => None,
        }
    }

    /// Get all missing keys for not-found errors
    pub fn missing_keys(&self) -> Vec<&str> {
        match self {
            MapError::KeyNotFound { key } => vec![key.as_str()],
            MapError::KeysNotFound { keys } => keys.iter().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<MapError> for crate::Error {
    fn from(err: MapError) -> Self {
        crate::Error::Map(err)
    }
}
