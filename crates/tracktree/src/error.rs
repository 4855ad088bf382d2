//! Error types for tracked element operations

use thiserror::Error;

use crate::element::TrackerType;

/// Main error type for tracked element operations
#[derive(Error, Debug)]
pub enum TrackerError {
    /// The element's tag does not match the requested kind
    #[error("element type mismatch, is {got} tried to use as {expected}")]
    TypeMismatch {
        /// The element's actual type
        got: TrackerType,
        /// What the caller tried to use it as
        expected: String,
    },

    /// Positional access past the end of a vector
    #[error("index {index} out of range for vector of length {len}")]
    OutOfRange {
        /// Requested position
        index: usize,
        /// Vector length at the time of the call
        len: usize,
    },

    /// Keyed insert used the child's own field id, but it has none
    #[error("element has no field id to key the map entry on")]
    MissingFieldId,

    /// The element is borrowed by a live view and cannot be changed
    #[error("element is in use by an active view")]
    Borrowed,

    /// A formatter cannot render this kind of element
    #[error("can't render element of type {tag}")]
    Unrenderable {
        /// The offending element type
        tag: TrackerType,
    },

    /// Rendering nested deeper than the formatter allows
    #[error("render depth exceeded limit of {limit}")]
    DepthExceeded {
        /// The configured limit
        limit: usize,
    },

    /// A field name was registered twice with different types
    #[error("field '{name}' already registered as {existing}, requested {requested}")]
    FieldConflict {
        /// Field name
        name: String,
        /// Type already on record
        existing: TrackerType,
        /// Type asked for
        requested: TrackerType,
    },

    /// A numeric type code that is not in the type table
    #[error("unknown tracker type code {0}")]
    UnknownTypeCode(u8),

    /// A JSON object would carry the same key twice
    #[error("duplicate key '{key}' in rendered map")]
    DuplicateKey {
        /// The key text written twice
        key: String,
    },

    /// Encoding a value as JSON failed
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Writing rendered output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TrackerError {
    /// Build a type mismatch for an element of type `got` used as `expected`.
    pub fn mismatch(got: TrackerType, expected: impl Into<String>) -> Self {
        TrackerError::TypeMismatch {
            got,
            expected: expected.into(),
        }
    }
}

/// Result type alias for tracked element operations
pub type Result<T> = std::result::Result<T, TrackerError>;
