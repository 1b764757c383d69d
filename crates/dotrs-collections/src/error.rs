//! Error types for collection adapters

use dotrs_core::ObjectError;

/// Result type for collection operations
pub type CollectionResult<T> = Result<T, CollectionError>;

/// Collection operation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// Index outside `0..count`
    #[error("Index {index} is out of range for a collection of {count} element(s)")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of elements at the time of the call
        count: usize,
    },

    /// Lookup of a key that is not present
    #[error("The given key '{0}' was not present in the dictionary")]
    KeyNotFound(String),

    /// Insert of a key that is already present
    #[error("An element with the same key '{0}' already exists in the dictionary")]
    DuplicateKey(String),

    /// Read from an empty collection
    #[error("Collection is empty")]
    Empty,

    /// Untyped element could not be converted to the element type
    #[error(transparent)]
    Object(#[from] ObjectError),
}
