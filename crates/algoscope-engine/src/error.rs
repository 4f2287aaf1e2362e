//! Error types for algoscope operations.

use thiserror::Error;

/// Result type for algoscope operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while preparing or running a visualized operation.
///
/// Every variant is raised before the working collection is touched, so a
/// rejected operation never leaves a partial mutation behind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A search that needs sorted input was given an unsorted collection.
    #[error("collection is not sorted: element {index} is smaller than its predecessor")]
    NotSorted { index: usize },

    /// An insert/remove/access position lies outside the collection.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Linear probing visited every slot without finding room.
    #[error("hash table is full (capacity {capacity})")]
    TableFull { capacity: usize },

    /// A table or structure was asked to use an unusable capacity.
    #[error("invalid capacity: {0}")]
    InvalidCapacity(usize),

    /// A shrink would leave fewer slots than stored entries.
    #[error("capacity {capacity} cannot hold {entries} entries")]
    CapacityTooSmall { entries: usize, capacity: usize },

    /// Removal from an empty structure.
    #[error("{structure} is empty")]
    Underflow { structure: &'static str },

    /// Insertion into a bounded structure that is at capacity.
    #[error("{structure} is full (capacity {capacity})")]
    Overflow {
        structure: &'static str,
        capacity: usize,
    },

    /// The run was cancelled before it completed.
    #[error("run was cancelled")]
    Cancelled,

    /// Input could not be used.
    #[error("invalid input: {0}")]
    InvalidInput(String),
}
