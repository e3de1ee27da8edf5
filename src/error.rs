//! Errors surfaced by heap operations.

use thiserror::Error;

/// Error returned by fallible heap operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HeapError {
    /// An operation that needs at least one element was called on an empty heap.
    #[error("cannot {operation} on an empty heap")]
    EmptyContainer {
        /// The operation that was attempted, e.g. `"peek"`.
        operation: &'static str,
    },

    /// The heap was structurally modified while an unordered traversal was
    /// in progress.
    #[error("heap modified during traversal (version {expected} became {found})")]
    ConcurrentModification {
        /// Version captured when the traversal started.
        expected: u64,
        /// Version observed at the failing step.
        found: u64,
    },
}

/// Shorthand for results carrying a [`HeapError`].
pub type Result<T> = std::result::Result<T, HeapError>;
