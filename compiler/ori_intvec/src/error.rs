//! Error types for integer list operations.

use thiserror::Error;

/// Result of a fallible `IntVec` operation.
pub type IntVecResult<T> = Result<T, IntVecError>;

/// Failure of an `IntVec` operation.
///
/// Each variant carries the data needed to report the failure without
/// access to the list itself.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum IntVecError {
    /// An index, after negative wraparound, fell outside `0..length`.
    ///
    /// `requested` is the index as the caller passed it; `resolved` is the
    /// index after wraparound (`length + requested` for negative input).
    /// The message reports `resolved`.
    #[error("IndexError: The array has {length} elements, but you required the {resolved} index")]
    IndexOutOfBounds {
        length: usize,
        requested: i64,
        resolved: i64,
    },

    /// Reserving backing storage for `requested` elements failed.
    #[error("allocation failure: could not reserve storage for {requested} elements")]
    AllocationFailure { requested: usize },

    /// An in-place increment overflowed `i64`.
    #[error("integer overflow incrementing index {index} by {delta}")]
    IntegerOverflow { index: usize, delta: i64 },
}
