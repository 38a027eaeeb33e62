//! List error types.

use core::error::Error;
use core::fmt;

/// Errors reported by list and cursor operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListError {
    /// The allocator has not been set up to serve requests.
    NotReady,
    /// The operation needs a list (or a non-empty one) and did not get it.
    BadArgument,
    /// A position outside the bounds the operation permits.
    OutOfRange {
        /// The position requested.
        index: usize,
        /// Length of the list at the time of the call.
        len: usize,
    },
    /// The allocator returned no storage.
    AllocFailure,
}

impl fmt::Display for ListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotReady => write!(f, "allocator hooks are not registered"),
            Self::BadArgument => write!(f, "missing or empty list"),
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::AllocFailure => write!(f, "allocator returned no storage"),
        }
    }
}

impl Error for ListError {}
