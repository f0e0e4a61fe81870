//! Sequence-specific error types.

use std::error::Error;
use std::fmt;

/// Errors reported by the checked `try_*` operations of a
/// [`Sequence`](crate::Sequence).
///
/// The panicking operations treat the same conditions as contract violations
/// and abort the current thread with the `Display` text of these variants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index outside the live range `[0, len)`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of live elements at the time of the call.
        len: usize,
    },
    /// Growing to make room for more elements overflowed `usize`.
    CapacityOverflow {
        /// Elements already held when growth was attempted.
        len: usize,
        /// Elements the growth had to make room for.
        additional: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {len} but the index is {index}")
            }
            Self::CapacityOverflow { len, additional } => {
                write!(
                    f,
                    "capacity overflow: cannot make room for {additional} more elements after {len}"
                )
            }
        }
    }
}

impl Error for SequenceError {}
