//! Core traits and the error type shared by every accumulator
//!
//! All accumulators implement the base [`Sketch`] trait. Contract violations
//! (bad arguments, queries in the wrong mode, out-of-range bin indices) are
//! reported through [`StatsError`].

use core::fmt::Debug;

#[cfg(feature = "std")]
use std::string::String;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::string::String;

/// Category of a [`StatsError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// An argument was outside the range the operation accepts
    InvalidArgument,
    /// The operation is not valid in the accumulator's current mode
    IllegalState,
    /// A bin index was past the end of the histogram
    IndexOutOfRange,
}

/// Error returned when an accumulator operation's contract is violated
///
/// Every failure is deterministic: the same call sequence always produces
/// the same error, so there is nothing to retry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatsError {
    /// Percentile outside `[0, 1]`, `high <= low`, too few bins, ...
    InvalidArgument {
        reason: String,
    },
    /// Order statistics after binning, or too few samples to auto-range bins
    IllegalState {
        reason: String,
    },
    /// Bin index outside `[0, len)`
    IndexOutOfRange {
        index: usize,
        len: usize,
    },
}

impl StatsError {
    pub(crate) fn invalid_argument(reason: impl Into<String>) -> Self {
        StatsError::InvalidArgument {
            reason: reason.into(),
        }
    }

    pub(crate) fn illegal_state(reason: impl Into<String>) -> Self {
        StatsError::IllegalState {
            reason: reason.into(),
        }
    }

    /// The category of this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            StatsError::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            StatsError::IllegalState { .. } => ErrorKind::IllegalState,
            StatsError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }
}

impl core::fmt::Display for StatsError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            StatsError::InvalidArgument { reason } => write!(f, "invalid argument: {}", reason),
            StatsError::IllegalState { reason } => write!(f, "illegal state: {}", reason),
            StatsError::IndexOutOfRange { index, len } => {
                write!(f, "bin index {} out of range for {} bins", index, len)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for StatsError {}

/// Core trait for all streaming accumulators
pub trait Sketch: Clone + Debug {
    /// The type of item this sketch processes
    type Item: ?Sized;

    /// Add an item to the sketch
    fn update(&mut self, item: &Self::Item);

    /// Memory usage in bytes
    fn size_bytes(&self) -> usize;

    /// Number of items processed
    fn count(&self) -> u64;

    /// Check if sketch is empty
    fn is_empty(&self) -> bool {
        self.count() == 0
    }
}
