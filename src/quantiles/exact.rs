//! Exact order statistics over retained samples
//!
//! Samples are appended unsorted so ingestion stays O(1). The buffer sorts
//! itself the first time an order statistic is requested after a push, and
//! stays sorted until the next push.

use crate::math;
use crate::traits::StatsError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Index of the `p` percentile in a sorted slice of length `n`
///
/// Nearest rank with ties rounding up: `floor((n - 1) * p + 0.5)`. Callers
/// must ensure `n > 0` and `0 <= p <= 1`.
///
/// ```
/// use binstats::quantiles::nearest_rank_index;
///
/// assert_eq!(nearest_rank_index(5, 0.5), 2);
/// assert_eq!(nearest_rank_index(2, 0.5), 1);
/// assert_eq!(nearest_rank_index(1, 0.99), 0);
/// ```
#[inline]
pub fn nearest_rank_index(n: usize, p: f64) -> usize {
    debug_assert!(n > 0);
    let index = math::floor((n - 1) as f64 * p + 0.5) as usize;
    index.min(n - 1)
}

pub(crate) fn check_percentile(p: f64) -> Result<(), StatsError> {
    if p < 0.0 {
        return Err(StatsError::invalid_argument("percentile too small"));
    }
    if p > 1.0 {
        return Err(StatsError::invalid_argument("percentile too large"));
    }
    if p.is_nan() {
        return Err(StatsError::invalid_argument("percentile is NaN"));
    }
    Ok(())
}

/// Retained raw samples with a lazily maintained sort
///
/// # Example
///
/// ```
/// use binstats::quantiles::SampleBuffer;
///
/// let mut buffer = SampleBuffer::new();
/// for v in [25.0, 0.0, 100.0, 10.0, 1.0] {
///     buffer.push(v);
/// }
///
/// assert_eq!(buffer.percentile(0.5).unwrap(), 10.0);
/// assert_eq!(buffer.median(), 10.0);
/// assert!(buffer.is_sorted());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SampleBuffer {
    samples: Vec<f64>,
    /// True while `samples` is known to be ascending
    sorted: bool,
}

impl SampleBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
            sorted: true,
        }
    }

    /// Create an empty buffer with room for `capacity` samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
            sorted: true,
        }
    }

    /// Append a sample, invalidating the sorted state
    #[inline]
    pub fn push(&mut self, value: f64) {
        self.samples.push(value);
        self.sorted = false;
    }

    /// Number of retained samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Whether the samples are currently in ascending order
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// Sort ascending if anything was pushed since the last sort
    ///
    /// Stable, and NaN orders after every number.
    pub fn sort(&mut self) {
        if self.sorted {
            return;
        }
        tracing::trace!(samples = self.samples.len(), "sorting retained samples");
        self.samples.sort_by(f64::total_cmp);
        self.sorted = true;
    }

    /// Sample value at percentile `p` in `[0, 1]`, 0 when empty
    pub fn percentile(&mut self, p: f64) -> Result<f64, StatsError> {
        check_percentile(p)?;
        if self.samples.is_empty() {
            return Ok(0.0);
        }
        self.sort();
        Ok(self.samples[nearest_rank_index(self.samples.len(), p)])
    }

    /// Median, averaging the two middle samples for an even count, 0 when empty
    pub fn median(&mut self) -> f64 {
        let len = self.samples.len();
        if len == 0 {
            return 0.0;
        }
        self.sort();
        let half = len / 2;
        if len % 2 == 0 {
            (self.samples[half] + self.samples[half - 1]) / 2.0
        } else {
            self.samples[half]
        }
    }

    /// The retained samples, in ascending order only if [`is_sorted`](Self::is_sorted)
    pub fn as_slice(&self) -> &[f64] {
        &self.samples
    }

    /// Drop every retained sample and release the allocation
    ///
    /// Returns how many samples were dropped.
    pub fn take(&mut self) -> usize {
        let dropped = self.samples.len();
        self.samples = Vec::new();
        self.sorted = true;
        dropped
    }

    /// Heap bytes held by the buffer
    pub fn heap_bytes(&self) -> usize {
        self.samples.capacity() * core::mem::size_of::<f64>()
    }
}
