//! Fixed-threshold counting histogram
//!
//! Thresholds are upper bounds, inclusive: bin `i` covers
//! `(thresholds[i - 1], thresholds[i]]`. Bin 0 is open below and the last
//! threshold is `f64::MAX`, so the last bin catches everything above the
//! interior range.

use crate::traits::StatsError;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::{vec, vec::Vec};

/// Smallest number of bins a linear layout accepts: one below `low`, at
/// least one interior bin, one above `high`
pub const MIN_BINS: usize = 3;

/// One bin of a [`Histogram`]
///
/// The interval is `(low, high]`. The first bin's `low` is `-f64::MAX` and the
/// last bin's `high` is `f64::MAX`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bin {
    /// Samples recorded into this bin
    pub count: u64,
    /// Exclusive lower edge
    pub low: f64,
    /// Inclusive upper edge
    pub high: f64,
}

impl Bin {
    /// Whether `value` falls in `(low, high]`
    pub fn contains(&self, value: f64) -> bool {
        value > self.low && value <= self.high
    }

    /// Width of the interval
    pub fn width(&self) -> f64 {
        self.high - self.low
    }
}

/// Counts per bin over a fixed ascending set of thresholds
///
/// # Example
///
/// ```
/// use binstats::binning::Histogram;
///
/// let mut hist = Histogram::linear(5, 1.0, 4.0).unwrap();
/// assert_eq!(hist.thresholds(), &[1.0, 2.0, 3.0, 4.0, f64::MAX]);
///
/// for v in [0.5, 1.0, 1.5, 2.0, 3.9, 4.0, 1000.0] {
///     hist.record(v);
/// }
///
/// assert_eq!(hist.counts(), &[2, 2, 0, 2, 1]);
/// assert_eq!(hist.total(), 7);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Histogram {
    /// Upper bounds, ascending, last is `f64::MAX`
    thresholds: Vec<f64>,
    /// Parallel to `thresholds`
    counts: Vec<u64>,
    /// Values no threshold is ≥ to (NaN, +∞)
    unbinned: u64,
}

impl Histogram {
    /// Build `nbins` bins: one for `(-∞, low]`, `nbins - 2` equal-width bins
    /// spanning `(low, high]`, and a catch-all above `high`
    ///
    /// Threshold `i` for `i < nbins - 1` is `i * (high - low) / (nbins - 2) + low`,
    /// so `low` sits at index 0 and `high` at index `nbins - 2`.
    ///
    /// # Errors
    ///
    /// [`StatsError::InvalidArgument`] if `high <= low`, either bound or
    /// `high - low` is not finite, or `nbins < 3`.
    pub fn linear(nbins: usize, low: f64, high: f64) -> Result<Self, StatsError> {
        if !(high > low) {
            return Err(StatsError::invalid_argument(
                "high must be greater than low",
            ));
        }
        if !low.is_finite() || !high.is_finite() {
            return Err(StatsError::invalid_argument("bin bounds must be finite"));
        }
        // finite bounds can still overflow the span, e.g. -1e308..1e308
        if !(high - low).is_finite() {
            return Err(StatsError::invalid_argument(
                "bin range high - low overflows",
            ));
        }
        if nbins < MIN_BINS {
            return Err(StatsError::invalid_argument("not enough bins"));
        }

        let spread = high - low;
        let interior = (nbins - 2) as f64;
        let mut thresholds: Vec<f64> = (0..nbins - 1)
            .map(|i| {
                let scaled = i as f64 * spread;
                // i * spread can overflow even when spread fits; step instead
                let offset = if scaled.is_finite() {
                    scaled / interior
                } else {
                    i as f64 * (spread / interior)
                };
                offset + low
            })
            .collect();
        thresholds.push(f64::MAX);

        Ok(Self {
            thresholds,
            counts: vec![0; nbins],
            unbinned: 0,
        })
    }

    /// Index of the first bin whose threshold is ≥ `value`
    ///
    /// `None` for values above `f64::MAX` or NaN.
    #[inline]
    pub fn find(&self, value: f64) -> Option<usize> {
        // Thresholds ascend, so the predicate is true for a prefix only.
        // Written as !(t >= v) so NaN lands past the end.
        let index = self.thresholds.partition_point(|&t| !(t >= value));
        if index < self.thresholds.len() {
            Some(index)
        } else {
            None
        }
    }

    /// Count `value` in its bin, returning the bin index
    #[inline]
    pub fn record(&mut self, value: f64) -> Option<usize> {
        match self.find(value) {
            Some(index) => {
                self.counts[index] += 1;
                Some(index)
            }
            None => {
                self.unbinned += 1;
                None
            }
        }
    }

    /// Number of bins
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Always false: a histogram has at least [`MIN_BINS`] bins
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Count and bounds of bin `index`
    ///
    /// # Errors
    ///
    /// [`StatsError::IndexOutOfRange`] if `index >= len()`.
    pub fn bin(&self, index: usize) -> Result<Bin, StatsError> {
        let high = *self
            .thresholds
            .get(index)
            .ok_or(StatsError::IndexOutOfRange {
                index,
                len: self.thresholds.len(),
            })?;
        let low = if index == 0 {
            -f64::MAX
        } else {
            self.thresholds[index - 1]
        };
        Ok(Bin {
            count: self.counts[index],
            low,
            high,
        })
    }

    /// All bins in ascending order
    pub fn iter(&self) -> impl Iterator<Item = Bin> + '_ {
        let lows = core::iter::once(-f64::MAX).chain(self.thresholds.iter().copied());
        lows.zip(self.thresholds.iter().zip(self.counts.iter()))
            .map(|(low, (&high, &count))| Bin { count, low, high })
    }

    /// Upper bounds of every bin
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Count of every bin
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Sum of all bin counts
    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    /// Values recorded that fell in no bin
    pub fn unbinned(&self) -> u64 {
        self.unbinned
    }

    /// Heap bytes held by the histogram
    pub fn heap_bytes(&self) -> usize {
        self.thresholds.capacity() * core::mem::size_of::<f64>()
            + self.counts.capacity() * core::mem::size_of::<u64>()
    }
}
