//! Incremental summary statistics with an optional switch to binned counting
//!
//! [`SummaryStats`] always maintains count, sum, sum of squares, min and max,
//! so mean, standard deviation and spread are O(1) at any time. For order
//! statistics it runs in one of two modes:
//!
//! - **Exact**: every sample is retained. [`percentile`](SummaryStats::percentile)
//!   and [`median`](SummaryStats::median) are exact.
//! - **Binned**: samples are counted into fixed bins and then dropped.
//!   Memory is bounded; [`bin`](SummaryStats::bin) reports the distribution.
//!
//! The switch from exact to binned is one-way. A common pattern is to retain
//! a representative prefix of the stream, then call
//! [`create_bins_discard`](SummaryStats::create_bins_discard) to size the
//! bins from that prefix's percentiles.
//!
//! # Thread Safety
//!
//! `SummaryStats` is `Send` but **not `Sync`**: order-statistic queries sort
//! the retained samples in place through a `RefCell`. Wrap in
//! `Arc<Mutex<_>>` for shared access.

use crate::binning::{Bin, Histogram};
use crate::math;
use crate::quantiles::{check_percentile, SampleBuffer};
use crate::statistics::RunningMoments;
use crate::traits::{Sketch, StatsError};
use core::cell::RefCell;
use tracing::debug;

#[cfg(feature = "std")]
use std::vec::Vec;

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

// Helper macro for format! in both std and no_std
macro_rules! fmt {
    ($($arg:tt)*) => {{
        #[cfg(feature = "std")]
        { format!($($arg)*) }
        #[cfg(not(feature = "std"))]
        { alloc::format!($($arg)*) }
    }};
}

#[derive(Clone, Debug)]
enum Mode {
    /// Raw samples retained, sorted on demand
    Exact(RefCell<SampleBuffer>),
    /// Samples tallied into bins and dropped
    Binned(Histogram),
}

/// Streaming summary statistics
///
/// # Example
///
/// ```
/// use binstats::SummaryStats;
///
/// let mut stats = SummaryStats::new();
/// for v in [0.0, 1.0, 10.0, 25.0, 100.0] {
///     stats.add(v);
/// }
///
/// assert_eq!(stats.count(), 5);
/// assert_eq!(stats.mean(), 27.2);
/// assert_eq!(stats.percentile(0.75).unwrap(), 25.0);
/// assert_eq!(stats.median().unwrap(), 10.0);
///
/// // Switch to bounded memory: (-inf, 0], (0, 50], (50, 100], (100, +inf)
/// stats.create_bins(4, 0.0, 100.0).unwrap();
/// stats.add(42.0);
/// stats.add(1e6);
///
/// assert_eq!(stats.count(), 7);
/// assert_eq!(stats.bin(1).unwrap().count, 1);
/// assert_eq!(stats.bin(3).unwrap().count, 1);
/// assert!(stats.median().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct SummaryStats {
    moments: RunningMoments,
    mode: Mode,
}

impl Default for SummaryStats {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryStats {
    /// Create an empty accumulator in exact mode
    pub fn new() -> Self {
        Self {
            moments: RunningMoments::new(),
            mode: Mode::Exact(RefCell::new(SampleBuffer::new())),
        }
    }

    /// Create an empty accumulator with room for `capacity` retained samples
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            moments: RunningMoments::new(),
            mode: Mode::Exact(RefCell::new(SampleBuffer::with_capacity(capacity))),
        }
    }

    /// Add a sample
    ///
    /// In exact mode the sample is retained; in binned mode it is counted in
    /// the first bin whose upper bound is ≥ `value` and then dropped.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.moments.add(value);
        match &mut self.mode {
            Mode::Exact(buffer) => buffer.get_mut().push(value),
            Mode::Binned(histogram) => {
                histogram.record(value);
            }
        }
    }

    /// Number of samples ever added
    pub fn count(&self) -> u64 {
        self.moments.len()
    }

    /// Check if no samples were added
    pub fn is_empty(&self) -> bool {
        self.moments.is_empty()
    }

    /// Smallest sample, or 0 when empty
    pub fn min(&self) -> f64 {
        self.moments.min()
    }

    /// Largest sample, or 0 when empty
    pub fn max(&self) -> f64 {
        self.moments.max()
    }

    /// `max - min`, or 0 when empty
    pub fn spread(&self) -> f64 {
        self.moments.spread()
    }

    /// Sum of all samples
    pub fn sum(&self) -> f64 {
        self.moments.sum()
    }

    /// Mean of all samples
    ///
    /// NaN when empty; do not rely on a particular value in that case.
    pub fn mean(&self) -> f64 {
        self.moments.mean()
    }

    /// Population variance of all samples, NaN when empty
    pub fn variance(&self) -> f64 {
        self.moments.variance()
    }

    /// Population standard deviation of all samples, NaN when empty
    pub fn stddev(&self) -> f64 {
        self.moments.stddev()
    }

    /// The running aggregates
    pub fn moments(&self) -> &RunningMoments {
        &self.moments
    }

    /// Whether bins have been created
    pub fn is_binned(&self) -> bool {
        matches!(self.mode, Mode::Binned(_))
    }

    /// Number of raw samples currently held (always 0 once binned)
    pub fn retained(&self) -> usize {
        match &self.mode {
            Mode::Exact(buffer) => buffer.borrow().len(),
            Mode::Binned(_) => 0,
        }
    }

    fn exact(&self) -> Result<&RefCell<SampleBuffer>, StatsError> {
        match &self.mode {
            Mode::Exact(buffer) => Ok(buffer),
            Mode::Binned(_) => Err(StatsError::illegal_state(
                "order statistics are unavailable after bins are created",
            )),
        }
    }

    /// Sample value at percentile `p` in `[0, 1]`
    ///
    /// Nearest rank with ties rounding up: the sample at sorted index
    /// `floor((n - 1) * p + 0.5)`. Returns 0 if no samples are retained.
    ///
    /// # Errors
    ///
    /// - [`StatsError::IllegalState`] once bins have been created
    /// - [`StatsError::InvalidArgument`] if `p` is outside `[0, 1]`
    pub fn percentile(&self, p: f64) -> Result<f64, StatsError> {
        self.exact()?.borrow_mut().percentile(p)
    }

    /// Several percentiles at once, sorting at most once
    pub fn percentiles(&self, ps: &[f64]) -> Result<Vec<f64>, StatsError> {
        let buffer = self.exact()?;
        for &p in ps {
            check_percentile(p)?;
        }
        let mut buffer = buffer.borrow_mut();
        ps.iter().map(|&p| buffer.percentile(p)).collect()
    }

    /// Median of the retained samples, 0 if none
    ///
    /// The mean of the two middle samples for an even count.
    ///
    /// # Errors
    ///
    /// [`StatsError::IllegalState`] once bins have been created.
    pub fn median(&self) -> Result<f64, StatsError> {
        Ok(self.exact()?.borrow_mut().median())
    }

    /// Switch to binned mode with `nbins` bins laid out over `[low, high]`
    ///
    /// The bins are `(-∞, low]`, `nbins - 2` equal-width bins up to `high`,
    /// and `(high, +∞)`. Retained samples are dropped; they stay reflected in
    /// the aggregates but are not counted in any bin. Only samples added from
    /// now on are binned.
    ///
    /// # Errors
    ///
    /// - [`StatsError::InvalidArgument`] if `high <= low`, a bound or the
    ///   span `high - low` is not finite, or `nbins < 3`
    /// - [`StatsError::IllegalState`] if bins were already created
    pub fn create_bins(&mut self, nbins: usize, low: f64, high: f64) -> Result<(), StatsError> {
        if self.is_binned() {
            return Err(StatsError::illegal_state("bins already created"));
        }
        let histogram = Histogram::linear(nbins, low, high)?;

        let dropped = match &mut self.mode {
            Mode::Exact(buffer) => buffer.get_mut().take(),
            Mode::Binned(_) => 0,
        };
        self.mode = Mode::Binned(histogram);
        debug!(nbins, low, high, dropped, "switched to binned mode");
        Ok(())
    }

    /// [`create_bins`](Self::create_bins) with `low` and `high` taken from the
    /// retained samples at percentiles `discard_fraction` and
    /// `1 - discard_fraction`
    ///
    /// Trims the extreme `discard_fraction` of each tail out of the interior
    /// range. At least `ceil(1 / discard_fraction)` samples must be retained
    /// for the fraction to mean anything.
    ///
    /// # Errors
    ///
    /// - [`StatsError::IllegalState`] if bins were already created or too few
    ///   samples are retained
    /// - [`StatsError::InvalidArgument`] if `discard_fraction` is not in
    ///   `(0, 1)`, or the trimmed range is empty (`high <= low`)
    pub fn create_bins_discard(
        &mut self,
        nbins: usize,
        discard_fraction: f64,
    ) -> Result<(), StatsError> {
        let retained = self.exact()?.borrow().len();
        if !(discard_fraction > 0.0 && discard_fraction < 1.0) {
            return Err(StatsError::invalid_argument(fmt!(
                "discard fraction {} is not in (0, 1)",
                discard_fraction
            )));
        }
        let required = math::ceil(1.0 / discard_fraction) as usize;
        if retained < required {
            return Err(StatsError::illegal_state(fmt!(
                "not enough samples: {} retained, {} required",
                retained,
                required
            )));
        }

        let low = self.percentile(discard_fraction)?;
        let high = self.percentile(1.0 - discard_fraction)?;
        debug!(discard_fraction, low, high, "auto-ranged bins from retained samples");
        self.create_bins(nbins, low, high)
    }

    /// Count and `(low, high]` bounds of bin `index`
    ///
    /// # Errors
    ///
    /// [`StatsError::IndexOutOfRange`] if `index >= num_bins()`, which is
    /// every index before bins are created.
    pub fn bin(&self, index: usize) -> Result<Bin, StatsError> {
        match &self.mode {
            Mode::Binned(histogram) => histogram.bin(index),
            Mode::Exact(_) => Err(StatsError::IndexOutOfRange { index, len: 0 }),
        }
    }

    /// Number of bins, 0 in exact mode
    pub fn num_bins(&self) -> usize {
        self.histogram().map_or(0, Histogram::len)
    }

    /// Every bin in ascending order; empty in exact mode
    pub fn bins(&self) -> impl Iterator<Item = Bin> + '_ {
        self.histogram().into_iter().flat_map(|h| h.iter())
    }

    /// The histogram, once bins exist
    pub fn histogram(&self) -> Option<&Histogram> {
        match &self.mode {
            Mode::Binned(histogram) => Some(histogram),
            Mode::Exact(_) => None,
        }
    }

    /// Samples added since binning that matched no bin (NaN or +∞)
    pub fn unbinned(&self) -> u64 {
        self.histogram().map_or(0, Histogram::unbinned)
    }
}

impl Extend<f64> for SummaryStats {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for SummaryStats {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut stats = Self::new();
        stats.extend(iter);
        stats
    }
}

impl Sketch for SummaryStats {
    type Item = f64;

    fn update(&mut self, item: &Self::Item) {
        self.add(*item);
    }

    fn size_bytes(&self) -> usize {
        let heap = match &self.mode {
            Mode::Exact(buffer) => buffer.borrow().heap_bytes(),
            Mode::Binned(histogram) => histogram.heap_bytes(),
        };
        core::mem::size_of::<Self>() + heap
    }

    fn count(&self) -> u64 {
        self.moments.len()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for SummaryStats {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut state = serializer.serialize_struct("SummaryStats", 3)?;
        state.serialize_field("moments", &self.moments)?;
        match &self.mode {
            Mode::Exact(buffer) => {
                state.serialize_field("samples", buffer.borrow().as_slice())?;
                state.serialize_field("histogram", &None::<Histogram>)?;
            }
            Mode::Binned(histogram) => {
                state.serialize_field("samples", &[] as &[f64])?;
                state.serialize_field("histogram", &Some(histogram))?;
            }
        }
        state.end()
    }
}

// ============================================================================
// Tests
// ============================================================================
