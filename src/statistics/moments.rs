//! Running moments (count, sum, sum of squares, min, max)
//!
//! The O(1) aggregate half of an accumulator. Every sample ever added is
//! reflected here regardless of how order statistics are being tracked.

use crate::math;

/// Running count, Σx, Σx², min and max over a stream
///
/// Mean and standard deviation are derived from the raw sums, so both are
/// O(1) to query. The standard deviation is the *population* form (divide
/// by `n`).
///
/// # Example
///
/// ```
/// use binstats::statistics::RunningMoments;
///
/// let mut moments = RunningMoments::new();
///
/// for value in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     moments.add(value);
/// }
///
/// assert_eq!(moments.mean(), 5.0);
/// assert_eq!(moments.stddev(), 2.0);
/// assert_eq!(moments.min(), 2.0);
/// assert_eq!(moments.max(), 9.0);
/// assert_eq!(moments.spread(), 7.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RunningMoments {
    /// Number of values seen
    count: u64,
    /// Σx
    sum: f64,
    /// Σx²
    sum2: f64,
    /// Minimum value, +∞ while empty
    min: f64,
    /// Maximum value, −∞ while empty
    max: f64,
}

impl Default for RunningMoments {
    fn default() -> Self {
        Self::new()
    }
}

impl RunningMoments {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum2: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
        }
    }

    /// Add a value
    ///
    /// NaN is counted and poisons the sums, but never becomes the min or max.
    #[inline]
    pub fn add(&mut self, value: f64) {
        self.count += 1;
        self.sum += value;
        self.sum2 += value * value;
        if value > self.max {
            self.max = value;
        }
        if value < self.min {
            self.min = value;
        }
    }

    /// Get the number of values
    pub fn len(&self) -> u64 {
        self.count
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Σx
    pub fn sum(&self) -> f64 {
        self.sum
    }

    /// Σx²
    pub fn sum_of_squares(&self) -> f64 {
        self.sum2
    }

    // min > max only holds while nothing has been recorded
    fn is_unset(&self) -> bool {
        self.min > self.max
    }

    /// Smallest value seen, or 0 when empty
    pub fn min(&self) -> f64 {
        if self.is_unset() {
            0.0
        } else {
            self.min
        }
    }

    /// Largest value seen, or 0 when empty
    pub fn max(&self) -> f64 {
        if self.is_unset() {
            0.0
        } else {
            self.max
        }
    }

    /// `max - min`, or 0 when empty
    pub fn spread(&self) -> f64 {
        if self.is_unset() {
            0.0
        } else {
            self.max - self.min
        }
    }

    /// Arithmetic mean, NaN when empty
    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }

    /// Population variance `Σx²/n − mean²`, NaN when empty
    ///
    /// Unlike the bare formula, a negative rounding residue (a constant
    /// stream of non-representable values) is clamped to 0, so
    /// [`stddev`](Self::stddev) reports 0 there instead of `sqrt` of a
    /// negative number, which is NaN.
    pub fn variance(&self) -> f64 {
        let mean = self.mean();
        let variance = self.sum2 / self.count as f64 - mean * mean;
        if variance < 0.0 {
            0.0
        } else {
            variance
        }
    }

    /// Population standard deviation, NaN when empty
    pub fn stddev(&self) -> f64 {
        math::sqrt(self.variance())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut moments = RunningMoments::new();

        for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
            moments.add(v);
        }

        assert_eq!(moments.len(), 8);
        assert_eq!(moments.sum(), 40.0);
        assert_eq!(moments.sum_of_squares(), 232.0);
        assert!((moments.mean() - 5.0).abs() < 1e-12);
        assert!((moments.variance() - 4.0).abs() < 1e-12);
        assert!((moments.stddev() - 2.0).abs() < 1e-12);
        assert_eq!(moments.min(), 2.0);
        assert_eq!(moments.max(), 9.0);
        assert_eq!(moments.spread(), 7.0);
    }

    #[test]
    fn test_single_value() {
        let mut moments = RunningMoments::new();
        moments.add(42.0);

        assert_eq!(moments.len(), 1);
        assert_eq!(moments.mean(), 42.0);
        assert_eq!(moments.stddev(), 0.0);
        assert_eq!(moments.min(), 42.0);
        assert_eq!(moments.max(), 42.0);
        assert_eq!(moments.spread(), 0.0);
    }

    #[test]
    fn test_empty() {
        let moments = RunningMoments::new();

        assert!(moments.is_empty());
        assert_eq!(moments.min(), 0.0);
        assert_eq!(moments.max(), 0.0);
        assert_eq!(moments.spread(), 0.0);
        assert!(moments.mean().is_nan());
        assert!(moments.stddev().is_nan());
    }

    #[test]
    fn test_negative_values() {
        let mut moments = RunningMoments::new();
        for v in [-10.0, -9.0, -8.0, -7.0] {
            moments.add(v);
        }

        assert_eq!(moments.min(), -10.0);
        assert_eq!(moments.max(), -7.0);
        assert_eq!(moments.spread(), 3.0);
        assert_eq!(moments.mean(), -8.5);
    }

    #[test]
    fn test_constant_stream_stddev_is_zero() {
        let mut moments = RunningMoments::new();
        // Σx²/n − mean² comes out slightly negative for ten 0.7s
        for _ in 0..10 {
            moments.add(0.7);
        }

        assert_eq!(moments.variance(), 0.0);
        assert_eq!(moments.stddev(), 0.0);
    }

    #[test]
    fn test_nan_counted_not_extreme() {
        let mut moments = RunningMoments::new();

        moments.add(f64::NAN);
        assert_eq!(moments.len(), 1);
        // NaN never replaces the sentinels, so min/max still read as empty
        assert_eq!(moments.min(), 0.0);
        assert_eq!(moments.max(), 0.0);

        moments.add(3.0);
        assert_eq!(moments.len(), 2);
        assert_eq!(moments.min(), 3.0);
        assert_eq!(moments.max(), 3.0);
        assert!(moments.mean().is_nan());
    }

    #[test]
    fn test_infinity() {
        let mut moments = RunningMoments::new();

        moments.add(1.0);
        moments.add(f64::INFINITY);
        moments.add(2.0);

        assert_eq!(moments.len(), 3);
        assert_eq!(moments.max(), f64::INFINITY);
        assert_eq!(moments.min(), 1.0);
    }
}
