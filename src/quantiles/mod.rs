//! Exact percentile and median computation
//!
//! Order statistics here are exact: every sample is retained and the answer
//! is always one of the samples (or the mean of the two middle samples for
//! an even-length median). Percentiles use nearest rank with ties rounding
//! up, not interpolation.
//!
//! # Example
//!
//! ```
//! use binstats::quantiles::SampleBuffer;
//!
//! let mut buffer = SampleBuffer::new();
//!
//! for value in [1.0, 2.0] {
//!     buffer.push(value);
//! }
//!
//! assert_eq!(buffer.percentile(0.5).unwrap(), 2.0);
//! assert_eq!(buffer.median(), 1.5);
//! ```

mod exact;

pub(crate) use exact::check_percentile;
pub use exact::{nearest_rank_index, SampleBuffer};
