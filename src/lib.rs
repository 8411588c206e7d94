//! # Binstats
//!
//! Incremental summary statistics over a stream of `f64` samples.
//!
//! Count, min, max, spread, mean and standard deviation are maintained in
//! O(1) per sample. Median and percentiles are exact while samples are
//! retained; when memory matters the accumulator can switch, once and for
//! good, to a fixed set of counting bins that approximate the distribution.
//!
//! ## Quick Start
//!
//! ```rust
//! use binstats::prelude::*;
//!
//! let mut stats = SummaryStats::new();
//! for latency_ms in [12.0, 15.0, 11.0, 240.0, 13.0] {
//!     stats.add(latency_ms);
//! }
//!
//! assert_eq!(stats.median().unwrap(), 13.0);
//! assert_eq!(stats.percentile(1.0).unwrap(), 240.0);
//! println!("mean {} stddev {}", stats.mean(), stats.stddev());
//! ```
//!
//! ## Bounded Memory
//!
//! Retain a representative prefix, then let its percentiles pick the bin
//! range. Everything after that is counted, not stored:
//!
//! ```rust
//! use binstats::SummaryStats;
//!
//! let mut stats = SummaryStats::new();
//! for i in 0..1_000 {
//!     stats.add((i % 100) as f64);
//! }
//!
//! // ignore the outer 1% on each side when choosing the range
//! stats.create_bins_discard(12, 0.01).unwrap();
//!
//! for i in 0..1_000_000 {
//!     stats.add((i % 100) as f64);
//! }
//!
//! assert_eq!(stats.count(), 1_001_000);
//! assert_eq!(stats.retained(), 0);
//! for bin in stats.bins() {
//!     println!("({}, {}]: {}", bin.low, bin.high, bin.count);
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Standard library support
//! - `libm`: Float math for `no_std` builds
//! - `serde`: Enable serialization

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("binstats needs either the `std` or the `libm` feature");

#[cfg(not(feature = "std"))]
extern crate alloc;

// Core traits always available
pub mod traits;

pub mod binning;
pub mod quantiles;
pub mod statistics;

mod math;
mod stats;

pub mod prelude {
    pub use crate::traits::*;

    pub use crate::binning::{Bin, Histogram};
    pub use crate::stats::SummaryStats;
}

pub use binning::{Bin, Histogram};
pub use stats::SummaryStats;
pub use traits::{ErrorKind, StatsError};
