//! Bounded-memory binned counting
//!
//! Once the range of interest is known, samples can be tallied into a fixed
//! set of bins instead of being retained. Memory stays constant no matter how
//! many samples arrive, at the cost of resolution within each bin.
//!
//! # Example
//!
//! ```
//! use binstats::binning::Histogram;
//!
//! // (-inf, 0], (0, 25], (25, 50], (50, 75], (75, 100], (100, +inf)
//! let mut hist = Histogram::linear(6, 0.0, 100.0).unwrap();
//!
//! for value in [-5.0, 10.0, 30.0, 99.0, 250.0] {
//!     hist.record(value);
//! }
//!
//! for bin in hist.iter() {
//!     println!("({}, {}]: {}", bin.low, bin.high, bin.count);
//! }
//! ```

mod histogram;

pub use histogram::{Bin, Histogram, MIN_BINS};
