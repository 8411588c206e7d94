//! Aggregate statistics for streaming data
//!
//! O(1) running aggregates that are valid in every accumulator mode.
//!
//! # Example
//!
//! ```
//! use binstats::statistics::RunningMoments;
//!
//! let mut moments = RunningMoments::new();
//!
//! for value in [1.0, 2.0, 3.0, 4.0, 5.0] {
//!     moments.add(value);
//! }
//!
//! println!("Mean: {}", moments.mean());
//! println!("Stddev: {}", moments.stddev());
//! println!("Min: {}", moments.min());
//! println!("Max: {}", moments.max());
//! ```

mod moments;

pub use moments::RunningMoments;
