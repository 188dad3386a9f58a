//! Rolling trimmed statistics toolkit
//!
//! Facade over the workspace crates: the [`rolling_core`] building blocks
//! (extended-real observations, arrival-order buffer, order statistic) and
//! the [`rolling_trimmed`] window with its inverse-query solvers.
//!
//! ```
//! use rolling_stats::TrimmedMean;
//!
//! let mut window = TrimmedMean::new(3, 0).unwrap();
//! for value in [1.0, 2.0, 3.0, 4.0] {
//!     window.push(value);
//! }
//! assert_eq!(window.average(), 3.0);
//! ```

pub use rolling_core::{Observation, RingBuffer, SortedValues};
pub use rolling_trimmed::{Error, FilteredTrimmedMean, Result, RunningMean, TrimmedMean};
