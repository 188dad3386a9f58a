//! Incrementally maintained trimmed rolling means
//!
//! A [`TrimmedMean`] reports the mean of the last `size` observations after
//! discarding the `trim` smallest and `trim` largest, updating in O(log n)
//! rank arithmetic per push instead of re-sorting the window. Sentinel
//! extremes (invalid observations) always count as trimmed values; too many
//! of one polarity make the mean undefined (NaN).
//!
//! Two inverse queries run on clones of the window:
//! [`TrimmedMean::value_needed_for_average`] finds the push that hits a
//! target mean exactly, and
//! [`TrimmedMean::integral_value_for_average_below`] finds the largest
//! integer push that keeps the mean under a threshold.
//!
//! ```
//! use rolling_trimmed::TrimmedMean;
//!
//! let mut window = TrimmedMean::new(5, 1).unwrap();
//! for value in [10.0, 50.0, 20.0, 40.0, 30.0] {
//!     window.push(value);
//! }
//! assert_eq!(window.average(), 30.0);
//!
//! // What would the next push have to be for the mean to reach 35?
//! let needed = window.value_needed_for_average(35.0);
//! assert_eq!(needed, 35.0);
//! ```
//!
//! [`FilteredTrimmedMean`] is the variant that drops invalid observations
//! at the door instead of trimming them.

pub mod error;
pub mod filtered;
pub mod mean;
pub mod window;

mod solver;

pub use error::{Error, Result};
pub use filtered::FilteredTrimmedMean;
pub use mean::RunningMean;
pub use window::TrimmedMean;
