//! Building blocks for rolling trimmed statistics
//!
//! This crate provides the order-agnostic pieces a sliding trimmed window is
//! assembled from:
//!
//! - [`Observation`]: an extended real, i.e. a finite value or one of two
//!   sentinel extremes that sort below/above everything finite
//! - [`RingBuffer`]: a fixed-capacity FIFO over the most recent observations
//!   in arrival order
//! - [`SortedValues`]: the same multiset kept in ascending order, with
//!   rank-based queries
//!
//! All three are owned value types: `Clone` produces an independent deep
//! copy, which callers rely on to simulate mutations without touching the
//! live state.

pub mod buffer;
pub mod observation;
pub mod sorted;

pub use buffer::RingBuffer;
pub use observation::Observation;
pub use sorted::SortedValues;
