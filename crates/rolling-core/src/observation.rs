//! Extended-real observation type
//!
//! A rolling window ingests either finite measurements or sentinel readings
//! standing in for invalid observations. Sentinels sort below (respectively
//! above) every finite value, so with enough finite data they always end up
//! in a trim zone instead of contributing to the mean.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single observation: a finite value or one of two sentinel extremes.
///
/// The variant order carries the total order: `NegativeExtreme` sorts below
/// every finite value, `PositiveExtreme` above, and finite values compare
/// numerically in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Observation {
    /// Sorts below every finite value.
    NegativeExtreme,
    /// A finite measurement.
    Finite(OrderedFloat<f64>),
    /// Sorts above every finite value.
    PositiveExtreme,
}

impl Observation {
    /// Wrap a value known to be finite.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not finite; use `Observation::from` to map
    /// non-finite floats onto the sentinels instead.
    pub fn finite(value: f64) -> Self {
        assert!(value.is_finite(), "observation {value} is not finite");
        Observation::Finite(OrderedFloat(value))
    }

    /// Whether this is a finite measurement rather than a sentinel.
    pub fn is_finite(&self) -> bool {
        matches!(self, Observation::Finite(_))
    }

    /// The finite payload, if any.
    pub fn as_finite(&self) -> Option<f64> {
        match self {
            Observation::Finite(v) => Some(v.into_inner()),
            _ => None,
        }
    }

    /// Map back to `f64`, with the sentinels becoming `-inf` / `+inf`.
    pub fn as_f64(&self) -> f64 {
        match self {
            Observation::NegativeExtreme => f64::NEG_INFINITY,
            Observation::Finite(v) => v.into_inner(),
            Observation::PositiveExtreme => f64::INFINITY,
        }
    }
}

impl From<f64> for Observation {
    /// `-inf` maps to the negative extreme; `+inf` and NaN map to the
    /// positive extreme (a NaN reading is an invalid observation, and
    /// invalid observations count as high).
    fn from(value: f64) -> Self {
        if value == f64::NEG_INFINITY {
            Observation::NegativeExtreme
        } else if value.is_finite() {
            Observation::Finite(OrderedFloat(value))
        } else {
            Observation::PositiveExtreme
        }
    }
}

impl fmt::Display for Observation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Observation::NegativeExtreme => write!(f, "-extreme"),
            Observation::Finite(v) => write!(f, "{v}"),
            Observation::PositiveExtreme => write!(f, "+extreme"),
        }
    }
}
