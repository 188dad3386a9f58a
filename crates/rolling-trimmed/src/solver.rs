//! Inverse queries over a trimmed window
//!
//! Both queries answer "what would the next push have to be" questions. They
//! work on clones of the live window (pushes are simulated destructively on
//! the copy), so the caller's state is never touched. Infeasibility is
//! reported through NaN and "always achievable" through positive infinity,
//! matching the undefined-result convention of [`TrimmedMean::average`].

use crate::window::TrimmedMean;
use rolling_core::Observation;
use tracing::{debug, instrument};

/// Doublings tried while bracketing before the threshold is declared
/// unreachable, i.e. candidates up to about 2^50.
const MAX_DOUBLINGS: u32 = 50;

impl TrimmedMean {
    /// The window as it will be immediately before the next push: the
    /// oldest observation is already evicted when the window is full.
    fn shifted(&self) -> TrimmedMean {
        let mut copy = self.clone();
        if copy.is_full() {
            copy.evict_oldest();
        }
        copy
    }

    /// Sum of the finite values currently at middle ranks, recomputed from
    /// the order statistic. The incremental accumulator is only seeded once
    /// the window fills up, so a shifted (size - 1 element) state cannot use
    /// it; recomputing also covers the not-yet-full warm-up case.
    fn middle_sum(&self) -> f64 {
        let high = (self.size() - self.trim()).min(self.len());
        let mut sum = 0.0;
        for rank in self.trim()..high {
            if let Some(v) = self.sorted_value(rank).as_finite() {
                sum += v;
            }
        }
        sum
    }

    /// The value that, pushed next, would make [`average`](Self::average)
    /// equal `target`.
    ///
    /// Returns NaN when the window holds fewer than `size - 1`
    /// observations, when sentinels already make the next average
    /// undefined, or when no single push can hit the target given the other
    /// window members.
    #[instrument(level = "debug", skip(self))]
    pub fn value_needed_for_average(&self, target: f64) -> f64 {
        if self.len() + 1 < self.size() {
            return f64::NAN;
        }
        let shifted = self.shifted();
        if shifted.pos_extreme_count() > self.trim() || shifted.neg_extreme_count() > self.trim() {
            return f64::NAN;
        }

        let capacity = self.middle_capacity() as f64;
        let sum = shifted.middle_sum();

        if self.trim() == 0 {
            // Every member of the shifted window stays in the middle, so the
            // answer is whatever tops the sum up to the target.
            let value = target * capacity - sum;
            return if value.is_finite() { value } else { f64::NAN };
        }

        let highest_middle = shifted.sorted_value(self.size() - self.trim() - 1);
        let lower_bound = shifted.sorted_value(self.trim() - 1);

        if let Some(top) = highest_middle.as_finite() {
            // Pushing a value equal to the current top of the middle zone
            // re-enters it unchanged, so an exact hit stays an exact hit.
            if sum / capacity == target {
                return top;
            }
        }

        // A push landing in the middle zone displaces the current top of
        // the middle out into the high tail; solve for the value that makes
        // the remaining sum hit the target.
        let displaced = highest_middle.as_finite().unwrap_or(0.0);
        let value = target * capacity - (sum - displaced);
        if !value.is_finite() {
            return f64::NAN;
        }
        let candidate = Observation::from(value);
        if candidate < lower_bound || candidate > highest_middle {
            debug!(value, "no single push can reach the requested average");
            return f64::NAN;
        }
        value
    }

    /// The greatest integer that, pushed next, keeps
    /// [`average`](Self::average) strictly below `target`.
    ///
    /// Returns NaN when the window holds fewer than `size - 1` observations
    /// or when even pushing 0 fails (undefined or not below the target),
    /// and positive infinity when every candidate keeps the average below
    /// the target.
    #[instrument(level = "debug", skip(self))]
    pub fn integral_value_for_average_below(&self, target: f64) -> f64 {
        if self.len() + 1 < self.size() {
            return f64::NAN;
        }

        let average_after = |value: f64| -> f64 {
            let mut copy = self.clone();
            copy.push(value);
            copy.average()
        };

        let minimum = average_after(0.0);
        if !(minimum < target) {
            return f64::NAN;
        }

        // Bracket: double until some candidate pushes the average up to the
        // target. Candidates are powers of two, exact in f64 well past 2^50.
        let mut low = 0.0f64;
        let mut high = 1.0f64;
        let mut bracketed = false;
        for _ in 0..MAX_DOUBLINGS {
            let average = average_after(high);
            if !(average < target) {
                bracketed = true;
                break;
            }
            low = high;
            high *= 2.0;
        }
        if !bracketed {
            return f64::INFINITY;
        }
        debug!(low, high, "bracketed the threshold, bisecting");

        // low stays strictly below the target, high does not.
        while low + 1.0 < high {
            let mid = ((low + high) / 2.0).round();
            if average_after(mid) < target {
                low = mid;
            } else {
                high = mid;
            }
        }
        low
    }
}
