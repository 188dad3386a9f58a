//! Incrementally maintained trimmed rolling mean
//!
//! The window keeps three views of the same multiset in sync: arrival order
//! (for eviction), ascending order (for classification into low-trim, middle
//! and high-trim zones) and a running sum of the middle zone. Each push
//! touches the sum through at most a handful of rank lookups instead of
//! recomputing the trimmed mean from scratch.

use crate::error::{Error, Result};
use crate::mean::RunningMean;
use rolling_core::{Observation, RingBuffer, SortedValues};

/// Rolling mean over the last `size` observations with the `trim` smallest
/// and `trim` largest discarded.
///
/// Sentinel extremes always count as trimmed values; once more than `trim`
/// of one polarity are in the window the mean is undefined and reported as
/// NaN. The mean is also NaN until `size` observations have arrived.
///
/// `Clone` is a deep copy with no shared state, which the inverse-query
/// solvers rely on to simulate pushes destructively.
///
/// ```
/// use rolling_trimmed::TrimmedMean;
///
/// let mut window = TrimmedMean::new(5, 1).unwrap();
/// for value in [10.0, 50.0, 20.0, 40.0, 30.0] {
///     window.push(value);
/// }
/// // sorted [10, 20, 30, 40, 50], one trimmed from each tail
/// assert_eq!(window.average(), 30.0);
/// ```
#[derive(Debug, Clone)]
pub struct TrimmedMean {
    size: usize,
    trim: usize,
    pos_extreme_count: usize,
    neg_extreme_count: usize,
    middle: RunningMean,
    chronological: RingBuffer,
    sorted: SortedValues,
}

impl TrimmedMean {
    /// Create a window over `size` observations trimming `trim` from each
    /// tail. Fails unless `2 * trim < size`.
    pub fn new(size: usize, trim: usize) -> Result<Self> {
        Error::check_trim(size, trim)?;
        Ok(Self {
            size,
            trim,
            pos_extreme_count: 0,
            neg_extreme_count: 0,
            middle: RunningMean::new(size - trim * 2),
            chronological: RingBuffer::new(size),
            sorted: SortedValues::with_capacity(size),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn trim(&self) -> usize {
        self.trim
    }

    /// Number of observations contributing to the mean, `size - 2 * trim`.
    pub fn middle_capacity(&self) -> usize {
        self.size - self.trim * 2
    }

    /// Observations currently held, at most `size`.
    pub fn len(&self) -> usize {
        self.sorted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sorted.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.sorted.len() == self.size
    }

    /// The current trimmed mean.
    ///
    /// NaN while the window is still warming up, and whenever more than
    /// `trim` sentinels of one polarity are in the window.
    pub fn average(&self) -> f64 {
        if self.pos_extreme_count.max(self.neg_extreme_count) > self.trim || !self.is_full() {
            f64::NAN
        } else {
            self.middle.mean()
        }
    }

    /// Push the next observation, evicting the oldest one once the window
    /// is full.
    pub fn push(&mut self, value: impl Into<Observation>) {
        let value = value.into();
        let was_full = self.is_full();
        if was_full {
            self.evict_oldest();
        }

        self.chronological.push(value);
        match value {
            Observation::PositiveExtreme => self.pos_extreme_count += 1,
            Observation::NegativeExtreme => self.neg_extreme_count += 1,
            Observation::Finite(_) => {}
        }
        let idx = self.sorted.insert(value);

        if !self.is_full() {
            return;
        }
        if !was_full {
            // The window just filled up for the first time: seed the sum
            // from the middle ranks in one O(size) pass.
            for rank in self.trim..self.size - self.trim {
                self.middle.add(self.sorted.get(rank));
            }
            return;
        }

        let low = self.trim;
        let high = self.size - self.trim;
        if idx >= low && idx < high {
            // Landed inside the middle zone.
            self.middle.add(value);
        }
        if idx < low {
            // Landed in the low tail: the old top of the low tail was
            // displaced up into the middle zone.
            self.middle.add(self.sorted.get(low));
        }
        if idx < high && self.trim > 0 {
            // Anything inserted below the high boundary pushes the old top
            // of the middle zone out into the high tail.
            self.middle.remove(self.sorted.get(high));
        }
    }

    /// Remove the oldest observation and reclassify across the shifted trim
    /// boundaries. Only called on a full window.
    pub(crate) fn evict_oldest(&mut self) {
        let oldest = self.chronological.pop_oldest();
        match oldest {
            Observation::PositiveExtreme => self.pos_extreme_count -= 1,
            Observation::NegativeExtreme => self.neg_extreme_count -= 1,
            Observation::Finite(_) => {}
        }

        let removed_rank = self
            .sorted
            .remove(oldest)
            .expect("evicted observation missing from the order statistic");

        let low = self.trim;
        let high = self.size - self.trim;
        if removed_rank >= low && removed_rank < high {
            self.middle.remove(oldest);
        }
        if removed_rank < low {
            // A low-tail value left, so the old bottom of the middle zone
            // slid down to rank trim - 1 and is now trimmed.
            let rank = low - 1;
            if self.sorted.len() > rank {
                self.middle.remove(self.sorted.get(rank));
            }
        }
        if removed_rank < high && self.trim > 0 {
            // The old bottom of the high tail slid down into the middle.
            let rank = high - 1;
            if self.sorted.len() > rank {
                self.middle.add(self.sorted.get(rank));
            }
        }
    }

    /// Population standard deviation of the middle-zone values against the
    /// current mean, or NaN whenever [`average`](Self::average) is NaN.
    pub fn standard_deviation(&self) -> f64 {
        let mean = self.average();
        if mean.is_nan() {
            return f64::NAN;
        }
        // A defined mean confines all sentinels to the trim zones, so every
        // middle rank is finite here.
        let mut sum_sq = 0.0;
        for rank in self.trim..self.size - self.trim {
            let diff = self.sorted.get(rank).as_f64() - mean;
            sum_sq += diff * diff;
        }
        (sum_sq / self.middle_capacity() as f64).sqrt()
    }

    pub(crate) fn sorted_value(&self, rank: usize) -> Observation {
        self.sorted.get(rank)
    }

    pub(crate) fn pos_extreme_count(&self) -> usize {
        self.pos_extreme_count
    }

    pub(crate) fn neg_extreme_count(&self) -> usize {
        self.neg_extreme_count
    }
}
