//! Ascending multiset with rank queries

use crate::observation::Observation;

/// The window's observations kept in ascending order.
///
/// Backed by a plain vector: binary search to locate positions, O(n) insert
/// and remove. For windows in the low thousands this beats fancier
/// structures on constant factors; an order-statistic tree would bring
/// insert/remove down to O(log n) if larger windows were ever needed.
///
/// Equal values are interchangeable: `insert` and `remove` both work on the
/// leftmost position among ties, which is all the rank bookkeeping needs.
#[derive(Debug, Clone, Default)]
pub struct SortedValues {
    values: Vec<Observation>,
}

impl SortedValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Insert a value, returning the rank it landed at (leftmost among
    /// equal values).
    pub fn insert(&mut self, value: Observation) -> usize {
        let rank = self.values.partition_point(|v| *v < value);
        self.values.insert(rank, value);
        rank
    }

    /// Remove one occurrence of `value`, returning the rank it held.
    ///
    /// Returns `None` if the value is not present. Removal always targets a
    /// value known to be in the window, so `None` signals an invariant
    /// violation in the caller's bookkeeping.
    pub fn remove(&mut self, value: Observation) -> Option<usize> {
        let rank = self.values.partition_point(|v| *v < value);
        if self.values.get(rank) == Some(&value) {
            self.values.remove(rank);
            Some(rank)
        } else {
            None
        }
    }

    /// Value at `rank`, with rank 0 the smallest.
    ///
    /// # Panics
    ///
    /// Panics if `rank` is outside `[0, len)`.
    pub fn get(&self, rank: usize) -> Observation {
        self.values[rank]
    }

    /// The current contents in ascending order.
    pub fn as_slice(&self) -> &[Observation] {
        &self.values
    }
}
