//! Fixed-capacity FIFO over the most recent observations

use crate::observation::Observation;
use std::collections::VecDeque;

/// Arrival-order buffer with O(1) push and evict.
///
/// The capacity is fixed at construction. Overflow, underflow and
/// out-of-range access indicate a bug in the owning window's bookkeeping and
/// panic rather than returning an error.
#[derive(Debug, Clone)]
pub struct RingBuffer {
    values: VecDeque<Observation>,
    capacity: usize,
}

impl RingBuffer {
    pub fn new(capacity: usize) -> Self {
        Self {
            values: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.values.len() == self.capacity
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append the newest observation.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is already at capacity; callers evict first.
    pub fn push(&mut self, value: Observation) {
        assert!(
            self.values.len() < self.capacity,
            "ring buffer overflow at capacity {}",
            self.capacity
        );
        self.values.push_back(value);
    }

    /// Remove and return the oldest observation.
    ///
    /// # Panics
    ///
    /// Panics if the buffer is empty.
    pub fn pop_oldest(&mut self) -> Observation {
        self.values.pop_front().expect("ring buffer underflow")
    }

    /// Arrival-order access, oldest at index 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside `[0, len)`.
    pub fn get(&self, idx: usize) -> Observation {
        self.values[idx]
    }

    /// Iterate in arrival order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.values.iter()
    }
}
