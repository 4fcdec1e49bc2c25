//! Digit buffer pool with size classes for scratch reuse.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::stats::{PoolCounters, PoolStats};

/// Pool of `Vec<u8>` digit buffers, organized by size class (power of 2).
///
/// The pool is single-threaded; share it through [`crate::thread_local`].
pub struct DigitPool {
    classes: RefCell<HashMap<usize, Vec<Vec<u8>>>>,
    max_len: usize,
    max_per_class: usize,
    counters: PoolCounters,
}

impl DigitPool {
    /// Create a new pool keeping buffers up to `max_len` bytes, at most
    /// `max_per_class` per size class.
    #[must_use]
    pub fn new(max_len: usize, max_per_class: usize) -> Self {
        Self {
            classes: RefCell::new(HashMap::new()),
            max_len,
            max_per_class,
            counters: PoolCounters::default(),
        }
    }

    /// Get a zero-filled buffer of exactly `len` bytes.
    pub fn acquire(&self, len: usize) -> Vec<u8> {
        let class = Self::size_class(len);
        let reused = self
            .classes
            .borrow_mut()
            .get_mut(&class)
            .and_then(Vec::pop);
        match reused {
            Some(mut buf) => {
                self.counters.record_hit();
                buf.clear();
                buf.resize(len, 0);
                buf
            }
            None => {
                self.counters.record_miss();
                let mut buf = Vec::with_capacity(class);
                buf.resize(len, 0);
                buf
            }
        }
    }

    /// Return a buffer to the pool.
    pub fn release(&self, buf: Vec<u8>) {
        let capacity = buf.capacity();
        if capacity == 0 || capacity > self.max_len {
            self.counters.record_eviction();
            return;
        }
        // A buffer serves every class its capacity covers; file it under
        // the largest one.
        let class = Self::floor_class(capacity);
        let mut classes = self.classes.borrow_mut();
        let bucket = classes.entry(class).or_default();
        if bucket.len() < self.max_per_class {
            bucket.push(buf);
        } else {
            self.counters.record_eviction();
        }
    }

    /// Round a length up to its size class.
    fn size_class(len: usize) -> usize {
        len.max(16).next_power_of_two()
    }

    /// Round a capacity down to a size class.
    fn floor_class(capacity: usize) -> usize {
        if capacity < 16 {
            return 0;
        }
        1 << (usize::BITS - 1 - capacity.leading_zeros())
    }

    /// Get total number of pooled buffers.
    #[must_use]
    pub fn total_pooled(&self) -> usize {
        self.classes.borrow().values().map(Vec::len).sum()
    }

    /// Get a snapshot of pool statistics.
    #[must_use]
    pub fn stats(&self) -> PoolStats {
        self.counters.snapshot()
    }

    /// Reset pool statistics counters.
    pub fn reset_stats(&self) {
        self.counters.reset();
    }

    /// Drop all pooled buffers.
    pub fn clear(&self) {
        self.classes.borrow_mut().clear();
    }
}

impl Default for DigitPool {
    fn default() -> Self {
        Self::new(1 << 26, 32)
    }
}
