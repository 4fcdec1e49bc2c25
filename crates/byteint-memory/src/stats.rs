//! Pool usage counters.

use std::cell::Cell;

/// Snapshot of pool usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Number of buffers handed out from the pool.
    pub hits: u64,
    /// Number of buffers freshly allocated.
    pub misses: u64,
    /// Number of buffers dropped on release (too large or class full).
    pub evictions: u64,
}

/// Counters owned by a single-threaded pool.
#[derive(Debug, Default)]
pub(crate) struct PoolCounters {
    hits: Cell<u64>,
    misses: Cell<u64>,
    evictions: Cell<u64>,
}

impl PoolCounters {
    pub(crate) fn snapshot(&self) -> PoolStats {
        PoolStats {
            hits: self.hits.get(),
            misses: self.misses.get(),
            evictions: self.evictions.get(),
        }
    }

    pub(crate) fn reset(&self) {
        self.hits.set(0);
        self.misses.set(0);
        self.evictions.set(0);
    }

    pub(crate) fn record_hit(&self) {
        self.hits.set(self.hits.get() + 1);
    }

    pub(crate) fn record_miss(&self) {
        self.misses.set(self.misses.get() + 1);
    }

    pub(crate) fn record_eviction(&self) {
        self.evictions.set(self.evictions.get() + 1);
    }
}
