//! Thread-local digit buffer pool.
//!
//! Provides `tl_acquire` and `tl_release` free functions so hot loops can
//! recycle scratch buffers without threading a pool through every call.

use crate::pool::DigitPool;
use crate::stats::PoolStats;

thread_local! {
    static DIGIT_POOL: DigitPool = DigitPool::default();
}

/// Acquire a zero-filled buffer of `len` bytes from this thread's pool.
#[inline]
pub fn tl_acquire(len: usize) -> Vec<u8> {
    DIGIT_POOL.with(|pool| pool.acquire(len))
}

/// Return a buffer to this thread's pool.
///
/// Buffers that exceed the pool limits are dropped.
#[inline]
pub fn tl_release(buf: Vec<u8>) {
    DIGIT_POOL.with(|pool| pool.release(buf));
}

/// Usage statistics of this thread's pool.
#[must_use]
pub fn tl_stats() -> PoolStats {
    DIGIT_POOL.with(DigitPool::stats)
}

/// Drop every buffer held by this thread's pool.
pub fn tl_clear() {
    DIGIT_POOL.with(DigitPool::clear);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tl_acquire_creates_new_when_empty() {
        tl_clear();
        let before = tl_stats();
        let buf = tl_acquire(10);
        assert_eq!(buf.len(), 10);
        assert_eq!(tl_stats().misses, before.misses + 1);
    }

    #[test]
    fn tl_roundtrip_reuses() {
        tl_clear();
        let mut buf = tl_acquire(100);
        buf[0] = 7;
        tl_release(buf);

        let before = tl_stats();
        let again = tl_acquire(100);
        assert_eq!(again[0], 0);
        assert_eq!(tl_stats().hits, before.hits + 1);
    }

    #[test]
    fn pools_are_per_thread() {
        tl_clear();
        tl_release(tl_acquire(64));
        let other = std::thread::spawn(|| {
            let _ = tl_acquire(64);
            tl_stats().hits
        })
        .join()
        .unwrap();
        assert_eq!(other, 0);
    }
}
