//! # byteint-memory
//!
//! Scratch memory for the `byteint` workspace.
//!
//! Provides a bump arena for radix-conversion work arrays, a size-classed
//! pool of digit buffers, and thread-local access to that pool for the
//! Karatsuba task stack.
#![warn(missing_docs)]

pub mod arena;
pub mod pool;
pub mod stats;
pub mod thread_local;

pub use arena::DigitArena;
pub use pool::DigitPool;
pub use stats::PoolStats;
