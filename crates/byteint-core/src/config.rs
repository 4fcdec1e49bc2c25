//! Size-limit configuration shared by every value created under it.

use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tracing::debug;

use crate::constants::{DEFAULT_MAX_SIZE, MAX_SIZE_CEILING};
use crate::error::{BigIntError, Result};

/// Shared `MAX_SIZE` setting: the ceiling on digit-array length.
///
/// Cloning a `Limits` yields a handle to the same setting, so a change made
/// through any clone applies to every value created from it. Each value
/// checks the ceiling again whenever an operation produces new digits;
/// lowering it never invalidates values that already exist.
#[derive(Clone)]
pub struct Limits {
    max_size: Arc<AtomicUsize>,
}

impl Limits {
    /// A fresh, independent configuration with the default ceiling of 500.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_size: Arc::new(AtomicUsize::new(DEFAULT_MAX_SIZE)),
        }
    }

    /// A fresh configuration with the given ceiling.
    pub fn with_max_size(max_size: usize) -> Result<Self> {
        Self::validate(max_size)?;
        Ok(Self {
            max_size: Arc::new(AtomicUsize::new(max_size)),
        })
    }

    /// Current ceiling.
    #[must_use]
    pub fn max_size(&self) -> usize {
        self.max_size.load(Ordering::Relaxed)
    }

    /// Change the ceiling for all holders of this configuration.
    pub fn set_max_size(&self, max_size: usize) -> Result<()> {
        Self::validate(max_size)?;
        let previous = self.max_size.swap(max_size, Ordering::Relaxed);
        debug!(previous, max_size, "max size changed");
        Ok(())
    }

    /// Fail with a size error when `len` digits exceed the ceiling.
    pub fn check_len(&self, len: usize) -> Result<()> {
        let max = self.max_size();
        if len > max {
            return Err(BigIntError::Size { len, max });
        }
        Ok(())
    }

    /// Whether two handles refer to the same setting.
    #[must_use]
    pub fn shares_with(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.max_size, &other.max_size)
    }

    fn validate(max_size: usize) -> Result<()> {
        if (1..=MAX_SIZE_CEILING).contains(&max_size) {
            Ok(())
        } else {
            Err(BigIntError::InvalidMaxSize(max_size))
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Limits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Limits")
            .field("max_size", &self.max_size())
            .finish()
    }
}
