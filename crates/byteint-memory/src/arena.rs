//! Bump arena for conversion temporaries.
//!
//! Uses bumpalo for O(1) allocation of the work arrays that radix
//! conversion walks over (source digits while parsing, target digits while
//! formatting). Everything is released at once when the arena is dropped or
//! reset.

use bumpalo::Bump;

/// Arena for digit work arrays.
pub struct DigitArena {
    bump: Bump,
}

impl DigitArena {
    /// Create a new arena with default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self { bump: Bump::new() }
    }

    /// Create a new arena with the given initial capacity in bytes.
    #[must_use]
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            bump: Bump::with_capacity(bytes),
        }
    }

    /// Allocate a zero-filled slice of digits of any plain integer width.
    pub fn alloc_digits<T: Copy + Default>(&self, len: usize) -> &mut [T] {
        self.bump.alloc_slice_fill_default(len)
    }

    /// Allocate a copy of `src`.
    pub fn alloc_copy<T: Copy>(&self, src: &[T]) -> &mut [T] {
        self.bump.alloc_slice_copy(src)
    }

    /// Reset the arena, deallocating all slices at once.
    pub fn reset(&mut self) {
        self.bump.reset();
    }

    /// Get the number of bytes currently allocated.
    #[must_use]
    pub fn allocated_bytes(&self) -> usize {
        self.bump.allocated_bytes()
    }
}

impl Default for DigitArena {
    fn default() -> Self {
        Self::new()
    }
}
