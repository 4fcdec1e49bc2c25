//! Constants for size limits, conversion and multiplication tuning.

/// Default ceiling on the digit count of any value.
pub const DEFAULT_MAX_SIZE: usize = 500;

/// Largest accepted ceiling (64 MiB of digits).
pub const MAX_SIZE_CEILING: usize = 67_108_864;

/// Largest accepted radix (2^32).
pub const MAX_RADIX: u64 = 4_294_967_296;

/// Digit count of the infinity sentinel 2^1024.
pub const INFINITY_DIGITS: usize = 129;

/// Largest integer exactly representable as an IEEE-754 double (2^53 - 1).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Operand length (in digits, a power of two) at or below which Karatsuba
/// falls back to digit-by-digit products.
pub const KARATSUBA_CUTOFF: usize = 32;

/// First code point of the Unicode Braille Patterns block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Separator between digit values for radices above 36.
pub const LIST_SEPARATOR: char = ',';
