//! # byteint-core
//!
//! Arbitrary-precision signed integers stored as little-endian base-256
//! digits, with conversion to and from any radix in `1..=2^32` (plus the
//! Braille pseudo-base), Karatsuba multiplication and division under five
//! quotient and five remainder rounding modes.
//!
//! Every value is bound to a [`Limits`] handle that caps its digit count.
//! Operations that would exceed the cap fail with [`BigIntError::Size`]
//! instead of allocating.

mod arith;
pub mod base;
mod bits;
mod cmp;
pub mod config;
pub mod constants;
pub(crate) mod digits;
mod division;
pub mod error;
mod format;
pub mod integer;
mod karatsuba;
mod parse;
mod pow;
mod range;
pub mod rounding;

// Re-exports
pub use base::{Base, IntoBase};
pub use config::Limits;
pub use constants::{DEFAULT_MAX_SIZE, MAX_RADIX, MAX_SIZE_CEILING};
pub use error::{BigIntError, Result};
pub use integer::BigInteger;
pub use rounding::{DivRounding, ModRounding, ShiftRounding};

/// Convert `text` from one base to another under default limits.
///
/// # Example
/// ```
/// assert_eq!(byteint_core::convert("1201", 7, 2).unwrap(), "110111010");
/// assert_eq!(byteint_core::convert("FF", 16, 10).unwrap(), "255");
/// ```
pub fn convert(text: &str, from: impl IntoBase, to: impl IntoBase) -> Result<String> {
    BigInteger::parse(text, from, &Limits::default())?.to_string_radix(to)
}
