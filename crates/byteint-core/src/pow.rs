//! Integer exponentiation.

use tracing::debug;

use crate::digits;
use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::karatsuba::mul_magnitudes;

impl BigInteger {
    /// `self ^ exponent`.
    ///
    /// A negative exponent only has an integer result for a base of `1` or
    /// `-1`.
    ///
    /// # Errors
    /// `Domain` for zero to a negative power or any other base with a
    /// negative exponent, `Size` when the result exceeds `MAX_SIZE`.
    pub fn checked_pow(&self, exponent: &Self) -> Result<Self> {
        if exponent.is_negative() && !exponent.is_zero() {
            return self.pow_negative(exponent.is_odd());
        }
        self.pow_magnitude(&exponent.digits)
    }

    /// `self ^ exponent` for a machine exponent.
    pub fn pow_u64(&self, exponent: u64) -> Result<Self> {
        let bytes = exponent.to_le_bytes();
        self.pow_magnitude(&bytes[..digits::trimmed_len(&bytes)])
    }

    fn pow_negative(&self, odd: bool) -> Result<Self> {
        if self.is_zero() {
            return Err(BigIntError::domain("zero raised to a negative power"));
        }
        if self.digits != [1] {
            return Err(BigIntError::domain(
                "negative exponent has no integer result",
            ));
        }
        Ok(if self.sign || !odd {
            Self::one(&self.limits)
        } else {
            Self::neg_one(&self.limits)
        })
    }

    /// Binary exponentiation over the exponent bits, least significant
    /// first. The base is squared only while exponent bits remain.
    fn pow_magnitude(&self, exponent: &[u8]) -> Result<Self> {
        let bits = digits::bit_len(exponent);
        if bits == 0 {
            return Ok(Self::one(&self.limits));
        }
        let sign = self.sign || !digits::bit(exponent, 0);
        if self.is_zero() || self.digits == [1] {
            return self.sibling(sign, self.digits.clone());
        }
        debug!(base_len = self.digits.len(), exponent_bits = bits, "pow");
        let mut acc = vec![1u8];
        let mut base = self.digits.clone();
        for index in 0..bits {
            if digits::bit(exponent, index) {
                acc = mul_magnitudes(&acc, &base, &self.limits)?;
            }
            if index + 1 < bits {
                base = mul_magnitudes(&base, &base, &self.limits)?;
            }
        }
        self.sibling(sign, acc)
    }
}
