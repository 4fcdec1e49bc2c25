//! Long division with rounding-mode aware quotient and remainder.

use std::cmp::Ordering;

use tracing::trace;

use crate::digits;
use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::rounding::{DivRounding, ModRounding, RoundingRule};

impl BigInteger {
    /// Quotient rounded per `rounding`.
    ///
    /// # Errors
    /// `Domain` when `divisor` is zero.
    pub fn checked_div(&self, divisor: &Self, rounding: DivRounding) -> Result<Self> {
        self.divide(divisor, rounding).map(|(q, _)| q)
    }

    /// Remainder under the `rounding` convention.
    ///
    /// # Errors
    /// `Domain` when `divisor` is zero.
    pub fn checked_rem(&self, divisor: &Self, rounding: ModRounding) -> Result<Self> {
        self.divide(divisor, rounding).map(|(_, r)| r)
    }

    /// Quotient and matching remainder, so that
    /// `self == q * divisor + r` for every mode.
    ///
    /// # Errors
    /// `Domain` when `divisor` is zero.
    pub fn div_rem(&self, divisor: &Self, rounding: DivRounding) -> Result<(Self, Self)> {
        self.divide(divisor, rounding)
    }

    /// `self /= divisor`, leaving `self` unchanged on failure.
    pub fn div_assign_checked(&mut self, divisor: &Self, rounding: DivRounding) -> Result<()> {
        let quotient = self.checked_div(divisor, rounding)?;
        self.commit(quotient);
        Ok(())
    }

    /// `self %= divisor`, leaving `self` unchanged on failure.
    pub fn rem_assign_checked(&mut self, divisor: &Self, rounding: ModRounding) -> Result<()> {
        let remainder = self.checked_rem(divisor, rounding)?;
        self.commit(remainder);
        Ok(())
    }

    fn divide(&self, divisor: &Self, mode: impl RoundingRule) -> Result<(Self, Self)> {
        if divisor.is_zero() {
            return Err(BigIntError::domain("division by zero"));
        }
        let (mut quotient, remainder) = divmod_magnitudes(&self.digits, &divisor.digits);
        let quotient_sign = self.sign == divisor.sign;
        if digits::is_zero(&remainder) {
            let remainder_sign = mode.zero_remainder_sign(self.sign, divisor.sign);
            return Ok((
                self.sibling(quotient_sign, quotient)?,
                self.sibling(remainder_sign, remainder)?,
            ));
        }
        let bump = mode.bumps(self.sign, divisor.sign, || {
            digits::cmp(&digits::shl_small(&remainder, 1), &divisor.digits) != Ordering::Less
        });
        let (remainder_sign, remainder) = if bump {
            let carry = digits::add_scalar(&mut quotient, 1);
            if carry != 0 {
                quotient.push(carry);
            }
            (!self.sign, digits::sub(&divisor.digits, &remainder))
        } else {
            (self.sign, remainder)
        };
        Ok((
            self.sibling(quotient_sign, quotient)?,
            self.sibling(remainder_sign, remainder)?,
        ))
    }
}

/// Magnitude quotient and remainder of trimmed `n / d`, `d` non-zero.
pub(crate) fn divmod_magnitudes(n: &[u8], d: &[u8]) -> (Vec<u8>, Vec<u8>) {
    if d == [1] {
        return (n.to_vec(), vec![0]);
    }
    if let Some(k) = digits::pow256_exponent(d) {
        trace!(k, "dividing by a power of 256");
        let split = k.min(n.len());
        let mut quotient = if split < n.len() {
            n[split..].to_vec()
        } else {
            vec![0]
        };
        let mut remainder = n[..split].to_vec();
        digits::trim(&mut quotient);
        digits::trim(&mut remainder);
        return (quotient, remainder);
    }
    if digits::cmp(n, d) == Ordering::Less {
        return (vec![0], n.to_vec());
    }
    long_division(n, d)
}

/// Bit-serial restoring division: shift the next dividend bit into the
/// remainder and subtract the divisor whenever it fits.
#[allow(clippy::cast_possible_truncation)]
fn long_division(n: &[u8], d: &[u8]) -> (Vec<u8>, Vec<u8>) {
    let mut quotient = vec![0u8; n.len()];
    let mut remainder = Vec::with_capacity(d.len() + 1);
    remainder.push(0);
    for index in (0..digits::bit_len(n)).rev() {
        shl1_in_place(&mut remainder, digits::bit(n, index));
        if digits::cmp(&remainder, d) != Ordering::Less {
            digits::sub_at(&mut remainder, d, 0);
            digits::trim(&mut remainder);
            quotient[(index / 8) as usize] |= 1 << (index % 8);
        }
    }
    digits::trim(&mut quotient);
    (quotient, remainder)
}

fn shl1_in_place(r: &mut Vec<u8>, bit: bool) {
    let mut carry = u8::from(bit);
    for d in r.iter_mut() {
        let next = *d >> 7;
        *d = (*d << 1) | carry;
        carry = next;
    }
    if carry != 0 {
        r.push(carry);
    }
}
