//! Digit shifts, bit shifts and bitwise operations on magnitudes.
//!
//! Shifts move the magnitude only; the sign is kept. Bitwise operations
//! work digit by digit over the longer operand and keep the receiver's sign.

use crate::digits;
use crate::error::Result;
use crate::integer::BigInteger;
use crate::rounding::ShiftRounding;

impl BigInteger {
    /// Multiply by `256^k` (prepend `k` zero digits).
    ///
    /// # Errors
    /// `Size` when the result exceeds `MAX_SIZE`.
    pub fn mul_pow256(&self, k: usize) -> Result<Self> {
        if self.is_zero() || k == 0 {
            return Ok(self.clone());
        }
        self.limits.check_len(self.digits.len().saturating_add(k))?;
        let mut out = vec![0u8; k];
        out.extend_from_slice(&self.digits);
        self.sibling(self.sign, out)
    }

    /// Divide by `256^k`, rounding the dropped digits as `rounding` says.
    pub fn div_pow256(&self, k: usize, rounding: ShiftRounding) -> Result<Self> {
        self.shr((k as u64).saturating_mul(8), rounding)
    }

    /// Shift the magnitude left by `bits`.
    ///
    /// # Errors
    /// `Size` when the result exceeds `MAX_SIZE`.
    #[allow(clippy::cast_possible_truncation)]
    pub fn shl(&self, bits: u64) -> Result<Self> {
        if self.is_zero() || bits == 0 {
            return Ok(self.clone());
        }
        let needed = (self.bit_len().saturating_add(bits)).div_ceil(8);
        self.limits
            .check_len(usize::try_from(needed).unwrap_or(usize::MAX))?;
        let whole = (bits / 8) as usize;
        let mut out = vec![0u8; whole];
        out.extend(digits::shl_small(&self.digits, (bits % 8) as u32));
        self.sibling(self.sign, out)
    }

    /// Shift the magnitude right by `bits`, rounding the dropped bits.
    #[allow(clippy::cast_possible_truncation)]
    pub fn shr(&self, bits: u64, rounding: ShiftRounding) -> Result<Self> {
        if bits == 0 {
            return Ok(self.clone());
        }
        let bump = match rounding {
            ShiftRounding::Floor => false,
            ShiftRounding::Round => digits::bit(&self.digits, bits - 1),
            ShiftRounding::Ceil => self.any_bit_below(bits),
        };
        let whole = usize::try_from(bits / 8).unwrap_or(usize::MAX);
        let mut out = if whole >= self.digits.len() {
            vec![0]
        } else {
            let mut kept = self.digits[whole..].to_vec();
            digits::shr_small(&mut kept, (bits % 8) as u32);
            kept
        };
        if bump {
            let carry = digits::add_scalar(&mut out, 1);
            if carry != 0 {
                out.push(carry);
            }
        }
        self.sibling(self.sign, out)
    }

    fn any_bit_below(&self, bits: u64) -> bool {
        let whole = usize::try_from(bits / 8).unwrap_or(usize::MAX);
        if whole >= self.digits.len() {
            return !self.is_zero();
        }
        let partial = bits % 8;
        !digits::is_zero(&self.digits[..whole])
            || self.digits[whole] & ((1u8 << partial) - 1) != 0
    }

    /// Digit-wise AND.
    pub fn bit_and(&self, other: &Self) -> Result<Self> {
        self.zip_digits(other, |a, b| a & b)
    }

    /// Digit-wise OR.
    pub fn bit_or(&self, other: &Self) -> Result<Self> {
        self.zip_digits(other, |a, b| a | b)
    }

    /// Digit-wise XOR.
    pub fn bit_xor(&self, other: &Self) -> Result<Self> {
        self.zip_digits(other, |a, b| a ^ b)
    }

    /// Invert every stored digit. `!0` is `0xFF`.
    #[must_use]
    pub fn bit_not(&self) -> Self {
        let out = self.digits.iter().map(|&d| !d).collect();
        Self::from_parts_trusted(self.sign, out, &self.limits)
    }

    fn zip_digits(&self, other: &Self, op: impl Fn(u8, u8) -> u8) -> Result<Self> {
        let len = self.digits.len().max(other.digits.len());
        let out = (0..len)
            .map(|i| {
                op(
                    self.digits.get(i).copied().unwrap_or(0),
                    other.digits.get(i).copied().unwrap_or(0),
                )
            })
            .collect();
        self.sibling(self.sign, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;
    use crate::error::BigIntError;

    fn int(v: i128) -> BigInteger {
        BigInteger::from_i128(v, &Limits::new()).unwrap()
    }

    fn val(n: &BigInteger) -> i128 {
        n.to_i128().unwrap()
    }

    #[test]
    fn whole_digit_shifts() {
        assert_eq!(int(3).mul_pow256(2).unwrap().digits(), &[0, 0, 3]);
        assert_eq!(val(&int(-3).mul_pow256(1).unwrap()), -768);
        assert!(int(0).mul_pow256(1000).unwrap().is_zero());
        assert_eq!(val(&int(0x1234).div_pow256(1, ShiftRounding::Floor).unwrap()), 0x12);
    }

    #[test]
    fn digit_shift_rounding() {
        let n = int(0x0180);
        assert_eq!(val(&n.div_pow256(1, ShiftRounding::Round).unwrap()), 2);
        assert_eq!(val(&int(0x017F).div_pow256(1, ShiftRounding::Round).unwrap()), 1);
        assert_eq!(val(&int(0x0101).div_pow256(1, ShiftRounding::Ceil).unwrap()), 2);
        assert_eq!(val(&int(0x0100).div_pow256(1, ShiftRounding::Ceil).unwrap()), 1);
        assert_eq!(val(&int(5).div_pow256(3, ShiftRounding::Ceil).unwrap()), 1);
        assert_eq!(val(&int(5).div_pow256(3, ShiftRounding::Round).unwrap()), 0);
    }

    #[test]
    fn bit_shifts() {
        assert_eq!(val(&int(1).shl(9).unwrap()), 512);
        assert_eq!(val(&int(-5).shl(3).unwrap()), -40);
        assert_eq!(val(&int(512).shr(9, ShiftRounding::Floor).unwrap()), 1);
        assert_eq!(val(&int(7).shr(1, ShiftRounding::Floor).unwrap()), 3);
        assert_eq!(val(&int(7).shr(1, ShiftRounding::Round).unwrap()), 4);
        assert_eq!(val(&int(5).shr(2, ShiftRounding::Round).unwrap()), 1);
        assert_eq!(val(&int(5).shr(2, ShiftRounding::Ceil).unwrap()), 2);
        assert_eq!(val(&int(-5).shr(2, ShiftRounding::Ceil).unwrap()), -2);
        assert!(int(5).shr(100, ShiftRounding::Floor).unwrap().is_zero());
    }

    #[test]
    fn shl_checks_size_first() {
        let limits = Limits::with_max_size(2).unwrap();
        let n = BigInteger::from_i128(0x80, &limits).unwrap();
        assert!(n.shl(8).is_ok());
        assert_eq!(n.shl(9).unwrap_err(), BigIntError::Size { len: 3, max: 2 });
        assert!(n.mul_pow256(2).unwrap_err().is_size());
    }

    #[test]
    fn bitwise_ops() {
        assert_eq!(val(&int(0b1100).bit_and(&int(0b1010)).unwrap()), 0b1000);
        assert_eq!(val(&int(0b1100).bit_or(&int(0b1010)).unwrap()), 0b1110);
        assert_eq!(val(&int(0b1100).bit_xor(&int(0b1010)).unwrap()), 0b0110);
        assert_eq!(val(&int(0x0F0F).bit_and(&int(0xFF)).unwrap()), 0x0F);
        assert_eq!(val(&int(1).bit_or(&int(0x10000)).unwrap()), 0x10001);
    }

    #[test]
    fn bitwise_keeps_receiver_sign() {
        assert_eq!(val(&int(-6).bit_and(&int(3)).unwrap()), -2);
        assert_eq!(val(&int(6).bit_xor(&int(-6)).unwrap()), 0);
    }

    #[test]
    fn not_inverts_stored_digits() {
        assert_eq!(int(0).bit_not().digits(), &[0xFF]);
        assert_eq!(int(0xFF).bit_not().digits(), &[0]);
        assert_eq!(val(&int(-0x0100).bit_not()), -0xFEFF);
    }
}
