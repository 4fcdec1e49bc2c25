//! Increment, decrement, addition and subtraction.

use std::cmp::Ordering;

use crate::digits;
use crate::error::Result;
use crate::integer::BigInteger;

impl BigInteger {
    /// Add one in place.
    ///
    /// `-0` becomes `+1` and `-1` becomes `-0`.
    ///
    /// # Errors
    /// `Size` when the carry would need a digit beyond `MAX_SIZE`; the value
    /// is unchanged.
    pub fn inc(&mut self) -> Result<()> {
        if self.sign {
            self.grow_magnitude()
        } else {
            self.shrink_magnitude(true);
            Ok(())
        }
    }

    /// Subtract one in place.
    ///
    /// `+0` becomes `-1` and `+1` becomes `+0`.
    ///
    /// # Errors
    /// `Size` when the borrow would need a digit beyond `MAX_SIZE`; the
    /// value is unchanged.
    pub fn dec(&mut self) -> Result<()> {
        if self.sign {
            self.shrink_magnitude(false);
            Ok(())
        } else {
            self.grow_magnitude()
        }
    }

    fn grow_magnitude(&mut self) -> Result<()> {
        if self.digits.iter().all(|&d| d == 0xFF) {
            self.limits.check_len(self.digits.len() + 1)?;
        }
        let carry = digits::add_scalar(&mut self.digits, 1);
        if carry != 0 {
            self.digits.push(carry);
        }
        Ok(())
    }

    /// Step the magnitude toward zero; from zero, cross to magnitude 1 with
    /// sign `crossed_sign`.
    fn shrink_magnitude(&mut self, crossed_sign: bool) {
        if self.is_zero() {
            self.sign = crossed_sign;
            self.digits[0] = 1;
        } else {
            digits::sub_scalar(&mut self.digits, 1);
            digits::trim(&mut self.digits);
        }
    }

    /// `self + other` as a new value under this value's limits.
    ///
    /// # Errors
    /// `Size` when the sum exceeds `MAX_SIZE`.
    pub fn checked_add(&self, other: &Self) -> Result<Self> {
        self.signed_sum(other.sign, &other.digits)
    }

    /// `self - other` as a new value under this value's limits.
    ///
    /// # Errors
    /// `Size` when the difference exceeds `MAX_SIZE`.
    pub fn checked_sub(&self, other: &Self) -> Result<Self> {
        self.signed_sum(!other.sign, &other.digits)
    }

    /// `self += other`, leaving `self` unchanged on failure.
    pub fn add_assign_checked(&mut self, other: &Self) -> Result<()> {
        let sum = self.checked_add(other)?;
        self.commit(sum);
        Ok(())
    }

    /// `self -= other`, leaving `self` unchanged on failure.
    pub fn sub_assign_checked(&mut self, other: &Self) -> Result<()> {
        let difference = self.checked_sub(other)?;
        self.commit(difference);
        Ok(())
    }

    fn signed_sum(&self, other_sign: bool, other: &[u8]) -> Result<Self> {
        if self.sign == other_sign {
            self.limits.check_len(digits::add_len(&self.digits, other))?;
            return self.sibling(self.sign, digits::add(&self.digits, other));
        }
        match digits::cmp(&self.digits, other) {
            Ordering::Equal => Ok(Self::zero(&self.limits)),
            Ordering::Greater => self.sibling(self.sign, digits::sub(&self.digits, other)),
            Ordering::Less => self.sibling(other_sign, digits::sub(other, &self.digits)),
        }
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

    #[test]
    fn inc_crosses_zero() {
        let mut n = int(-1);
        n.inc().unwrap();
        assert!(n.is_zero());
        assert!(n.is_negative());
        n.inc().unwrap();
        assert!(n.is_one());
        n.inc().unwrap();
        assert!(n.is_two());
    }

    #[test]
    fn dec_crosses_zero() {
        let mut n = int(1);
        n.dec().unwrap();
        assert!(n.is_zero());
        assert!(!n.is_negative());
        n.dec().unwrap();
        assert!(n.is_neg_one());
        n.dec().unwrap();
        assert_eq!(n.to_i128(), Some(-2));
    }

    #[test]
    fn inc_carries_into_new_digit() {
        let mut n = int(0xFFFF);
        n.inc().unwrap();
        assert_eq!(n.digits(), &[0, 0, 1]);
        n.dec().unwrap();
        assert_eq!(n.digits(), &[0xFF, 0xFF]);
    }

    #[test]
    fn inc_at_limit_is_transactional() {
        let limits = Limits::with_max_size(2).unwrap();
        let mut n = BigInteger::max_value(&limits);
        assert_eq!(n.inc(), Err(BigIntError::Size { len: 3, max: 2 }));
        assert_eq!(n.digits(), &[0xFF, 0xFF]);

        let mut m = -BigInteger::max_value(&limits);
        assert!(m.dec().is_err());
        assert!(m.inc().is_ok());
    }

    #[test]
    fn hex_sum_scenario() {
        let limits = Limits::new();
        let a = BigInteger::parse("FF", 16, &limits).unwrap();
        let b = BigInteger::parse("1", 16, &limits).unwrap();
        assert_eq!(a.checked_add(&b).unwrap().to_string_radix(16).unwrap(), "0x100");
    }

    #[test]
    fn mixed_sign_sums() {
        assert_eq!(int(5).checked_add(&int(-3)).unwrap().to_i128(), Some(2));
        assert_eq!(int(3).checked_add(&int(-5)).unwrap().to_i128(), Some(-2));
        assert_eq!(int(-3).checked_sub(&int(5)).unwrap().to_i128(), Some(-8));
        assert_eq!(int(256).checked_sub(&int(1)).unwrap().digits(), &[0xFF]);
        assert_eq!(int(-65_536).checked_add(&int(1)).unwrap().to_i128(), Some(-65_535));
    }

    #[test]
    fn equal_magnitudes_cancel_to_positive_zero() {
        let zero = int(-7).checked_add(&int(7)).unwrap();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
        let zero = int(7).checked_sub(&int(7)).unwrap();
        assert!(!zero.is_negative());
    }

    #[test]
    fn assign_variants_commit_only_on_success() {
        let limits = Limits::with_max_size(1).unwrap();
        let mut n = BigInteger::from_i128(200, &limits).unwrap();
        let m = BigInteger::from_i128(100, &limits).unwrap();
        assert!(n.add_assign_checked(&m).unwrap_err().is_size());
        assert_eq!(n.to_i128(), Some(200));
        n.sub_assign_checked(&m).unwrap();
        assert_eq!(n.to_i128(), Some(100));
    }

    #[test]
    fn receiver_limits_govern_result() {
        let wide = Limits::new();
        let narrow = Limits::with_max_size(1).unwrap();
        let big = BigInteger::from_i128(1_000, &wide).unwrap();
        let small = BigInteger::from_i128(1, &narrow).unwrap();
        assert!(small.checked_add(&big).is_err());
        let sum = big.checked_add(&small).unwrap();
        assert!(sum.limits().shares_with(&wide));
    }

    #[test]
    fn lowering_the_limit_keeps_existing_values() {
        let limits = Limits::new();
        let mut n = BigInteger::from_i128(70_000, &limits).unwrap();
        limits.set_max_size(1).unwrap();
        assert_eq!(n.to_i128(), Some(70_000));
        n.dec().unwrap();
        assert_eq!(n.to_i128(), Some(69_999));
        assert!(n.checked_add(&n.clone()).unwrap_err().is_size());
    }
}
