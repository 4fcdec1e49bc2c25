//! Ordering, magnitude comparison and value predicates.

use std::cmp::Ordering;

use crate::constants::{INFINITY_DIGITS, MAX_SAFE_INTEGER};
use crate::digits;
use crate::integer::BigInteger;

impl BigInteger {
    /// Compare magnitudes, ignoring signs.
    #[must_use]
    pub fn cmp_abs(&self, other: &Self) -> Ordering {
        digits::cmp(&self.digits, &other.digits)
    }

    /// `|self| == |other|`
    #[must_use]
    pub fn eq_abs(&self, other: &Self) -> bool {
        self.cmp_abs(other) == Ordering::Equal
    }

    /// `|self| < |other|`
    #[must_use]
    pub fn lt_abs(&self, other: &Self) -> bool {
        self.cmp_abs(other) == Ordering::Less
    }

    /// `|self| > |other|`
    #[must_use]
    pub fn gt_abs(&self, other: &Self) -> bool {
        self.cmp_abs(other) == Ordering::Greater
    }

    /// `|self| <= |other|`
    #[must_use]
    pub fn le_abs(&self, other: &Self) -> bool {
        self.cmp_abs(other) != Ordering::Greater
    }

    /// `|self| >= |other|`
    #[must_use]
    pub fn ge_abs(&self, other: &Self) -> bool {
        self.cmp_abs(other) != Ordering::Less
    }

    /// Zero of either sign.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.digits == [0]
    }

    /// Exactly `+1`.
    #[must_use]
    pub fn is_one(&self) -> bool {
        self.sign && self.digits == [1]
    }

    /// Exactly `+2`.
    #[must_use]
    pub fn is_two(&self) -> bool {
        self.sign && self.digits == [2]
    }

    /// Exactly `-1`.
    #[must_use]
    pub fn is_neg_one(&self) -> bool {
        !self.sign && self.digits == [1]
    }

    /// Sign flag is negative. True for `-0`.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        !self.sign
    }

    /// Least significant bit clear.
    #[must_use]
    pub fn is_even(&self) -> bool {
        self.digits[0] & 1 == 0
    }

    /// Least significant bit set.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        !self.is_even()
    }

    /// `|self| < 2^1024`
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.digits.len() < INFINITY_DIGITS
    }

    /// `|self| <= 2^53 - 1`
    #[must_use]
    pub fn is_safe_integer(&self) -> bool {
        self.digits.len() <= 7 && self.to_u64_abs() <= MAX_SAFE_INTEGER
    }

    fn to_u64_abs(&self) -> u64 {
        let mut buf = [0u8; 8];
        let n = self.digits.len().min(8);
        buf[..n].copy_from_slice(&self.digits[..n]);
        u64::from_le_bytes(buf)
    }
}

impl PartialEq for BigInteger {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BigInteger {}

impl PartialOrd for BigInteger {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BigInteger {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.is_zero(), other.is_zero()) {
            (true, true) => return Ordering::Equal,
            (true, false) => {
                return if other.sign {
                    Ordering::Less
                } else {
                    Ordering::Greater
                }
            }
            (false, true) => {
                return if self.sign {
                    Ordering::Greater
                } else {
                    Ordering::Less
                }
            }
            (false, false) => {}
        }
        match (self.sign, other.sign) {
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (true, true) => self.cmp_abs(other),
            (false, false) => other.cmp_abs(self),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Limits;

    fn int(v: i128) -> BigInteger {
        BigInteger::from_i128(v, &Limits::new()).unwrap()
    }

    #[test]
    fn signed_ordering() {
        let mut values = vec![int(5), int(-300), int(0), int(300), int(-5), int(-1)];
        values.sort();
        let sorted: Vec<_> = values.iter().map(|v| v.to_i128().unwrap()).collect();
        assert_eq!(sorted, vec![-300, -5, -1, 0, 5, 300]);
    }

    #[test]
    fn zeros_compare_equal() {
        let limits = Limits::new();
        let pos = BigInteger::zero(&limits);
        let neg = BigInteger::neg_zero(&limits);
        assert_eq!(pos, neg);
        assert_eq!(pos.cmp(&neg), Ordering::Equal);
        assert!(neg < int(1));
        assert!(neg > int(-1));
    }

    #[test]
    fn magnitude_comparisons() {
        assert!(int(-7).gt_abs(&int(5)));
        assert!(int(5).lt_abs(&int(-7)));
        assert!(int(-7).eq_abs(&int(7)));
        assert!(int(7).le_abs(&int(7)));
        assert!(int(256).ge_abs(&int(255)));
        assert_eq!(int(-256).cmp_abs(&int(255)), Ordering::Greater);
    }

    #[test]
    fn predicates() {
        let limits = Limits::new();
        assert!(BigInteger::neg_zero(&limits).is_zero());
        assert!(BigInteger::neg_zero(&limits).is_negative());
        assert!(int(1).is_one());
        assert!(!int(-1).is_one());
        assert!(int(-1).is_neg_one());
        assert!(int(2).is_two());
        assert!(int(-4).is_even());
        assert!(int(257).is_odd());
    }

    #[test]
    fn finite_and_safe_bounds() {
        let limits = Limits::new();
        assert!(!BigInteger::infinity(&limits).unwrap().is_finite());
        assert!(BigInteger::max_value(&Limits::with_max_size(128).unwrap()).is_finite());

        assert!(int(9_007_199_254_740_991).is_safe_integer());
        assert!(int(-9_007_199_254_740_991).is_safe_integer());
        assert!(!int(9_007_199_254_740_992).is_safe_integer());
        assert!(!int(1 << 60).is_safe_integer());
    }
}
