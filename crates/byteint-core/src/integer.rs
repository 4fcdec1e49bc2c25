//! The `BigInteger` value type.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Neg;

use crate::config::Limits;
use crate::constants::INFINITY_DIGITS;
use crate::digits;
use crate::error::Result;

/// Arbitrary-precision signed integer.
///
/// The magnitude is a little-endian base-256 digit array (index 0 is the
/// least significant byte) with no most-significant zero digits except the
/// single digit of zero. Zero keeps its sign, so `+0` and `-0` are distinct
/// values that compare equal.
///
/// Every value holds the [`Limits`] it was created under and checks the
/// current `MAX_SIZE` whenever an operation produces new digits. Mutating
/// methods leave the receiver untouched when they fail.
///
/// # Examples
/// ```
/// use byteint_core::{BigInteger, Limits};
///
/// let limits = Limits::new();
/// let n = BigInteger::parse("1201", 7, &limits).unwrap();
/// assert_eq!(n.to_string_radix(2).unwrap(), "110111010");
/// assert_eq!(n.to_string(), "442");
/// ```
#[derive(Clone)]
pub struct BigInteger {
    pub(crate) sign: bool,
    pub(crate) digits: Vec<u8>,
    pub(crate) limits: Limits,
}

impl BigInteger {
    /// Build from parts, trimming and enforcing `MAX_SIZE`.
    pub(crate) fn from_parts(sign: bool, mut digits: Vec<u8>, limits: &Limits) -> Result<Self> {
        digits::trim(&mut digits);
        limits.check_len(digits.len())?;
        Ok(Self {
            sign,
            digits,
            limits: limits.clone(),
        })
    }

    /// Build from parts already known to fit (never longer than an input).
    pub(crate) fn from_parts_trusted(sign: bool, mut digits: Vec<u8>, limits: &Limits) -> Self {
        digits::trim(&mut digits);
        Self {
            sign,
            digits,
            limits: limits.clone(),
        }
    }

    /// A value sharing this value's limits.
    pub(crate) fn sibling(&self, sign: bool, digits: Vec<u8>) -> Result<Self> {
        Self::from_parts(sign, digits, &self.limits)
    }

    fn small(sign: bool, digit: u8, limits: &Limits) -> Self {
        Self::from_parts_trusted(sign, vec![digit], limits)
    }

    /// `+0`.
    #[must_use]
    pub fn zero(limits: &Limits) -> Self {
        Self::small(true, 0, limits)
    }

    /// `-0`.
    #[must_use]
    pub fn neg_zero(limits: &Limits) -> Self {
        Self::small(false, 0, limits)
    }

    /// `1`.
    #[must_use]
    pub fn one(limits: &Limits) -> Self {
        Self::small(true, 1, limits)
    }

    /// `-1`.
    #[must_use]
    pub fn neg_one(limits: &Limits) -> Self {
        Self::small(false, 1, limits)
    }

    /// `2`.
    #[must_use]
    pub fn two(limits: &Limits) -> Self {
        Self::small(true, 2, limits)
    }

    /// `-2`.
    #[must_use]
    pub fn neg_two(limits: &Limits) -> Self {
        Self::small(false, 2, limits)
    }

    /// Largest value allowed under the current `MAX_SIZE`: every digit 0xFF.
    #[must_use]
    pub fn max_value(limits: &Limits) -> Self {
        Self::from_parts_trusted(true, vec![0xFF; limits.max_size()], limits)
    }

    /// The infinity sentinel 2^1024.
    ///
    /// Fails with a size error when `MAX_SIZE` is below 129 digits.
    pub fn infinity(limits: &Limits) -> Result<Self> {
        let mut digits = vec![0; INFINITY_DIGITS];
        digits[INFINITY_DIGITS - 1] = 1;
        Self::from_parts(true, digits, limits)
    }

    /// Convert a machine integer.
    pub fn from_i128(value: i128, limits: &Limits) -> Result<Self> {
        Self::from_parts(
            value >= 0,
            value.unsigned_abs().to_le_bytes().to_vec(),
            limits,
        )
    }

    /// Convert a machine integer.
    pub fn from_u64(value: u64, limits: &Limits) -> Result<Self> {
        Self::from_parts(true, value.to_le_bytes().to_vec(), limits)
    }

    /// `true` for non-negative values (including `+0`).
    #[must_use]
    pub fn sign(&self) -> bool {
        self.sign
    }

    /// Little-endian base-256 magnitude.
    #[must_use]
    pub fn digits(&self) -> &[u8] {
        &self.digits
    }

    /// Number of base-256 digits (at least 1).
    #[must_use]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always `false`: a value has at least one digit.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of significant bits of the magnitude.
    #[must_use]
    pub fn bit_len(&self) -> u64 {
        digits::bit_len(&self.digits)
    }

    /// The limits this value checks against.
    #[must_use]
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Consume the value, returning its magnitude buffer.
    #[must_use]
    pub fn into_le_bytes(self) -> Vec<u8> {
        self.digits
    }

    /// Flip the sign in place (`+0` becomes `-0`).
    pub fn negate(&mut self) {
        self.sign = !self.sign;
    }

    /// Make the value non-negative in place.
    pub fn abs_in_place(&mut self) {
        self.sign = true;
    }

    /// Absolute value as a new value.
    #[must_use]
    pub fn abs(&self) -> Self {
        let mut out = self.clone();
        out.sign = true;
        out
    }

    /// Convert to `i128` when it fits.
    #[must_use]
    pub fn to_i128(&self) -> Option<i128> {
        if self.digits.len() > 16 {
            return None;
        }
        let mut buf = [0u8; 16];
        buf[..self.digits.len()].copy_from_slice(&self.digits);
        let magnitude = u128::from_le_bytes(buf);
        if self.sign {
            i128::try_from(magnitude).ok()
        } else if magnitude == 1u128 << 127 {
            Some(i128::MIN)
        } else {
            i128::try_from(magnitude).ok().map(|m| -m)
        }
    }

    /// Convert to `u64` when non-negative and it fits.
    #[must_use]
    pub fn to_u64(&self) -> Option<u64> {
        if !(self.sign || self.is_zero()) || self.digits.len() > 8 {
            return None;
        }
        let mut buf = [0u8; 8];
        buf[..self.digits.len()].copy_from_slice(&self.digits);
        Some(u64::from_le_bytes(buf))
    }

    /// Replace this value's sign and digits with `other`'s, keeping its
    /// limits. Used to commit a result computed out of place.
    pub(crate) fn commit(&mut self, other: Self) {
        self.sign = other.sign;
        self.digits = other.digits;
    }
}

impl fmt::Debug for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInteger({self})")
    }
}

impl Hash for BigInteger {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // +0 and -0 are equal, so they must hash alike.
        (self.sign || self.is_zero()).hash(state);
        self.digits.hash(state);
    }
}

impl Neg for BigInteger {
    type Output = Self;

    fn neg(mut self) -> Self {
        self.negate();
        self
    }
}

impl Neg for &BigInteger {
    type Output = BigInteger;

    fn neg(self) -> BigInteger {
        -self.clone()
    }
}

impl serde::Serialize for BigInteger {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for BigInteger {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
