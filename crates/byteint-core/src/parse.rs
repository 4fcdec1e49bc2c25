//! Construction from text, digit slices, bit slices and raw bytes.
//!
//! Text input is validated per base family, reduced to a most-significant
//! first list of digit values, and converted to base 256. Power-of-two
//! radices pack bits directly; every other radix is converted by repeated
//! halving of the digit list, one output bit per pass.

use std::str::FromStr;

use byteint_memory::DigitArena;
use tracing::trace;

use crate::base::{Base, IntoBase};
use crate::config::Limits;
use crate::constants::{BRAILLE_BASE, LIST_SEPARATOR};
use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;

impl BigInteger {
    /// Parse `text` written in `base` (a number, a name or a [`Base`]).
    ///
    /// # Errors
    /// `Format` for an unsupported base or malformed text, `Size` when the
    /// value needs more than `MAX_SIZE` digits.
    pub fn parse(text: &str, base: impl IntoBase, limits: &Limits) -> Result<Self> {
        let base = resolve(base)?;
        let (sign, body) = split_sign(text);
        let magnitude = match base {
            Base::Braille => braille_digits(body)?,
            Base::Radix(1) => unary_magnitude(body)?,
            _ => {
                let radix = base.radix();
                let values = if radix <= 36 {
                    alnum_values(body, radix)?
                } else {
                    list_values(body, radix)?
                };
                digits_to_bytes(&values, radix, limits)?
            }
        };
        Self::from_parts(sign, magnitude, limits)
    }

    /// Build a non-negative value from little-endian digit values in `base`.
    ///
    /// Base 1 takes a run of `1` digits whose length minus one is the value.
    ///
    /// # Errors
    /// `InvalidInputKind` for Braille, `Format` for an unsupported base or a
    /// digit out of range, `Size` when the value is too long.
    pub fn from_digits(digits: &[u64], base: impl IntoBase, limits: &Limits) -> Result<Self> {
        let base = resolve(base)?;
        if base == Base::Braille {
            return Err(BigIntError::InvalidInputKind(
                "braille input must be text".into(),
            ));
        }
        if digits.is_empty() {
            return Err(BigIntError::format("no digits"));
        }
        let radix = base.radix();
        if radix == 1 {
            if digits.iter().any(|&d| d != 1) {
                return Err(BigIntError::format("unary digits must be 1"));
            }
            return Self::from_parts(true, unary_bytes(digits.len()), limits);
        }
        let values = digits
            .iter()
            .rev()
            .map(|&d| {
                u32::try_from(d)
                    .ok()
                    .filter(|_| d < radix)
                    .ok_or_else(|| {
                        BigIntError::format(format!("digit {d} is out of range for base {radix}"))
                    })
            })
            .collect::<Result<Vec<u32>>>()?;
        Self::from_parts(true, digits_to_bytes(&values, radix, limits)?, limits)
    }

    /// Build a non-negative value from little-endian bits.
    ///
    /// # Errors
    /// `Format` for an empty slice, `Size` when the value is too long.
    pub fn from_bits(bits: &[bool], limits: &Limits) -> Result<Self> {
        if bits.is_empty() {
            return Err(BigIntError::format("no digits"));
        }
        let mut bytes = vec![0u8; bits.len().div_ceil(8)];
        for (i, _) in bits.iter().enumerate().filter(|&(_, &set)| set) {
            bytes[i / 8] |= 1 << (i % 8);
        }
        Self::from_parts(true, bytes, limits)
    }

    /// Copy a little-endian base-256 magnitude.
    pub fn from_le_bytes(bytes: &[u8], limits: &Limits) -> Result<Self> {
        Self::from_parts(true, bytes.to_vec(), limits)
    }

    /// Take ownership of a little-endian base-256 magnitude without copying.
    pub fn from_owned_le_bytes(bytes: Vec<u8>, limits: &Limits) -> Result<Self> {
        Self::from_parts(true, bytes, limits)
    }
}

impl FromStr for BigInteger {
    type Err = BigIntError;

    /// Decimal text under a fresh default [`Limits`].
    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s, Base::Radix(10), &Limits::default())
    }
}

pub(crate) fn resolve(base: impl IntoBase) -> Result<Base> {
    base.into_base()
        .ok_or_else(|| BigIntError::format("unsupported base"))
}

fn split_sign(text: &str) -> (bool, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (false, rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (true, rest)
    } else {
        (true, text)
    }
}

fn check_layout(len: usize, leading_zero: bool, dangling_separator: bool) -> Result<()> {
    if len == 0 {
        return Err(BigIntError::format("no digits"));
    }
    if dangling_separator {
        return Err(BigIntError::format("'_' must sit between digits"));
    }
    if leading_zero && len > 1 {
        return Err(BigIntError::format("leading zero"));
    }
    Ok(())
}

fn unary_bytes(ones: usize) -> Vec<u8> {
    (ones as u64 - 1).to_le_bytes().to_vec()
}

fn unary_magnitude(body: &str) -> Result<Vec<u8>> {
    if body.is_empty() || body.bytes().any(|b| b != b'1') {
        return Err(BigIntError::format("unary digits must be '1'"));
    }
    Ok(unary_bytes(body.len()))
}

fn strip_radix_prefix(body: &str, radix: u64) -> &str {
    let prefix = match radix {
        2 => "0b",
        8 => "0o",
        16 => "0x",
        _ => return body,
    };
    match body.get(..2) {
        Some(head) if head.eq_ignore_ascii_case(prefix) => &body[2..],
        _ => body,
    }
}

fn alnum_values(body: &str, radix: u64) -> Result<Vec<u32>> {
    let body = strip_radix_prefix(body, radix);
    let mut values = Vec::with_capacity(body.len());
    let mut after_separator = true;
    for c in body.chars() {
        if c == '_' {
            if after_separator {
                return Err(BigIntError::format("'_' must sit between digits"));
            }
            after_separator = true;
            continue;
        }
        let value = c
            .to_digit(36)
            .filter(|&d| u64::from(d) < radix)
            .ok_or_else(|| BigIntError::format(format!("invalid digit {c:?} for base {radix}")))?;
        values.push(value);
        after_separator = false;
    }
    check_layout(values.len(), values.first() == Some(&0), after_separator)?;
    Ok(values)
}

fn list_values(body: &str, radix: u64) -> Result<Vec<u32>> {
    let limit = radix.to_string();
    let padded = body
        .split(LIST_SEPARATOR)
        .next()
        .map(str::trim)
        .is_some_and(|first| first.len() > 1 && first.starts_with('0'));
    if padded {
        return Err(BigIntError::format("leading zero"));
    }
    let values = body
        .split(LIST_SEPARATOR)
        .map(|item| list_value(item.trim(), &limit))
        .collect::<Result<Vec<u32>>>()?;
    check_layout(values.len(), values.first() == Some(&0), false)?;
    Ok(values)
}

/// One decimal digit value, checked against the radix text by length and
/// then lexicographically so oversized values never need parsing.
fn list_value(item: &str, limit: &str) -> Result<u32> {
    if item.is_empty() || !item.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BigIntError::format(format!("invalid digit value {item:?}")));
    }
    let significant = item.trim_start_matches('0');
    if significant.len() > limit.len()
        || (significant.len() == limit.len() && significant >= limit)
    {
        return Err(BigIntError::format(format!(
            "digit value {item} is not below base {limit}"
        )));
    }
    if significant.is_empty() {
        return Ok(0);
    }
    significant
        .parse()
        .map_err(|_| BigIntError::format(format!("invalid digit value {item:?}")))
}

fn braille_digits(body: &str) -> Result<Vec<u8>> {
    let mut digits = Vec::with_capacity(body.len() / 3);
    let mut after_separator = true;
    for c in body.chars() {
        if c == '_' {
            if after_separator {
                return Err(BigIntError::format("'_' must sit between digits"));
            }
            after_separator = true;
            continue;
        }
        let digit = u32::from(c)
            .checked_sub(BRAILLE_BASE)
            .and_then(|d| u8::try_from(d).ok())
            .ok_or_else(|| BigIntError::format(format!("{c:?} is not a braille digit")))?;
        digits.push(digit);
        after_separator = false;
    }
    check_layout(digits.len(), digits.first() == Some(&0), after_separator)?;
    digits.reverse();
    Ok(digits)
}

/// Convert most-significant-first digit values to a base-256 magnitude.
pub(crate) fn digits_to_bytes(values: &[u32], radix: u64, limits: &Limits) -> Result<Vec<u8>> {
    let start = values.iter().position(|&v| v != 0).unwrap_or(values.len());
    let values = &values[start..];
    if values.is_empty() {
        return Ok(vec![0]);
    }
    check_estimate(values.len(), radix, limits)?;
    if radix.is_power_of_two() {
        trace!(radix, digits = values.len(), "packing power-of-two radix");
        Ok(pack_bits(values, radix.trailing_zeros()))
    } else {
        trace!(radix, digits = values.len(), "converting by repeated halving");
        Ok(halve_to_bytes(values, radix))
    }
}

/// Reject input whose smallest possible value already exceeds `MAX_SIZE`.
fn check_estimate(count: usize, radix: u64, limits: &Limits) -> Result<()> {
    let floor_log2 = u64::from(63 - radix.leading_zeros());
    let min_bits = (count as u64 - 1).saturating_mul(floor_log2).saturating_add(1);
    let min_len = usize::try_from(min_bits.div_ceil(8)).unwrap_or(usize::MAX);
    limits.check_len(min_len)
}

#[allow(clippy::cast_possible_truncation)]
fn pack_bits(values: &[u32], bits: u32) -> Vec<u8> {
    let mut out = Vec::with_capacity((values.len() * bits as usize).div_ceil(8));
    let mut acc = 0u64;
    let mut filled = 0u32;
    for &v in values.iter().rev() {
        acc |= u64::from(v) << filled;
        filled += bits;
        while filled >= 8 {
            out.push(acc as u8);
            acc >>= 8;
            filled -= 8;
        }
    }
    if filled > 0 {
        out.push(acc as u8);
    }
    out
}

#[allow(clippy::cast_possible_truncation)]
fn halve_to_bytes(values: &[u32], radix: u64) -> Vec<u8> {
    let arena = DigitArena::with_capacity(values.len() * 4);
    let work = arena.alloc_copy(values);
    let mut start = 0;
    let mut out = Vec::with_capacity(values.len() * 4);
    while start < work.len() {
        let mut byte = 0u8;
        for bit in 0..8 {
            if start == work.len() {
                break;
            }
            // The remainder of each halving is carried into the next digit
            // as a whole radix unit.
            let mut carry = 0u64;
            for d in &mut work[start..] {
                let v = carry * radix + u64::from(*d);
                *d = (v >> 1) as u32;
                carry = v & 1;
            }
            byte |= (carry as u8) << bit;
            while start < work.len() && work[start] == 0 {
                start += 1;
            }
        }
        out.push(byte);
    }
    out
}
