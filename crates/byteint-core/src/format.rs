//! Rendering values as text in any supported base.

use std::fmt;

use byteint_memory::DigitArena;
use tracing::trace;

use crate::base::{Base, IntoBase};
use crate::constants::{BRAILLE_BASE, LIST_SEPARATOR};
use crate::digits;
use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::parse::resolve;

const ALPHABET: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

impl BigInteger {
    /// Render in `base`. Negative values, `-0` included, start with `-`.
    ///
    /// Radices up to 36 use `0-9A-Z`, larger radices a comma-separated list
    /// of decimal digit values, Braille one pattern per byte.
    ///
    /// # Errors
    /// `Format` for base 1 or an unsupported base.
    pub fn to_string_radix(&self, base: impl IntoBase) -> Result<String> {
        let base = resolve(base)?;
        let mut out = String::new();
        if !self.sign {
            out.push('-');
        }
        match base {
            Base::Braille => {
                out.extend(self.digits.iter().rev().map(|&d| braille_char(d)));
            }
            Base::Radix(1) => {
                return Err(BigIntError::format("base 1 has no text form"));
            }
            _ => {
                if let Some(prefix) = base.prefix() {
                    out.push_str(prefix);
                }
                out.push_str(&self.magnitude_text(base.radix()));
            }
        }
        Ok(out)
    }

    /// Magnitude digits in `radix` (2 or more), most significant first.
    pub(crate) fn magnitude_text(&self, radix: u64) -> String {
        let values = bytes_to_digits(&self.digits, radix);
        if radix <= 36 {
            values
                .iter()
                .map(|&v| char::from(ALPHABET[v as usize]))
                .collect()
        } else {
            let mut text = String::with_capacity(values.len() * 4);
            for (i, v) in values.iter().enumerate() {
                if i > 0 {
                    text.push(LIST_SEPARATOR);
                }
                text.push_str(&v.to_string());
            }
            text
        }
    }
}

fn braille_char(digit: u8) -> char {
    char::from_u32(BRAILLE_BASE + u32::from(digit)).unwrap_or(char::REPLACEMENT_CHARACTER)
}

/// Base-256 magnitude to most-significant-first digit values in `radix`.
fn bytes_to_digits(digits: &[u8], radix: u64) -> Vec<u32> {
    if radix.is_power_of_two() {
        unpack_bits(digits, radix.trailing_zeros())
    } else {
        trace!(radix, len = digits.len(), "formatting by doubling");
        double_into_radix(digits, radix)
    }
}

#[allow(clippy::cast_possible_truncation)]
fn unpack_bits(digits: &[u8], bits: u32) -> Vec<u32> {
    let total = digits::bit_len(digits);
    if total == 0 {
        return vec![0];
    }
    let count = total.div_ceil(u64::from(bits)) as usize;
    let mask = (1u64 << bits) - 1;
    let mut out = Vec::with_capacity(count);
    let mut bytes = digits.iter();
    let mut acc = 0u64;
    let mut filled = 0u32;
    for _ in 0..count {
        while filled < bits {
            acc |= u64::from(bytes.next().copied().unwrap_or(0)) << filled;
            filled += 8;
        }
        out.push((acc & mask) as u32);
        acc >>= bits;
        filled -= bits;
    }
    out.reverse();
    out
}

/// Feed the bits in from the most significant end, doubling a
/// target-radix accumulator and adding each bit.
#[allow(clippy::cast_possible_truncation)]
fn double_into_radix(digits: &[u8], radix: u64) -> Vec<u32> {
    let bits = digits::bit_len(digits);
    if bits == 0 {
        return vec![0];
    }
    let floor_log2 = u64::from(63 - radix.leading_zeros());
    let capacity = (bits / floor_log2) as usize + 1;
    let arena = DigitArena::with_capacity(capacity * 4);
    let acc = arena.alloc_digits::<u32>(capacity);
    let mut used = 1;
    for index in (0..bits).rev() {
        let mut carry = u64::from(digits::bit(digits, index));
        for d in &mut acc[..used] {
            let v = u64::from(*d) * 2 + carry;
            if v >= radix {
                *d = (v - radix) as u32;
                carry = 1;
            } else {
                *d = v as u32;
                carry = 0;
            }
        }
        if carry != 0 {
            acc[used] = 1;
            used += 1;
        }
    }
    acc[..used].iter().rev().copied().collect()
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "", &self.magnitude_text(10))
    }
}

impl fmt::LowerHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "0x", &self.magnitude_text(16).to_ascii_lowercase())
    }
}

impl fmt::UpperHex for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "0x", &self.magnitude_text(16))
    }
}

impl fmt::Binary for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "0b", &self.magnitude_text(2))
    }
}

impl fmt::Octal for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.sign, "0o", &self.magnitude_text(8))
    }
}
