//! Magnitude primitives over little-endian base-256 digit slices.
//!
//! Every function here treats its input as an unsigned magnitude. Slices
//! passed in are expected to be trimmed unless noted otherwise.

use std::cmp::Ordering;

/// Add with carry: a + b + carry -> (sum, `new_carry`)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn add_with_carry(a: u8, b: u8, carry: u8) -> (u8, u8) {
    let sum = u16::from(a) + u16::from(b) + u16::from(carry);
    (sum as u8, (sum >> 8) as u8)
}

/// Subtract with borrow: a - b - borrow -> (diff, `new_borrow`)
#[inline]
#[must_use]
pub(crate) fn sub_with_borrow(a: u8, b: u8, borrow: u8) -> (u8, u8) {
    let (d1, b1) = a.overflowing_sub(b);
    let (d2, b2) = d1.overflowing_sub(borrow);
    (d2, u8::from(b1 || b2))
}

/// Multiply: a * b -> (low, high)
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub(crate) fn mul_wide(a: u8, b: u8) -> (u8, u8) {
    let prod = u16::from(a) * u16::from(b);
    (prod as u8, (prod >> 8) as u8)
}

/// Drop most-significant zero digits, keeping at least one digit.
pub(crate) fn trim(digits: &mut Vec<u8>) {
    let len = trimmed_len(digits);
    digits.truncate(len);
    if digits.is_empty() {
        digits.push(0);
    }
}

/// Length of `digits` without most-significant zeros (at least 1).
pub(crate) fn trimmed_len(digits: &[u8]) -> usize {
    digits
        .iter()
        .rposition(|&d| d != 0)
        .map_or(1, |i| i + 1)
}

/// Whether a magnitude is zero (tolerates untrimmed input).
#[inline]
pub(crate) fn is_zero(digits: &[u8]) -> bool {
    digits.iter().all(|&d| d == 0)
}

/// Index of the most significant digit where `a` and `b` differ.
///
/// Both must be trimmed and of equal length.
pub(crate) fn first_difference(a: &[u8], b: &[u8]) -> Option<usize> {
    debug_assert_eq!(a.len(), b.len());
    (0..a.len()).rev().find(|&i| a[i] != b[i])
}

/// Compare two trimmed magnitudes.
pub(crate) fn cmp(a: &[u8], b: &[u8]) -> Ordering {
    match a.len().cmp(&b.len()) {
        Ordering::Equal => match first_difference(a, b) {
            Some(i) => a[i].cmp(&b[i]),
            None => Ordering::Equal,
        },
        ord => ord,
    }
}

/// Sum of two magnitudes.
pub(crate) fn add(a: &[u8], b: &[u8]) -> Vec<u8> {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut out = Vec::with_capacity(long.len() + 1);
    let mut carry = 0u8;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        let (s, c) = add_with_carry(x, y, carry);
        out.push(s);
        carry = c;
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Length the sum of two trimmed magnitudes will have.
pub(crate) fn add_len(a: &[u8], b: &[u8]) -> usize {
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };
    let mut carry = 0u8;
    for (i, &x) in long.iter().enumerate() {
        let y = short.get(i).copied().unwrap_or(0);
        carry = add_with_carry(x, y, carry).1;
    }
    long.len() + usize::from(carry)
}

/// Difference `a - b` of two trimmed magnitudes with `a >= b`.
///
/// Digits above the most significant difference cancel, so only the low
/// part up to that index is walked; borrow runs through zero digits turn
/// them into 0xFF until a non-zero digit absorbs the borrow.
pub(crate) fn sub(a: &[u8], b: &[u8]) -> Vec<u8> {
    debug_assert!(cmp(a, b) != Ordering::Less);
    let top = if a.len() == b.len() {
        match first_difference(a, b) {
            Some(i) => i + 1,
            None => return vec![0],
        }
    } else {
        a.len()
    };
    let mut out = a[..top].to_vec();
    let mut i = 0;
    let mut borrow = 0u8;
    while i < b.len().min(top) {
        let (d, br) = sub_with_borrow(out[i], b[i], borrow);
        out[i] = d;
        borrow = br;
        i += 1;
    }
    while borrow != 0 {
        if out[i] == 0 {
            out[i] = 0xFF;
        } else {
            out[i] -= 1;
            borrow = 0;
        }
        i += 1;
    }
    trim(&mut out);
    out
}

/// Add `scalar` into `data`, returning the carry out.
pub(crate) fn add_scalar(data: &mut [u8], scalar: u8) -> u8 {
    let mut carry = scalar;
    for digit in data.iter_mut() {
        if carry == 0 {
            break;
        }
        let (sum, c) = add_with_carry(*digit, carry, 0);
        *digit = sum;
        carry = c;
    }
    carry
}

/// Subtract `scalar` from `data`, returning the borrow out.
pub(crate) fn sub_scalar(data: &mut [u8], scalar: u8) -> u8 {
    let mut borrow = scalar;
    for digit in data.iter_mut() {
        if borrow == 0 {
            break;
        }
        let (diff, b) = sub_with_borrow(*digit, borrow, 0);
        *digit = diff;
        borrow = b;
    }
    borrow
}

/// Add `src` into `dst` starting at digit `offset`, carrying through `dst`.
///
/// Returns the carry that falls off the end of `dst`.
pub(crate) fn add_at(dst: &mut [u8], src: &[u8], offset: usize) -> u8 {
    let mut carry = 0u8;
    let mut i = offset;
    for &s in src {
        let (sum, c) = add_with_carry(dst[i], s, carry);
        dst[i] = sum;
        carry = c;
        i += 1;
    }
    if carry != 0 && i < dst.len() {
        carry = add_scalar(&mut dst[i..], carry);
    }
    carry
}

/// Subtract `src` from `dst` starting at digit `offset`, borrowing through
/// `dst`. Returns the borrow that falls off the end of `dst`.
pub(crate) fn sub_at(dst: &mut [u8], src: &[u8], offset: usize) -> u8 {
    let mut borrow = 0u8;
    let mut i = offset;
    for &s in src {
        let (diff, b) = sub_with_borrow(dst[i], s, borrow);
        dst[i] = diff;
        borrow = b;
        i += 1;
    }
    if borrow != 0 && i < dst.len() {
        borrow = sub_scalar(&mut dst[i..], borrow);
    }
    borrow
}

/// `Some(k)` when the magnitude equals `256^k`.
pub(crate) fn pow256_exponent(digits: &[u8]) -> Option<usize> {
    let (&top, rest) = digits.split_last()?;
    (top == 1 && is_zero(rest)).then_some(rest.len())
}

/// Number of significant bits (0 for zero).
pub(crate) fn bit_len(digits: &[u8]) -> u64 {
    let len = trimmed_len(digits);
    let top = digits[len - 1];
    if top == 0 {
        return 0;
    }
    (len as u64 - 1) * 8 + u64::from(8 - top.leading_zeros())
}

/// Bit `index` of the magnitude (0 = least significant).
#[inline]
pub(crate) fn bit(digits: &[u8], index: u64) -> bool {
    usize::try_from(index / 8)
        .ok()
        .and_then(|i| digits.get(i))
        .is_some_and(|&d| (d >> (index % 8)) & 1 == 1)
}

/// Shift a magnitude left by `bits` (0..8) within one pass, carrying the
/// spilled high bits into the next digit.
pub(crate) fn shl_small(digits: &[u8], bits: u32) -> Vec<u8> {
    debug_assert!(bits < 8);
    if bits == 0 {
        return digits.to_vec();
    }
    let mut out = Vec::with_capacity(digits.len() + 1);
    let mut carry = 0u8;
    for &d in digits {
        out.push((d << bits) | carry);
        carry = d >> (8 - bits);
    }
    if carry != 0 {
        out.push(carry);
    }
    out
}

/// Shift a magnitude right by `bits` (0..8) in place. Returns the bits
/// shifted out, aligned to the top of a byte.
pub(crate) fn shr_small(digits: &mut Vec<u8>, bits: u32) -> u8 {
    debug_assert!(bits < 8);
    if bits == 0 {
        return 0;
    }
    let spilled = digits[0] << (8 - bits);
    let mut carry = 0u8;
    for d in digits.iter_mut().rev() {
        let next = *d << (8 - bits);
        *d = (*d >> bits) | carry;
        carry = next;
    }
    trim(digits);
    spilled
}
