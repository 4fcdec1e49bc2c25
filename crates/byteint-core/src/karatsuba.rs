//! Multiplication: fast paths, schoolbook leaves and an iterative
//! Karatsuba engine.
//!
//! Operands are zero-padded to a common power-of-two length. The engine
//! walks an explicit task stack instead of recursing: each split pushes a
//! combine task and three sub-products, and sub-products leave their results
//! on a result stack in a fixed order. Scratch buffers come from the
//! thread-local digit pool.

use byteint_memory::thread_local::{tl_acquire, tl_release};
use tracing::{debug, trace};

use crate::config::Limits;
use crate::constants::KARATSUBA_CUTOFF;
use crate::digits;
use crate::error::Result;
use crate::integer::BigInteger;

impl BigInteger {
    /// `self * other` under this value's limits. The sign is the XOR of the
    /// operand signs, zero included.
    ///
    /// # Errors
    /// `Size` when the product exceeds `MAX_SIZE`.
    pub fn checked_mul(&self, other: &Self) -> Result<Self> {
        let magnitude = mul_magnitudes(&self.digits, &other.digits, &self.limits)?;
        self.sibling(self.sign == other.sign, magnitude)
    }

    /// `self *= other`, leaving `self` unchanged on failure.
    pub fn mul_assign_checked(&mut self, other: &Self) -> Result<()> {
        let product = self.checked_mul(other)?;
        self.commit(product);
        Ok(())
    }

    /// `self * self`.
    pub fn square(&self) -> Result<Self> {
        let magnitude = mul_magnitudes(&self.digits, &self.digits, &self.limits)?;
        self.sibling(true, magnitude)
    }
}

/// Product of two trimmed magnitudes.
pub(crate) fn mul_magnitudes(a: &[u8], b: &[u8], limits: &Limits) -> Result<Vec<u8>> {
    if digits::is_zero(a) || digits::is_zero(b) {
        return Ok(vec![0]);
    }
    // The product has at least this many digits.
    limits.check_len(a.len() + b.len() - 1)?;
    if let Some(product) = fast_path(a, b).or_else(|| fast_path(b, a)) {
        return Ok(product);
    }
    let mut product = if a.len().min(b.len()) <= KARATSUBA_CUTOFF {
        let mut out = vec![0; a.len() + b.len()];
        schoolbook(a, b, &mut out);
        out
    } else {
        debug!(len_a = a.len(), len_b = b.len(), square = a == b, "karatsuba multiply");
        karatsuba(a, b, limits)?
    };
    digits::trim(&mut product);
    Ok(product)
}

/// Products by 1, 2 and powers of 256.
fn fast_path(small: &[u8], other: &[u8]) -> Option<Vec<u8>> {
    match small {
        [1] => Some(other.to_vec()),
        [2] => Some(digits::shl_small(other, 1)),
        _ => digits::pow256_exponent(small).map(|k| {
            let mut out = vec![0u8; k];
            out.extend_from_slice(other);
            out
        }),
    }
}

/// Digit-by-digit product into `out`, which must be zeroed and hold
/// `a.len() + b.len()` digits.
#[allow(clippy::cast_possible_truncation)]
fn schoolbook(a: &[u8], b: &[u8], out: &mut [u8]) {
    for (i, &x) in a.iter().enumerate() {
        if x == 0 {
            continue;
        }
        let mut carry = 0u16;
        for (j, &y) in b.iter().enumerate() {
            let (lo, hi) = digits::mul_wide(x, y);
            let sum = u16::from(out[i + j]) + u16::from(lo) + carry;
            out[i + j] = sum as u8;
            carry = (sum >> 8) + u16::from(hi);
        }
        let mut k = i + b.len();
        while carry != 0 {
            let sum = u16::from(out[k]) + carry;
            out[k] = sum as u8;
            carry = sum >> 8;
            k += 1;
        }
    }
}

enum Task {
    /// Multiply two equal-length power-of-two operands; `y: None` squares.
    Mul { x: Vec<u8>, y: Option<Vec<u8>> },
    /// Recombine the three sub-products of a split at `half`.
    ///
    /// `sx`/`sy` are the low digits of the half-sums, kept only when the
    /// other half-sum carried out and they feed a correction term.
    Combine {
        half: usize,
        sx: Option<Vec<u8>>,
        sy: Option<Vec<u8>>,
        both_carried: bool,
    },
}

fn pooled_copy(src: &[u8]) -> Vec<u8> {
    let mut buf = tl_acquire(src.len());
    buf.copy_from_slice(src);
    buf
}

/// `lo + hi` in `lo.len()` digits plus the carry out.
fn half_sum(lo: &[u8], hi: &[u8]) -> (Vec<u8>, bool) {
    let mut sum = pooled_copy(lo);
    let carry = digits::add_at(&mut sum, hi, 0);
    (sum, carry != 0)
}

fn release_all(bufs: impl IntoIterator<Item = Vec<u8>>) {
    for buf in bufs {
        tl_release(buf);
    }
}

fn pop3(results: &mut Vec<Vec<u8>>) -> [Vec<u8>; 3] {
    let split = results.len() - 3;
    let mut tail = results.drain(split..);
    std::array::from_fn(|_| tail.next().unwrap_or_default())
}

fn karatsuba(a: &[u8], b: &[u8], limits: &Limits) -> Result<Vec<u8>> {
    let n = a.len().max(b.len()).next_power_of_two();
    let mut x = tl_acquire(n);
    x[..a.len()].copy_from_slice(a);
    let y = if a == b {
        None
    } else {
        let mut y = tl_acquire(n);
        y[..b.len()].copy_from_slice(b);
        Some(y)
    };

    let mut tasks = vec![Task::Mul { x, y }];
    let mut results: Vec<Vec<u8>> = Vec::new();
    while let Some(task) = tasks.pop() {
        match task {
            Task::Mul { x, y } => split(x, y, &mut tasks, &mut results),
            Task::Combine {
                half,
                sx,
                sy,
                both_carried,
            } => {
                let [mid, low, high] = pop3(&mut results);
                let out = combine(half, &mid, &low, &high, sx.as_deref(), sy.as_deref(), both_carried);
                release_all([mid, low, high]);
                release_all(sx.into_iter().chain(sy));
                limits.check_len(digits::trimmed_len(&out))?;
                results.push(out);
            }
        }
    }
    let Some(mut product) = results.pop() else {
        unreachable!("karatsuba task stack finished without a product");
    };
    product.truncate(a.len() + b.len());
    Ok(product)
}

/// Handle one `Mul` task: a schoolbook leaf, or a split into sub-tasks.
fn split(x: Vec<u8>, y: Option<Vec<u8>>, tasks: &mut Vec<Task>, results: &mut Vec<Vec<u8>>) {
    let m = x.len();
    if m <= KARATSUBA_CUTOFF {
        let mut out = tl_acquire(2 * m);
        schoolbook(&x, y.as_deref().unwrap_or(&x), &mut out);
        release_all(std::iter::once(x).chain(y));
        results.push(out);
        return;
    }
    let half = m / 2;
    trace!(len = m, "karatsuba split");
    let (x0, x1) = x.split_at(half);
    let (sx, cx) = half_sum(x0, x1);
    let (high, low, middle, sy, cy) = match &y {
        None => (
            Task::Mul { x: pooled_copy(x1), y: None },
            Task::Mul { x: pooled_copy(x0), y: None },
            Task::Mul { x: pooled_copy(&sx), y: None },
            None,
            cx,
        ),
        Some(y) => {
            let (y0, y1) = y.split_at(half);
            let (sy, cy) = half_sum(y0, y1);
            (
                Task::Mul { x: pooled_copy(x1), y: Some(pooled_copy(y1)) },
                Task::Mul { x: pooled_copy(x0), y: Some(pooled_copy(y0)) },
                Task::Mul { x: pooled_copy(&sx), y: Some(pooled_copy(&sy)) },
                Some(sy),
                cy,
            )
        }
    };
    // Squaring reuses the single half-sum for both correction terms.
    let (keep_sx, keep_sy) = match sy {
        None => (cx.then(|| pooled_copy(&sx)), cx.then(|| pooled_copy(&sx))),
        Some(sy) if cx => (cy.then(|| pooled_copy(&sx)), Some(sy)),
        Some(sy) => {
            tl_release(sy);
            (cy.then(|| pooled_copy(&sx)), None)
        }
    };
    tl_release(sx);
    tasks.push(Task::Combine {
        half,
        sx: keep_sx,
        sy: keep_sy,
        both_carried: cx && cy,
    });
    // Results land in the order middle, low, high.
    tasks.push(high);
    tasks.push(low);
    tasks.push(middle);
    release_all(std::iter::once(x).chain(y));
}

/// Recombine `low + (mid' - low - high) * B^half + high * B^(2*half)`,
/// where `mid'` is `mid` plus the half-sum carry corrections.
fn combine(
    half: usize,
    mid: &[u8],
    low: &[u8],
    high: &[u8],
    sx: Option<&[u8]>,
    sy: Option<&[u8]>,
    both_carried: bool,
) -> Vec<u8> {
    let width = 2 * half;
    let mut middle = tl_acquire(width + 1);
    middle[..width].copy_from_slice(mid);
    if let Some(sy) = sy {
        digits::add_at(&mut middle, sy, half);
    }
    if let Some(sx) = sx {
        digits::add_at(&mut middle, sx, half);
    }
    if both_carried {
        digits::add_scalar(&mut middle[width..], 1);
    }
    digits::sub_at(&mut middle, high, 0);
    digits::sub_at(&mut middle, low, 0);

    let mut out = tl_acquire(2 * width);
    out[..width].copy_from_slice(low);
    out[width..].copy_from_slice(high);
    digits::add_at(&mut out, &middle, half);
    tl_release(middle);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BigIntError;
    use byteint_memory::thread_local::{tl_clear, tl_stats};

    fn int(v: i128) -> BigInteger {
        BigInteger::from_i128(v, &Limits::new()).unwrap()
    }

    fn noise(len: usize, seed: u32) -> Vec<u8> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                (state >> 24) as u8
            })
            .collect()
    }

    fn reference(a: &[u8], b: &[u8]) -> Vec<u8> {
        let mut out = vec![0; a.len() + b.len()];
        schoolbook(a, b, &mut out);
        digits::trim(&mut out);
        out
    }

    #[test]
    fn small_products_and_signs() {
        assert_eq!(int(12).checked_mul(&int(-12)).unwrap().to_i128(), Some(-144));
        assert_eq!(int(-255).checked_mul(&int(-255)).unwrap().to_i128(), Some(65_025));
        let z = int(-5).checked_mul(&int(0)).unwrap();
        assert!(z.is_zero());
        assert!(z.is_negative());
    }

    #[test]
    fn fast_paths() {
        assert_eq!(int(1).checked_mul(&int(-300)).unwrap().to_i128(), Some(-300));
        assert_eq!(int(300).checked_mul(&int(2)).unwrap().to_i128(), Some(600));
        assert_eq!(int(65_536).checked_mul(&int(7)).unwrap().digits(), &[0, 0, 7]);
        assert_eq!(int(-9).square().unwrap().to_i128(), Some(81));
    }

    #[test]
    fn square_of_all_ones() {
        for n in [40usize, 100] {
            let limits = Limits::new();
            let a = BigInteger::from_owned_le_bytes(vec![0xFF; n], &limits).unwrap();
            let sq = a.square().unwrap();
            let mut expected = vec![0u8; 2 * n];
            expected[0] = 1;
            expected[n] = 0xFE;
            expected[n + 1..].fill(0xFF);
            assert_eq!(sq.digits(), &expected[..], "n = {n}");
            assert_eq!(a.checked_mul(&a).unwrap(), sq);
        }
    }

    #[test]
    fn engine_matches_schoolbook() {
        let limits = Limits::new();
        for (la, lb, seed) in [(70, 150, 1), (33, 33, 2), (128, 128, 3), (64, 200, 4)] {
            let a = noise(la, seed);
            let b = noise(lb, seed + 100);
            let mut product = karatsuba(&a, &b, &limits).unwrap();
            digits::trim(&mut product);
            assert_eq!(product, reference(&a, &b), "{la}x{lb}");
        }
    }

    #[test]
    fn half_sum_carries_are_corrected() {
        let limits = Limits::new();
        let a = vec![0xFF; 64];
        let b = noise(64, 9);
        let mut product = karatsuba(&a, &b, &limits).unwrap();
        digits::trim(&mut product);
        assert_eq!(product, reference(&a, &b));
    }

    #[test]
    fn size_bounds() {
        let limits = Limits::with_max_size(3).unwrap();
        let n = BigInteger::from_i128(256, &limits).unwrap();
        assert_eq!(n.checked_mul(&n).unwrap().digits(), &[0, 0, 1]);
        let m = BigInteger::from_i128(0xFFFF, &limits).unwrap();
        assert_eq!(m.checked_mul(&m).unwrap_err(), BigIntError::Size { len: 4, max: 3 });
        let big = BigInteger::from_i128(65_536, &limits).unwrap();
        assert_eq!(big.checked_mul(&big).unwrap_err(), BigIntError::Size { len: 5, max: 3 });
    }

    #[test]
    fn karatsuba_checks_size_at_combine() {
        let mut a = noise(50, 5);
        *a.last_mut().unwrap() = 0xFF;
        let exact = Limits::with_max_size(100).unwrap();
        assert_eq!(mul_magnitudes(&a, &a, &exact).unwrap().len(), 100);
        // Passes the 99-digit lower bound, fails once the product is known.
        let tight = Limits::with_max_size(99).unwrap();
        assert_eq!(
            mul_magnitudes(&a, &a, &tight).unwrap_err(),
            BigIntError::Size { len: 100, max: 99 }
        );
    }

    #[test]
    fn mul_assign_is_transactional() {
        let limits = Limits::with_max_size(2).unwrap();
        let mut n = BigInteger::from_i128(300, &limits).unwrap();
        assert!(n.mul_assign_checked(&n.clone()).is_err());
        assert_eq!(n.to_i128(), Some(300));
        n.mul_assign_checked(&BigInteger::from_i128(-2, &limits).unwrap()).unwrap();
        assert_eq!(n.to_i128(), Some(-600));
    }

    #[test]
    fn scratch_buffers_are_recycled() {
        tl_clear();
        let limits = Limits::new();
        let a = noise(200, 7);
        let b = noise(180, 8);
        let before = tl_stats();
        karatsuba(&a, &b, &limits).unwrap();
        assert!(tl_stats().hits > before.hits);
    }
}
