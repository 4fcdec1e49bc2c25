//! Range mapping, greatest common divisor and random values.

use rand::Rng;

use crate::config::Limits;
use crate::constants::MAX_SIZE_CEILING;
use crate::digits;
use crate::division::divmod_magnitudes;
use crate::error::{BigIntError, Result};
use crate::integer::BigInteger;
use crate::rounding::DivRounding;

impl BigInteger {
    /// Map `self` linearly from `[from_min, from_max]` onto
    /// `[to_min, to_max]`, rounding to nearest. With `clamp`, the result is
    /// held inside the target bounds whichever order they are given in.
    ///
    /// # Errors
    /// `Domain` when either pair of bounds is equal.
    pub fn map_range(
        &self,
        from_min: &Self,
        from_max: &Self,
        to_min: &Self,
        to_max: &Self,
        clamp: bool,
    ) -> Result<Self> {
        if from_min == from_max || to_min == to_max {
            return Err(BigIntError::domain("range bounds must differ"));
        }
        let scaled = self
            .checked_sub(from_min)?
            .checked_mul(&to_max.checked_sub(to_min)?)?
            .checked_div(&from_max.checked_sub(from_min)?, DivRounding::Round)?;
        let mapped = scaled.checked_add(to_min)?;
        if !clamp {
            return Ok(mapped);
        }
        let (lo, hi) = if to_min <= to_max {
            (to_min, to_max)
        } else {
            (to_max, to_min)
        };
        let bounded = if mapped < *lo {
            lo
        } else if mapped > *hi {
            hi
        } else {
            return Ok(mapped);
        };
        self.sibling(bounded.sign, bounded.digits.clone())
    }

    /// Greatest common divisor of the magnitudes; never negative and
    /// `gcd(0, 0) == 0`. The result uses `a`'s limits.
    #[must_use]
    pub fn gcd(a: &Self, b: &Self) -> Self {
        let mut x = a.digits.clone();
        let mut y = b.digits.clone();
        while !digits::is_zero(&y) {
            let (_, r) = divmod_magnitudes(&x, &y);
            x = std::mem::replace(&mut y, r);
        }
        Self::from_parts_trusted(true, x, &a.limits)
    }

    /// Pseudo-random value in `[min, max]` from the thread-local generator.
    ///
    /// Not suitable for cryptographic use.
    pub fn random_int(min: &Self, max: &Self, limits: &Limits) -> Result<Self> {
        Self::random_int_with(&mut rand::rng(), min, max, limits)
    }

    /// Pseudo-random value in `[min, max]` drawn from `rng`.
    ///
    /// Draws 64 bits and maps `[0, 2^64 - 1]` onto the target range, so
    /// ranges wider than 2^64 are sampled sparsely.
    pub fn random_int_with<R: Rng + ?Sized>(
        rng: &mut R,
        min: &Self,
        max: &Self,
        limits: &Limits,
    ) -> Result<Self> {
        if min == max {
            return Self::from_parts(min.sign, min.digits.clone(), limits);
        }
        // Intermediate products are wider than either bound.
        let scratch = Limits::with_max_size(MAX_SIZE_CEILING)?;
        let rebind = |v: &Self| Self::from_parts_trusted(v.sign, v.digits.clone(), &scratch);
        let sample = Self::from_u64(rng.random::<u64>(), &scratch)?;
        let lowest = Self::zero(&scratch);
        let highest = Self::from_u64(u64::MAX, &scratch)?;
        let mapped = sample.map_range(&lowest, &highest, &rebind(min), &rebind(max), true)?;
        Self::from_parts(mapped.sign, mapped.digits, limits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn int(v: i128) -> BigInteger {
        BigInteger::from_i128(v, &Limits::new()).unwrap()
    }

    #[test]
    fn map_range_scales_and_rounds() {
        let m = int(5).map_range(&int(0), &int(10), &int(0), &int(100), false).unwrap();
        assert_eq!(m.to_i128(), Some(50));
        let m = int(1).map_range(&int(0), &int(3), &int(0), &int(10), false).unwrap();
        assert_eq!(m.to_i128(), Some(3));
        let m = int(2).map_range(&int(0), &int(3), &int(0), &int(10), false).unwrap();
        assert_eq!(m.to_i128(), Some(7));
        let m = int(5).map_range(&int(0), &int(10), &int(100), &int(0), false).unwrap();
        assert_eq!(m.to_i128(), Some(50));
        let m = int(-5).map_range(&int(-10), &int(10), &int(0), &int(20), false).unwrap();
        assert_eq!(m.to_i128(), Some(5));
    }

    #[test]
    fn map_range_clamps_in_either_order() {
        let m = int(20).map_range(&int(0), &int(10), &int(0), &int(100), false).unwrap();
        assert_eq!(m.to_i128(), Some(200));
        let m = int(20).map_range(&int(0), &int(10), &int(0), &int(100), true).unwrap();
        assert_eq!(m.to_i128(), Some(100));
        let m = int(20).map_range(&int(0), &int(10), &int(100), &int(0), true).unwrap();
        assert_eq!(m.to_i128(), Some(0));
        let m = int(-3).map_range(&int(0), &int(10), &int(0), &int(100), true).unwrap();
        assert_eq!(m.to_i128(), Some(0));
    }

    #[test]
    fn map_range_rejects_degenerate_bounds() {
        let err = int(1).map_range(&int(2), &int(2), &int(0), &int(1), false);
        assert!(matches!(err, Err(BigIntError::Domain(_))));
        let err = int(1).map_range(&int(0), &int(2), &int(5), &int(5), false);
        assert!(matches!(err, Err(BigIntError::Domain(_))));
    }

    #[test]
    fn gcd_values() {
        assert_eq!(BigInteger::gcd(&int(45), &int(100)).to_i128(), Some(5));
        assert_eq!(BigInteger::gcd(&int(-12), &int(18)).to_i128(), Some(6));
        assert_eq!(BigInteger::gcd(&int(0), &int(-7)).to_i128(), Some(7));
        assert_eq!(BigInteger::gcd(&int(17), &int(0)).to_i128(), Some(17));
        let zero = BigInteger::gcd(&int(0), &BigInteger::neg_zero(&Limits::new()));
        assert!(zero.is_zero());
        assert!(!zero.is_negative());
    }

    #[test]
    fn gcd_of_wide_values() {
        let limits = Limits::new();
        let p = BigInteger::parse("340282366920938463463374607431768211507", 10, &limits).unwrap();
        let a = p.checked_mul(&int(6)).unwrap();
        let b = p.checked_mul(&int(35)).unwrap();
        assert_eq!(BigInteger::gcd(&a, &b), p);
    }

    #[test]
    fn random_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let limits = Limits::new();
        for _ in 0..200 {
            let r = BigInteger::random_int_with(&mut rng, &int(-5), &int(5), &limits).unwrap();
            assert!(r >= int(-5) && r <= int(5), "{r}");
        }
        let r = BigInteger::random_int(&int(10), &int(10), &limits).unwrap();
        assert_eq!(r.to_i128(), Some(10));
    }

    #[test]
    fn random_is_reproducible_with_a_seed() {
        let limits = Limits::new();
        let lo = int(0);
        let hi = BigInteger::parse("1000000000000000000000", 10, &limits).unwrap();
        let a = BigInteger::random_int_with(&mut StdRng::seed_from_u64(42), &lo, &hi, &limits).unwrap();
        let b = BigInteger::random_int_with(&mut StdRng::seed_from_u64(42), &lo, &hi, &limits).unwrap();
        assert_eq!(a, b);
        assert!(a <= hi);
    }

    #[test]
    fn random_result_uses_caller_limits() {
        let limits = Limits::with_max_size(1).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let narrow = |v: i128| BigInteger::from_i128(v, &limits).unwrap();
        let r = BigInteger::random_int_with(&mut rng, &narrow(-200), &narrow(200), &limits).unwrap();
        assert!(r.limits().shares_with(&limits));
        assert!(BigInteger::random_int_with(&mut rng, &int(1000), &int(2000), &limits)
            .unwrap_err()
            .is_size());
    }
}
