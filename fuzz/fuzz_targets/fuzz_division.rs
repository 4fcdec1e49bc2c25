#![no_main]

use libfuzzer_sys::fuzz_target;

use byteint_core::{BigInteger, DivRounding, Limits};

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }
    // First byte: signs; second byte: split point.
    let signs = data[0];
    let split = 2 + usize::from(data[1]) % (data.len() - 2);
    let limits = Limits::with_max_size(1024).unwrap();

    let mut n = BigInteger::from_le_bytes(&data[2..split], &limits).unwrap();
    let mut d = BigInteger::from_le_bytes(&data[split..], &limits).unwrap();
    if signs & 1 != 0 {
        n.negate();
    }
    if signs & 2 != 0 {
        d.negate();
    }
    if d.is_zero() {
        assert!(n.checked_div(&d, DivRounding::Trunc).is_err());
        return;
    }

    for &mode in DivRounding::ALL {
        let (q, r) = n.div_rem(&d, mode).unwrap();
        assert!(r.lt_abs(&d), "remainder too large ({mode})");
        let back = q.checked_mul(&d).unwrap().checked_add(&r).unwrap();
        assert_eq!(back, n, "q * d + r != n ({mode})");
    }
});
