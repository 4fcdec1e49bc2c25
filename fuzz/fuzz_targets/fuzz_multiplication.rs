#![no_main]

use libfuzzer_sys::fuzz_target;

use byteint_core::{BigInteger, DivRounding, Limits};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = 1 + usize::from(data[0]) % data.len();
    let limits = Limits::with_max_size(4096).unwrap();

    let a = BigInteger::from_le_bytes(&data[1..split], &limits).unwrap();
    let b = BigInteger::from_le_bytes(&data[split..], &limits).unwrap();

    let product = a.checked_mul(&b).unwrap();
    assert_eq!(product, b.checked_mul(&a).unwrap());
    if !b.is_zero() {
        let back = product.checked_div(&b, DivRounding::Trunc).unwrap();
        assert_eq!(back, a);
    }
    assert_eq!(a.square().unwrap(), a.checked_mul(&a).unwrap());
});
