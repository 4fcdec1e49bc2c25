#![no_main]

use libfuzzer_sys::fuzz_target;

use byteint_core::{BigInteger, Limits};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };
    // Bases 2..=257 plus Braille.
    let base = if selector == 255 {
        "braille".to_owned()
    } else {
        (u64::from(selector) + 2).to_string()
    };
    let limits = Limits::with_max_size(256).unwrap();

    // Arbitrary text must never panic; anything accepted must round-trip.
    if let Ok(value) = BigInteger::parse(text, base.as_str(), &limits) {
        let formatted = value.to_string_radix(base.as_str()).unwrap();
        let back = BigInteger::parse(&formatted, base.as_str(), &limits).unwrap();
        assert_eq!(back, value, "{text:?} in base {base}");
    }
});
