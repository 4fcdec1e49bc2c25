//! Base specifiers and the static base-name table.

use std::fmt;

use crate::constants::MAX_RADIX;

/// A resolved numeric base.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base {
    /// Base 256 written as Unicode Braille Patterns, one char per byte.
    Braille,
    /// Plain radix in `1..=2^32`.
    Radix(u64),
    /// Radix 2, 8 or 16 rendered with its `0b`/`0o`/`0x` prefix.
    Prefixed(u64),
}

impl Base {
    /// Resolve a numeric base. Numeric 16 resolves to its prefixed form.
    #[must_use]
    pub fn from_number(n: u64) -> Option<Self> {
        match n {
            16 => Some(Self::Prefixed(16)),
            1..=MAX_RADIX => Some(Self::Radix(n)),
            _ => None,
        }
    }

    /// Resolve a base name (case-insensitive) or a decimal numeral.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let key = name.trim().to_ascii_lowercase();
        if !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit()) {
            return key.parse::<u64>().ok().and_then(Self::from_number);
        }
        let base = match key.as_str() {
            "unary" | "tally" => Self::Radix(1),
            "b" | "bin" | "binary" | "bit" | "bits" | "1bit" => Self::Radix(2),
            "0b" => Self::Prefixed(2),
            "ternary" | "trinary" | "trit" | "trits" => Self::Radix(3),
            "quaternary" | "quad" | "quads" | "2bit" => Self::Radix(4),
            "quinary" => Self::Radix(5),
            "senary" | "heximal" => Self::Radix(6),
            "septenary" => Self::Radix(7),
            "o" | "oct" | "octal" | "3bit" => Self::Radix(8),
            "0o" => Self::Prefixed(8),
            "nonary" => Self::Radix(9),
            "d" | "dec" | "decimal" | "denary" => Self::Radix(10),
            "undecimal" => Self::Radix(11),
            "duodecimal" | "dozenal" => Self::Radix(12),
            "h" | "hex" | "hexadecimal" | "0x" | "4bit" | "nibble" | "nibbles" => {
                Self::Prefixed(16)
            }
            "vigesimal" => Self::Radix(20),
            "duotrigesimal" | "5bit" => Self::Radix(32),
            "hexatrigesimal" | "alphanumeric" => Self::Radix(36),
            "sexagesimal" | "minutes" | "seconds" => Self::Radix(60),
            "byte" | "bytes" | "8bit" => Self::Radix(256),
            "braille" => Self::Braille,
            "16bit" | "word" | "words" => Self::Radix(65_536),
            "24bit" => Self::Radix(16_777_216),
            "32bit" | "dword" | "dwords" => Self::Radix(MAX_RADIX),
            _ => return None,
        };
        Some(base)
    }

    /// Numeric radix; Braille counts as 256.
    #[must_use]
    pub fn radix(self) -> u64 {
        match self {
            Self::Braille => 256,
            Self::Radix(n) | Self::Prefixed(n) => n,
        }
    }

    /// Numeric tag: 0 for Braille, otherwise the radix.
    #[must_use]
    pub fn tag(self) -> u64 {
        match self {
            Self::Braille => 0,
            other => other.radix(),
        }
    }

    /// `0b`, `0o` or `0x` for the prefixed forms.
    #[must_use]
    pub fn prefix(self) -> Option<&'static str> {
        match self {
            Self::Prefixed(2) => Some("0b"),
            Self::Prefixed(8) => Some("0o"),
            Self::Prefixed(16) => Some("0x"),
            _ => None,
        }
    }

    /// Bits per digit when the radix is a power of two above 1.
    #[must_use]
    pub fn bits_per_digit(self) -> Option<u32> {
        let radix = self.radix();
        (radix >= 2 && radix.is_power_of_two()).then(|| radix.trailing_zeros())
    }
}

impl fmt::Display for Base {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Braille => f.write_str("braille"),
            Self::Radix(n) | Self::Prefixed(n) => write!(f, "{n}"),
        }
    }
}

/// Anything that names a base: a number, a name, or a resolved [`Base`].
///
/// Conversion yields `None` for unsupported bases.
pub trait IntoBase {
    /// Resolve to a [`Base`], or `None` when unsupported.
    fn into_base(self) -> Option<Base>;
}

impl IntoBase for Base {
    fn into_base(self) -> Option<Base> {
        match self {
            Self::Radix(n) if !(1..=MAX_RADIX).contains(&n) => None,
            Self::Prefixed(n) if !matches!(n, 2 | 8 | 16) => None,
            other => Some(other),
        }
    }
}

impl IntoBase for Option<Base> {
    fn into_base(self) -> Option<Base> {
        self.and_then(IntoBase::into_base)
    }
}

impl IntoBase for &str {
    fn into_base(self) -> Option<Base> {
        Base::from_name(self)
    }
}

impl IntoBase for &String {
    fn into_base(self) -> Option<Base> {
        Base::from_name(self)
    }
}

impl IntoBase for String {
    fn into_base(self) -> Option<Base> {
        Base::from_name(&self)
    }
}

macro_rules! into_base_unsigned {
    ($($t:ty),*) => {$(
        impl IntoBase for $t {
            fn into_base(self) -> Option<Base> {
                u64::try_from(self).ok().and_then(Base::from_number)
            }
        }
    )*};
}

into_base_unsigned!(u8, u16, u32, u64, usize, i32, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_range() {
        assert_eq!(Base::from_number(0), None);
        assert_eq!(Base::from_number(1), Some(Base::Radix(1)));
        assert_eq!(Base::from_number(10), Some(Base::Radix(10)));
        assert_eq!(Base::from_number(16), Some(Base::Prefixed(16)));
        assert_eq!(Base::from_number(MAX_RADIX), Some(Base::Radix(MAX_RADIX)));
        assert_eq!(Base::from_number(MAX_RADIX + 1), None);
    }

    #[test]
    fn names_are_case_insensitive() {
        assert_eq!(Base::from_name("HEX"), Some(Base::Prefixed(16)));
        assert_eq!(Base::from_name("Braille"), Some(Base::Braille));
        assert_eq!(Base::from_name(" byte "), Some(Base::Radix(256)));
        assert_eq!(Base::from_name("Dozenal"), Some(Base::Radix(12)));
    }

    #[test]
    fn short_and_alias_names() {
        assert_eq!(Base::from_name("h"), Some(Base::Prefixed(16)));
        assert_eq!(Base::from_name("nibbles"), Some(Base::Prefixed(16)));
        assert_eq!(Base::from_name("d"), Some(Base::Radix(10)));
        assert_eq!(Base::from_name("3bit"), Some(Base::Radix(8)));
        assert_eq!(Base::from_name("trinary"), Some(Base::Radix(3)));
        assert_eq!(Base::from_name("Minutes"), Some(Base::Radix(60)));
        assert_eq!(Base::from_name("dwords"), Some(Base::Radix(MAX_RADIX)));
    }

    #[test]
    fn numerals_resolve_through_numbers() {
        assert_eq!(Base::from_name("7"), Some(Base::Radix(7)));
        assert_eq!(Base::from_name("16"), Some(Base::Prefixed(16)));
        assert_eq!(Base::from_name("0"), None);
        assert_eq!(Base::from_name("99999999999999999999999"), None);
    }

    #[test]
    fn unknown_names() {
        assert_eq!(Base::from_name("nope"), None);
        assert_eq!(Base::from_name(""), None);
        assert_eq!(Base::from_name("-2"), None);
    }

    #[test]
    fn into_base_variants() {
        assert_eq!(2u8.into_base(), Some(Base::Radix(2)));
        assert_eq!((-3i32).into_base(), None);
        assert_eq!("0b".into_base(), Some(Base::Prefixed(2)));
        assert_eq!(Base::Prefixed(10).into_base(), None);
        assert_eq!(Base::Radix(0).into_base(), None);
    }

    #[test]
    fn tags_and_prefixes() {
        assert_eq!(Base::Braille.tag(), 0);
        assert_eq!(Base::Braille.radix(), 256);
        assert_eq!(Base::Prefixed(8).prefix(), Some("0o"));
        assert_eq!(Base::Radix(8).prefix(), None);
    }

    #[test]
    fn power_of_two_widths() {
        assert_eq!(Base::Radix(2).bits_per_digit(), Some(1));
        assert_eq!(Base::Prefixed(16).bits_per_digit(), Some(4));
        assert_eq!(Base::Braille.bits_per_digit(), Some(8));
        assert_eq!(Base::Radix(MAX_RADIX).bits_per_digit(), Some(32));
        assert_eq!(Base::Radix(10).bits_per_digit(), None);
        assert_eq!(Base::Radix(1).bits_per_digit(), None);
    }
}
