//! Rounding modes for shifts, division and modulo.
//!
//! Division and modulo share one rule: with magnitude quotient `Q` and a
//! non-zero magnitude remainder `R`, a mode either keeps `Q` or bumps it to
//! `Q + 1`, and the remainder follows from that choice.

use std::fmt;
use std::str::FromStr;

use crate::error::BigIntError;

/// Rounding of bits discarded by a right shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShiftRounding {
    /// Half up on the discarded part.
    Round,
    /// Drop the discarded part.
    #[default]
    Floor,
    /// Bump the magnitude when anything non-zero is discarded.
    Ceil,
}

/// Rounding of a division quotient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DivRounding {
    /// Nearest, ties away from zero.
    Round,
    /// Toward zero.
    #[default]
    Trunc,
    /// Away from zero.
    Raise,
    /// Toward negative infinity.
    Floor,
    /// Toward positive infinity.
    Ceil,
}

/// Remainder convention for modulo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ModRounding {
    /// Always non-negative.
    #[default]
    Euclid,
    /// Sign of the dividend.
    Trunc,
    /// Sign of the divisor.
    Floor,
    /// Sign opposite to the divisor.
    Ceil,
    /// Magnitude at most half the divisor.
    Round,
}

/// How a mode settles a division with a non-zero remainder.
pub(crate) trait RoundingRule: Copy {
    /// Whether the magnitude quotient moves one step away from zero.
    /// `half_or_more` reports `2R >= D`.
    fn bumps(self, dividend_sign: bool, divisor_sign: bool, half_or_more: impl FnOnce() -> bool)
        -> bool;

    /// Sign given to a zero remainder.
    fn zero_remainder_sign(self, dividend_sign: bool, divisor_sign: bool) -> bool;
}

impl RoundingRule for DivRounding {
    fn bumps(
        self,
        dividend_sign: bool,
        divisor_sign: bool,
        half_or_more: impl FnOnce() -> bool,
    ) -> bool {
        match self {
            Self::Trunc => false,
            Self::Raise => true,
            Self::Floor => dividend_sign != divisor_sign,
            Self::Ceil => dividend_sign == divisor_sign,
            Self::Round => half_or_more(),
        }
    }

    fn zero_remainder_sign(self, dividend_sign: bool, divisor_sign: bool) -> bool {
        match self {
            Self::Trunc | Self::Raise | Self::Round => dividend_sign,
            Self::Floor => divisor_sign,
            Self::Ceil => !divisor_sign,
        }
    }
}

impl RoundingRule for ModRounding {
    fn bumps(
        self,
        dividend_sign: bool,
        divisor_sign: bool,
        half_or_more: impl FnOnce() -> bool,
    ) -> bool {
        match self {
            Self::Euclid => !dividend_sign,
            Self::Trunc => false,
            Self::Floor => dividend_sign != divisor_sign,
            Self::Ceil => dividend_sign == divisor_sign,
            Self::Round => half_or_more(),
        }
    }

    fn zero_remainder_sign(self, dividend_sign: bool, divisor_sign: bool) -> bool {
        match self {
            Self::Euclid => true,
            Self::Trunc | Self::Round => dividend_sign,
            Self::Floor => divisor_sign,
            Self::Ceil => !divisor_sign,
        }
    }
}

macro_rules! keyword_enum {
    ($name:ident { $($variant:ident => $keyword:literal),* $(,)? }) => {
        impl $name {
            /// Every mode, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),*];

            /// The keyword naming this mode.
            #[must_use]
            pub fn keyword(self) -> &'static str {
                match self {
                    $(Self::$variant => $keyword),*
                }
            }
        }

        impl FromStr for $name {
            type Err = BigIntError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($keyword) {
                        return Ok(Self::$variant);
                    }
                )*
                Err(BigIntError::domain(format!(
                    "unknown {} mode {s:?}",
                    stringify!($name)
                )))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.keyword())
            }
        }
    };
}

keyword_enum!(ShiftRounding {
    Round => "round",
    Floor => "floor",
    Ceil => "ceil",
});

keyword_enum!(DivRounding {
    Round => "round",
    Trunc => "trunc",
    Raise => "raise",
    Floor => "floor",
    Ceil => "ceil",
});

keyword_enum!(ModRounding {
    Euclid => "euclid",
    Trunc => "trunc",
    Floor => "floor",
    Ceil => "ceil",
    Round => "round",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keywords_parse() {
        assert_eq!("round".parse::<DivRounding>(), Ok(DivRounding::Round));
        assert_eq!("RAISE".parse::<DivRounding>(), Ok(DivRounding::Raise));
        assert_eq!("euclid".parse::<ModRounding>(), Ok(ModRounding::Euclid));
        assert_eq!("ceil".parse::<ShiftRounding>(), Ok(ShiftRounding::Ceil));
    }

    #[test]
    fn unknown_keyword_is_domain_error() {
        let err = "sideways".parse::<ModRounding>().unwrap_err();
        assert!(matches!(err, BigIntError::Domain(_)));
        assert!("euclid".parse::<DivRounding>().is_err());
        assert!("raise".parse::<ModRounding>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for &mode in DivRounding::ALL {
            assert_eq!(mode.to_string().parse::<DivRounding>(), Ok(mode));
        }
        for &mode in ModRounding::ALL {
            assert_eq!(mode.to_string().parse::<ModRounding>(), Ok(mode));
        }
    }

    #[test]
    fn defaults() {
        assert_eq!(DivRounding::default(), DivRounding::Trunc);
        assert_eq!(ModRounding::default(), ModRounding::Euclid);
        assert_eq!(ShiftRounding::default(), ShiftRounding::Floor);
    }

    fn never() -> bool {
        unreachable!("half comparison not consulted")
    }

    #[test]
    fn bump_table() {
        assert!(!DivRounding::Trunc.bumps(true, false, never));
        assert!(DivRounding::Raise.bumps(true, true, never));
        assert!(DivRounding::Floor.bumps(false, true, never));
        assert!(!DivRounding::Ceil.bumps(false, true, never));
        assert!(DivRounding::Round.bumps(true, true, || true));
        assert!(ModRounding::Euclid.bumps(false, false, never));
        assert!(!ModRounding::Euclid.bumps(true, false, never));
    }

    #[test]
    fn zero_remainder_signs() {
        assert!(ModRounding::Euclid.zero_remainder_sign(false, false));
        assert!(!ModRounding::Trunc.zero_remainder_sign(false, true));
        assert!(!ModRounding::Floor.zero_remainder_sign(true, false));
        assert!(!ModRounding::Ceil.zero_remainder_sign(true, true));
        assert!(ModRounding::Round.zero_remainder_sign(true, false));
    }
}
