//! The magic number: the elimination stride.
//!
//! A `MagicNumber` can only be constructed inside `[MAGIC_NUMBER_MIN,
//! MAGIC_NUMBER_MAX]`, so the engine never re-checks it.

use serde::{Deserialize, Serialize};
use std::num::IntErrorKind;
use std::str::FromStr;

use super::error::{MashError, Result};

/// Smallest accepted magic number.
pub const MAGIC_NUMBER_MIN: u8 = 2;

/// Largest accepted magic number.
pub const MAGIC_NUMBER_MAX: u8 = 10;

/// Validated magic number in `[2, 10]`.
///
/// ```
/// use mash::core::MagicNumber;
///
/// assert_eq!(MagicNumber::new(3).unwrap().get(), 3);
/// assert!(MagicNumber::new(1).is_err());
/// assert!(MagicNumber::new(11).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct MagicNumber(u8);

impl MagicNumber {
    /// Validate and wrap a magic number.
    pub fn new(value: i64) -> Result<Self> {
        if value < i64::from(MAGIC_NUMBER_MIN) || value > i64::from(MAGIC_NUMBER_MAX) {
            return Err(out_of_range(value));
        }
        Ok(Self(value as u8))
    }

    /// Wrap a value already drawn inside the bounds.
    pub(crate) fn from_drawn(value: u8) -> Self {
        debug_assert!((MAGIC_NUMBER_MIN..=MAGIC_NUMBER_MAX).contains(&value));
        Self(value)
    }

    /// Get the raw value.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The stride as a sequence offset (`value - 1`).
    #[must_use]
    pub const fn step(self) -> usize {
        self.0 as usize - 1
    }

    /// Every valid magic number, smallest first.
    pub fn all() -> impl Iterator<Item = MagicNumber> {
        (MAGIC_NUMBER_MIN..=MAGIC_NUMBER_MAX).map(MagicNumber)
    }
}

fn out_of_range(value: impl std::fmt::Display) -> MashError {
    MashError::invalid_argument(format!(
        "Magic number must be an integer between {} and {} (inclusive), got {}",
        MAGIC_NUMBER_MIN, MAGIC_NUMBER_MAX, value
    ))
}

impl TryFrom<i64> for MagicNumber {
    type Error = MashError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<MagicNumber> for u8 {
    fn from(magic: MagicNumber) -> Self {
        magic.0
    }
}

impl TryFrom<&serde_json::Value> for MagicNumber {
    type Error = MashError;

    /// Accepts JSON integers only. Floats (even `3.0`), strings and
    /// booleans are rejected.
    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value.as_i64() {
            Some(n) => Self::new(n),
            None => Err(out_of_range(value)),
        }
    }
}

impl FromStr for MagicNumber {
    type Err = MashError;

    /// Parses a decimal integer of any width; integers too wide for `i64`
    /// are out of range rather than a parse failure.
    fn from_str(s: &str) -> Result<Self> {
        let literal = s.trim();
        match literal.parse::<i64>() {
            Ok(n) => Self::new(n),
            Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
                Err(out_of_range(literal))
            }
            Err(_) => Err(out_of_range(format!("`{}`", literal))),
        }
    }
}

impl std::fmt::Display for MagicNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_bounds() {
        assert!(MagicNumber::new(2).is_ok());
        assert!(MagicNumber::new(10).is_ok());
        assert!(matches!(MagicNumber::new(1), Err(MashError::InvalidArgument(_))));
        assert!(matches!(MagicNumber::new(11), Err(MashError::InvalidArgument(_))));
        assert!(MagicNumber::new(-4).is_err());
        assert!(MagicNumber::new(i64::MAX).is_err());
    }

    #[test]
    fn test_step() {
        assert_eq!(MagicNumber::new(2).unwrap().step(), 1);
        assert_eq!(MagicNumber::new(10).unwrap().step(), 9);
    }

    #[test]
    fn test_all() {
        let all: Vec<u8> = MagicNumber::all().map(MagicNumber::get).collect();
        assert_eq!(all, vec![2, 3, 4, 5, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn test_from_json() {
        assert_eq!(MagicNumber::try_from(&json!(7)).unwrap().get(), 7);
        assert!(MagicNumber::try_from(&json!(3.0)).is_err());
        assert!(MagicNumber::try_from(&json!("3")).is_err());
        assert!(MagicNumber::try_from(&json!(true)).is_err());
        assert!(MagicNumber::try_from(&json!(null)).is_err());
        assert!(MagicNumber::try_from(&json!(42)).is_err());
    }

    #[test]
    fn test_serde_validates() {
        let magic: MagicNumber = serde_json::from_str("5").unwrap();
        assert_eq!(magic.get(), 5);
        assert_eq!(serde_json::to_string(&magic).unwrap(), "5");

        assert!(serde_json::from_str::<MagicNumber>("1").is_err());
        assert!(serde_json::from_str::<MagicNumber>("2.5").is_err());
    }

    #[test]
    fn test_parse_wide_integers() {
        assert_eq!("7".parse::<MagicNumber>().unwrap().get(), 7);
        assert_eq!(" 10 ".parse::<MagicNumber>().unwrap().get(), 10);

        // 2**70 and -(2**70)
        for literal in ["1180591620717411303424", "-1180591620717411303424"] {
            let err = literal.parse::<MagicNumber>().unwrap_err();
            assert_eq!(
                err,
                MashError::InvalidArgument(format!(
                    "Magic number must be an integer between 2 and 10 (inclusive), got {}",
                    literal
                ))
            );
        }
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for literal in ["", "3.0", "three", "0x3"] {
            assert!(matches!(literal.parse::<MagicNumber>(), Err(MashError::InvalidArgument(_))), "{}", literal);
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", MagicNumber::new(4).unwrap()), "4");
    }
}
