//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Paise, ValidationError};

/// A whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: i64) -> Result<Self, ValidationError> {
        if !(0..=100).contains(&value) {
            return Err(ValidationError::out_of_range("percentage", 0, 100, value));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// This share of `amount`, rounded half-up to the nearest paisa.
    ///
    /// Never exceeds `amount` because the percentage is capped at 100.
    pub fn of(&self, amount: Paise) -> Paise {
        let scaled = u128::from(amount.value()) * u128::from(self.0);
        let share = (scaled + 50) / 100;
        Paise::new(u64::try_from(share).unwrap_or(amount.value()))
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl<'de> Deserialize<'de> for Percentage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = i64::deserialize(deserializer)?;
        Percentage::try_new(raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_out_of_range() {
        assert!(Percentage::try_new(-1).is_err());
        assert!(Percentage::try_new(101).is_err());
        match Percentage::try_new(150) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 150);
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn of_rounds_half_up() {
        assert_eq!(Percentage::new(10).of(Paise::new(89800)), Paise::new(8980));
        assert_eq!(Percentage::new(10).of(Paise::new(139700)), Paise::new(13970));
        // 15% of 1003 = 150.45 -> 150
        assert_eq!(Percentage::new(15).of(Paise::new(1003)), Paise::new(150));
        // 50% of 5 = 2.5 -> 3
        assert_eq!(Percentage::new(50).of(Paise::new(5)), Paise::new(3));
    }

    #[test]
    fn of_never_exceeds_amount() {
        assert_eq!(Percentage::HUNDRED.of(Paise::new(777)), Paise::new(777));
        assert_eq!(Percentage::ZERO.of(Paise::new(777)), Paise::ZERO);
    }

    #[test]
    fn of_handles_largest_amount() {
        let max = Paise::new(u64::MAX);
        assert_eq!(Percentage::HUNDRED.of(max), max);
        assert_eq!(
            Percentage::new(10).of(max),
            Paise::new(1_844_674_407_370_955_162)
        );
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(Percentage::new(10).to_string(), "10%");
    }

    #[test]
    fn deserialization_validates_range() {
        let pct: Percentage = serde_json::from_str("10").unwrap();
        assert_eq!(pct.value(), 10);
        assert!(serde_json::from_str::<Percentage>("120").is_err());
    }
}
