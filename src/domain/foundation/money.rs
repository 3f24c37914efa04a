//! Money amounts in the minor currency unit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount in paise (1/100 of a rupee).
///
/// Prices travel between the backend and the payment gateway as integer
/// paise, so all arithmetic stays in integers. Amounts come from the
/// backend, so additions are checked.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Paise(u64);

impl Paise {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// Whole rupees, rounded half away from zero like `toFixed(0)`.
    pub fn rupees(&self) -> u64 {
        self.0 / 100 + u64::from(self.0 % 100 >= 50)
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// `None` when the sum does not fit.
    pub fn checked_add(self, other: Paise) -> Option<Paise> {
        self.0.checked_add(other.0).map(Paise)
    }

    /// Subtraction that stops at zero.
    pub fn saturating_sub(self, other: Paise) -> Paise {
        Paise(self.0.saturating_sub(other.0))
    }
}

impl From<u64> for Paise {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Paise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{}", self.rupees())
    }
}
