use std::fmt;

use serde::{Deserialize, Serialize};

/// A whole-number percentage that always lies in `[0, 100]`.
///
/// Every constructor clamps, so a value outside the range never reaches a
/// progress indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: Self = Self(0);
    pub const MAX: Self = Self(100);

    /// Clamps `value` into `[0, 100]` and rounds to the nearest whole number.
    /// `NaN` becomes zero.
    pub fn new(value: impl Into<f64>) -> Self {
        let value: f64 = value.into();
        if value.is_nan() {
            return Self::MIN;
        }
        // In range after the clamp, so the cast cannot truncate.
        Self(value.clamp(0.0, 100.0).round() as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Percentage {
    fn from(value: u8) -> Self {
        Self::new(value)
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
        f64::deserialize(deserializer).map(Self::new)
    }
}
