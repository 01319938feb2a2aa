//! Score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A fractional score between 0 and 100 inclusive.
///
/// Dimension formulas can produce fractional values (e.g. a financial
/// alignment of 87.5), so the scale is `f64` rather than an integer.
/// Construction clamps, so a `Score` can never hold NaN or an
/// out-of-range value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Score(f64);

impl Score {
    /// Zero score.
    pub const ZERO: Self = Self(0.0);

    /// Maximum score.
    pub const MAX: Self = Self(100.0);

    /// Creates a new Score, clamping to the valid range.
    ///
    /// Non-finite inputs clamp to zero.
    pub fn new(value: f64) -> Self {
        if !value.is_finite() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, 100.0))
    }

    /// Creates a Score, returning an error if out of range.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::invalid_format(
                "score",
                "not a finite number",
            ));
        }
        if !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("score", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the raw value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value rounded to the nearest whole point.
    pub fn round_u8(&self) -> u8 {
        self.0.round() as u8
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl Default for Score {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Score {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<Score> for f64 {
    fn from(score: Score) -> Self {
        score.0
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0)
    }
}
