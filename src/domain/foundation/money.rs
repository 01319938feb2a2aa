//! Money value object (non-negative currency amount).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A non-negative currency amount.
///
/// Currency inputs (investment capacity, deal value, capital
/// investment, baseline revenue) must never be negative or non-finite.
/// Profit outputs stay plain `f64` because cumulative profit may be
/// negative.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(from = "f64", into = "f64")]
pub struct Money(f64);

impl Money {
    /// Zero amount.
    pub const ZERO: Self = Self(0.0);

    /// Creates a new Money amount, clamping negatives and non-finite
    /// values to zero.
    pub fn new(amount: f64) -> Self {
        if !amount.is_finite() || amount < 0.0 {
            return Self(0.0);
        }
        Self(amount)
    }

    /// Creates a Money amount, returning an error if negative or
    /// non-finite.
    pub fn try_new(amount: f64) -> Result<Self, ValidationError> {
        if !amount.is_finite() {
            return Err(ValidationError::invalid_format(
                "amount",
                "not a finite number",
            ));
        }
        if amount < 0.0 {
            return Err(ValidationError::out_of_range(
                "amount",
                0.0,
                f64::MAX,
                amount,
            ));
        }
        Ok(Self(amount))
    }

    /// Returns the raw amount.
    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Returns true if the amount is exactly zero.
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<f64> for Money {
    fn from(amount: f64) -> Self {
        Self::new(amount)
    }
}

impl From<Money> for f64 {
    fn from(money: Money) -> Self {
        money.0
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn money_new_accepts_valid_amounts() {
        assert_eq!(Money::new(0.0).amount(), 0.0);
        assert_eq!(Money::new(5_000_000.0).amount(), 5_000_000.0);
    }

    #[test]
    fn money_new_clamps_negative_to_zero() {
        assert_eq!(Money::new(-100.0).amount(), 0.0);
    }

    #[test]
    fn money_new_clamps_non_finite_to_zero() {
        assert_eq!(Money::new(f64::NAN).amount(), 0.0);
        assert_eq!(Money::new(f64::INFINITY).amount(), 0.0);
    }

    #[test]
    fn money_try_new_rejects_negative() {
        assert!(Money::try_new(-0.01).is_err());
        assert!(Money::try_new(0.0).is_ok());
    }

    #[test]
    fn money_try_new_rejects_non_finite() {
        assert!(Money::try_new(f64::NAN).is_err());
        assert!(Money::try_new(f64::INFINITY).is_err());
    }

    #[test]
    fn money_is_zero() {
        assert!(Money::ZERO.is_zero());
        assert!(!Money::new(1.0).is_zero());
    }

    #[test]
    fn money_displays_with_two_decimals() {
        assert_eq!(format!("{}", Money::new(1234.5)), "1234.50");
    }

    #[test]
    fn money_deserialization_clamps_negative() {
        let money: Money = serde_json::from_str("-50.0").unwrap();
        assert_eq!(money.amount(), 0.0);
    }
}
