//! Discount rate value object (fraction in `[0, 1)`).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A tuition discount expressed as a fraction of the fee.
///
/// Always in `[0, 1)`: a full discount is not representable, so a priced
/// line item can never be free by discount alone.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct DiscountRate(f64);

impl DiscountRate {
    /// No discount.
    pub const NONE: Self = Self(0.0);

    /// Creates a DiscountRate, returning error if outside `[0, 1)` or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..1.0).contains(&value) {
            return Err(ValidationError::out_of_range(
                "discount",
                0,
                "1 (exclusive)",
                value,
            ));
        }
        Ok(Self(value))
    }

    /// Creates a DiscountRate from whole percent (e.g. `10` for 10%).
    pub fn from_percent(percent: u8) -> Result<Self, ValidationError> {
        Self::try_new(f64::from(percent) / 100.0)
    }

    /// Returns the fraction.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the share of the fee still charged (`1 - discount`).
    pub fn remaining(&self) -> f64 {
        1.0 - self.0
    }
}

impl Default for DiscountRate {
    fn default() -> Self {
        Self::NONE
    }
}

impl TryFrom<f64> for DiscountRate {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<DiscountRate> for f64 {
    fn from(rate: DiscountRate) -> Self {
        rate.0
    }
}

impl fmt::Display for DiscountRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", (self.0 * 100.0).round())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_zero_and_fractions() {
        assert!(DiscountRate::try_new(0.0).is_ok());
        assert!(DiscountRate::try_new(0.15).is_ok());
        assert!(DiscountRate::try_new(0.999).is_ok());
    }

    #[test]
    fn rejects_full_and_negative_discount() {
        assert!(DiscountRate::try_new(1.0).is_err());
        assert!(DiscountRate::try_new(-0.1).is_err());
        assert!(DiscountRate::try_new(f64::NAN).is_err());
    }

    #[test]
    fn out_of_range_reports_field() {
        match DiscountRate::try_new(1.5) {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "discount");
                assert_eq!(actual, "1.5");
            }
            other => panic!("Expected OutOfRange error, got {:?}", other),
        }
    }

    #[test]
    fn from_percent_converts() {
        let rate = DiscountRate::from_percent(10).unwrap();
        assert!((rate.value() - 0.1).abs() < f64::EPSILON);
        assert!(DiscountRate::from_percent(100).is_err());
    }

    #[test]
    fn remaining_is_complement() {
        let rate = DiscountRate::try_new(0.25).unwrap();
        assert!((rate.remaining() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn displays_as_percent() {
        assert_eq!(DiscountRate::try_new(0.1).unwrap().to_string(), "10%");
        assert_eq!(DiscountRate::NONE.to_string(), "0%");
    }

    #[test]
    fn deserializes_through_validation() {
        let rate: DiscountRate = serde_json::from_str("0.2").unwrap();
        assert!((rate.value() - 0.2).abs() < f64::EPSILON);
        assert!(serde_json::from_str::<DiscountRate>("1.2").is_err());
    }
}
