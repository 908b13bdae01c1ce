//! Monetary amounts using decimal arithmetic.
//!
//! Prices are stored and transferred as decimal strings, never floats, so
//! totals computed at checkout match what the database stores exactly.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Errors that can occur when validating a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The amount is zero or negative.
    #[error("price must be greater than zero")]
    NotPositive,
    /// The amount has more than two fractional digits.
    #[error("price cannot have more than two decimal places")]
    TooPrecise,
}

/// A strictly positive monetary amount.
///
/// The currency is implicit (a single-currency store); amounts carry at most
/// two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Validate a decimal amount as a price.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::NotPositive`] for zero or negative amounts and
    /// [`PriceError::TooPrecise`] for more than two fractional digits.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }

        if amount.scale() > 2 && amount.normalize().scale() > 2 {
            return Err(PriceError::TooPrecise);
        }

        Ok(Self(amount))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The total for `quantity` units at this price.
    #[must_use]
    pub fn line_total(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_new_valid() {
        assert!(Price::new(dec("19.99")).is_ok());
        assert!(Price::new(dec("1")).is_ok());
        assert!(Price::new(dec("0.01")).is_ok());
    }

    #[test]
    fn test_new_rejects_non_positive() {
        assert_eq!(Price::new(dec("0")), Err(PriceError::NotPositive));
        assert_eq!(Price::new(dec("-5")), Err(PriceError::NotPositive));
    }

    #[test]
    fn test_new_rejects_sub_cent() {
        assert_eq!(Price::new(dec("1.999")), Err(PriceError::TooPrecise));
        // Trailing zeros beyond two places are fine
        assert!(Price::new(dec("1.990")).is_ok());
    }

    #[test]
    fn test_line_total() {
        let price = Price::new(dec("19.99")).unwrap();
        assert_eq!(price.line_total(3), dec("59.97"));
        assert_eq!(price.line_total(0), dec("0"));
    }

    #[test]
    fn test_serde_as_string() {
        let price = Price::new(dec("2499")).unwrap();
        let json = serde_json::to_string(&price).unwrap();
        assert_eq!(json, "\"2499\"");
    }
}
