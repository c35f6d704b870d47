//! Type-safe price representation using decimal arithmetic.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error parsing a decimal amount string.
#[derive(Debug, Error)]
#[error("invalid decimal amount {amount:?}: {source}")]
pub struct PriceParseError {
    /// The string that failed to parse.
    pub amount: String,
    source: rust_decimal::Error,
}

/// A price with currency information.
///
/// The amount is kept as an exact decimal and serialized as a string
/// (e.g., `"19.99"`), matching the upstream Money scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit (e.g., dollars, not cents).
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// Parse a price from a decimal amount string as received from the
    /// upstream API (e.g., `"19.99"`).
    ///
    /// # Errors
    ///
    /// Returns `PriceParseError` if the string is not a valid decimal.
    pub fn parse(amount: &str, currency_code: CurrencyCode) -> Result<Self, PriceParseError> {
        let amount_decimal = Decimal::from_str(amount).map_err(|source| PriceParseError {
            amount: amount.to_string(),
            source,
        })?;

        Ok(Self::new(amount_decimal, currency_code))
    }
}

impl Default for Price {
    fn default() -> Self {
        Self::new(Decimal::ZERO, CurrencyCode::default())
    }
}

/// ISO 4217 currency codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    #[default]
    USD,
    EUR,
    GBP,
    CAD,
    AUD,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_amount() {
        let price = Price::parse("19.99", CurrencyCode::USD).unwrap();
        assert_eq!(price.amount, Decimal::new(1999, 2));
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }

    #[test]
    fn test_parse_invalid_amount() {
        let err = Price::parse("not-a-number", CurrencyCode::USD).unwrap_err();
        assert!(err.to_string().contains("not-a-number"));
    }

    #[test]
    fn test_serializes_amount_as_string() {
        let price = Price::parse("12.50", CurrencyCode::USD).unwrap();
        let json = serde_json::to_value(&price).unwrap();
        assert_eq!(json["amount"], "12.50");
        assert_eq!(json["currency_code"], "USD");
    }

    #[test]
    fn test_default_is_zero() {
        let price = Price::default();
        assert_eq!(price.amount, Decimal::ZERO);
        assert_eq!(price.currency_code, CurrencyCode::USD);
    }
}
