//! Pricing
//!
//! Prices are kept as exact decimals so the minimum price check never trips
//! over float rounding. They are shown as US dollars.

use rust_decimal::Decimal;
use rusty_money::{Money, iso};
use thiserror::Error;

/// Errors that can occur while reading a price typed into a form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PriceError {
    /// Nothing was entered.
    #[error("price is required")]
    Empty,

    /// The value is not a decimal number.
    #[error("price is not a number: {0:?}")]
    NotNumeric(String),
}

/// Parse a price as typed by the user (e.g. `"75"` or `"49.99"`).
///
/// # Errors
///
/// - [`PriceError::Empty`]: the value is blank.
/// - [`PriceError::NotNumeric`]: the value is not a plain decimal number, or
///   has more digits than a [`Decimal`] holds exactly.
pub fn parse_price(value: &str) -> Result<Decimal, PriceError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        return Err(PriceError::Empty);
    }

    Decimal::from_str_exact(trimmed)
        .map_err(|_err| PriceError::NotNumeric(value.to_string()))
}

/// Format a price for display, e.g. `$75.00`.
pub fn format_price(price: Decimal) -> String {
    Money::from_decimal(price, iso::USD).to_string()
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_integers_and_decimals() -> TestResult {
        assert_eq!(parse_price("75")?, Decimal::new(75, 0));
        assert_eq!(parse_price(" 49.99 ")?, Decimal::new(4999, 2));

        Ok(())
    }

    #[test]
    fn parse_price_rejects_blank() {
        assert_eq!(parse_price("   "), Err(PriceError::Empty));
    }

    #[test]
    fn parse_price_rejects_non_numeric() {
        for bad in ["abc", "12abc", "$50", "NaN"] {
            assert!(
                matches!(parse_price(bad), Err(PriceError::NotNumeric(_))),
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn parse_price_refuses_to_round() {
        let result = parse_price("49.99999999999999999999999999999");

        assert!(
            matches!(result, Err(PriceError::NotNumeric(_))),
            "unexpected parse: {result:?}"
        );
    }

    #[test]
    fn format_price_renders_money() {
        let formatted = format_price(Decimal::new(75, 0));

        assert!(formatted.contains("75"), "unexpected format: {formatted}");
    }
}
