//! Pricing
//!
//! Catalog prices are whole amounts in a single currency. These helpers parse
//! fixture prices, convert amounts into currency-tagged money, and format them
//! for display.

use rusty_money::{
    Money,
    iso::{Currency, EGP, EUR, GBP, USD},
};
use thiserror::Error;

/// Errors that can occur while parsing or converting prices.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PricingError {
    /// The price was not in `AMOUNT CURRENCY` form.
    #[error("Invalid price format: {0}")]
    InvalidPrice(String),

    /// The currency code is not one the storefront sells in.
    #[error("Unknown currency code: {0}")]
    UnknownCurrency(String),

    /// The amount does not fit in a money value.
    #[error("Amount {0} is too large to represent")]
    AmountOverflow(u64),
}

/// Parse a fixture price such as `"1299 EGP"` into an amount and currency.
///
/// # Errors
///
/// Returns an error if the string is not in the format "AMOUNT CURRENCY",
/// if the amount is not a non-negative whole number, or if the currency code
/// is not recognized.
pub fn parse_price(s: &str) -> Result<(u64, &'static Currency), PricingError> {
    let parts: Vec<&str> = s.split_whitespace().collect();

    let [amount, currency_code] = parts.as_slice() else {
        return Err(PricingError::InvalidPrice(format!(
            "Expected format 'AMOUNT CURRENCY', got: {s}"
        )));
    };

    let amount = amount
        .parse::<u64>()
        .map_err(|_err| PricingError::InvalidPrice(s.to_string()))?;

    Ok((amount, currency(currency_code)?))
}

/// Look up a supported currency by ISO code.
///
/// # Errors
///
/// Returns [`PricingError::UnknownCurrency`] for unsupported codes.
pub fn currency(code: &str) -> Result<&'static Currency, PricingError> {
    match code {
        "EGP" => Ok(EGP),
        "GBP" => Ok(GBP),
        "USD" => Ok(USD),
        "EUR" => Ok(EUR),
        other => Err(PricingError::UnknownCurrency(other.to_string())),
    }
}

/// Convert a whole amount into money in the given currency.
///
/// # Errors
///
/// Returns [`PricingError::AmountOverflow`] if the amount exceeds `i64::MAX`.
pub fn to_money(
    amount: u64,
    currency: &'static Currency,
) -> Result<Money<'static, Currency>, PricingError> {
    let major = i64::try_from(amount).map_err(|_err| PricingError::AmountOverflow(amount))?;

    Ok(Money::from_major(major, currency))
}

/// Format a whole amount with grouped thousands and the currency code,
/// e.g. `1,299 EGP`.
pub fn format_amount(amount: u64, currency: &Currency) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }

        grouped.push(digit);
    }

    format!("{grouped} {}", currency.iso_alpha_code)
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn parse_price_accepts_whole_amounts() -> TestResult {
        let (amount, currency) = parse_price("1299 EGP")?;

        assert_eq!(amount, 1299);
        assert_eq!(currency, EGP);

        Ok(())
    }

    #[test]
    fn parse_price_rejects_invalid_format() {
        assert!(matches!(
            parse_price("1299EGP"),
            Err(PricingError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("12.99 EGP"),
            Err(PricingError::InvalidPrice(_))
        ));
        assert!(matches!(
            parse_price("-5 EGP"),
            Err(PricingError::InvalidPrice(_))
        ));
    }

    #[test]
    fn parse_price_rejects_unknown_currency() {
        let result = parse_price("100 ABC");

        assert!(matches!(result, Err(PricingError::UnknownCurrency(code)) if code == "ABC"));
    }

    #[test]
    fn to_money_uses_major_units() -> TestResult {
        let money = to_money(1299, EGP)?;

        assert_eq!(money, Money::from_major(1299, EGP));
        assert_eq!(money.to_minor_units(), 129_900);

        Ok(())
    }

    #[test]
    fn to_money_rejects_overflow() {
        assert_eq!(
            to_money(u64::MAX, EGP),
            Err(PricingError::AmountOverflow(u64::MAX))
        );
    }

    #[test]
    fn format_amount_groups_thousands() {
        assert_eq!(format_amount(0, EGP), "0 EGP");
        assert_eq!(format_amount(899, EGP), "899 EGP");
        assert_eq!(format_amount(1299, EGP), "1,299 EGP");
        assert_eq!(format_amount(1_234_567, EGP), "1,234,567 EGP");
    }
}
