use std::str::FromStr;

use rust_decimal::Decimal;

use crate::types::errors::NumericError;
use crate::types::Quantity;

/// Precision used for every reported monetary figure.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds a monetary value to the reporting precision.
///
/// Midpoints round to even. The result always carries exactly two decimal places, so `50` is
/// displayed as `50.00`.
pub fn round_currency(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp(CURRENCY_DECIMAL_PLACES);
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Parses a monetary amount such as `"1,299.50"`.
///
/// Thousands separators are stripped before parsing and scientific notation (`"1.5e3"`) is
/// accepted as a fallback.
pub fn parse_amount(value: &str) -> Result<Decimal, NumericError> {
    let cleaned = strip_separators(value);

    if cleaned.is_empty() {
        return Err(NumericError::InvalidFormat("Value is an empty string".to_string()));
    }

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .map_err(|error| NumericError::InvalidFormat(format!("Value [{cleaned}] is not a number: {error}")))
}

/// Parses a whole-unit quantity such as `"1,000"`.
pub fn parse_quantity(value: &str) -> Result<Quantity, NumericError> {
    let cleaned = strip_separators(value);

    if cleaned.is_empty() {
        return Err(NumericError::InvalidFormat("Value is an empty string".to_string()));
    }

    Ok(cleaned.parse::<Quantity>()?)
}

fn strip_separators(value: &str) -> String {
    value.replace(',', "").trim().to_string()
}
