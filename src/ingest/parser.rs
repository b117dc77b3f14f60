use tracing::debug;

use crate::ingest::errors::ParseError;
use crate::models::Transaction;
use crate::types::{parse_amount, parse_quantity};

const FIELD_DELIMITER: char = '|';

/// Number of `|` separated fields in a transaction line.
pub const FIELD_COUNT: usize = 8;

/// Parses every line into a [`Transaction`], preserving order.
///
/// Lines that cannot be parsed are dropped without a trace in the output; the reason is only
/// visible at `debug` level.
pub fn parse_transactions<S: AsRef<str>>(lines: &[S]) -> Vec<Transaction> {
    lines.iter()
        .enumerate()
        .filter_map(|(index, line)| match parse_line(line.as_ref()) {
            Ok(transaction) => Some(transaction),
            Err(error) => {
                debug!("Dropping line [{}]: {error}", index + 1);
                None
            }
        })
        .collect()
}

/// Parses a single `TransactionID|Date|ProductID|ProductName|Quantity|UnitPrice|CustomerID|Region` line.
pub fn parse_line(line: &str) -> Result<Transaction, ParseError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();

    let &[transaction_id, date, product_id, product_name, quantity, unit_price, customer_id, region] = fields.as_slice() else {
        return Err(ParseError::FieldCount { expected: FIELD_COUNT, found: fields.len() });
    };

    let quantity = parse_quantity(quantity).map_err(|source| ParseError::InvalidQuantity {
        value: quantity.trim().to_string(),
        source
    })?;

    let unit_price = parse_amount(unit_price).map_err(|source| ParseError::InvalidUnitPrice {
        value: unit_price.trim().to_string(),
        source
    })?;

    Ok(Transaction {
        transaction_id: transaction_id.trim().to_string(),
        date: date.trim().to_string(),
        product_id: product_id.trim().to_string(),
        product_name: product_name.replace(',', "").trim().to_string(),
        quantity,
        unit_price,
        customer_id: customer_id.trim().to_string(),
        region: region.trim().to_string()
    })
}
