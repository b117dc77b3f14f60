use super::{EnrichedTransaction, Transaction};

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::Quantity;

fn create_transaction(product_id: &str, quantity: Quantity, unit_price: Decimal) -> Transaction {
    Transaction {
        transaction_id: "T001".to_string(),
        date: "2024-12-01".to_string(),
        product_id: product_id.to_string(),
        product_name: "Wireless Mouse".to_string(),
        quantity,
        unit_price,
        customer_id: "C001".to_string(),
        region: "North".to_string()
    }
}

#[test]
fn test_sale_amount_is_quantity_times_unit_price() {
    let transaction = create_transaction("P101", 5, dec!(10.0));

    assert_eq!(transaction.sale_amount(), Some(dec!(50.0)));
}

#[test]
fn test_sale_amount_reflects_field_changes() {
    let mut transaction = create_transaction("P101", 5, dec!(10.0));
    transaction.quantity = 3;

    assert_eq!(transaction.sale_amount(), Some(dec!(30.0)));
}

#[test]
fn test_sale_amount_reports_overflow_as_none() {
    let transaction = create_transaction("P101", Quantity::MAX, Decimal::MAX);

    assert_eq!(transaction.sale_amount(), None);
}

#[test]
fn test_product_number_strips_non_digit_characters() -> Result<()> {
    assert_eq!(create_transaction("P101", 1, dec!(1)).product_number(), Some(101));
    assert_eq!(create_transaction("P-0007", 1, dec!(1)).product_number(), Some(7));
    assert_eq!(create_transaction("P1A2", 1, dec!(1)).product_number(), Some(12));

    Ok(())
}

#[test]
fn test_product_number_is_none_without_digits() {
    assert_eq!(create_transaction("PXYZ", 1, dec!(1)).product_number(), None);
    assert_eq!(create_transaction("", 1, dec!(1)).product_number(), None);
}

#[test]
fn test_unmatched_enrichment_keeps_original_fields() {
    let transaction = create_transaction("P101", 2, dec!(4.5));
    let enriched = EnrichedTransaction::unmatched(transaction.clone());

    assert_eq!(enriched.transaction, transaction);
    assert!(!enriched.api_match);
    assert!(enriched.api_category.is_none());
    assert!(enriched.api_brand.is_none());
    assert!(enriched.api_rating.is_none());
}
