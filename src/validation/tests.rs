use super::errors::ValidationError;
use super::filter::{FilterCatalog, FilterOptions, FilterSummary};
use super::validator::{validate_and_filter, validate_transaction, RecordOutcome};

use anyhow::Result;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::models::Transaction;
use crate::types::Quantity;

fn create_transaction(transaction_id: &str, quantity: Quantity, unit_price: Decimal, region: &str) -> Transaction {
    Transaction {
        transaction_id: transaction_id.to_string(),
        date: "2024-12-01".to_string(),
        product_id: "P101".to_string(),
        product_name: "Wireless Mouse".to_string(),
        quantity,
        unit_price,
        customer_id: "C001".to_string(),
        region: region.to_string()
    }
}

#[test]
fn test_validation_accepts_well_formed_transaction() {
    assert!(validate_transaction(&create_transaction("T001", 1, dec!(10.0), "North")).is_ok());
}

#[test]
fn test_validation_checks_identifier_prefixes() {
    let bad_transaction_id = create_transaction("X001", 1, dec!(10.0), "North");

    let mut bad_product_id = create_transaction("T002", 1, dec!(10.0), "North");
    bad_product_id.product_id = "Q101".to_string();

    let mut bad_customer_id = create_transaction("T003", 1, dec!(10.0), "North");
    bad_customer_id.customer_id = "X001".to_string();

    assert!(matches!(validate_transaction(&bad_transaction_id), Err(ValidationError::InvalidTransactionId { .. })));
    assert!(matches!(validate_transaction(&bad_product_id), Err(ValidationError::InvalidProductId { .. })));
    assert!(matches!(validate_transaction(&bad_customer_id), Err(ValidationError::InvalidCustomerId { .. })));
}

#[test]
fn test_validation_requires_positive_quantity_and_price() {
    assert!(matches!(validate_transaction(&create_transaction("T001", 0, dec!(10.0), "North")), Err(ValidationError::NonPositiveAmount { .. })));
    assert!(matches!(validate_transaction(&create_transaction("T001", -3, dec!(10.0), "North")), Err(ValidationError::NonPositiveAmount { .. })));
    assert!(matches!(validate_transaction(&create_transaction("T001", 1, dec!(0), "North")), Err(ValidationError::NonPositiveAmount { .. })));
}

#[test]
fn test_validation_reports_first_failing_rule_only() {
    let mut transaction = create_transaction("X001", 0, dec!(10.0), "North");
    transaction.product_id = "Q101".to_string();

    assert!(matches!(validate_transaction(&transaction), Err(ValidationError::InvalidTransactionId { .. })));
}

#[test]
fn test_validation_accepts_blank_date_name_and_region() {
    let blank_region = create_transaction("T001", 5, dec!(10.0), "");

    let mut blank_date = create_transaction("T002", 1, dec!(5.0), "West");
    blank_date.date = String::new();

    let mut blank_name = create_transaction("T003", 2, dec!(3.0), "East");
    blank_name.product_name = String::new();

    let report = validate_and_filter(vec![blank_region, blank_date, blank_name], &FilterOptions::default());

    assert_eq!(report.valid.len(), 3);
    assert_eq!(report.invalid_count, 0);
    assert!(report.outcomes.iter().all(|outcome| *outcome == RecordOutcome::Accepted));
}

#[test]
fn test_validation_rejects_blank_identifiers_by_prefix() {
    let mut blank_product = create_transaction("T002", 1, dec!(10.0), "North");
    blank_product.product_id = String::new();

    let mut blank_customer = create_transaction("T003", 1, dec!(10.0), "North");
    blank_customer.customer_id = String::new();

    assert!(matches!(validate_transaction(&create_transaction("", 1, dec!(10.0), "North")), Err(ValidationError::InvalidTransactionId { .. })));
    assert!(matches!(validate_transaction(&blank_product), Err(ValidationError::InvalidProductId { .. })));
    assert!(matches!(validate_transaction(&blank_customer), Err(ValidationError::InvalidCustomerId { .. })));
}

#[test]
fn test_validation_rejects_unrepresentable_sale_amount() {
    let transaction = create_transaction("T001", Quantity::MAX, Decimal::MAX, "North");

    assert!(matches!(validate_transaction(&transaction), Err(ValidationError::Overflow { .. })));
}

#[test]
fn test_scenario_zero_quantity_is_counted_invalid() {
    let transactions = vec![
        create_transaction("T001", 5, dec!(10.0), "East"),
        create_transaction("T002", 0, dec!(5.0), "West")
    ];

    let report = validate_and_filter(transactions, &FilterOptions::default());

    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].transaction_id, "T001");
    assert_eq!(report.invalid_count, 1);
    assert_eq!(report.outcomes[0], RecordOutcome::Accepted);
    assert!(matches!(report.outcomes[1], RecordOutcome::Rejected(ValidationError::NonPositiveAmount { .. })));
}

#[test]
fn test_without_filters_invalid_and_valid_partition_the_input() {
    let transactions = vec![
        create_transaction("T001", 1, dec!(1.0), "East"),
        create_transaction("X002", 1, dec!(1.0), "East"),
        create_transaction("T003", 2, dec!(1.0), "West"),
        create_transaction("T004", 1, dec!(-1.0), "West")
    ];

    let report = validate_and_filter(transactions, &FilterOptions::default());

    assert_eq!(report.invalid_count + report.valid.len(), 4);
    assert_eq!(report.summary, FilterSummary {
        total_input: 4,
        invalid: 2,
        filtered_by_region: 0,
        filtered_by_amount: 0,
        final_count: 2
    });
}

#[test]
fn test_region_filter_runs_before_amount_filter() {
    let transactions = vec![
        create_transaction("T001", 1, dec!(100.0), "North"),
        create_transaction("T002", 1, dec!(5.0), "North"),
        create_transaction("T003", 1, dec!(100.0), "South"),
        create_transaction("T004", 1, dec!(5.0), "South"),
        create_transaction("X005", 1, dec!(5.0), "North")
    ];
    let filter = FilterOptions { region: Some("North".to_string()), min_amount: Some(dec!(50)), max_amount: None };

    let report = validate_and_filter(transactions, &filter);

    assert_eq!(report.valid.iter().map(|tx| tx.transaction_id.as_str()).collect::<Vec<_>>(), vec!["T001"]);
    assert_eq!(report.summary, FilterSummary {
        total_input: 5,
        invalid: 1,
        filtered_by_region: 2,
        filtered_by_amount: 1,
        final_count: 1
    });
    assert_eq!(report.outcomes, vec![
        RecordOutcome::Accepted,
        RecordOutcome::FilteredByAmount,
        RecordOutcome::FilteredByRegion,
        RecordOutcome::FilteredByRegion,
        RecordOutcome::Rejected(ValidationError::InvalidTransactionId { transaction_id: "X005".to_string() })
    ]);
}

#[test]
fn test_amount_filter_bounds_are_inclusive() {
    let transactions = vec![
        create_transaction("T001", 2, dec!(25.0), "North"),
        create_transaction("T002", 1, dec!(100.0), "North"),
        create_transaction("T003", 1, dec!(49.99), "North"),
        create_transaction("T004", 1, dec!(100.01), "North")
    ];
    let filter = FilterOptions { region: None, min_amount: Some(dec!(50)), max_amount: Some(dec!(100)) };

    let report = validate_and_filter(transactions, &filter);

    assert_eq!(report.valid.iter().map(|tx| tx.transaction_id.as_str()).collect::<Vec<_>>(), vec!["T001", "T002"]);
    assert_eq!(report.summary.filtered_by_amount, 2);
}

#[test]
fn test_one_sided_amount_bound_leaves_other_side_open() {
    let transactions = vec![
        create_transaction("T001", 1, dec!(1.0), "North"),
        create_transaction("T002", 1000, dec!(1000.0), "North")
    ];

    let report = validate_and_filter(transactions, &FilterOptions { max_amount: Some(dec!(10)), ..FilterOptions::default() });

    assert_eq!(report.valid.len(), 1);
    assert_eq!(report.valid[0].transaction_id, "T001");
}

#[test]
fn test_blank_region_does_not_filter() {
    let transactions = vec![
        create_transaction("T001", 1, dec!(1.0), "North"),
        create_transaction("T002", 1, dec!(1.0), "South")
    ];

    let report = validate_and_filter(transactions, &FilterOptions { region: Some(String::new()), ..FilterOptions::default() });

    assert_eq!(report.valid.len(), 2);
    assert_eq!(report.summary.filtered_by_region, 0);
}

#[test]
fn test_valid_records_pass_through_untouched() -> Result<()> {
    let transaction = create_transaction("T001", 3, dec!(7.25), "North");

    let report = validate_and_filter(vec![transaction.clone()], &FilterOptions::default());

    assert_eq!(report.valid, vec![transaction]);

    Ok(())
}

#[test]
fn test_filter_catalog_lists_sorted_regions_and_amount_span() {
    let transactions = vec![
        create_transaction("T001", 2, dec!(10.0), "West"),
        create_transaction("T002", 1, dec!(5.0), "East"),
        create_transaction("T003", 10, dec!(3.0), "West")
    ];

    let catalog = FilterCatalog::from_transactions(&transactions);

    assert_eq!(catalog.regions, vec!["East".to_string(), "West".to_string()]);
    assert_eq!(catalog.min_amount, Some(dec!(5.0)));
    assert_eq!(catalog.max_amount, Some(dec!(30.0)));
    assert_eq!(FilterCatalog::from_transactions(&Vec::<Transaction>::new()), FilterCatalog::default());
}
