use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::models::Transaction;
use crate::validation::errors::ValidationError;
use crate::validation::filter::{FilterCatalog, FilterOptions, FilterSummary};

/// What happened to a single input record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordOutcome {
    Accepted,
    Rejected(ValidationError),
    FilteredByRegion,
    FilteredByAmount
}

/// Result of [`validate_and_filter`].
///
/// `outcomes` is aligned with the input: `outcomes[i]` describes the i-th transaction handed in.
#[derive(Debug, Clone)]
pub struct ValidationReport {
    pub valid: Vec<Transaction>,
    pub invalid_count: usize,
    pub summary: FilterSummary,
    pub outcomes: Vec<RecordOutcome>
}

/// Checks a single transaction, stopping at the first failed rule.
///
/// Rules run in a fixed order: `T` transaction prefix, `P` product prefix, `C` customer prefix,
/// then positive quantity and unit price. A parsed transaction always carries all eight fields,
/// so blank text fields such as `Date` or `Region` are accepted; blank identifiers fail their
/// prefix check.
pub fn validate_transaction(tx: &Transaction) -> Result<(), ValidationError> {
    if !tx.transaction_id.starts_with('T') {
        return Err(ValidationError::invalid_transaction_id(tx));
    }

    if !tx.product_id.starts_with('P') {
        return Err(ValidationError::invalid_product_id(tx));
    }

    if !tx.customer_id.starts_with('C') {
        return Err(ValidationError::invalid_customer_id(tx));
    }

    if tx.quantity <= 0 || tx.unit_price <= Decimal::ZERO {
        return Err(ValidationError::non_positive_amount(tx));
    }

    if tx.sale_amount().is_none() {
        return Err(ValidationError::overflow(tx));
    }

    Ok(())
}

/// Validates every transaction and then narrows the valid set by region and amount range.
///
/// Filters only ever see records that passed validation, and run region first, then amount.
pub fn validate_and_filter(transactions: Vec<Transaction>, filter: &FilterOptions) -> ValidationReport {
    let total_input = transactions.len();
    let mut outcomes = vec![RecordOutcome::Accepted; total_input];
    let mut invalid_count = 0;
    let mut accepted: Vec<(usize, Transaction)> = Vec::with_capacity(total_input);

    for (index, transaction) in transactions.into_iter().enumerate() {
        match validate_transaction(&transaction) {
            Ok(()) => accepted.push((index, transaction)),
            Err(error) => {
                debug!("Rejected: {error}");
                invalid_count += 1;
                outcomes[index] = RecordOutcome::Rejected(error);
            }
        }
    }

    let available = FilterCatalog::from_transactions(accepted.iter().map(|(_, tx)| tx));
    info!(
        "Available regions: {:?} | transaction amount range: {} - {}",
        available.regions,
        available.min_amount.unwrap_or_default(),
        available.max_amount.unwrap_or_default()
    );

    let mut filtered_by_region = 0;

    if let Some(region) = filter.region() {
        let before = accepted.len();
        accepted.retain(|(index, tx)| {
            let keep = tx.region == region;
            if !keep {
                outcomes[*index] = RecordOutcome::FilteredByRegion;
            }
            keep
        });
        filtered_by_region = before - accepted.len();
        info!("After region filter [{region}]: {}", accepted.len());
    }

    let mut filtered_by_amount = 0;

    if filter.has_amount_bounds() {
        let before = accepted.len();
        accepted.retain(|(index, tx)| {
            let keep = tx.sale_amount().is_some_and(|amount| filter.amount_in_range(amount));
            if !keep {
                outcomes[*index] = RecordOutcome::FilteredByAmount;
            }
            keep
        });
        filtered_by_amount = before - accepted.len();
        info!("After amount filter: {}", accepted.len());
    }

    let valid: Vec<Transaction> = accepted.into_iter().map(|(_, tx)| tx).collect();

    let summary = FilterSummary {
        total_input,
        invalid: invalid_count,
        filtered_by_region,
        filtered_by_amount,
        final_count: valid.len()
    };

    ValidationReport {
        valid,
        invalid_count,
        summary,
        outcomes
    }
}
