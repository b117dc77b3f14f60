use std::collections::BTreeSet;

use rust_decimal::Decimal;

use crate::models::Transaction;

/// Optional narrowing applied to the validated set.
///
/// Amount bounds are inclusive and compare against the recomputed sale amount. A bound left
/// as `None` does not constrain that side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub region: Option<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>
}

impl FilterOptions {
    /// The region to keep, ignoring a blank selection.
    pub fn region(&self) -> Option<&str> {
        self.region.as_deref().filter(|region| !region.is_empty())
    }

    pub fn has_amount_bounds(&self) -> bool {
        self.min_amount.is_some() || self.max_amount.is_some()
    }

    pub fn amount_in_range(&self, amount: Decimal) -> bool {
        if self.min_amount.is_some_and(|min| amount < min) {
            return false;
        }

        if self.max_amount.is_some_and(|max| amount > max) {
            return false;
        }

        true
    }
}

/// Counts describing how a batch moved through validation and filtering.
///
/// `filtered_by_region` and `filtered_by_amount` are the records removed by each stage in turn,
/// not counts against the original input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterSummary {
    pub total_input: usize,
    pub invalid: usize,
    pub filtered_by_region: usize,
    pub filtered_by_amount: usize,
    pub final_count: usize
}

/// The choices offered to a user before filtering: every region present and the span of sale amounts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCatalog {
    pub regions: Vec<String>,
    pub min_amount: Option<Decimal>,
    pub max_amount: Option<Decimal>
}

impl FilterCatalog {
    pub fn from_transactions<'a>(transactions: impl IntoIterator<Item = &'a Transaction>) -> Self {
        let mut regions = BTreeSet::new();
        let mut min_amount: Option<Decimal> = None;
        let mut max_amount: Option<Decimal> = None;

        for tx in transactions {
            regions.insert(tx.region.as_str());

            if let Some(amount) = tx.sale_amount() {
                min_amount = Some(min_amount.map_or(amount, |min| min.min(amount)));
                max_amount = Some(max_amount.map_or(amount, |max| max.max(amount)));
            }
        }

        Self {
            regions: regions.into_iter().map(str::to_owned).collect(),
            min_amount,
            max_amount
        }
    }
}
