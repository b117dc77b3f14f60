use crate::models::Transaction;

/// A transaction joined with the product metadata published by the catalog.
///
/// The original fields are carried untouched in `transaction`. When the catalog has no entry
/// for the product every `api_*` field is `None` and `api_match` is `false`.
#[derive(Debug, Clone, PartialEq)]
pub struct EnrichedTransaction {
    pub transaction: Transaction,
    pub api_category: Option<String>,
    pub api_brand: Option<String>,
    pub api_rating: Option<f64>,
    pub api_match: bool
}

impl EnrichedTransaction {
    /// Wraps a transaction that has no catalog counterpart.
    pub fn unmatched(transaction: Transaction) -> Self {
        Self {
            transaction,
            api_category: None,
            api_brand: None,
            api_rating: None,
            api_match: false
        }
    }
}
