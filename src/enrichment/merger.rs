use std::collections::BTreeSet;
use std::path::Path;

use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::catalog::ProductCatalog;
use crate::enrichment::errors::EnrichmentError;
use crate::enrichment::writer::EnrichedWriter;
use crate::models::{EnrichedTransaction, Transaction};
use crate::types::round_currency;

/// Joins one transaction against the catalog. Never fails: anything that prevents a match yields an unmatched record.
pub fn enrich_transaction(transaction: &Transaction, catalog: &ProductCatalog) -> EnrichedTransaction {
    let entry = transaction.product_number().and_then(|id| catalog.get(id));

    match entry {
        Some(entry) => {
            debug!("Product [{}] matched catalog entry [{}]", transaction.product_id, entry.title.as_deref().unwrap_or_default());
            EnrichedTransaction {
                transaction: transaction.clone(),
                api_category: entry.category.clone(),
                api_brand: entry.brand.clone(),
                api_rating: entry.rating,
                api_match: true
            }
        }
        None => {
            debug!("No catalog entry for product [{}] in transaction [{}]", transaction.product_id, transaction.transaction_id);
            EnrichedTransaction::unmatched(transaction.clone())
        }
    }
}

/// Lazily enriches every transaction, preserving order.
pub fn enrich<'a>(transactions: &'a [Transaction], catalog: &'a ProductCatalog) -> impl Iterator<Item = EnrichedTransaction> + 'a {
    transactions.iter().map(move |transaction| enrich_transaction(transaction, catalog))
}

/// Enriches every transaction and writes each record to `path` as soon as it is produced.
///
/// The file is replaced, not appended to.
pub fn enrich_to_file(transactions: &[Transaction], catalog: &ProductCatalog, path: &Path) -> Result<Vec<EnrichedTransaction>, EnrichmentError> {
    let mut writer = EnrichedWriter::create(path)?;
    let mut enriched = Vec::with_capacity(transactions.len());

    for record in enrich(transactions, catalog) {
        writer.write(&record)?;
        enriched.push(record);
    }

    writer.finish()?;
    info!("Enriched sales data saved to [{}]", path.display());

    Ok(enriched)
}

/// How much of a batch the catalog could describe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnrichmentSummary {
    pub total: usize,
    pub matched: usize,
    /// Share of matched records as a percentage, rounded to 2 decimals.
    pub match_rate_percent: Decimal,
    /// Distinct product identifiers with no catalog entry, sorted.
    pub unmatched_product_ids: Vec<String>
}

impl EnrichmentSummary {
    pub fn from_records(records: &[EnrichedTransaction]) -> Self {
        let total = records.len();
        let matched = records.iter().filter(|record| record.api_match).count();

        let unmatched_product_ids: BTreeSet<&str> = records.iter()
            .filter(|record| !record.api_match)
            .map(|record| record.transaction.product_id.as_str())
            .collect();

        let match_rate_percent = match total {
            0 => Decimal::ZERO,
            _ => round_currency(Decimal::from(matched) * Decimal::ONE_HUNDRED / Decimal::from(total))
        };

        Self {
            total,
            matched,
            match_rate_percent,
            unmatched_product_ids: unmatched_product_ids.into_iter().map(str::to_owned).collect()
        }
    }
}
