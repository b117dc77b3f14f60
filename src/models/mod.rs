mod enriched;
#[cfg(test)]
mod tests;
mod transaction;

pub use enriched::EnrichedTransaction;
pub use transaction::Transaction;
