mod errors;
mod merger;
mod writer;

pub use errors::EnrichmentError;
pub use merger::{enrich_to_file, EnrichmentSummary};
