mod errors;
mod filter;
#[cfg(test)]
mod tests;
mod validator;

pub use filter::{FilterCatalog, FilterOptions, FilterSummary};
pub use validator::{validate_and_filter, RecordOutcome};
