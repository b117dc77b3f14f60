use std::path::PathBuf;

use thiserror::Error;
use tokio::task::JoinError;

use crate::catalog::CatalogError;
use crate::enrichment::EnrichmentError;
use crate::report::ReportError;

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("No transactions to process in [{}]", path.display())]
    NoData {
        path: PathBuf
    },
    #[error("{0}")]
    Catalog(#[from] CatalogError),
    #[error("{0}")]
    Enrichment(#[from] EnrichmentError),
    #[error("{0}")]
    Report(#[from] ReportError),
    #[error("Pipeline stage did not complete: {0}")]
    Task(#[from] JoinError)
}
