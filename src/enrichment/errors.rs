use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EnrichmentError {
    #[error("Unable to write enriched data to [{}]: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Unable to write enriched record: {0}")]
    Io(#[from] io::Error),
    #[error("Unable to serialize enriched record: {0}")]
    Csv(#[from] csv::Error)
}
