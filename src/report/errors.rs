use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Unable to write report to [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Unable to format report: {0}")]
    Format(#[from] fmt::Error)
}
