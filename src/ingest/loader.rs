use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::{debug, error, info};

use crate::ingest::encoding::TextEncoding;
use crate::ingest::errors::LoadError;

/// Reads the raw transaction lines from `path`.
///
/// This is the soft-failure boundary of the loader: a missing or undecodable file is logged
/// and reported as an empty sequence, which callers must treat as "nothing to process".
pub fn read_sales_data(path: &Path, encodings: &[TextEncoding]) -> Vec<String> {
    match try_read_sales_data(path, encodings) {
        Ok(lines) => lines,
        Err(error) => {
            error!("{error}");
            Vec::new()
        }
    }
}

/// Reads the raw transaction lines from `path`, surfacing the reason for any failure.
///
/// The encodings are tried in order and the first one that decodes the entire file is used
/// for all of it. The first line is a header and is always discarded. Remaining lines are
/// trimmed and blank lines are dropped.
pub fn try_read_sales_data(path: &Path, encodings: &[TextEncoding]) -> Result<Vec<String>, LoadError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound { path: path.to_path_buf() },
        _ => LoadError::Io { path: path.to_path_buf(), source }
    })?;

    for encoding in encodings {
        match encoding.decode(&bytes) {
            Some(text) => {
                info!("File [{}] read successfully using encoding [{encoding}]", path.display());
                return Ok(split_records(&text));
            }
            None => debug!("File [{}] is not valid [{encoding}], trying next encoding", path.display())
        }
    }

    let attempted = encodings.iter().map(TextEncoding::label).collect::<Vec<_>>().join(", ");

    Err(LoadError::Undecodable { path: path.to_path_buf(), attempted })
}

fn split_records(text: &str) -> Vec<String> {
    text.lines()
        .skip(1)
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
