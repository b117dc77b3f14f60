use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::types::NumericError;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("File not found [{}]", path.display())]
    NotFound {
        path: PathBuf
    },
    #[error("Unable to read file [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error
    },
    #[error("Unable to decode file [{}] with any of the supported encodings [{attempted}]", path.display())]
    Undecodable {
        path: PathBuf,
        attempted: String
    },
    #[error("Unsupported encoding [{0}], expected one of: utf-8, latin-1, cp1252")]
    UnknownEncoding(String)
}

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Expected {expected} fields but found {found}")]
    FieldCount {
        expected: usize,
        found: usize
    },
    #[error("Invalid quantity [{value}]: {source}")]
    InvalidQuantity {
        value: String,
        #[source]
        source: NumericError
    },
    #[error("Invalid unit price [{value}]: {source}")]
    InvalidUnitPrice {
        value: String,
        #[source]
        source: NumericError
    }
}
