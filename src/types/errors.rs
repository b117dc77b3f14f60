use std::num::ParseIntError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum NumericError {
    #[error("Numeric error: {0}")]
    InvalidFormat(String),
    #[error("Numeric error: {0}")]
    ParseInt(#[from] ParseIntError)
}
