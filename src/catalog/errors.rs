use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unable to build catalog HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Catalog connection error: {0}")]
    Request(#[source] reqwest::Error),
    #[error("Catalog request failed with status code: {0}")]
    Status(StatusCode),
    #[error("Catalog response could not be decoded: {0}")]
    Decode(#[source] reqwest::Error)
}
