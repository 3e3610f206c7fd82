use thiserror::Error;

use super::FetchError;

#[derive(Debug, Error)]
pub enum StatusError {
    #[error("Invalid HTTP status: no status line in response.")]
    Missing,
    #[error("Cannot parse HTTP status code '{value}': {source}")]
    Code {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Failure marker recorded in a probe slot. Never fatal to the batch.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Status(#[from] StatusError),
}
