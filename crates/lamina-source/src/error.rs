//! Source error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid document source: {0}")]
    InvalidSource(String),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Malformed panel document: {0}")]
    Decode(#[from] serde_json::Error),
}
