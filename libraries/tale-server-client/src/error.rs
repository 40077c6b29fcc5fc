//! Error types for the catalog service client.

use thiserror::Error;

/// Errors that can occur when talking to the catalog service.
#[derive(Error, Debug)]
pub enum CatalogClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Service returned an error response
    #[error("Catalog service error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Invalid service URL
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse a service response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Service is offline or unreachable
    #[error("Catalog service unreachable: {0}")]
    ServerUnreachable(String),
}

/// Result type for catalog client operations.
pub type Result<T> = std::result::Result<T, CatalogClientError>;
