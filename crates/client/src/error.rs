//! Error types for the OpenSearch client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during OpenSearch client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Authentication configuration is incomplete.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// HTTP request error (connection, TLS, timeout, body decode).
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success response from the cluster.
    #[error("API error ({status}) at {url}: {message}")]
    ApiError {
        status: u16,
        url: String,
        message: String,
    },

    /// Response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}
