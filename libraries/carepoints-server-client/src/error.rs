//! Error types for the CarePoints server client.

use thiserror::Error;

/// Errors that can occur when talking to the loyalty-points API.
///
/// `Unreachable` and `Request` are transport failures (the request never
/// produced a response); `ServerError` is a non-2xx response; `Decode` means
/// the response arrived but did not match the endpoint's schema. No variant
/// implies any local state change: callers apply mirror mutations only after
/// a successful result.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Server is offline or unreachable (connect failure or timeout)
    #[error("Server unreachable: {0}")]
    Unreachable(String),

    /// HTTP request failed in transit
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error response
    #[error("Server error ({status}): {message}")]
    ServerError { status: u16, message: String },

    /// Response did not match the endpoint's schema
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),
}

/// Result type for server client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
