//! Error taxonomy for the data client.

use thiserror::Error;

/// Failures the data client can surface to a view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request did not complete (connection refused, DNS, non-2xx status).
    #[error("request failed: {0}")]
    Network(String),

    /// The request was aborted by the fixed timeout.
    #[error("request timed out after {0} ms")]
    Timeout(u32),

    /// The response body did not match the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Type alias for Results using ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
