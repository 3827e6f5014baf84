//! Client error types.

use thiserror::Error;

/// Errors from talking to the shop API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport failed (connection refused, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 2xx but the body was not what we expected.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// 401: token missing, expired, or revoked.
    #[error("Authentication required")]
    Unauthorized,

    /// 403.
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// 404.
    #[error("Not found: {0}")]
    NotFound(String),

    /// 400: the server rejected the submitted data.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any other non-success status.
    #[error("Server error: {0}")]
    Server(String),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
