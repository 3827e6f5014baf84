//! # App Error Type
//!
//! Unified error type for console operations.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Bolt Admin                             │
//! │                                                                         │
//! │  action (async fn)                                                      │
//! │         │                                                               │
//! │         ├── HTTP / API failed? ── ClientError ──┐                       │
//! │         │                                       │                       │
//! │         ├── form invalid? ── ValidationError ── AppError ──► operator   │
//! │         │                                       │                       │
//! │         └── domain rule? ── CoreError ──────────┘                       │
//! │                                                                         │
//! │  Every AppError carries a machine code and a display message; the      │
//! │  failing slice keeps the message so the state shows what went wrong.   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use bolt_client::ClientError;
use bolt_core::{CoreError, ValidationError};
use serde::Serialize;

/// Error surfaced by console actions.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AppError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for console operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Input validation failed, locally or server-side (400)
    ValidationError,

    /// Token missing, expired, or revoked (401)
    Unauthorized,

    /// Permission denied (403)
    Forbidden,

    /// Could not reach the API or it answered garbage
    Network,

    /// Session file could not be read or written
    Session,

    /// Anything else
    Internal,
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Creates a session error.
    pub fn session(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Session, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Converts API client errors to app errors.
impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::Unauthorized => {
                AppError::new(ErrorCode::Unauthorized, "Session expired, log in again")
            }
            ClientError::Forbidden(msg) => AppError::new(ErrorCode::Forbidden, msg),
            ClientError::NotFound(msg) => AppError::new(ErrorCode::NotFound, msg),
            ClientError::Validation(msg) => AppError::new(ErrorCode::ValidationError, msg),
            ClientError::Http(e) => {
                tracing::error!("HTTP transport error: {}", e);
                AppError::new(ErrorCode::Network, "Could not reach the shop API")
            }
            ClientError::InvalidResponse(msg) => {
                tracing::error!("Unexpected API response: {}", msg);
                AppError::new(ErrorCode::Network, "Unexpected response from the shop API")
            }
            ClientError::Server(msg) => AppError::new(ErrorCode::Internal, msg),
            ClientError::Serialization(e) => {
                tracing::error!("Serialization error: {}", e);
                AppError::internal("Could not encode request")
            }
        }
    }
}

/// Converts core domain errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::CustomerNotFound(_)
            | CoreError::SaleNotFound(_)
            | CoreError::PaymentNotFound(_)
            | CoreError::ProductNotFound(_) => AppError::new(ErrorCode::NotFound, err.to_string()),
            CoreError::InvalidSaleStatus { .. } => AppError::validation(err.to_string()),
            CoreError::Validation(v) => v.into(),
        }
    }
}

/// Converts form validation errors to app errors.
impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

/// Result type for console operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_error_mapping() {
        let err: AppError = ClientError::Unauthorized.into();
        assert_eq!(err.code, ErrorCode::Unauthorized);

        let err: AppError = ClientError::NotFound("Customer not found".to_string()).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Customer not found");
    }

    #[test]
    fn test_validation_error_mapping() {
        let err: AppError = ValidationError::Required {
            field: "name".to_string(),
        }
        .into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "name is required");
    }

    #[test]
    fn test_serializes_with_screaming_code() {
        let err = AppError::validation("quantity must be positive");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "VALIDATION_ERROR");
        assert_eq!(json["message"], "quantity must be positive");
    }
}
