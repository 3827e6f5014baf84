//! # Error Types
//!
//! Domain-specific error types for bolt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  bolt-core errors (this file)                                          │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Form input validation failures                 │
//! │                                                                         │
//! │  bolt-client errors (separate crate)                                   │
//! │  └── ClientError      - HTTP / API failures                            │
//! │                                                                         │
//! │  admin app errors                                                      │
//! │  └── AppError         - What the console surfaces to the operator      │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → AppError → operator               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (invoice number, field name, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message
//!
//! Note that the ledger calculators themselves never return errors: bad
//! numeric input is coerced to zero and computation proceeds. Errors here
//! cover form validation and lookup failures, not arithmetic.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Customer cannot be found in the loaded collection.
    #[error("Customer not found: {0}")]
    CustomerNotFound(String),

    /// Sale not found.
    #[error("Sale not found: {0}")]
    SaleNotFound(String),

    /// Payment not found.
    #[error("Payment not found: {0}")]
    PaymentNotFound(String),

    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Sale is not in a state that allows the requested operation.
    ///
    /// ## When This Occurs
    /// - Allocating a payment to a cancelled sale
    /// - Editing a refunded invoice
    #[error("Sale {sale_id} is {current_status}, cannot perform operation")]
    InvalidSaleStatus {
        sale_id: String,
        current_status: String,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when form input doesn't meet requirements.
/// Used for early validation before anything is sent to the API.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Invalid format (e.g., malformed email, GSTIN, PAN).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or positive.
    #[error("{field} cannot be negative")]
    MustNotBeNegative { field: String },

    /// A collection that must have entries is empty.
    #[error("{field} must have at least one entry")]
    Empty { field: String },

    /// Two fields disagree (e.g., MRP below selling price).
    #[error("{field}: {reason}")]
    Inconsistent { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InvalidSaleStatus {
            sale_id: "sale-42".to_string(),
            current_status: "cancelled".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Sale sale-42 is cancelled, cannot perform operation"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::Inconsistent {
            field: "mrp".to_string(),
            reason: "MRP cannot be less than selling price".to_string(),
        };
        assert_eq!(err.to_string(), "mrp: MRP cannot be less than selling price");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "customer".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
