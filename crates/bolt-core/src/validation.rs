//! # Validation Module
//!
//! Form input validation for Bolt Admin.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console forms (this module)                                  │
//! │  ├── Format checks (empty, email, GSTIN, PAN)                          │
//! │  └── Immediate operator feedback, nothing leaves the machine           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Shop API (server)                                            │
//! │  ├── Schema validation on every write                                  │
//! │  └── Uniqueness checks (phone, SKU, invoice number)                    │
//! │                                                                         │
//! │  Defense in depth: both layers catch different errors                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use bolt_core::validation::{validate_customer_name, validate_gstin};
//!
//! validate_customer_name("Sharma Traders").unwrap();
//! validate_gstin("27AAPFU0939F1ZV").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::totals::SaleLine;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a customer name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_customer_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 200,
        });
    }

    Ok(())
}

/// Validates an email address shape.
///
/// ## Rules
/// - Empty is allowed (email is optional on customers)
/// - Otherwise must look like `something@domain.tld`
///
/// This is a shape check, not RFC 5322. One `@` with non-empty local part,
/// and a domain containing a dot with characters either side of it.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();
    if email.is_empty() {
        return Ok(());
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or("");
    let domain = parts.next().unwrap_or("");

    let domain_ok = domain
        .rsplit_once('.')
        .map(|(host, tld)| !host.is_empty() && !tld.is_empty())
        .unwrap_or(false);

    if local.is_empty() || local.contains(char::is_whitespace) || !domain_ok {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "must be a valid email address".to_string(),
        });
    }

    Ok(())
}

/// Validates a GSTIN (Goods and Services Tax Identification Number).
///
/// ## Rules
/// - Empty is allowed (optional for retail customers)
/// - Otherwise must match the 15-character layout:
///   2 digits (state), 10-character PAN, entity digit, 'Z', check character
///
/// ## Example
/// ```rust
/// use bolt_core::validation::validate_gstin;
///
/// assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
/// assert!(validate_gstin("BADGST").is_err());
/// ```
pub fn validate_gstin(gstin: &str) -> ValidationResult<()> {
    let gstin = gstin.trim();
    if gstin.is_empty() {
        return Ok(());
    }

    let chars: Vec<char> = gstin.chars().collect();
    let shape_ok = chars.len() == 15
        && chars[0..2].iter().all(|c| c.is_ascii_digit())
        && pan_shape_ok(&chars[2..12])
        && (chars[12].is_ascii_digit() && chars[12] != '0'
            || chars[12].is_ascii_uppercase())
        && chars[13] == 'Z'
        && (chars[14].is_ascii_digit() || chars[14].is_ascii_uppercase());

    if !shape_ok {
        return Err(ValidationError::InvalidFormat {
            field: "gstNumber".to_string(),
            reason: "must be a valid 15-character GSTIN".to_string(),
        });
    }

    Ok(())
}

/// Validates a PAN (Permanent Account Number).
///
/// ## Rules
/// - Empty is allowed
/// - Otherwise 10 characters: 5 uppercase letters, 4 digits, 1 uppercase letter
pub fn validate_pan(pan: &str) -> ValidationResult<()> {
    let pan = pan.trim();
    if pan.is_empty() {
        return Ok(());
    }

    let chars: Vec<char> = pan.chars().collect();
    if chars.len() != 10 || !pan_shape_ok(&chars) {
        return Err(ValidationError::InvalidFormat {
            field: "panNumber".to_string(),
            reason: "must be a valid 10-character PAN".to_string(),
        });
    }

    Ok(())
}

/// AAAAA0000A layout shared by PAN and the middle of a GSTIN.
fn pan_shape_ok(chars: &[char]) -> bool {
    chars.len() == 10
        && chars[0..5].iter().all(|c| c.is_ascii_uppercase())
        && chars[5..9].iter().all(|c| c.is_ascii_digit())
        && chars[9].is_ascii_uppercase()
}

// =============================================================================
// Amount Validators
// =============================================================================

/// Validates a credit limit.
///
/// ## Rules
/// - Must be zero or positive (zero means unlimited)
pub fn validate_credit_limit(limit: Money) -> ValidationResult<()> {
    if limit.is_negative() {
        return Err(ValidationError::MustNotBeNegative {
            field: "creditLimit".to_string(),
        });
    }

    Ok(())
}

/// Validates a payment amount.
///
/// ## Rules
/// - Must be strictly positive; zero-rupee payments are not recorded
pub fn validate_payment_amount(amount: Money) -> ValidationResult<()> {
    if !amount.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "amount".to_string(),
        });
    }

    Ok(())
}

/// Validates product pricing.
///
/// ## Rules
/// - Selling price must be positive
/// - MRP, when present, must be at least the selling price
pub fn validate_product_prices(selling: Money, mrp: Option<Money>) -> ValidationResult<()> {
    if !selling.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price.selling".to_string(),
        });
    }

    if let Some(mrp) = mrp {
        if mrp < selling {
            return Err(ValidationError::Inconsistent {
                field: "price.mrp".to_string(),
                reason: "MRP cannot be less than selling price".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Sale Validators
// =============================================================================

/// Validates the line items on a sale before submission.
///
/// ## Rules
/// - At least one line
/// - Every line quantity strictly positive
/// - No negative prices or discounts
///
/// The totals calculator itself accepts anything; this gate runs only when
/// the operator submits, so a half-typed form can still show live figures.
pub fn validate_sale_lines(lines: &[SaleLine]) -> ValidationResult<()> {
    if lines.is_empty() {
        return Err(ValidationError::Empty {
            field: "items".to_string(),
        });
    }

    for line in lines {
        if !(line.quantity > 0.0) {
            return Err(ValidationError::MustBePositive {
                field: "quantity".to_string(),
            });
        }
        if line.price.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "price".to_string(),
            });
        }
        if line.discount.is_negative() {
            return Err(ValidationError::MustNotBeNegative {
                field: "discount".to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_customer_name() {
        assert!(validate_customer_name("Sharma Traders").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ravi@sharma-traders.in").is_ok());
        assert!(validate_email("").is_ok());
        assert!(validate_email("   ").is_ok());

        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("@domain.com").is_err());
        assert!(validate_email("user@nodot").is_err());
        assert!(validate_email("user@.com").is_err());
        assert!(validate_email("has space@domain.com").is_err());
    }

    #[test]
    fn test_validate_gstin() {
        assert!(validate_gstin("27AAPFU0939F1ZV").is_ok());
        assert!(validate_gstin("").is_ok());

        assert!(validate_gstin("27AAPFU0939F1Z").is_err()); // 14 chars
        assert!(validate_gstin("XXAAPFU0939F1ZV").is_err()); // bad state code
        assert!(validate_gstin("27AAPFU0939F1XV").is_err()); // missing Z
        assert!(validate_gstin("27aapfu0939f1zv").is_err()); // lowercase
    }

    #[test]
    fn test_validate_pan() {
        assert!(validate_pan("AAPFU0939F").is_ok());
        assert!(validate_pan("").is_ok());

        assert!(validate_pan("AAPFU0939").is_err()); // 9 chars
        assert!(validate_pan("1APFU0939F").is_err());
        assert!(validate_pan("AAPFU09A9F").is_err());
    }

    #[test]
    fn test_validate_credit_limit() {
        assert!(validate_credit_limit(Money::zero()).is_ok());
        assert!(validate_credit_limit(Money::from_rupees(50000.0)).is_ok());
        assert!(validate_credit_limit(Money::from_rupees(-1.0)).is_err());
    }

    #[test]
    fn test_validate_payment_amount() {
        assert!(validate_payment_amount(Money::from_rupees(500.0)).is_ok());
        assert!(validate_payment_amount(Money::zero()).is_err());
        assert!(validate_payment_amount(Money::from_rupees(-10.0)).is_err());
    }

    #[test]
    fn test_validate_product_prices() {
        let selling = Money::from_rupees(120.0);
        assert!(validate_product_prices(selling, None).is_ok());
        assert!(validate_product_prices(selling, Some(Money::from_rupees(150.0))).is_ok());
        assert!(validate_product_prices(selling, Some(selling)).is_ok());

        assert!(validate_product_prices(Money::zero(), None).is_err());
        assert!(validate_product_prices(selling, Some(Money::from_rupees(100.0))).is_err());
    }

    #[test]
    fn test_validate_sale_lines() {
        let good = vec![SaleLine::from_raw(2.0, 100.0, 0.0)];
        assert!(validate_sale_lines(&good).is_ok());

        assert!(validate_sale_lines(&[]).is_err());

        let zero_qty = vec![SaleLine::from_raw(0.0, 100.0, 0.0)];
        assert!(validate_sale_lines(&zero_qty).is_err());

        let negative_discount = vec![SaleLine::from_raw(1.0, 100.0, -5.0)];
        assert!(validate_sale_lines(&negative_discount).is_err());
    }
}
