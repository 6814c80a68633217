//! # Validation Module
//!
//! Input validation for storefront forms.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (TypeScript)                                        │
//! │  ├── Basic format checks (empty, length)                               │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Route Handler (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: field rules, BEFORE any remote call                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Remote data platform                                         │
//! │  └── NOT NULL / type constraints on the hosted tables                  │
//! │                                                                         │
//! │  A validation failure here is surfaced inline and never contacts      │
//! │  the remote service.                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Customer / Contact Fields
// =============================================================================

/// Validates a customer name (checkout and contact forms).
///
/// ## Rules
/// - Must not be empty after trimming
/// - Maximum 200 characters
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

/// Validates an e-mail address.
///
/// ## Rules
/// Shape check only (`local@domain.tld`); deliverability is the mail
/// service's problem.
pub fn validate_email(email: &str) -> ValidationResult<()> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Required {
            field: "email".to_string(),
        });
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "missing @".to_string(),
        });
    };

    if local.is_empty() || domain.is_empty() || !domain.contains('.') {
        return Err(ValidationError::InvalidFormat {
            field: "email".to_string(),
            reason: "expected local@domain.tld".to_string(),
        });
    }

    Ok(())
}

/// Validates a contact-form message body.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 5000 characters
pub fn validate_message(message: &str) -> ValidationResult<()> {
    let message = message.trim();

    if message.is_empty() {
        return Err(ValidationError::Required {
            field: "message".to_string(),
        });
    }

    if message.len() > 5000 {
        return Err(ValidationError::TooLong {
            field: "message".to_string(),
            max: 5000,
        });
    }

    Ok(())
}

// =============================================================================
// Catalog Fields (admin forms)
// =============================================================================

/// Validates a URL slug.
///
/// ## Rules
/// - Must not be empty
/// - Maximum 100 characters
/// - Lowercase alphanumeric and hyphens only
pub fn validate_slug(slug: &str) -> ValidationResult<()> {
    let slug = slug.trim();

    if slug.is_empty() {
        return Err(ValidationError::Required {
            field: "slug".to_string(),
        });
    }

    if slug.len() > 100 {
        return Err(ValidationError::TooLong {
            field: "slug".to_string(),
            max: 100,
        });
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
    {
        return Err(ValidationError::InvalidFormat {
            field: "slug".to_string(),
            reason: "must contain only lowercase letters, numbers, and hyphens".to_string(),
        });
    }

    Ok(())
}

/// Validates a product name.
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

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates an add-to-cart quantity.
pub fn validate_quantity(quantity: i64) -> ValidationResult<()> {
    if quantity < 1 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }
    Ok(())
}

/// Validates a product price in cents.
pub fn validate_price_cents(price_cents: i64) -> ValidationResult<()> {
    if price_cents <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }
    Ok(())
}

/// Validates a USD→GHS exchange rate. Rejects NaN along with zero and
/// negative rates, which would render every local price as GH₵0.00.
pub fn validate_exchange_rate(rate: f64) -> ValidationResult<()> {
    if rate.is_nan() || rate <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "exchangeRate".to_string(),
        });
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
    fn test_customer_name() {
        assert!(validate_customer_name("Ama Mensah").is_ok());
        assert!(validate_customer_name("").is_err());
        assert!(validate_customer_name("   ").is_err());
        assert!(validate_customer_name(&"a".repeat(201)).is_err());
    }

    #[test]
    fn test_email() {
        assert!(validate_email("ama@example.com").is_ok());
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("").is_err());
        assert!(validate_email("no-at-sign").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("ama@nodot").is_err());
    }

    #[test]
    fn test_message() {
        assert!(validate_message("I'd like a custom bench.").is_ok());
        assert!(validate_message("").is_err());
        assert!(validate_message(&"x".repeat(5001)).is_err());
    }

    #[test]
    fn test_slug() {
        assert!(validate_slug("wrought-lemeute").is_ok());
        assert!(validate_slug("chair-2").is_ok());
        assert!(validate_slug("").is_err());
        assert!(validate_slug("Has Spaces").is_err());
        assert!(validate_slug("UPPER").is_err());
    }

    #[test]
    fn test_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-3).is_err());
    }

    #[test]
    fn test_price_cents() {
        assert!(validate_price_cents(24_900).is_ok());
        assert!(validate_price_cents(0).is_err());
    }

    #[test]
    fn test_exchange_rate() {
        assert!(validate_exchange_rate(15.3).is_ok());
        assert!(validate_exchange_rate(0.0).is_err());
        assert!(validate_exchange_rate(-1.0).is_err());
        assert!(validate_exchange_rate(f64::NAN).is_err());
    }
}
