//! # Validation Module
//!
//! Input validation and parsing utilities for Scoop.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: CLI argument handling                                        │
//! │  ├── Presence checks (missing operands → usage error)                  │
//! │  └── THIS MODULE: parse + validate raw operand strings                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Store types                                                  │
//! │  ├── Money is integer by construction                                  │
//! │  └── quantity_sold is unsigned by construction                         │
//! │                                                                         │
//! │  Bad input is rejected BEFORE any store operation runs, so a          │
//! │  failed validation never leaves a half-applied mutation behind         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use scoop_core::validation::{validate_product_name, parse_price};
//!
//! let name = validate_product_name("  Es Krim Coklat ").unwrap();
//! assert_eq!(name, "Es Krim Coklat");
//!
//! let price = parse_price("5000").unwrap();
//! assert_eq!(price.rupiah(), 5000);
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::{MAX_PRODUCT_NAME_LEN, MAX_SALE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty after trimming
/// - Must be at most 200 characters
///
/// ## Returns
/// The trimmed name; the store only ever holds trimmed names.
///
/// ## Example
/// ```rust
/// use scoop_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Es Krim Coklat").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_PRODUCT_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_PRODUCT_NAME_LEN,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a price amount.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (a giveaway, or an unrecorded cost)
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a sale-recording quantity.
///
/// ## Rules
/// - Must be positive (> 0); recording zero sales is meaningless
/// - Must not exceed MAX_SALE_QUANTITY (999)
pub fn validate_sale_quantity(qty: u64) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_SALE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_SALE_QUANTITY as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Operand Parsers
// =============================================================================

/// Parses a price operand into validated Money.
///
/// Rejects non-numeric and negative input in one step, so callers get a
/// single error site for "please enter a valid price".
///
/// ## Example
/// ```rust
/// use scoop_core::validation::parse_price;
///
/// assert!(parse_price("10000").is_ok());
/// assert!(parse_price("-5").is_err());
/// assert!(parse_price("lots").is_err());
/// ```
pub fn parse_price(raw: &str) -> ValidationResult<Money> {
    let amount: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "price".to_string(),
            reason: "must be a whole Rupiah amount".to_string(),
        })?;

    let price = Money::from_rupiah(amount);
    validate_price(price)?;
    Ok(price)
}

/// Parses a quantity operand into a non-negative counter value.
///
/// Used for the initial sold count on creation, where zero is valid.
pub fn parse_quantity(raw: &str) -> ValidationResult<u64> {
    raw.trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "must be a non-negative whole number".to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================
