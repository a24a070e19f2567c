//! # Validation Module
//!
//! Input validation utilities for Ovro POS.
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
//! │  Layer 2: Tauri Command (Rust)                                         │
//! │  ├── Type validation (deserialization)                                 │
//! │  └── THIS MODULE: Business rule validation                             │
//! │                                                                         │
//! │  Loose inputs (free-text prices, discount percentages) come from       │
//! │  counter-staff typing in a hurry. Two recovery policies exist:         │
//! │  hard-reject (validate_*) for catalog edits where a silent zero        │
//! │  would corrupt data, and coerce-to-zero (parse_*) for checkout         │
//! │  fields where the flow must never stall on a typo.                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::{DiscountRate, Money};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty
/// - Must be between 1 and 200 characters
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

/// Validates a price in poisha.
///
/// ## Rules
/// - Must be positive (> 0)
///
/// Used for manual item entry and per-line price edits, where a zero or
/// negative price is always a typo.
pub fn validate_price_poisha(poisha: i64) -> ValidationResult<()> {
    if poisha <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a cost (buy) price in poisha.
///
/// ## Rules
/// - Must be non-negative (>= 0)
/// - Zero is allowed (services with no cost of goods)
pub fn validate_buy_price_poisha(poisha: i64) -> ValidationResult<()> {
    if poisha < 0 {
        return Err(ValidationError::OutOfRange {
            field: "buy price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Coercing Parsers
// =============================================================================

/// Parses a free-text taka amount, coercing anything unparsable to zero.
///
/// ## Rules
/// - Empty, non-numeric, negative and non-finite input all yield ৳0
/// - Fractional taka is kept to poisha precision
///
/// ```text
/// "100"   → ৳100.00        "abc"  → ৳0.00
/// "99.5"  → ৳99.50         "-50"  → ৳0.00
/// ""      → ৳0.00          "1e99" → ৳0.00 (overflow guard)
/// ```
pub fn parse_taka_or_zero(input: &str) -> Money {
    let value: f64 = match input.trim().parse() {
        Ok(v) => v,
        Err(_) => return Money::zero(),
    };

    if !value.is_finite() || value < 0.0 {
        return Money::zero();
    }

    let poisha = (value * 100.0).round();
    if poisha > i64::MAX as f64 {
        return Money::zero();
    }

    Money::from_poisha(poisha as i64)
}

/// Parses a free-text discount percentage, coercing unparsable input to
/// zero and clamping the result to 0..=100.
pub fn parse_discount_or_zero(input: &str) -> DiscountRate {
    match input.trim().parse::<f64>() {
        Ok(pct) => DiscountRate::from_percentage(pct),
        Err(_) => DiscountRate::zero(),
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Engine Oil (Shell Advance)").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_price_poisha() {
        assert!(validate_price_poisha(55_000).is_ok());
        assert!(validate_price_poisha(0).is_err());
        assert!(validate_price_poisha(-100).is_err());
    }

    #[test]
    fn test_validate_buy_price_poisha() {
        assert!(validate_buy_price_poisha(0).is_ok());
        assert!(validate_buy_price_poisha(42_000).is_ok());
        assert!(validate_buy_price_poisha(-1).is_err());
    }

    #[test]
    fn test_parse_taka_or_zero() {
        assert_eq!(parse_taka_or_zero("100"), Money::from_taka(100));
        assert_eq!(parse_taka_or_zero(" 99.5 "), Money::from_poisha(9_950));
        assert_eq!(parse_taka_or_zero("abc"), Money::zero());
        assert_eq!(parse_taka_or_zero(""), Money::zero());
        assert_eq!(parse_taka_or_zero("-50"), Money::zero());
        assert_eq!(parse_taka_or_zero("NaN"), Money::zero());
        assert_eq!(parse_taka_or_zero("1e99"), Money::zero());
    }

    #[test]
    fn test_parse_discount_or_zero() {
        assert_eq!(parse_discount_or_zero("10").percentage(), 10.0);
        assert_eq!(parse_discount_or_zero("7.5").bps(), 750);
        assert_eq!(parse_discount_or_zero("junk").bps(), 0);
        assert_eq!(parse_discount_or_zero("-5").bps(), 0);
        assert_eq!(parse_discount_or_zero("150").bps(), 10_000);
    }
}
