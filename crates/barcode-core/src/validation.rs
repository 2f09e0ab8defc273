//! # Validation Module
//!
//! Input normalization for code generation: turns what a user typed into a
//! fixed-width [`NormalizedPayload`], or explains why it can't.
//!
//! ## Normalization Steps
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  product_code: "5000-1234 5678"        price: 250                      │
//! │       │                                    │                            │
//! │       ▼                                    │                            │
//! │  1. strip non-digits → "500012345678"      │                            │
//! │       │                                    │                            │
//! │       ├── < 8 digits? → TooFewDigits       │                            │
//! │       │                                    ▼                            │
//! │       │                          2. 1 ≤ price ≤ 99999? else PriceOutOfRange
//! │       ▼                                    │                            │
//! │  3. 14 digits? drop stale check digit      │                            │
//! │       ├── still > 13? → TooManyDigits      │                            │
//! │       ▼                                    ▼                            │
//! │  4. pad to 13 → "0500012345678"   5. pad to 6 → "000250"               │
//! │       │                                    │                            │
//! │       └──────────────┬─────────────────────┘                            │
//! │                      ▼                                                  │
//! │      "91" + "0500012345678" + "000250"  (21 digits)                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barcode_core::validation::normalize;
//!
//! let payload = normalize("5000-1234 5678", 250).unwrap();
//! assert_eq!(payload.as_str(), "910500012345678000250");
//! ```

use crate::error::{ValidationError, ValidationResult};
use crate::types::{NormalizedPayload, PRICE_FIELD_WIDTH, PRODUCT_FIELD_WIDTH};

/// Shortest accepted product code (EAN-8).
pub const MIN_PRODUCT_DIGITS: usize = 8;

/// Length at which the trailing digit is treated as a stale check digit
/// (GTIN-14).
pub const STALE_CHECK_DIGIT_LENGTH: usize = 14;

/// Lowest encodable price in pence.
pub const MIN_PRICE_PENCE: i64 = 1;

/// Highest encodable price in pence (£999.99).
pub const MAX_PRICE_PENCE: i64 = 99_999;

// =============================================================================
// Field Validators
// =============================================================================

/// Strips every non-digit character and checks the minimum length.
///
/// ## Example
/// ```rust
/// use barcode_core::validation::product_digits;
///
/// assert_eq!(product_digits("5 000112 54601").unwrap(), "500011254601");
/// assert!(product_digits("1234-567").is_err());
/// ```
pub fn product_digits(raw_product_id: &str) -> ValidationResult<String> {
    let digits: String = raw_product_id
        .chars()
        .filter(|c| c.is_ascii_digit())
        .collect();

    if digits.len() < MIN_PRODUCT_DIGITS {
        return Err(ValidationError::TooFewDigits {
            min: MIN_PRODUCT_DIGITS,
            found: digits.len(),
        });
    }

    Ok(digits)
}

/// Validates a price in pence.
///
/// ## Rules
/// - Must be at least 1p (free items can't be encoded)
/// - Must not exceed £999.99 (the price field has room for 5 significant digits)
pub fn validate_price_pence(pence: i64) -> ValidationResult<()> {
    if !(MIN_PRICE_PENCE..=MAX_PRICE_PENCE).contains(&pence) {
        return Err(ValidationError::PriceOutOfRange { pence });
    }

    Ok(())
}

/// Fits product digits into the 13-digit product field.
///
/// A 14-digit code loses its last digit. Anything longer than 13 after that
/// is rejected rather than truncated, since dropping leading digits would
/// silently encode a different product.
fn product_field(mut digits: String) -> ValidationResult<String> {
    if digits.len() == STALE_CHECK_DIGIT_LENGTH {
        digits.pop();
    }

    if digits.len() > PRODUCT_FIELD_WIDTH {
        return Err(ValidationError::TooManyDigits {
            max: STALE_CHECK_DIGIT_LENGTH,
            found: digits.len(),
        });
    }

    Ok(format!("{digits:0>width$}", width = PRODUCT_FIELD_WIDTH))
}

// =============================================================================
// Normalizer
// =============================================================================

/// Normalizes a raw product code and a price into the 21-digit payload.
///
/// Checks run in order (product length, then price) and stop at the first
/// failure.
pub fn normalize(raw_product_id: &str, price_pence: i64) -> ValidationResult<NormalizedPayload> {
    let digits = product_digits(raw_product_id)?;
    validate_price_pence(price_pence)?;

    let product = product_field(digits)?;
    let price = format!("{price_pence:0>width$}", width = PRICE_FIELD_WIDTH);

    Ok(NormalizedPayload::from_fields(&product, &price))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_digits_strips_formatting() {
        assert_eq!(product_digits("5000-1234 5678").unwrap(), "500012345678");
        assert_eq!(product_digits("abc12345678xyz").unwrap(), "12345678");
    }

    #[test]
    fn test_product_digit_boundaries() {
        assert_eq!(
            product_digits("1234567"),
            Err(ValidationError::TooFewDigits { min: 8, found: 7 })
        );
        assert!(product_digits("12345678").is_ok());
        // Letters don't count toward the minimum
        assert!(product_digits("ABCDEFGH1234").is_err());
    }

    #[test]
    fn test_validate_price_pence() {
        assert!(validate_price_pence(1).is_ok());
        assert!(validate_price_pence(99_999).is_ok());

        assert_eq!(
            validate_price_pence(0),
            Err(ValidationError::PriceOutOfRange { pence: 0 })
        );
        assert!(validate_price_pence(100_000).is_err());
        assert!(validate_price_pence(-5).is_err());
    }

    #[test]
    fn test_normalize_pads_fields() {
        let payload = normalize("12345678", 1).unwrap();
        assert_eq!(payload.product_field(), "0000012345678");
        assert_eq!(payload.price_field(), "000001");
        assert_eq!(payload.as_str(), "910000012345678000001");

        let payload = normalize("12345678", 99_999).unwrap();
        assert_eq!(payload.price_field(), "099999");
    }

    #[test]
    fn test_normalize_thirteen_digits_unchanged() {
        let payload = normalize("1234567890123", 100).unwrap();
        assert_eq!(payload.product_field(), "1234567890123");
        assert_eq!(payload.as_str(), "911234567890123000100");
    }

    #[test]
    fn test_normalize_drops_fourteenth_digit() {
        let payload = normalize("12345678901234", 100).unwrap();
        assert_eq!(payload.product_field(), "1234567890123");
    }

    #[test]
    fn test_normalize_rejects_fifteen_digits() {
        assert_eq!(
            normalize("123456789012345", 100),
            Err(ValidationError::TooManyDigits { max: 14, found: 15 })
        );
    }

    #[test]
    fn test_product_error_wins_over_price_error() {
        assert!(matches!(
            normalize("123", 0),
            Err(ValidationError::TooFewDigits { .. })
        ));
    }

    #[test]
    fn test_payload_is_always_21_digits() {
        for code in ["12345678", "123456789012", "1234567890123", "12345678901234"] {
            let payload = normalize(code, 4321).unwrap();
            assert_eq!(payload.as_str().len(), 21);
            assert!(payload.as_str().chars().all(|c| c.is_ascii_digit()));
        }
    }
}
