//! # Error Types
//!
//! Domain-specific error types for barcode-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  barcode-core errors (this file)                                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  barcode-bot errors (app crate)                                        │
//! │  └── BotError         - What the chat user sees (as an error embed)    │
//! │                                                                         │
//! │  Flow: ValidationError → BotError → Error Embed → Discord              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Messages are shown to chat users verbatim, so keep them readable
//! 3. Errors are enum variants, never String

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// The code generation pipeline stops at the first one of these. Retrying with
/// the same input always fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product code has fewer digits than the shortest supported barcode.
    ///
    /// ## When This Occurs
    /// - User typed a short internal code ("1234")
    /// - Most of the input was letters or punctuation, stripped before counting
    #[error("Barcode must be at least {min} digits long")]
    TooFewDigits { min: usize, found: usize },

    /// Product code has more digits than the product field can hold.
    #[error("Barcode must be at most {max} digits long (got {found})")]
    TooManyDigits { max: usize, found: usize },

    /// Price (in pence) is outside the encodable range.
    #[error("Price must be between 1p and £999.99")]
    PriceOutOfRange { pence: i64 },

    /// A digit string was empty where at least one digit is required.
    #[error("{field} must contain at least one digit")]
    Empty { field: String },

    /// A character other than an ASCII digit was found.
    #[error("{field} has invalid character '{found}' at position {position}")]
    NonDigit {
        field: String,
        found: char,
        position: usize,
    },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::TooFewDigits { min: 8, found: 7 };
        assert_eq!(err.to_string(), "Barcode must be at least 8 digits long");

        let err = ValidationError::PriceOutOfRange { pence: 0 };
        assert_eq!(err.to_string(), "Price must be between 1p and £999.99");

        let err = ValidationError::TooManyDigits { max: 14, found: 15 };
        assert_eq!(
            err.to_string(),
            "Barcode must be at most 14 digits long (got 15)"
        );
    }

    #[test]
    fn test_non_digit_message_names_position() {
        let err = ValidationError::NonDigit {
            field: "payload".to_string(),
            found: 'x',
            position: 3,
        };
        assert_eq!(
            err.to_string(),
            "payload has invalid character 'x' at position 3"
        );
    }
}
