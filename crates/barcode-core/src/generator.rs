//! # Code Generator
//!
//! The whole pipeline: Normalize → Checksum → Assemble.
//!
//! ```text
//! generate_code("1234567890123", 100)
//!      │
//!      ▼
//! normalize      → "911234567890123000100"
//!      │
//!      ▼
//! check_digit    → 0
//!      │
//!      ▼
//! GeneratedCode  { digits: "9112345678901230001000", price: £1.00 }
//! ```
//!
//! No retries, no partial results. Pure, so callers may invoke it from any
//! number of tasks at once.

use crate::checksum::check_digit;
use crate::error::ValidationResult;
use crate::money::Money;
use crate::types::{CodeInput, GeneratedCode};
use crate::validation::normalize;

/// Generates a check-digit protected code from a product code and a price.
///
/// ## Example
/// ```rust
/// use barcode_core::generate_code;
///
/// let code = generate_code("1234567890123", 100).unwrap();
/// assert_eq!(code.digits(), "9112345678901230001000");
/// assert_eq!(code.price().to_string(), "£1.00");
/// ```
pub fn generate_code(raw_product_id: &str, price_pence: i64) -> ValidationResult<GeneratedCode> {
    let payload = normalize(raw_product_id, price_pence)?;
    let check = check_digit(payload.as_str())?;

    Ok(GeneratedCode::new(
        payload,
        check,
        Money::from_pence(price_pence),
    ))
}

impl CodeInput {
    /// Runs [`generate_code`] on this input.
    pub fn generate(&self) -> ValidationResult<GeneratedCode> {
        generate_code(&self.raw_product_id, self.price.pence())
    }
}
