//! # Domain Types
//!
//! The three shapes a request passes through on its way to a barcode.
//!
//! ## Type Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  ┌─────────────────┐   ┌──────────────────────┐   ┌─────────────────┐  │
//! │  │   CodeInput     │   │  NormalizedPayload   │   │  GeneratedCode  │  │
//! │  │  ─────────────  │──►│  ──────────────────  │──►│  ─────────────  │  │
//! │  │  raw_product_id │   │  "91"     (prefix)   │   │  digits (22)    │  │
//! │  │  price (pence)  │   │  product  (13)       │   │  price          │  │
//! │  │                 │   │  price    (6)        │   │                 │  │
//! │  └─────────────────┘   └──────────────────────┘   └─────────────────┘  │
//! │       as typed             21 digits                payload + check    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::money::Money;

// =============================================================================
// Field Widths
// =============================================================================

/// Fixed prefix that marks a price-embedded shelf code.
pub const PAYLOAD_PREFIX: &str = "91";

/// Width of the zero-padded product field.
pub const PRODUCT_FIELD_WIDTH: usize = 13;

/// Width of the zero-padded price field.
pub const PRICE_FIELD_WIDTH: usize = 6;

/// Total payload width: 2 + 13 + 6.
pub const PAYLOAD_WIDTH: usize = PAYLOAD_PREFIX.len() + PRODUCT_FIELD_WIDTH + PRICE_FIELD_WIDTH;

/// Width of a finished code (payload plus one check digit).
pub const CODE_WIDTH: usize = PAYLOAD_WIDTH + 1;

// =============================================================================
// Code Input
// =============================================================================

/// A code generation request as the user typed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeInput {
    /// Product barcode, possibly with spaces or dashes.
    pub raw_product_id: String,

    /// Shelf price in pence.
    pub price: Money,
}

impl CodeInput {
    pub fn new(raw_product_id: impl Into<String>, price: Money) -> Self {
        CodeInput {
            raw_product_id: raw_product_id.into(),
            price,
        }
    }
}

// =============================================================================
// Normalized Payload
// =============================================================================

/// The 21-digit string the check digit is computed over.
///
/// Only [`crate::validation::normalize`] constructs this, so holding one
/// means the width and digit invariants hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NormalizedPayload(String);

impl NormalizedPayload {
    pub(crate) fn from_fields(product: &str, price: &str) -> Self {
        debug_assert_eq!(product.len(), PRODUCT_FIELD_WIDTH);
        debug_assert_eq!(price.len(), PRICE_FIELD_WIDTH);
        NormalizedPayload(format!("{PAYLOAD_PREFIX}{product}{price}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 13-digit product field.
    pub fn product_field(&self) -> &str {
        let start = PAYLOAD_PREFIX.len();
        &self.0[start..start + PRODUCT_FIELD_WIDTH]
    }

    /// The 6-digit price field.
    pub fn price_field(&self) -> &str {
        &self.0[PAYLOAD_WIDTH - PRICE_FIELD_WIDTH..]
    }
}

impl fmt::Display for NormalizedPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Generated Code
// =============================================================================

/// A finished, check-digit protected code.
///
/// Immutable once built; computed fresh for each request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedCode {
    digits: String,
    price: Money,
}

impl GeneratedCode {
    pub(crate) fn new(payload: NormalizedPayload, check_digit: u8, price: Money) -> Self {
        let mut digits = payload.0;
        digits.push(char::from(b'0' + check_digit));
        GeneratedCode { digits, price }
    }

    /// All 22 digits, check digit last.
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The price that was encoded.
    pub fn price(&self) -> Money {
        self.price
    }

    /// The payload the check digit protects.
    pub fn payload(&self) -> &str {
        &self.digits[..PAYLOAD_WIDTH]
    }

    pub fn check_digit(&self) -> u8 {
        self.digits.as_bytes()[PAYLOAD_WIDTH] - b'0'
    }
}

impl fmt::Display for GeneratedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.digits)
    }
}
