//! # Money Module
//!
//! Provides the `Money` type for prices encoded into shelf barcodes.
//!
//! ## Why Integer Pence?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE PRICE FIELD IS DIGITS, NOT POUNDS                                  │
//! │                                                                         │
//! │  A shelf barcode carries the price as a 6-digit zero-padded field:     │
//! │    £1.00   →  100 pence   →  "000100"                                  │
//! │    £999.99 →  99999 pence →  "099999"                                  │
//! │                                                                         │
//! │  Users enter pence, we encode pence, we only turn it into pounds       │
//! │  when rendering the reply.                                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use barcode_core::money::Money;
//!
//! let price = Money::from_pence(1099);
//! assert_eq!(price.to_string(), "£10.99");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in pence (the smallest GBP unit).
///
/// ## Design Decisions
/// - **i64 (signed)**: matches the integer type chat platforms deliver for
///   integer options, so out-of-range input can be represented and rejected
/// - **Single field tuple struct**: Zero-cost abstraction over i64
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from pence.
    ///
    /// ## Example
    /// ```rust
    /// use barcode_core::money::Money;
    ///
    /// let price = Money::from_pence(250); // £2.50
    /// assert_eq!(price.pence(), 250);
    /// ```
    #[inline]
    pub const fn from_pence(pence: i64) -> Self {
        Money(pence)
    }

    /// Returns the value in pence.
    #[inline]
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Returns the whole pounds portion.
    ///
    /// ## Example
    /// ```rust
    /// use barcode_core::money::Money;
    ///
    /// assert_eq!(Money::from_pence(1099).pounds(), 10);
    /// assert_eq!(Money::from_pence(-550).pounds(), -5);
    /// ```
    #[inline]
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the pence portion (always 0-99).
    #[inline]
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Renders as en-GB currency, e.g. `£1.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}£{}.{:02}",
            sign,
            group_thousands(self.pounds().unsigned_abs()),
            self.pence_part()
        )
    }
}

/// Inserts `,` separators the way en-GB locale formatting does.
fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_pence() {
        let money = Money::from_pence(1099);
        assert_eq!(money.pence(), 1099);
        assert_eq!(money.pounds(), 10);
        assert_eq!(money.pence_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(Money::from_pence(1).to_string(), "£0.01");
        assert_eq!(Money::from_pence(100).to_string(), "£1.00");
        assert_eq!(Money::from_pence(99999).to_string(), "£999.99");
        assert_eq!(Money::from_pence(-550).to_string(), "-£5.50");
    }

    #[test]
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_pence(12_345_678).to_string(), "£123,456.78");
        assert_eq!(Money::from_pence(100_000).to_string(), "£1,000.00");
    }
}
