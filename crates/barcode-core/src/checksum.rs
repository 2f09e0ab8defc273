//! # Check Digit Module
//!
//! Weighted modulo-10 check digit, the same rule EAN-13 and UPC-A use.
//!
//! ## The Rule
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Walk the digits from the RIGHT:                                       │
//! │                                                                         │
//! │    digits:   9  1  1  2  ...  0  1  0  0                               │
//! │    offset:  20 19 18 17  ...  3  2  1  0                               │
//! │    weight:   3  1  3  1  ...  1  3  1  3   (even offset → 3, odd → 1)  │
//! │                                                                         │
//! │  sum   = Σ digit × weight                                              │
//! │  check = (10 − sum mod 10) mod 10                                      │
//! │                                                                         │
//! │  Appending `check` (with weight 1) makes the total ≡ 0 (mod 10)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every function here is total over non-empty ASCII digit strings and
//! rejects anything else with a [`ValidationError`].

use crate::error::{ValidationError, ValidationResult};

/// Weight applied to digits at even offsets from the right.
const WEIGHT_EVEN_OFFSET: u64 = 3;

/// Weight applied to digits at odd offsets from the right.
const WEIGHT_ODD_OFFSET: u64 = 1;

/// Parses `digits` into numeric values, left to right.
fn digit_values(digits: &str) -> ValidationResult<Vec<u64>> {
    if digits.is_empty() {
        return Err(ValidationError::Empty {
            field: "digits".to_string(),
        });
    }

    digits
        .chars()
        .enumerate()
        .map(|(position, ch)| {
            if !ch.is_ascii_digit() {
                return Err(ValidationError::NonDigit {
                    field: "digits".to_string(),
                    found: ch,
                    position,
                });
            }
            Ok(u64::from(ch as u8 - b'0'))
        })
        .collect()
}

/// Computes the weighted sum of `digits`, weighting from the rightmost digit.
///
/// ## Example
/// ```rust
/// use barcode_core::checksum::weighted_sum;
///
/// // 1×1 + 2×3 = 7
/// assert_eq!(weighted_sum("12").unwrap(), 7);
/// ```
pub fn weighted_sum(digits: &str) -> ValidationResult<u64> {
    let values = digit_values(digits)?;

    Ok(weighted_terms(&values).sum())
}

/// `digit * weight` for each digit, rightmost first.
fn weighted_terms(values: &[u64]) -> impl Iterator<Item = u64> + '_ {
    values.iter().rev().enumerate().map(|(offset, digit)| {
        let weight = if offset % 2 == 0 {
            WEIGHT_EVEN_OFFSET
        } else {
            WEIGHT_ODD_OFFSET
        };
        digit * weight
    })
}

/// Computes the check digit for `digits`.
///
/// ## Example
/// ```rust
/// use barcode_core::checksum::check_digit;
///
/// // EAN-13 for 400638133393 is 4006381333931
/// assert_eq!(check_digit("400638133393").unwrap(), 1);
/// ```
pub fn check_digit(digits: &str) -> ValidationResult<u8> {
    let values = digit_values(digits)?;

    // Only the residue matters; reducing as we go keeps any length in range.
    let residue = weighted_terms(&values).fold(0, |acc, term| (acc + term) % 10);
    Ok(((10 - residue) % 10) as u8)
}

/// Returns `true` if the last digit of `code` is the check digit of the rest.
///
/// Codes shorter than two digits carry no base to check against and are
/// reported as invalid rather than as an error.
pub fn verify(code: &str) -> ValidationResult<bool> {
    let values = digit_values(code)?;
    if values.len() < 2 {
        return Ok(false);
    }
    let last = values[values.len() - 1];

    let expected = check_digit(&code[..code.len() - 1])?;
    Ok(u64::from(expected) == last)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_known_ean13_check_digits() {
        // Published EAN-13 / UPC-A examples
        assert_eq!(check_digit("400638133393").unwrap(), 1);
        assert_eq!(check_digit("501234567890").unwrap(), 0);
        assert_eq!(check_digit("03600029145").unwrap(), 2);
    }

    #[test]
    fn test_weights_start_at_three_on_the_right() {
        assert_eq!(weighted_sum("1").unwrap(), 3);
        assert_eq!(weighted_sum("10").unwrap(), 1);
        assert_eq!(weighted_sum("100").unwrap(), 3);
    }

    #[test]
    fn test_payload_check_digit() {
        // 91 + 1234567890123 + 000100, weighted sum 140
        let payload = "911234567890123000100";
        assert_eq!(weighted_sum(payload).unwrap(), 140);
        assert_eq!(check_digit(payload).unwrap(), 0);
    }

    #[test]
    fn test_long_input_stays_in_range() {
        // 9 × (3 × 500_001 + 500_000) = 18_000_027
        let digits = "9".repeat(1_000_001);
        assert_eq!(weighted_sum(&digits).unwrap(), 18_000_027);
        assert_eq!(check_digit(&digits).unwrap(), 3);
        assert!(verify(&format!("{digits}3")).unwrap());
    }

    #[test]
    fn test_all_zero_digits() {
        assert_eq!(check_digit("0000000").unwrap(), 0);
    }

    #[test]
    fn test_rejects_empty_and_non_digits() {
        assert!(matches!(
            check_digit(""),
            Err(ValidationError::Empty { .. })
        ));
        assert_eq!(
            check_digit("12a4"),
            Err(ValidationError::NonDigit {
                field: "digits".to_string(),
                found: 'a',
                position: 2,
            })
        );
        assert!(check_digit("１２３").is_err());
    }

    #[test]
    fn test_verify() {
        assert!(verify("4006381333931").unwrap());
        assert!(!verify("4006381333932").unwrap());
        assert!(!verify("7").unwrap());
        assert!(verify("").is_err());
    }

    proptest! {
        #[test]
        fn prop_check_digit_closes_sum(base in "[0-9]{1,40}") {
            let check = check_digit(&base).unwrap();
            let total = weighted_sum(&base).unwrap() + u64::from(check);
            prop_assert_eq!(total % 10, 0);
            prop_assert!(check <= 9);
        }

        #[test]
        fn prop_appended_check_digit_verifies(base in "[0-9]{1,40}") {
            let check = check_digit(&base).unwrap();
            let code = format!("{base}{check}");
            prop_assert!(verify(&code).unwrap());
        }

        #[test]
        fn prop_check_digit_is_deterministic(base in "[0-9]{1,40}") {
            prop_assert_eq!(check_digit(&base), check_digit(&base));
        }
    }
}
