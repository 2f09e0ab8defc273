//! # barcode-core: Pure Code Generation for the Barcode Bot
//!
//! This crate turns a product barcode and a price into a price-embedded shelf
//! code protected by a check digit. It contains no I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Barcode Bot Architecture                         │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Discord (slash commands)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ HTTPS interactions                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    barcode-bot (app)                            │   │
//! │  │    signature check, role gate, dispatch, embeds, image URL      │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ barcode-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌────────────┐  ┌────────────┐  ┌────────────┐  ┌─────────┐  │   │
//! │  │   │ validation │  │  checksum  │  │ generator  │  │  money  │  │   │
//! │  │   │ normalize  │  │check_digit │  │generate_   │  │  Money  │  │   │
//! │  │   │            │  │  verify    │  │   code     │  │  (GBP)  │  │   │
//! │  │   └────────────┘  └────────────┘  └────────────┘  └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                          │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - CodeInput, NormalizedPayload, GeneratedCode
//! - [`validation`] - Input normalization
//! - [`checksum`] - Weighted modulo-10 check digit
//! - [`generator`] - The end-to-end pipeline
//! - [`money`] - Integer pence with GBP display
//! - [`error`] - Validation errors
//!
//! ## Example Usage
//!
//! ```rust
//! use barcode_core::generate_code;
//!
//! let code = generate_code("12345678901234", 100).unwrap();
//! assert_eq!(code.digits().len(), 22);
//! assert_eq!(code.price().to_string(), "£1.00");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod checksum;
pub mod error;
pub mod generator;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{ValidationError, ValidationResult};
pub use generator::generate_code;
pub use money::Money;
pub use types::{CodeInput, GeneratedCode, NormalizedPayload};
