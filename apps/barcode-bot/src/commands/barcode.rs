//! # /barcode Command
//!
//! Generates a price-embedded shelf barcode and replies with an embed.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  /barcode item_name:Coca Cola product_code:1234567890123 price:100     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  generate_code("1234567890123", 100)  ◄── barcode-core                 │
//! │       │                                                                 │
//! │       ├── ValidationError → "❌ Error" embed (ephemeral)                │
//! │       ▼                                                                 │
//! │  renderer.image_url(code)                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────┐                      │
//! │  │ 🏷️ Sainsbury's Barcode Generator              │                      │
//! │  │ Item Name     Product Code       Price       │                      │
//! │  │ Coca Cola     `1234567890123`    £1.00       │                      │
//! │  │ ▌▌▍▌▌▍▍▌▌▌▍▌▍▌▌ (image)                       │                      │
//! │  └──────────────────────────────────────────────┘                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use barcode_core::generate_code;
use barcode_core::validation::{MAX_PRICE_PENCE, MIN_PRICE_PENCE};
use tracing::debug;

use super::{CommandDefinition, CommandHandler, Invocation, OptionDefinition, OptionKind, Reply};
use crate::embed::{Branding, Embed, BRAND_COLOR};
use crate::error::BotError;
use crate::render::BarcodeRenderer;

pub const NAME: &str = "barcode";

const OPT_ITEM_NAME: &str = "item_name";
const OPT_PRODUCT_CODE: &str = "product_code";
const OPT_PRICE: &str = "price";

/// Option length caps, well under the 1024-character embed field limit.
pub const ITEM_NAME_MAX_CHARS: usize = 256;
pub const PRODUCT_CODE_MAX_CHARS: usize = 64;

pub struct BarcodeCommand {
    renderer: Arc<dyn BarcodeRenderer>,
    branding: Branding,
}

impl BarcodeCommand {
    pub fn new(renderer: Arc<dyn BarcodeRenderer>, branding: Branding) -> Self {
        BarcodeCommand { renderer, branding }
    }
}

impl CommandHandler for BarcodeCommand {
    fn handle(&self, invocation: &Invocation) -> Result<Reply, BotError> {
        let item_name = invocation
            .options
            .bounded_string(OPT_ITEM_NAME, ITEM_NAME_MAX_CHARS)?;
        let product_code = invocation
            .options
            .bounded_string(OPT_PRODUCT_CODE, PRODUCT_CODE_MAX_CHARS)?;
        let price = invocation.options.integer(OPT_PRICE)?;

        let code = generate_code(product_code, price)?;
        let image_url = self.renderer.image_url(&code)?;

        debug!(code = %code, price = price, "Barcode generated");

        let embed = Embed::new("🏷️ Sainsbury's Barcode Generator")
            .description("**Generated By Blacksite!**")
            .field("Item Name", item_name, true)
            .field("Product Code", format!("`{product_code}`"), true)
            .field("Price", code.price().to_string(), true)
            .color(BRAND_COLOR)
            .branded(&self.branding)
            .timestamp_now()
            .image(image_url.as_str());

        Ok(Reply::public(embed))
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: NAME,
        description: "Generate a Sainsbury's style barcode",
        options: vec![
            OptionDefinition::required(OptionKind::String, OPT_ITEM_NAME, "Name of the item")
                .max_length(ITEM_NAME_MAX_CHARS),
            OptionDefinition::required(
                OptionKind::String,
                OPT_PRODUCT_CODE,
                "Product barcode (8-13 digits)",
            )
            .max_length(PRODUCT_CODE_MAX_CHARS),
            OptionDefinition::required(
                OptionKind::Integer,
                OPT_PRICE,
                "Price in pence (e.g., 100 for £1.00)",
            )
            .range(MIN_PRICE_PENCE, MAX_PRICE_PENCE),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::tests::invocation;
    use crate::render::TecItRenderer;
    use serde_json::json;

    fn command() -> BarcodeCommand {
        let renderer = TecItRenderer::new("https://barcode.tec-it.com/barcode.ashx").unwrap();
        BarcodeCommand::new(Arc::new(renderer), Branding::default())
    }

    #[test]
    fn test_reply_embed() {
        let reply = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({
                    "item_name": "Coca Cola",
                    "product_code": "1234567890123",
                    "price": 100
                }),
            ))
            .unwrap();

        assert!(!reply.ephemeral);
        let embed = reply.embed;
        assert_eq!(embed.title.as_deref(), Some("🏷️ Sainsbury's Barcode Generator"));
        assert_eq!(embed.color, Some(BRAND_COLOR));
        assert_eq!(embed.fields.len(), 3);
        assert_eq!(embed.fields[0].value, "Coca Cola");
        assert_eq!(embed.fields[1].value, "`1234567890123`");
        assert_eq!(embed.fields[2].value, "£1.00");
        assert!(embed.fields.iter().all(|f| f.inline));

        let image = embed.image.unwrap().url;
        assert!(image.starts_with(
            "https://barcode.tec-it.com/barcode.ashx?data=9112345678901230001000&"
        ));
    }

    #[test]
    fn test_product_code_shown_as_typed() {
        let reply = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({
                    "item_name": "Milk",
                    "product_code": "5000-1234 5678",
                    "price": 99_999
                }),
            ))
            .unwrap();
        assert_eq!(reply.embed.fields[1].value, "`5000-1234 5678`");
        assert_eq!(reply.embed.fields[2].value, "£999.99");
    }

    #[test]
    fn test_validation_errors_propagate() {
        let err = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({ "item_name": "Milk", "product_code": "12345678", "price": 0 }),
            ))
            .unwrap_err();
        assert_eq!(err.to_string(), "Price must be between 1p and £999.99");
    }

    #[test]
    fn test_oversized_text_options_are_refused() {
        let err = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({
                    "item_name": "x".repeat(1500),
                    "product_code": "1234567890123",
                    "price": 100
                }),
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            BotError::InvalidOption { ref name, .. } if name == "item_name"
        ));

        let err = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({
                    "item_name": "Milk",
                    "product_code": format!("1234567890123{}", " ".repeat(60)),
                    "price": 100
                }),
            ))
            .unwrap_err();
        assert!(matches!(
            err,
            BotError::InvalidOption { ref name, .. } if name == "product_code"
        ));
    }

    #[test]
    fn test_item_name_at_limit_is_accepted() {
        let reply = command()
            .handle(&invocation(
                NAME,
                &["42"],
                json!({
                    "item_name": "x".repeat(ITEM_NAME_MAX_CHARS),
                    "product_code": "1234567890123",
                    "price": 100
                }),
            ))
            .unwrap();
        assert_eq!(reply.embed.fields[0].value.len(), ITEM_NAME_MAX_CHARS);
    }

    #[test]
    fn test_missing_option() {
        let err = command()
            .handle(&invocation(NAME, &["42"], json!({ "item_name": "Milk" })))
            .unwrap_err();
        assert!(matches!(err, BotError::MissingOption(name) if name == "product_code"));
    }
}
