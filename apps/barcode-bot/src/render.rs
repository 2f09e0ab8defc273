//! # Barcode Rendering
//!
//! Turns a generated code into an image reference the chat client can show.
//! The bot never draws bars itself; it points the embed at an external
//! rendering service and treats the result as opaque.
//!
//! ```text
//! GeneratedCode "9112345678901230001000"
//!      │
//!      ▼
//! TecItRenderer::image_url
//!      │
//!      ▼
//! https://barcode.tec-it.com/barcode.ashx?data=9112345678901230001000&code=Code128&...
//! ```

use barcode_core::GeneratedCode;
use url::Url;

use crate::error::BotError;

/// Anything that can produce an image URL for a code.
pub trait BarcodeRenderer: Send + Sync {
    fn image_url(&self, code: &GeneratedCode) -> Result<Url, BotError>;
}

/// Code128 rendering parameters, in the order the service documents them.
const CODE128_PARAMS: &[(&str, &str)] = &[
    ("code", "Code128"),
    ("multiplebarcodes", "false"),
    ("translate-esc", "false"),
    ("unit", "Fit"),
    ("dpi", "150"),
    ("imagetype", "Png"),
    ("rotation", "0"),
    ("color", "#000000"),
    ("bgcolor", "#ffffff"),
    ("codepage", ""),
    ("qunit", "Mm"),
    ("quiet", "5"),
    ("eclevel", "L"),
    ("barwidth", "2"),
    ("barheight", "50"),
];

/// Renders through the TEC-IT online barcode generator.
#[derive(Debug, Clone)]
pub struct TecItRenderer {
    base: Url,
}

impl TecItRenderer {
    pub fn new(base_url: &str) -> Result<Self, BotError> {
        Ok(TecItRenderer {
            base: Url::parse(base_url)?,
        })
    }
}

impl BarcodeRenderer for TecItRenderer {
    fn image_url(&self, code: &GeneratedCode) -> Result<Url, BotError> {
        let mut url = self.base.clone();
        {
            let mut query = url.query_pairs_mut();
            query.clear();
            query.append_pair("data", code.digits());
            for (key, value) in CODE128_PARAMS {
                query.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use barcode_core::generate_code;

    fn renderer() -> TecItRenderer {
        TecItRenderer::new("https://barcode.tec-it.com/barcode.ashx").unwrap()
    }

    #[test]
    fn test_image_url_carries_code_and_params() {
        let code = generate_code("1234567890123", 100).unwrap();
        let url = renderer().image_url(&code).unwrap();

        assert_eq!(url.host_str(), Some("barcode.tec-it.com"));
        assert_eq!(url.path(), "/barcode.ashx");

        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs[0],
            ("data".to_string(), "9112345678901230001000".to_string())
        );
        assert!(pairs.contains(&("code".to_string(), "Code128".to_string())));
        assert!(pairs.contains(&("barheight".to_string(), "50".to_string())));
        assert!(pairs.contains(&("codepage".to_string(), String::new())));
    }

    #[test]
    fn test_colors_are_percent_encoded() {
        let code = generate_code("12345678", 1).unwrap();
        let url = renderer().image_url(&code).unwrap();
        assert!(url.as_str().contains("color=%23000000"));
        assert!(url.as_str().contains("bgcolor=%23ffffff"));
    }

    #[test]
    fn test_existing_query_is_replaced() {
        let renderer = TecItRenderer::new("https://img.example.com/render?stale=1").unwrap();
        let code = generate_code("12345678", 1).unwrap();
        let url = renderer.image_url(&code).unwrap();
        assert!(!url.as_str().contains("stale"));
    }

    #[test]
    fn test_bad_base_url() {
        assert!(matches!(
            TecItRenderer::new("not a url"),
            Err(BotError::Url(_))
        ));
    }
}
