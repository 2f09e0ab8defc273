//! Embed model and the handful of reply cards the bot sends.

use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Brand orange used for successful barcode replies.
pub const BRAND_COLOR: u32 = 0xF4_77_38;

/// Red used for help, denials and errors.
pub const ALERT_COLOR: u32 = 0xDC_35_45;

pub const FOOTER_TEXT: &str = "Sainsbury's Barcode Generator";

/// Footer settings shared by every embed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Branding {
    pub footer_text: String,
    pub footer_icon_url: Option<String>,
}

impl Branding {
    pub fn new(footer_icon_url: Option<String>) -> Self {
        Branding {
            footer_text: FOOTER_TEXT.to_string(),
            footer_icon_url,
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Branding::new(None)
    }
}

/// A rich reply card.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Embed {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<u32>,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<EmbedField>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<EmbedFooter>,

    /// ISO 8601
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedFooter {
    pub text: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

impl Embed {
    pub fn new(title: impl Into<String>) -> Self {
        Embed {
            title: Some(title.into()),
            ..Embed::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn color(mut self, color: u32) -> Self {
        self.color = Some(color);
        self
    }

    pub fn field(
        mut self,
        name: impl Into<String>,
        value: impl Into<String>,
        inline: bool,
    ) -> Self {
        self.fields.push(EmbedField {
            name: name.into(),
            value: value.into(),
            inline,
        });
        self
    }

    pub fn footer(mut self, text: impl Into<String>, icon_url: Option<String>) -> Self {
        self.footer = Some(EmbedFooter {
            text: text.into(),
            icon_url,
        });
        self
    }

    /// Footer with the configured text and icon.
    pub fn branded(self, branding: &Branding) -> Self {
        self.footer(
            branding.footer_text.clone(),
            branding.footer_icon_url.clone(),
        )
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(EmbedImage { url: url.into() });
        self
    }

    pub fn timestamp_now(mut self) -> Self {
        self.timestamp = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        self
    }
}

// =============================================================================
// Standard Cards
// =============================================================================

/// Shown when the caller lacks the required role.
pub fn access_denied(role_name: &str, branding: &Branding) -> Embed {
    Embed::new("🔒 Access Denied")
        .description(format!(
            "**You need the \"{role_name}\" role to use this bot!**\n\n\
             Contact a server administrator to get access."
        ))
        .color(ALERT_COLOR)
        .branded(branding)
        .timestamp_now()
}

/// Shown for any other failed command.
pub fn error(message: &str, branding: &Branding) -> Embed {
    Embed::new("❌ Error")
        .description(format!("**Error:** {message}"))
        .color(ALERT_COLOR)
        .footer(branding.footer_text.clone(), None)
        .timestamp_now()
}
