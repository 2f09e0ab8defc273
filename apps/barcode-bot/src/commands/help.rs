//! /help command. Open to everyone, including callers without the role.

use super::{CommandDefinition, CommandHandler, Invocation, Reply};
use crate::embed::{Branding, Embed, ALERT_COLOR};
use crate::error::BotError;

pub const NAME: &str = "help";

pub struct HelpCommand {
    role_name: String,
    branding: Branding,
}

impl HelpCommand {
    pub fn new(role_name: impl Into<String>, branding: Branding) -> Self {
        HelpCommand {
            role_name: role_name.into(),
            branding,
        }
    }

    fn embed(&self) -> Embed {
        let role = &self.role_name;

        Embed::new("🤖 Sainsbury's Barcode Bot Help")
            .description("Generate Sainsbury's style barcodes with custom pricing!")
            .field(
                "🔒 Access Required",
                format!("You need the **\"{role}\"** role to use barcode generation commands."),
                false,
            )
            .field(
                "📋 Commands",
                "`/barcode` - Generate custom barcode\n`/help` - Show this help message",
                false,
            )
            .field(
                "🏷️ /barcode",
                "Generate a barcode with item name and custom price\n\
                 **Usage:** `/barcode item_name:Coca Cola product_code:1234567890123 price:100`",
                false,
            )
            .field(
                "📝 Notes",
                format!(
                    "• Item name is required\n\
                     • Product code must be 8-13 digits (14 with check digit)\n\
                     • Price in pence (100 = £1.00)\n\
                     • Max price: £999.99\n\
                     • Only users with \"{role}\" role can generate barcodes"
                ),
                false,
            )
            .color(ALERT_COLOR)
            .footer(
                format!("{} • Discord Bot", self.branding.footer_text),
                self.branding.footer_icon_url.clone(),
            )
            .timestamp_now()
    }
}

impl CommandHandler for HelpCommand {
    fn handle(&self, _invocation: &Invocation) -> Result<Reply, BotError> {
        Ok(Reply::public(self.embed()))
    }
}

pub fn definition() -> CommandDefinition {
    CommandDefinition {
        name: NAME,
        description: "Show help information for the barcode bot",
        options: Vec::new(),
    }
}
