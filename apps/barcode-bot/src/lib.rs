//! # Barcode Bot
//!
//! Discord slash-command bot that turns a product barcode and a price into a
//! price-embedded shelf barcode image.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Barcode Bot Components                          │
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  server        │  │  commands      │  │  render                    ││
//! │  │                │  │                │  │                            ││
//! │  │ • GET /        │  │ • Dispatcher   │  │ • BarcodeRenderer          ││
//! │  │ • GET /health  │  │ • /barcode     │  │ • TecItRenderer            ││
//! │  │ • POST /inter..│  │ • /help        │  │                            ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! │                                                                         │
//! │  ┌────────────────┐  ┌────────────────┐  ┌────────────────────────────┐│
//! │  │  signature     │  │  permission    │  │  discord                   ││
//! │  │  Ed25519 check │  │  RoleGate      │  │  command registration      ││
//! │  └────────────────┘  └────────────────┘  └────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration
//! Environment variables:
//! - `DISCORD_TOKEN` - Bot token (command registration)
//! - `DISCORD_APPLICATION_ID` - Application id
//! - `DISCORD_PUBLIC_KEY` - Hex Ed25519 key for interaction signatures
//! - `REQUIRED_ROLE_ID` - Role that unlocks `/barcode`
//! - `REQUIRED_ROLE_NAME` - Role name shown in replies (default: Paid Sainsburys)
//! - `PORT` - HTTP port (default: 3000)
//! - `REGISTER_COMMANDS` - Register slash commands at startup (default: true)

pub mod commands;
pub mod config;
pub mod discord;
pub mod embed;
pub mod error;
pub mod interaction;
pub mod permission;
pub mod render;
pub mod server;
pub mod signature;

use std::sync::Arc;

// Re-exports
pub use config::BotConfig;
pub use error::BotError;

use crate::commands::Dispatcher;
use crate::discord::DiscordClient;
use crate::embed::Branding;
use crate::permission::RoleGate;
use crate::render::TecItRenderer;
use crate::signature::SignatureVerifier;

/// Everything a request needs, built once at startup and shared read-only.
pub struct AppContext {
    pub config: BotConfig,
    pub dispatcher: Dispatcher,
    pub verifier: SignatureVerifier,
    pub discord: DiscordClient,
}

impl AppContext {
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        let verifier = SignatureVerifier::from_hex(&config.public_key)?;
        let renderer = TecItRenderer::new(&config.barcode_service_url)?;
        let dispatcher = Dispatcher::new(
            RoleGate::new(&config.required_role_id, &config.required_role_name),
            Branding::new(config.footer_icon_url.clone()),
            Arc::new(renderer),
        );
        let discord = DiscordClient::new(
            &config.discord_api_base,
            &config.application_id,
            &config.discord_token,
        );

        Ok(AppContext {
            config,
            dispatcher,
            verifier,
            discord,
        })
    }

    /// Pushes the dispatcher's command definitions to Discord.
    pub async fn register_commands(&self) -> Result<(), BotError> {
        self.discord
            .register_commands(&self.dispatcher.definitions())
            .await
    }
}
