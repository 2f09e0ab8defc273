//! # Slash Commands Module
//!
//! Every command the bot answers, and the dispatcher that routes to them.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (handler trait, dispatcher, definitions)
//! ├── barcode.rs  ◄─── /barcode item_name product_code price
//! └── help.rs     ◄─── /help
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Interaction (already signature-checked)                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Invocation { name, options, caller }                                   │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Dispatcher::handle                                                     │
//! │         ├── name != "help" → RoleGate::check(caller)                    │
//! │         ├── "barcode" → BarcodeCommand::handle                          │
//! │         ├── "help"    → HelpCommand::handle                             │
//! │         └── other     → UnknownCommand                                  │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Result<Reply, BotError>  ──(Dispatcher::respond)──►  Reply             │
//! │                              errors become ephemeral embeds             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Handlers are synchronous and hold no mutable state, so one dispatcher is
//! shared by every in-flight request.

pub mod barcode;
pub mod help;

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::embed::{self, Branding, Embed};
use crate::error::BotError;
use crate::interaction::{Caller, Interaction, Options};
use crate::permission::RoleGate;
use crate::render::BarcodeRenderer;

pub use barcode::BarcodeCommand;
pub use help::HelpCommand;

// =============================================================================
// Handler Interface
// =============================================================================

/// One slash command invocation, detached from the platform payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub name: String,
    pub options: Options,
    pub caller: Caller,
}

impl Invocation {
    pub fn from_interaction(interaction: Interaction) -> Result<Self, BotError> {
        let caller = interaction.caller();
        let data = interaction
            .data
            .ok_or_else(|| BotError::MalformedInteraction("missing command data".to_string()))?;

        Ok(Invocation {
            name: data.name,
            options: Options::new(data.options),
            caller,
        })
    }
}

/// What a command answers with.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub embed: Embed,

    /// Only the caller sees the reply.
    pub ephemeral: bool,
}

impl Reply {
    pub fn public(embed: Embed) -> Self {
        Reply {
            embed,
            ephemeral: false,
        }
    }

    pub fn ephemeral(embed: Embed) -> Self {
        Reply {
            embed,
            ephemeral: true,
        }
    }
}

/// A pure mapping from an invocation to a reply.
pub trait CommandHandler: Send + Sync {
    fn handle(&self, invocation: &Invocation) -> Result<Reply, BotError>;
}

// =============================================================================
// Dispatcher
// =============================================================================

/// Routes invocations to commands behind the role gate.
pub struct Dispatcher {
    gate: RoleGate,
    branding: Branding,
    barcode: BarcodeCommand,
    help: HelpCommand,
}

impl Dispatcher {
    pub fn new(gate: RoleGate, branding: Branding, renderer: Arc<dyn BarcodeRenderer>) -> Self {
        Dispatcher {
            barcode: BarcodeCommand::new(renderer, branding.clone()),
            help: HelpCommand::new(gate.role_name(), branding.clone()),
            gate,
            branding,
        }
    }

    /// Like [`CommandHandler::handle`], but failures become error replies.
    pub fn respond(&self, invocation: &Invocation) -> Reply {
        match self.handle(invocation) {
            Ok(reply) => {
                info!(
                    command = %invocation.name,
                    user_id = %invocation.caller.user_id,
                    username = %invocation.caller.username,
                    "Command handled"
                );
                reply
            }
            Err(BotError::PermissionDenied { role }) => {
                info!(
                    command = %invocation.name,
                    user_id = %invocation.caller.user_id,
                    username = %invocation.caller.username,
                    "Command denied"
                );
                Reply::ephemeral(embed::access_denied(&role, &self.branding))
            }
            Err(e) => {
                warn!(
                    command = %invocation.name,
                    user_id = %invocation.caller.user_id,
                    username = %invocation.caller.username,
                    error = %e,
                    "Command failed"
                );
                Reply::ephemeral(embed::error(&e.to_string(), &self.branding))
            }
        }
    }

    /// Definitions for every routed command, for registration.
    pub fn definitions(&self) -> Vec<CommandDefinition> {
        vec![barcode::definition(), help::definition()]
    }
}

impl CommandHandler for Dispatcher {
    fn handle(&self, invocation: &Invocation) -> Result<Reply, BotError> {
        if invocation.name != help::NAME {
            self.gate.check(&invocation.caller)?;
        }

        match invocation.name.as_str() {
            barcode::NAME => self.barcode.handle(invocation),
            help::NAME => self.help.handle(invocation),
            other => Err(BotError::UnknownCommand(other.to_string())),
        }
    }
}

// =============================================================================
// Registration Definitions
// =============================================================================

/// Option value types the bot declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(into = "u8")]
pub enum OptionKind {
    String,
    Integer,
}

impl From<OptionKind> for u8 {
    fn from(kind: OptionKind) -> u8 {
        match kind {
            OptionKind::String => 3,
            OptionKind::Integer => 4,
        }
    }
}

/// A slash command as registered with the platform.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<OptionDefinition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionDefinition {
    #[serde(rename = "type")]
    pub kind: OptionKind,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_value: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<usize>,
}

impl OptionDefinition {
    pub fn required(kind: OptionKind, name: &'static str, description: &'static str) -> Self {
        OptionDefinition {
            kind,
            name,
            description,
            required: true,
            min_value: None,
            max_value: None,
            max_length: None,
        }
    }

    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.min_value = Some(min);
        self.max_value = Some(max);
        self
    }

    /// Longest string the client lets the user submit.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }
}
