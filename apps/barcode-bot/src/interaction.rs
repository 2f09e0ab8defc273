//! # Interaction Payloads
//!
//! The slice of Discord's interaction JSON the bot reads and writes.
//!
//! ## Request / Response
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Inbound                              Outbound                          │
//! │  ───────                              ────────                          │
//! │  { "type": 1 }                  ───►  { "type": 1 }            (PONG)   │
//! │                                                                         │
//! │  { "type": 2,                   ───►  { "type": 4,                      │
//! │    "data": { "name": "barcode",         "data": {                       │
//! │              "options": [...] },          "embeds": [ ... ],            │
//! │    "member": { "user": {...},             "flags": 64 } }  (ephemeral)  │
//! │                "roles": [...] } }                                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Unknown fields are ignored so new platform fields never break parsing.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::embed::Embed;
use crate::error::BotError;

/// Message flag: only the invoking user sees the reply.
pub const EPHEMERAL_FLAG: u64 = 1 << 6;

// =============================================================================
// Inbound
// =============================================================================

/// Interaction kinds the bot distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(from = "u8")]
pub enum InteractionType {
    Ping,
    ApplicationCommand,
    Other(u8),
}

impl From<u8> for InteractionType {
    fn from(value: u8) -> Self {
        match value {
            1 => InteractionType::Ping,
            2 => InteractionType::ApplicationCommand,
            other => InteractionType::Other(other),
        }
    }
}

/// One inbound interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    pub id: String,

    #[serde(rename = "type")]
    pub kind: InteractionType,

    pub data: Option<CommandData>,

    /// Present for interactions inside a guild.
    pub member: Option<Member>,

    /// Present for interactions in DMs.
    pub user: Option<User>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,

    #[serde(default)]
    pub options: Vec<CommandOption>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CommandOption {
    pub name: String,

    #[serde(default)]
    pub value: Option<Value>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    pub user: Option<User>,

    /// Role ids, not names.
    #[serde(default)]
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
}

/// Who invoked a command, as far as the permission gate cares.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Caller {
    pub user_id: String,
    pub username: String,
    pub role_ids: Vec<String>,
    pub in_guild: bool,
}

impl Interaction {
    pub fn caller(&self) -> Caller {
        let user = self
            .member
            .as_ref()
            .and_then(|m| m.user.as_ref())
            .or(self.user.as_ref());

        Caller {
            user_id: user.map(|u| u.id.clone()).unwrap_or_default(),
            username: user.map(|u| u.username.clone()).unwrap_or_default(),
            role_ids: self
                .member
                .as_ref()
                .map(|m| m.roles.clone())
                .unwrap_or_default(),
            in_guild: self.member.is_some(),
        }
    }
}

// =============================================================================
// Typed Options
// =============================================================================

/// Command options with typed accessors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Options(Vec<CommandOption>);

impl Options {
    pub fn new(options: Vec<CommandOption>) -> Self {
        Options(options)
    }

    fn value(&self, name: &str) -> Result<&Value, BotError> {
        self.0
            .iter()
            .find(|opt| opt.name == name)
            .and_then(|opt| opt.value.as_ref())
            .ok_or_else(|| BotError::MissingOption(name.to_string()))
    }

    pub fn string(&self, name: &str) -> Result<&str, BotError> {
        self.value(name)?
            .as_str()
            .ok_or_else(|| BotError::InvalidOption {
                name: name.to_string(),
                expected: "a string".to_string(),
            })
    }

    /// Like [`Options::string`], but refuses values over `max_chars`.
    pub fn bounded_string(&self, name: &str, max_chars: usize) -> Result<&str, BotError> {
        let value = self.string(name)?;
        if value.chars().count() > max_chars {
            return Err(BotError::InvalidOption {
                name: name.to_string(),
                expected: format!("at most {max_chars} characters"),
            });
        }
        Ok(value)
    }

    pub fn integer(&self, name: &str) -> Result<i64, BotError> {
        self.value(name)?
            .as_i64()
            .ok_or_else(|| BotError::InvalidOption {
                name: name.to_string(),
                expected: "an integer".to_string(),
            })
    }
}

// =============================================================================
// Outbound
// =============================================================================

/// Response body for the interactions endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    pub kind: u8,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<MessageData>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageData {
    pub embeds: Vec<Embed>,

    #[serde(skip_serializing_if = "is_zero")]
    pub flags: u64,
}

fn is_zero(flags: &u64) -> bool {
    *flags == 0
}

impl InteractionResponse {
    const PONG: u8 = 1;
    const CHANNEL_MESSAGE_WITH_SOURCE: u8 = 4;

    pub fn pong() -> Self {
        InteractionResponse {
            kind: Self::PONG,
            data: None,
        }
    }

    pub fn message(embed: Embed, ephemeral: bool) -> Self {
        InteractionResponse {
            kind: Self::CHANNEL_MESSAGE_WITH_SOURCE,
            data: Some(MessageData {
                embeds: vec![embed],
                flags: if ephemeral { EPHEMERAL_FLAG } else { 0 },
            }),
        }
    }
}
