//! Discord REST client.
//!
//! Only one call is needed: bulk-overwriting the global slash commands at
//! startup. Interactions themselves arrive over HTTP (see [`crate::server`]).

use reqwest::{Client, Request};
use tracing::info;

use crate::commands::CommandDefinition;
use crate::error::BotError;

/// Thin wrapper over the REST API.
#[derive(Debug, Clone)]
pub struct DiscordClient {
    http: Client,
    api_base: String,
    application_id: String,
    token: String,
}

impl DiscordClient {
    pub fn new(
        api_base: impl Into<String>,
        application_id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        DiscordClient {
            http: Client::new(),
            api_base: api_base.into().trim_end_matches('/').to_string(),
            application_id: application_id.into(),
            token: token.into(),
        }
    }

    /// Builds `PUT /applications/{id}/commands` without sending it.
    pub fn register_commands_request(
        &self,
        commands: &[CommandDefinition],
    ) -> Result<Request, BotError> {
        let url = format!(
            "{}/applications/{}/commands",
            self.api_base, self.application_id
        );

        Ok(self
            .http
            .put(url)
            .header(reqwest::header::AUTHORIZATION, format!("Bot {}", self.token))
            .json(commands)
            .build()?)
    }

    /// Replaces the application's global commands with `commands`.
    pub async fn register_commands(&self, commands: &[CommandDefinition]) -> Result<(), BotError> {
        let request = self.register_commands_request(commands)?;
        let response = self.http.execute(request).await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BotError::Discord {
                status: status.as_u16(),
                body,
            });
        }

        info!(count = commands.len(), "Slash commands registered");
        Ok(())
    }
}
