//! DiscordClient -- thin REST client for the endpoints GadgetBuddy uses.

use std::time::Duration;

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde_json::json;

use gadgetbuddy_types::error::ReplyError;

use super::commands::slash_commands;

pub const API_BASE: &str = "https://discord.com/api/v10";

/// Discord JSON error code for an expired or unknown interaction.
pub const UNKNOWN_INTERACTION: u64 = 10062;

const TIMEOUT: Duration = Duration::from_secs(30);

/// Discord REST client authenticated as a bot.
///
/// Does NOT derive Debug: it holds the bot token.
pub struct DiscordClient {
    client: reqwest::Client,
    token: SecretString,
    api_base: String,
}

#[derive(Debug, Deserialize)]
struct DiscordErrorBody {
    code: Option<u64>,
}

impl DiscordClient {
    pub fn new(token: SecretString) -> Result<Self, ReplyError> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| ReplyError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            token,
            api_base: API_BASE.to_string(),
        })
    }

    /// Override the API base URL (useful for proxies).
    pub fn with_base_url(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Overwrite the application's slash commands.
    ///
    /// Guild commands appear immediately; global ones can take a while to
    /// propagate. Returns the number of commands Discord now reports.
    pub async fn register_commands(&self, app_id: &str, guild_id: Option<&str>) -> Result<usize, ReplyError> {
        let url = format!("{}{}", self.api_base, commands_path(app_id, guild_id));
        let response = self
            .client
            .put(&url)
            .header("Authorization", format!("Bot {}", self.token.expose_secret()))
            .json(&slash_commands())
            .send()
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(map_error(status, body));
        }

        let registered: Vec<serde_json::Value> = response
            .json()
            .await
            .map_err(|e| ReplyError::Transport(format!("unreadable response: {e}")))?;
        tracing::info!(
            count = registered.len(),
            scope = if guild_id.is_some() { "guild" } else { "global" },
            "registered slash commands"
        );
        Ok(registered.len())
    }

    /// Replace the deferred response of an interaction.
    pub async fn edit_original(&self, app_id: &str, interaction_token: &str, content: &str) -> Result<(), ReplyError> {
        let url = format!("{}/webhooks/{app_id}/{interaction_token}/messages/@original", self.api_base);
        self.send_message(self.client.patch(&url), content).await
    }

    /// Post a follow-up message to an interaction.
    pub async fn follow_up(&self, app_id: &str, interaction_token: &str, content: &str) -> Result<(), ReplyError> {
        let url = format!("{}/webhooks/{app_id}/{interaction_token}", self.api_base);
        self.send_message(self.client.post(&url), content).await
    }

    /// Interaction webhooks are authorized by their token, not the bot token.
    async fn send_message(&self, request: reqwest::RequestBuilder, content: &str) -> Result<(), ReplyError> {
        let response = request
            .json(&message_body(content))
            .send()
            .await
            .map_err(|e| ReplyError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        Err(map_error(status, body))
    }
}

fn commands_path(app_id: &str, guild_id: Option<&str>) -> String {
    match guild_id {
        Some(guild) => format!("/applications/{app_id}/guilds/{guild}/commands"),
        None => format!("/applications/{app_id}/commands"),
    }
}

/// Message payload; mentions in model output never ping anyone.
fn message_body(content: &str) -> serde_json::Value {
    json!({
        "content": content,
        "allowed_mentions": { "parse": [] },
    })
}

fn map_error(status: StatusCode, body: String) -> ReplyError {
    let code = serde_json::from_str::<DiscordErrorBody>(&body)
        .ok()
        .and_then(|b| b.code);
    if code == Some(UNKNOWN_INTERACTION) {
        return ReplyError::UnknownInteraction;
    }
    ReplyError::Http {
        status: status.as_u16(),
        body,
    }
}
