//! [`ReplySink`] backed by an interaction's webhook.

use gadgetbuddy_core::reply::ReplySink;
use gadgetbuddy_types::error::ReplyError;

use super::client::DiscordClient;

/// Delivers reply chunks to one deferred interaction.
pub struct InteractionReplySink<'a> {
    client: &'a DiscordClient,
    app_id: String,
    interaction_token: String,
}

impl<'a> InteractionReplySink<'a> {
    pub fn new(client: &'a DiscordClient, app_id: impl Into<String>, interaction_token: impl Into<String>) -> Self {
        Self {
            client,
            app_id: app_id.into(),
            interaction_token: interaction_token.into(),
        }
    }
}

impl ReplySink for InteractionReplySink<'_> {
    async fn edit_original(&self, content: &str) -> Result<(), ReplyError> {
        self.client
            .edit_original(&self.app_id, &self.interaction_token, content)
            .await
    }

    async fn follow_up(&self, content: &str) -> Result<(), ReplyError> {
        self.client
            .follow_up(&self.app_id, &self.interaction_token, content)
            .await
    }
}
