//! Chat command endpoint.
//!
//! POST /api/v1/commands/{name} - Run `tierlist` or `browse` through the
//! assistant. With an `interaction_token`, the reply is also delivered to
//! the deferred Discord interaction (apology on failure).

use axum::Json;
use axum::extract::{Path, State};
use serde::Deserialize;

use gadgetbuddy_infra::discord::InteractionReplySink;
use gadgetbuddy_types::command::{ChatCommand, CommandReply};

use crate::http::error::AppError;
use crate::http::extractors::auth::Authenticated;
use crate::http::response::{ApiResponse, RequestTimer};
use crate::state::AppState;

/// Request body for a command run.
#[derive(Debug, Deserialize)]
pub struct CommandRequest {
    pub query: String,
    /// Token of a deferred interaction to deliver the reply to.
    #[serde(default)]
    pub interaction_token: Option<String>,
}

/// POST /api/v1/commands/{name}
pub async fn run_command(
    State(state): State<AppState>,
    _auth: Authenticated,
    Path(name): Path<String>,
    Json(body): Json<CommandRequest>,
) -> Result<Json<ApiResponse<CommandReply>>, AppError> {
    let timer = RequestTimer::start();
    let command: ChatCommand = name.parse().map_err(AppError::NotFound)?;
    let assistant = state
        .assistant()
        .map_err(|e| AppError::NotConfigured(e.to_string()))?;

    tracing::info!(request_id = timer.request_id(), %command, "running command");

    let reply = match body.interaction_token.as_deref() {
        Some(token) => {
            let discord = state
                .discord()
                .map_err(|e| AppError::NotConfigured(e.to_string()))?;
            let sink = InteractionReplySink::new(&discord.client, discord.app_id.as_str(), token);
            assistant.handle_and_deliver(command, &body.query, &sink).await?
        }
        None => assistant.handle(command, &body.query).await?,
    };

    Ok(Json(timer.finish(reply)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::bare_state;

    fn request(query: &str) -> Json<CommandRequest> {
        Json(CommandRequest {
            query: query.to_string(),
            interaction_token: None,
        })
    }

    #[tokio::test]
    async fn unknown_command_is_not_found() {
        let result = run_command(
            State(bare_state()),
            Authenticated,
            Path("help".to_string()),
            request("anything"),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn missing_llm_key_is_not_configured() {
        let result = run_command(
            State(bare_state()),
            Authenticated,
            Path("tierlist".to_string()),
            request("best anc earbuds"),
        )
        .await;
        assert!(matches!(result, Err(AppError::NotConfigured(_))));
    }
}
