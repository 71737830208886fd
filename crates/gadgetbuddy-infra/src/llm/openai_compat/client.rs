//! OpenAiCompatibleProvider -- concrete [`LlmProvider`] for Chat Completions APIs.
//!
//! Sends non-streaming requests to `{base_url}/chat/completions` with bearer
//! authentication. The API key is wrapped in [`SecretString`] and is only
//! exposed when building the request headers.

use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};

use gadgetbuddy_core::llm::provider::LlmProvider;
use gadgetbuddy_types::llm::{CompletionRequest, CompletionResponse, LlmError, StopReason, Usage};

use super::config::OpenAiCompatConfig;
use super::types::{ChatMessage, ChatRequest, ChatResponse};

/// Provider for any OpenAI-compatible API.
///
/// Does NOT derive Debug so the API key cannot leak through formatting.
pub struct OpenAiCompatibleProvider {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    provider_name: String,
    model: String,
}

impl OpenAiCompatibleProvider {
    pub fn new(config: OpenAiCompatConfig) -> Result<Self, LlmError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| LlmError::Provider {
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key,
            base_url: config.base_url,
            provider_name: config.provider_name,
            model: config.model,
        })
    }

    /// The default model for this provider.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Convert a generic [`CompletionRequest`] into a [`ChatRequest`].
    fn build_request(&self, request: &CompletionRequest) -> ChatRequest {
        let model = if request.model.is_empty() {
            self.model.clone()
        } else {
            request.model.clone()
        };

        ChatRequest {
            model,
            messages: request
                .messages
                .iter()
                .map(|m| ChatMessage {
                    role: m.role.to_string(),
                    content: m.content.clone(),
                })
                .collect(),
            max_completion_tokens: request.max_tokens,
            temperature: request.temperature,
        }
    }
}

impl LlmProvider for OpenAiCompatibleProvider {
    fn name(&self) -> &str {
        &self.provider_name
    }

    async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
        let body = self.build_request(request);
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(provider = %self.provider_name, model = %body.model, "sending completion request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| LlmError::Provider {
                message: format!("HTTP request failed: {e}"),
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(map_status(status, error_body));
        }

        let chat: ChatResponse = response.json().await.map_err(|e| {
            LlmError::Deserialization(format!("failed to parse response: {e}"))
        })?;

        Ok(into_completion(chat))
    }
}

/// Map a non-success HTTP status to an [`LlmError`].
fn map_status(status: StatusCode, body: String) -> LlmError {
    match status.as_u16() {
        401 | 403 => LlmError::AuthenticationFailed,
        429 => LlmError::RateLimited {
            retry_after_ms: None,
        },
        400 | 404 | 422 => LlmError::InvalidRequest(body),
        s if s >= 500 => LlmError::Overloaded(body),
        _ => LlmError::Provider {
            message: format!("HTTP {status}: {body}"),
        },
    }
}

/// Take the first choice; an empty choice list yields empty content.
fn into_completion(chat: ChatResponse) -> CompletionResponse {
    let first = chat.choices.into_iter().next();

    let stop_reason = match first.as_ref().and_then(|c| c.finish_reason.as_deref()) {
        Some("length") => StopReason::MaxTokens,
        Some("content_filter") => StopReason::ContentFilter,
        Some("tool_calls") | Some("function_call") => StopReason::ToolUse,
        _ => StopReason::EndTurn,
    };

    let usage = chat
        .usage
        .map(|u| Usage {
            input_tokens: u.prompt_tokens,
            output_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    CompletionResponse {
        id: chat.id,
        content: first.and_then(|c| c.message.content).unwrap_or_default(),
        model: chat.model,
        stop_reason,
        usage,
    }
}
