//! LLM provider implementations.
//!
//! Contains the concrete [`LlmProvider`](gadgetbuddy_core::llm::provider::LlmProvider)
//! implementation for OpenAI-compatible APIs and a factory
//! ([`create_provider`]) that builds it from the `[llm]` config section.

pub mod openai_compat;

use secrecy::SecretString;

use gadgetbuddy_core::llm::provider::LlmProvider;
use gadgetbuddy_types::config::LlmConfig;
use gadgetbuddy_types::llm::LlmError;

use self::openai_compat::{OpenAiCompatConfig, OpenAiCompatibleProvider};

/// Create the configured provider.
///
/// # Errors
///
/// Returns [`LlmError::AuthenticationFailed`] when no API key is available.
pub fn create_provider(
    config: &LlmConfig,
    api_key: Option<&SecretString>,
) -> Result<OpenAiCompatibleProvider, LlmError> {
    let key = api_key.cloned().ok_or(LlmError::AuthenticationFailed)?;
    let provider = OpenAiCompatibleProvider::new(OpenAiCompatConfig::from_llm_config(config, key))?;
    tracing::debug!(provider = provider.name(), model = provider.model(), "LLM provider ready");
    Ok(provider)
}
