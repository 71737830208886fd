//! Configuration for the OpenAI-compatible provider.

use std::time::Duration;

use secrecy::SecretString;

use gadgetbuddy_types::config::LlmConfig;

/// Completions can take a while for long answers.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(120);

/// Configuration for an [`super::OpenAiCompatibleProvider`].
pub struct OpenAiCompatConfig {
    /// Human-readable provider name used in logs.
    pub provider_name: String,
    /// Base URL up to and including the version segment, e.g. `https://api.openai.com/v1`.
    pub base_url: String,
    pub api_key: SecretString,
    /// Model used when a request leaves `model` empty.
    pub model: String,
    pub timeout: Duration,
}

impl OpenAiCompatConfig {
    /// Build from the `[llm]` config section.
    ///
    /// The provider name is inferred from the base URL host.
    pub fn from_llm_config(config: &LlmConfig, api_key: SecretString) -> Self {
        Self {
            provider_name: provider_name_for(&config.base_url).to_string(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key,
            model: config.model.clone(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

fn provider_name_for(base_url: &str) -> &'static str {
    if base_url.contains("api.openai.com") {
        "openai"
    } else if base_url.contains("generativelanguage.googleapis.com") {
        "gemini"
    } else if base_url.contains("api.mistral.ai") {
        "mistral"
    } else if base_url.contains("localhost") || base_url.contains("127.0.0.1") {
        "local"
    } else {
        "openai-compatible"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_from_llm_config() {
        let config = OpenAiCompatConfig::from_llm_config(&LlmConfig::default(), SecretString::from("sk"));
        assert_eq!(config.provider_name, "openai");
        assert_eq!(config.base_url, "https://api.openai.com/v1");
        assert_eq!(config.model, "gpt-4.1-mini");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn trailing_slash_is_trimmed_and_name_inferred() {
        let llm = LlmConfig {
            base_url: "http://localhost:11434/v1/".to_string(),
            ..LlmConfig::default()
        };
        let config = OpenAiCompatConfig::from_llm_config(&llm, SecretString::from("sk"));
        assert_eq!(config.base_url, "http://localhost:11434/v1");
        assert_eq!(config.provider_name, "local");
    }
}
