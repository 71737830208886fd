//! Configuration types for GadgetBuddy.
//!
//! `AppConfig` represents the `config.toml` in the data directory. Every
//! field has a default so an empty or missing file is a valid config.
//! Secrets are not part of this file; they come from the environment.

use serde::{Deserialize, Serialize};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub llm: LlmConfig,
    #[serde(default)]
    pub reply: ReplyConfig,
    #[serde(default)]
    pub content_source: ContentSourceConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

/// Language-model settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    /// Base URL of an OpenAI-compatible API.
    #[serde(default = "default_llm_base_url")]
    pub base_url: String,
    #[serde(default = "default_llm_model")]
    pub model: String,
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    #[serde(default)]
    pub temperature: Option<f64>,
}

fn default_llm_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_llm_model() -> String {
    "gpt-4.1-mini".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            base_url: default_llm_base_url(),
            model: default_llm_model(),
            max_tokens: default_max_tokens(),
            temperature: None,
        }
    }
}

/// Reply delivery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplyConfig {
    /// Maximum characters per chat message. Discord's hard limit is 2000.
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,
}

fn default_max_chunk_chars() -> usize {
    1900
}

impl Default for ReplyConfig {
    fn default() -> Self {
        Self {
            max_chunk_chars: default_max_chunk_chars(),
        }
    }
}

/// Content-source (Reddit) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSourceConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Posts to pull as evidence per search. Zero disables evidence gathering.
    #[serde(default = "default_evidence_limit")]
    pub evidence_limit: u32,
    /// Subreddits searched for evidence. Empty searches the whole site.
    #[serde(default)]
    pub evidence_subreddits: Vec<String>,
}

fn default_user_agent() -> String {
    "mcp-gadget-buddy/1.0".to_string()
}

fn default_evidence_limit() -> u32 {
    10
}

impl Default for ContentSourceConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            evidence_limit: default_evidence_limit(),
            evidence_subreddits: Vec::new(),
        }
    }
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    7331
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_default_values() {
        let config = AppConfig::default();
        assert_eq!(config.llm.model, "gpt-4.1-mini");
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.reply.max_chunk_chars, 1900);
        assert_eq!(config.content_source.user_agent, "mcp-gadget-buddy/1.0");
        assert_eq!(config.server.port, 7331);
    }

    #[test]
    fn test_app_config_deserialize_empty() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.llm.max_tokens, 1024);
        assert!(config.content_source.evidence_subreddits.is_empty());
    }

    #[test]
    fn test_app_config_deserialize_partial_sections() {
        let toml_str = r#"
[llm]
model = "gpt-4o"
temperature = 0.2

[content_source]
evidence_subreddits = ["headphones", "earbuds"]

[server]
port = 8080
"#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.llm.model, "gpt-4o");
        assert_eq!(config.llm.temperature, Some(0.2));
        assert_eq!(config.llm.base_url, "https://api.openai.com/v1");
        assert_eq!(config.content_source.evidence_subreddits.len(), 2);
        assert_eq!(config.content_source.evidence_limit, 10);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
    }
}
