//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and HTTP
//! API. Services are generic over the LLM provider and content source, but
//! AppState pins them to the concrete infra implementations.
//!
//! Every collaborator is optional: a missing credential group disables the
//! features that need it instead of failing startup.

use std::path::PathBuf;
use std::sync::Arc;

use secrecy::ExposeSecret;

use gadgetbuddy_core::assistant::{AssistantService, AssistantSettings};
use gadgetbuddy_infra::config::{load_config, resolve_data_dir};
use gadgetbuddy_infra::discord::DiscordClient;
use gadgetbuddy_infra::llm::create_provider;
use gadgetbuddy_infra::llm::openai_compat::OpenAiCompatibleProvider;
use gadgetbuddy_infra::reddit::RedditClient;
use gadgetbuddy_infra::secret::Credentials;
use gadgetbuddy_types::config::AppConfig;

use crate::http::extractors::auth::hash_api_key;

/// Concrete type alias for the assistant pinned to infra implementations.
pub type ConcreteAssistant = AssistantService<OpenAiCompatibleProvider, Arc<RedditClient>>;

/// Discord client plus the ids it operates on.
pub struct DiscordApp {
    pub client: DiscordClient,
    pub app_id: String,
    pub guild_id: Option<String>,
}

/// Shared application state holding all services.
///
/// Immutable after startup; cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    /// Present when an LLM API key is configured.
    pub assistant: Option<Arc<ConcreteAssistant>>,
    /// Present when Reddit credentials are configured.
    pub content_source: Option<Arc<RedditClient>>,
    /// Present when Discord credentials are configured.
    pub discord: Option<Arc<DiscordApp>>,
    /// SHA-256 hex digest of the HTTP API key; `None` leaves the API open.
    pub api_key_hash: Option<Arc<str>>,
    /// Names of the configured credential groups.
    pub configured: Vec<&'static str>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state from the data directory and environment.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;
        Self::build(config, Credentials::from_env(), data_dir)
    }

    /// Wire services from already-resolved config and credentials.
    pub fn build(config: AppConfig, credentials: Credentials, data_dir: PathBuf) -> anyhow::Result<Self> {
        let configured = credentials.configured();

        let content_source = match credentials.reddit {
            Some(reddit) => Some(Arc::new(RedditClient::new(
                reddit,
                config.content_source.user_agent.clone(),
            )?)),
            None => {
                tracing::debug!("Reddit credentials not set, evidence and tools disabled");
                None
            }
        };

        let assistant = match credentials.openai_api_key.as_ref() {
            Some(key) => {
                let provider = create_provider(&config.llm, Some(key))?;
                Some(Arc::new(AssistantService::new(
                    provider,
                    content_source.clone(),
                    AssistantSettings::from_config(&config),
                )))
            }
            None => {
                tracing::debug!("OPENAI_API_KEY not set, assistant disabled");
                None
            }
        };

        let discord = match credentials.discord {
            Some(discord) => Some(Arc::new(DiscordApp {
                client: DiscordClient::new(discord.token)?,
                app_id: discord.app_id,
                guild_id: discord.guild_id,
            })),
            None => None,
        };

        let api_key_hash = credentials
            .api_key
            .as_ref()
            .map(|key| Arc::<str>::from(hash_api_key(key.expose_secret())));

        Ok(Self {
            config: Arc::new(config),
            assistant,
            content_source,
            discord,
            api_key_hash,
            configured,
            data_dir,
        })
    }

    pub fn assistant(&self) -> anyhow::Result<&ConcreteAssistant> {
        self.assistant
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("OPENAI_API_KEY is not set"))
    }

    pub fn content_source(&self) -> anyhow::Result<&RedditClient> {
        self.content_source.as_deref().ok_or_else(|| {
            anyhow::anyhow!("Reddit is not configured: set REDDIT_CLIENT_ID, REDDIT_CLIENT_SECRET and REDDIT_REFRESH_TOKEN")
        })
    }

    pub fn discord(&self) -> anyhow::Result<&DiscordApp> {
        self.discord
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Discord is not configured: set DISCORD_TOKEN and DISCORD_APP_ID"))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use secrecy::SecretString;

    /// State with no collaborators configured.
    pub fn bare_state() -> AppState {
        AppState::build(AppConfig::default(), Credentials::default(), PathBuf::from(".")).unwrap()
    }

    #[test]
    fn empty_credentials_disable_everything() {
        let state = bare_state();
        assert!(state.assistant.is_none());
        assert!(state.content_source.is_none());
        assert!(state.discord.is_none());
        assert!(state.api_key_hash.is_none());
        assert!(state.assistant().is_err());
    }

    #[test]
    fn api_key_is_stored_hashed() {
        let credentials = Credentials {
            api_key: Some(SecretString::from("gb-key")),
            ..Credentials::default()
        };
        let state = AppState::build(AppConfig::default(), credentials, PathBuf::from(".")).unwrap();
        assert_eq!(state.api_key_hash.as_deref(), Some(hash_api_key("gb-key").as_str()));
    }

    #[test]
    fn openai_key_enables_assistant() {
        let credentials = Credentials {
            openai_api_key: Some(SecretString::from("sk-test")),
            ..Credentials::default()
        };
        let state = AppState::build(AppConfig::default(), credentials, PathBuf::from(".")).unwrap();
        assert!(state.assistant().is_ok());
        assert_eq!(state.configured, vec!["openai"]);
    }
}
