//! Environment variable credentials.
//!
//! Every secret GadgetBuddy needs is read once at startup into
//! [`Credentials`] and passed to the components that use it. Values are
//! wrapped in [`SecretString`] and never logged.
//!
//! Groups are all-or-nothing: Reddit credentials are only present when the
//! client id, client secret, and refresh token are all set.

use secrecy::SecretString;

pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
pub const DISCORD_TOKEN: &str = "DISCORD_TOKEN";
pub const DISCORD_APP_ID: &str = "DISCORD_APP_ID";
pub const DISCORD_GUILD_ID: &str = "DISCORD_GUILD_ID";
pub const REDDIT_CLIENT_ID: &str = "REDDIT_CLIENT_ID";
pub const REDDIT_CLIENT_SECRET: &str = "REDDIT_CLIENT_SECRET";
pub const REDDIT_REFRESH_TOKEN: &str = "REDDIT_REFRESH_TOKEN";
pub const API_KEY: &str = "GADGETBUDDY_API_KEY";

/// Discord bot credentials.
pub struct DiscordCredentials {
    pub token: SecretString,
    pub app_id: String,
    /// Register commands on this guild only (instant) instead of globally.
    pub guild_id: Option<String>,
}

/// Reddit "script"/installed-app credentials for the refresh-token grant.
pub struct RedditCredentials {
    pub client_id: String,
    pub client_secret: SecretString,
    pub refresh_token: SecretString,
}

/// All credentials, resolved once.
///
/// Intentionally does NOT derive Debug.
#[derive(Default)]
pub struct Credentials {
    pub openai_api_key: Option<SecretString>,
    pub discord: Option<DiscordCredentials>,
    pub reddit: Option<RedditCredentials>,
    /// Key guarding the HTTP API; unset means the API is open.
    pub api_key: Option<SecretString>,
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match std::env::var(key) {
            Ok(val) => Some(val),
            Err(std::env::VarError::NotPresent) => None,
            // Invalid Unicode is treated as not set; secrets must be valid strings
            Err(std::env::VarError::NotUnicode(_)) => None,
        })
    }

    /// Read credentials through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| {
            lookup(key)
                .map(|val| val.trim().to_string())
                .filter(|val| !val.is_empty())
        };
        let secret = |key: &str| get(key).map(SecretString::from);

        let discord = match (secret(DISCORD_TOKEN), get(DISCORD_APP_ID)) {
            (Some(token), Some(app_id)) => Some(DiscordCredentials {
                token,
                app_id,
                guild_id: get(DISCORD_GUILD_ID),
            }),
            _ => None,
        };

        let reddit = match (
            get(REDDIT_CLIENT_ID),
            secret(REDDIT_CLIENT_SECRET),
            secret(REDDIT_REFRESH_TOKEN),
        ) {
            (Some(client_id), Some(client_secret), Some(refresh_token)) => Some(RedditCredentials {
                client_id,
                client_secret,
                refresh_token,
            }),
            _ => None,
        };

        Self {
            openai_api_key: secret(OPENAI_API_KEY),
            discord,
            reddit,
            api_key: secret(API_KEY),
        }
    }

    /// Names of the credential groups that are configured, for status output.
    pub fn configured(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.openai_api_key.is_some() {
            names.push("openai");
        }
        if self.discord.is_some() {
            names.push("discord");
        }
        if self.reddit.is_some() {
            names.push("reddit");
        }
        if self.api_key.is_some() {
            names.push("api_key");
        }
        names
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_has_nothing() {
        let creds = Credentials::from_lookup(lookup(&[]));
        assert!(creds.openai_api_key.is_none());
        assert!(creds.discord.is_none());
        assert!(creds.reddit.is_none());
        assert!(creds.configured().is_empty());
    }

    #[test]
    fn full_environment() {
        let creds = Credentials::from_lookup(lookup(&[
            (OPENAI_API_KEY, "sk-test"),
            (DISCORD_TOKEN, "bot-token"),
            (DISCORD_APP_ID, "1234"),
            (DISCORD_GUILD_ID, "5678"),
            (REDDIT_CLIENT_ID, "cid"),
            (REDDIT_CLIENT_SECRET, "csecret"),
            (REDDIT_REFRESH_TOKEN, "refresh"),
            (API_KEY, "gb-key"),
        ]));

        assert_eq!(creds.openai_api_key.unwrap().expose_secret(), "sk-test");
        let discord = creds.discord.unwrap();
        assert_eq!(discord.app_id, "1234");
        assert_eq!(discord.guild_id.as_deref(), Some("5678"));
        let reddit = creds.reddit.unwrap();
        assert_eq!(reddit.client_id, "cid");
        assert_eq!(reddit.refresh_token.expose_secret(), "refresh");
    }

    #[test]
    fn partial_groups_are_absent() {
        let creds = Credentials::from_lookup(lookup(&[
            (DISCORD_TOKEN, "bot-token"),
            (REDDIT_CLIENT_ID, "cid"),
            (REDDIT_CLIENT_SECRET, "csecret"),
        ]));
        assert!(creds.discord.is_none());
        assert!(creds.reddit.is_none());
    }

    #[test]
    fn blank_values_count_as_unset() {
        let creds = Credentials::from_lookup(lookup(&[(OPENAI_API_KEY, "  "), (API_KEY, "")]));
        assert!(creds.openai_api_key.is_none());
        assert!(creds.api_key.is_none());
    }

    #[test]
    fn from_env_reads_process_environment() {
        // SAFETY: This test uses a variable name no other test touches.
        unsafe { std::env::set_var(API_KEY, "from-process-env") };
        let creds = Credentials::from_env();
        assert_eq!(creds.api_key.unwrap().expose_secret(), "from-process-env");
        // SAFETY: The var was just set above.
        unsafe { std::env::remove_var(API_KEY) };
    }
}
