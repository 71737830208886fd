//! Credential loading.
//!
//! - `env`: reads API keys and tokens from environment variables into
//!   [`env::Credentials`]

pub mod env;

pub use env::{Credentials, DiscordCredentials, RedditCredentials};
