//! Access-token exchange and caching.

use std::time::{Duration, Instant};

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use gadgetbuddy_types::error::ContentSourceError;

/// Token endpoint for the refresh-token grant.
pub const TOKEN_URL: &str = "https://www.reddit.com/api/v1/access_token";

/// Lifetime assumed when the response omits `expires_in`.
const DEFAULT_EXPIRES_IN_SECS: u64 = 3600;

/// Refresh this long before the token actually expires.
const EXPIRY_MARGIN_SECS: u64 = 60;

/// Token endpoint response body.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub expires_in: Option<u64>,
    pub error: Option<String>,
}

/// An access token and the instant after which it must be refreshed.
pub struct CachedToken {
    pub value: SecretString,
    pub refresh_at: Instant,
}

impl CachedToken {
    /// Turn a token response received at `now` into a cache entry.
    pub fn from_response(response: TokenResponse, now: Instant) -> Result<Self, ContentSourceError> {
        let Some(access_token) = response.access_token.filter(|t| !t.is_empty()) else {
            let reason = response.error.unwrap_or_else(|| "no access_token in response".to_string());
            return Err(ContentSourceError::Auth(reason));
        };
        Ok(Self {
            value: SecretString::from(access_token),
            refresh_at: now + token_lifetime(response.expires_in),
        })
    }

    pub fn is_fresh(&self, now: Instant) -> bool {
        now < self.refresh_at
    }
}

/// How long a token may be reused.
pub fn token_lifetime(expires_in: Option<u64>) -> Duration {
    let secs = expires_in.unwrap_or(DEFAULT_EXPIRES_IN_SECS);
    Duration::from_secs(secs.saturating_sub(EXPIRY_MARGIN_SECS))
}

/// `Basic base64(client_id:client_secret)`.
pub fn basic_auth_header(client_id: &str, client_secret: &SecretString) -> String {
    let raw = format!("{client_id}:{}", client_secret.expose_secret());
    format!("Basic {}", STANDARD.encode(raw))
}
