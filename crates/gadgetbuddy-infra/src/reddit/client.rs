//! RedditClient -- concrete [`ContentSource`] over the Reddit OAuth API.
//!
//! Each call makes sure a fresh access token is cached (exchanging the
//! refresh token when needed), then issues a GET against
//! `https://oauth.reddit.com` and returns the JSON body untouched.

use std::time::{Duration, Instant};

use reqwest::Url;
use reqwest::header::{AUTHORIZATION, USER_AGENT};
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::Mutex;

use gadgetbuddy_core::content::source::ContentSource;
use gadgetbuddy_types::content::{CommentsQuery, ListingQuery, SearchQuery};
use gadgetbuddy_types::error::ContentSourceError;

use crate::secret::RedditCredentials;

use super::request::RedditRequest;
use super::token::{CachedToken, TOKEN_URL, TokenResponse, basic_auth_header};

/// OAuth API root.
pub const API_BASE: &str = "https://oauth.reddit.com";

const TIMEOUT: Duration = Duration::from_secs(30);

/// Reddit API client.
///
/// Does NOT derive Debug: it holds the client secret and refresh token.
pub struct RedditClient {
    client: reqwest::Client,
    credentials: RedditCredentials,
    user_agent: String,
    api_base: String,
    token_url: String,
    token: Mutex<Option<CachedToken>>,
}

impl RedditClient {
    pub fn new(credentials: RedditCredentials, user_agent: impl Into<String>) -> Result<Self, ContentSourceError> {
        let client = reqwest::Client::builder()
            .timeout(TIMEOUT)
            .build()
            .map_err(|e| ContentSourceError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            credentials,
            user_agent: user_agent.into(),
            api_base: API_BASE.to_string(),
            token_url: TOKEN_URL.to_string(),
            token: Mutex::new(None),
        })
    }

    /// Override the API and token endpoints (useful for proxies).
    pub fn with_endpoints(mut self, api_base: impl Into<String>, token_url: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self.token_url = token_url.into();
        self
    }

    /// Return a cached token, exchanging the refresh token when it is stale.
    ///
    /// The lock is held across the exchange so concurrent callers wait for
    /// one refresh instead of racing.
    async fn access_token(&self) -> Result<SecretString, ContentSourceError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref().filter(|t| t.is_fresh(Instant::now())) {
            return Ok(token.value.clone());
        }

        let token = self.exchange_refresh_token().await?;
        let value = token.value.clone();
        *cached = Some(token);
        Ok(value)
    }

    async fn exchange_refresh_token(&self) -> Result<CachedToken, ContentSourceError> {
        tracing::debug!("exchanging Reddit refresh token");
        let response = self
            .client
            .post(&self.token_url)
            .header(
                AUTHORIZATION,
                basic_auth_header(&self.credentials.client_id, &self.credentials.client_secret),
            )
            .header(USER_AGENT, &self.user_agent)
            .form(&[
                ("grant_type", "refresh_token"),
                ("refresh_token", self.credentials.refresh_token.expose_secret()),
            ])
            .send()
            .await
            .map_err(|e| ContentSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ContentSourceError::Auth(format!("HTTP {status}: {body}")));
        }

        let body: TokenResponse = response
            .json()
            .await
            .map_err(|e| ContentSourceError::Auth(format!("unreadable token response: {e}")))?;
        CachedToken::from_response(body, Instant::now())
    }

    async fn get(&self, request: RedditRequest) -> Result<serde_json::Value, ContentSourceError> {
        let url: Url = request.url(&self.api_base)?;
        let token = self.access_token().await?;
        tracing::debug!(path = url.path(), "Reddit API request");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("bearer {}", token.expose_secret()))
            .header(USER_AGENT, &self.user_agent)
            .send()
            .await
            .map_err(|e| ContentSourceError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            if status.as_u16() == 401 {
                // Revoked or expired early; force a refresh next time.
                *self.token.lock().await = None;
            }
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), "Reddit API error");
            return Err(ContentSourceError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ContentSourceError::Deserialization(e.to_string()))
    }
}

impl ContentSource for RedditClient {
    async fn search(&self, query: &SearchQuery) -> Result<serde_json::Value, ContentSourceError> {
        self.get(RedditRequest::search(query)).await
    }

    async fn listing(&self, query: &ListingQuery) -> Result<serde_json::Value, ContentSourceError> {
        self.get(RedditRequest::listing(query)).await
    }

    async fn comments(&self, query: &CommentsQuery) -> Result<serde_json::Value, ContentSourceError> {
        self.get(RedditRequest::comments(query)).await
    }
}
