//! API key authentication extractor.
//!
//! Extracts and verifies API keys from:
//! - `Authorization: Bearer <key>` header
//! - `X-API-Key: <key>` header
//!
//! Keys are SHA-256 hashed and compared against the hash of the configured
//! `GADGETBUDDY_API_KEY`. With no key configured every request passes.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use sha2::{Digest, Sha256};

use crate::http::error::AppError;
use crate::state::AppState;

/// Authenticated request marker. Extracting this validates the API key.
pub struct Authenticated;

impl FromRequestParts<AppState> for Authenticated {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(expected) = state.api_key_hash.as_deref() else {
            return Ok(Authenticated);
        };

        let api_key = extract_api_key(parts)?;
        if hash_api_key(&api_key) == expected {
            Ok(Authenticated)
        } else {
            tracing::debug!("rejected request with invalid API key");
            Err(AppError::Unauthorized(
                "Invalid API key. Provide a valid key via 'Authorization: Bearer <key>' or 'X-API-Key: <key>' header.".to_string(),
            ))
        }
    }
}

/// Extract the API key from request headers.
fn extract_api_key(parts: &Parts) -> Result<String, AppError> {
    if let Some(auth) = parts.headers.get("authorization") {
        let auth_str = auth
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid Authorization header encoding".to_string()))?;
        if let Some(key) = auth_str.strip_prefix("Bearer ") {
            return Ok(key.trim().to_string());
        }
    }

    if let Some(key) = parts.headers.get("x-api-key") {
        let key_str = key
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid X-API-Key header encoding".to_string()))?;
        return Ok(key_str.trim().to_string());
    }

    Err(AppError::Unauthorized(
        "Missing API key. Provide via 'Authorization: Bearer <key>' or 'X-API-Key: <key>' header.".to_string(),
    ))
}

/// Compute SHA-256 hash of an API key (lowercase hex).
pub fn hash_api_key(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    format!("{:x}", digest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::http::Request;

    use crate::state::tests::bare_state;

    fn parts(header: Option<(&str, &str)>) -> Parts {
        let mut builder = Request::builder().uri("/api/v1/budget");
        if let Some((name, value)) = header {
            builder = builder.header(name, value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    fn keyed_state() -> AppState {
        AppState {
            api_key_hash: Some(Arc::from(hash_api_key("gb-secret"))),
            ..bare_state()
        }
    }

    #[test]
    fn hash_is_lowercase_hex_sha256() {
        assert_eq!(
            hash_api_key("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn open_when_no_key_configured() {
        let mut parts = parts(None);
        assert!(Authenticated::from_request_parts(&mut parts, &bare_state()).await.is_ok());
    }

    #[tokio::test]
    async fn accepts_bearer_and_x_api_key() {
        let state = keyed_state();
        let mut bearer = parts(Some(("authorization", "Bearer gb-secret")));
        assert!(Authenticated::from_request_parts(&mut bearer, &state).await.is_ok());
        let mut header = parts(Some(("x-api-key", "gb-secret")));
        assert!(Authenticated::from_request_parts(&mut header, &state).await.is_ok());
    }

    #[tokio::test]
    async fn rejects_missing_or_wrong_key() {
        let state = keyed_state();
        let mut missing = parts(None);
        assert!(matches!(
            Authenticated::from_request_parts(&mut missing, &state).await,
            Err(AppError::Unauthorized(_))
        ));
        let mut wrong = parts(Some(("authorization", "Bearer nope")));
        assert!(matches!(
            Authenticated::from_request_parts(&mut wrong, &state).await,
            Err(AppError::Unauthorized(_))
        ));
    }
}
