//! Application error type mapping to HTTP status codes and envelope format.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use gadgetbuddy_types::error::{CommandError, ReplyError};

use crate::http::response::ApiResponse;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Authentication failure.
    Unauthorized(String),
    /// Validation error.
    Validation(String),
    /// Unknown resource (e.g. command name).
    NotFound(String),
    /// The feature needs credentials that are not set.
    NotConfigured(String),
    /// An upstream service (LLM, Discord) failed.
    Upstream(String),
    /// Generic internal error.
    Internal(String),
}

impl From<CommandError> for AppError {
    fn from(e: CommandError) -> Self {
        match e {
            CommandError::EmptyQuery => AppError::Validation(e.to_string()),
            CommandError::Llm(err) => AppError::Upstream(format!("LLM: {err}")),
            CommandError::Reply(ReplyError::UnknownInteraction) => {
                AppError::Validation("Interaction token is unknown or expired".to_string())
            }
            CommandError::Reply(err) => AppError::Upstream(format!("Discord: {err}")),
        }
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, &str) {
        match self {
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            AppError::NotConfigured(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "NOT_CONFIGURED", msg),
            AppError::Upstream(msg) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, error = message, "request failed");
        }
        let body = ApiResponse::error(code, message, uuid::Uuid::now_v7().to_string(), 0);
        (status, Json(body)).into_response()
    }
}
