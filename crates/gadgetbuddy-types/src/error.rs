use thiserror::Error;

use crate::llm::LlmError;

/// Errors from the content source (Reddit).
#[derive(Debug, Error)]
pub enum ContentSourceError {
    #[error("content source not configured: {0}")]
    NotConfigured(String),

    #[error("token exchange failed: {0}")]
    Auth(String),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("deserialization error: {0}")]
    Deserialization(String),
}

/// Errors from tool dispatch on the tool server.
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid input for '{tool}': {message}")]
    InvalidInput { tool: String, message: String },

    #[error(transparent)]
    Source(#[from] ContentSourceError),
}

/// Errors while delivering a reply to the chat platform.
#[derive(Debug, Error)]
pub enum ReplyError {
    /// The interaction token expired or was never acknowledged.
    #[error("unknown interaction")]
    UnknownInteraction,

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("request failed: {0}")]
    Transport(String),
}

/// Errors from running a chat command end to end.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("query must not be empty")]
    EmptyQuery,

    #[error(transparent)]
    Llm(#[from] LlmError),

    #[error(transparent)]
    Reply(#[from] ReplyError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_error_display() {
        let err = ToolError::UnknownTool("delete_everything".to_string());
        assert_eq!(err.to_string(), "Unknown tool: delete_everything");
    }

    #[test]
    fn test_tool_error_wraps_source_error() {
        let err: ToolError = ContentSourceError::Http {
            status: 403,
            body: "forbidden".to_string(),
        }
        .into();
        assert_eq!(err.to_string(), "HTTP 403: forbidden");
    }

    #[test]
    fn test_command_error_wraps_llm_error() {
        let err: CommandError = LlmError::AuthenticationFailed.into();
        assert_eq!(err.to_string(), "authentication failed");
    }
}
