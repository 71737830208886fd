//! Content-source tool server.
//!
//! POST /mcp       - Dispatch `{tool, input}`; replies `{ok: true, result}`
//!                   or HTTP 500 `{ok: false, error}`.
//! GET  /mcp/tools - The tool catalogue.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use gadgetbuddy_core::tools;
use gadgetbuddy_types::content::{ToolCall, ToolDescriptor};

use crate::http::extractors::auth::Authenticated;
use crate::state::AppState;

/// POST /mcp
pub async fn call_tool(
    State(state): State<AppState>,
    _auth: Authenticated,
    Json(call): Json<ToolCall>,
) -> Response {
    let source = match state.content_source() {
        Ok(source) => source,
        Err(e) => return tool_failure(&e.to_string()),
    };

    match tools::dispatch(source, &call).await {
        Ok(result) => Json(json!({ "ok": true, "result": result })).into_response(),
        Err(e) => {
            tracing::warn!(tool = %call.tool, error = %e, "tool call failed");
            tool_failure(&e.to_string())
        }
    }
}

/// GET /mcp/tools
pub async fn list_tools(_auth: Authenticated) -> Json<Vec<ToolDescriptor>> {
    Json(tools::catalogue())
}

fn tool_failure(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "ok": false, "error": message })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::tests::bare_state;

    #[tokio::test]
    async fn unconfigured_source_reports_failure() {
        let call = ToolCall {
            tool: tools::SEARCH_SUBREDDITS.to_string(),
            input: json!({ "query": "anc earbuds" }),
        };
        let response = call_tool(State(bare_state()), Authenticated, Json(call)).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn catalogue_lists_three_tools() {
        let Json(tools) = list_tools(Authenticated).await;
        let names: Vec<&str> = tools.iter().map(|t| t.name).collect();
        assert_eq!(names, ["search_subreddits", "fetch_posts", "fetch_comments"]);
    }
}
