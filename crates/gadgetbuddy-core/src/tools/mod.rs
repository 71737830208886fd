//! Tool dispatch for the content-source tool server.
//!
//! Three tools wrap the [`ContentSource`] operations. A call arrives as a
//! tool name plus loosely-typed JSON input; this module validates the input
//! against the typed query structs and forwards it.

use schemars::schema_for;
use serde::de::DeserializeOwned;
use serde_json::Value;

use gadgetbuddy_types::content::{
    CommentsQuery, ListingQuery, MAX_LIMIT, SearchQuery, ToolCall, ToolDescriptor,
};
use gadgetbuddy_types::error::ToolError;

use crate::content::source::ContentSource;

pub const SEARCH_SUBREDDITS: &str = "search_subreddits";
pub const FETCH_POSTS: &str = "fetch_posts";
pub const FETCH_COMMENTS: &str = "fetch_comments";

/// The tool catalogue: names, descriptions, and JSON schemas of the inputs.
pub fn catalogue() -> Vec<ToolDescriptor> {
    vec![
        ToolDescriptor {
            name: SEARCH_SUBREDDITS,
            description: "Search posts on a subreddit or across Reddit",
            input_schema: Value::from(schema_for!(SearchQuery)),
        },
        ToolDescriptor {
            name: FETCH_POSTS,
            description: "Fetch posts for a subreddit listing",
            input_schema: Value::from(schema_for!(ListingQuery)),
        },
        ToolDescriptor {
            name: FETCH_COMMENTS,
            description: "Fetch comments for a post by id",
            input_schema: Value::from(schema_for!(CommentsQuery)),
        },
    ]
}

/// Run one tool call against `source`.
pub async fn dispatch<S: ContentSource>(source: &S, call: &ToolCall) -> Result<Value, ToolError> {
    tracing::debug!(tool = %call.tool, "dispatching tool call");
    match call.tool.as_str() {
        SEARCH_SUBREDDITS => {
            let mut query: SearchQuery = parse_input(&call.tool, &call.input)?;
            if query.query.trim().is_empty() {
                return Err(ToolError::InvalidInput {
                    tool: call.tool.clone(),
                    message: "query must not be empty".to_string(),
                });
            }
            query.limit = clamp_limit(query.limit);
            Ok(source.search(&query).await?)
        }
        FETCH_POSTS => {
            let mut query: ListingQuery = parse_input(&call.tool, &call.input)?;
            query.limit = clamp_limit(query.limit);
            Ok(source.listing(&query).await?)
        }
        FETCH_COMMENTS => {
            let query: CommentsQuery = parse_input(&call.tool, &call.input)?;
            Ok(source.comments(&query).await?)
        }
        other => Err(ToolError::UnknownTool(other.to_string())),
    }
}

fn parse_input<T: DeserializeOwned>(tool: &str, input: &Value) -> Result<T, ToolError> {
    let input = if input.is_null() {
        Value::Object(Default::default())
    } else {
        input.clone()
    };
    serde_json::from_value(input).map_err(|e| ToolError::InvalidInput {
        tool: tool.to_string(),
        message: e.to_string(),
    })
}

fn clamp_limit(limit: u32) -> u32 {
    limit.clamp(1, MAX_LIMIT)
}
