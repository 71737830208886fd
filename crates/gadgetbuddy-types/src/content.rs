//! Content-source (Reddit) query and evidence types.
//!
//! The query structs double as the input schemas of the tool server, so
//! they derive [`schemars::JsonSchema`] and carry their defaults in serde.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of results requested from the content source.
pub const DEFAULT_LIMIT: u32 = 20;

/// Upper bound the content source accepts for `limit`.
pub const MAX_LIMIT: u32 = 100;

fn default_limit() -> u32 {
    DEFAULT_LIMIT
}

/// Sort order for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SearchSort {
    #[default]
    Relevance,
    New,
    Top,
    Comments,
}

impl fmt::Display for SearchSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchSort::Relevance => write!(f, "relevance"),
            SearchSort::New => write!(f, "new"),
            SearchSort::Top => write!(f, "top"),
            SearchSort::Comments => write!(f, "comments"),
        }
    }
}

/// Time window for a search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimeWindow {
    Hour,
    Day,
    Week,
    #[default]
    Month,
    Year,
    All,
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeWindow::Hour => write!(f, "hour"),
            TimeWindow::Day => write!(f, "day"),
            TimeWindow::Week => write!(f, "week"),
            TimeWindow::Month => write!(f, "month"),
            TimeWindow::Year => write!(f, "year"),
            TimeWindow::All => write!(f, "all"),
        }
    }
}

/// Sort order for a subreddit listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ListingSort {
    #[default]
    Hot,
    New,
    Top,
}

impl fmt::Display for ListingSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingSort::Hot => write!(f, "hot"),
            ListingSort::New => write!(f, "new"),
            ListingSort::Top => write!(f, "top"),
        }
    }
}

/// Search posts on one subreddit or across the whole site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SearchQuery {
    /// Free-text search query.
    pub query: String,
    /// Restrict the search to this subreddit (without the `r/` prefix).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    #[serde(default)]
    pub sort: SearchSort,
    #[serde(default)]
    pub time: TimeWindow,
    /// Maximum number of posts (1-100).
    #[serde(default = "default_limit")]
    pub limit: u32,
}

impl SearchQuery {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            subreddit: None,
            sort: SearchSort::default(),
            time: TimeWindow::default(),
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Fetch a subreddit listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListingQuery {
    pub subreddit: String,
    #[serde(default)]
    pub sort: ListingSort,
    /// Maximum number of posts (1-100).
    #[serde(default = "default_limit")]
    pub limit: u32,
}

/// Fetch the comment tree of one post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CommentsQuery {
    pub subreddit: String,
    /// Post id without the `t3_` prefix.
    #[serde(alias = "postId")]
    pub post_id: String,
}

/// A raw tool invocation as received by the tool server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    pub tool: String,
    #[serde(default)]
    pub input: serde_json::Value,
}

/// Description of one tool in the catalogue.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: serde_json::Value,
}

/// One post pulled from a listing, reduced to what a prompt needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvidencePost {
    pub title: String,
    pub subreddit: String,
    pub score: i64,
    pub num_comments: u64,
    pub permalink: String,
}
