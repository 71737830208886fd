//! ContentSource trait definition.
//!
//! A content source answers the three Reddit-style queries with the raw
//! JSON the upstream API returned. Callers decide how much of it to read.

use std::future::Future;
use std::sync::Arc;

use gadgetbuddy_types::content::{CommentsQuery, ListingQuery, SearchQuery};
use gadgetbuddy_types::error::ContentSourceError;

/// Trait for searchable post/comment backends.
///
/// The Reddit implementation lives in gadgetbuddy-infra.
pub trait ContentSource: Send + Sync {
    /// Search posts, optionally restricted to one subreddit.
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send;

    /// Fetch a subreddit listing (hot/new/top).
    fn listing(
        &self,
        query: &ListingQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send;

    /// Fetch the comment tree of a post.
    fn comments(
        &self,
        query: &CommentsQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send;
}

/// Shared sources: the tool server and the assistant use the same client.
impl<S: ContentSource> ContentSource for Arc<S> {
    fn search(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send {
        S::search(self, query)
    }

    fn listing(
        &self,
        query: &ListingQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send {
        S::listing(self, query)
    }

    fn comments(
        &self,
        query: &CommentsQuery,
    ) -> impl Future<Output = Result<serde_json::Value, ContentSourceError>> + Send {
        S::comments(self, query)
    }
}
