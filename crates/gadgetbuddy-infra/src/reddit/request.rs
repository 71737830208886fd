//! URL construction for Reddit API calls.

use reqwest::Url;

use gadgetbuddy_types::content::{CommentsQuery, ListingQuery, SearchQuery};
use gadgetbuddy_types::error::ContentSourceError;

/// Path segments and query parameters of one API call.
///
/// Segments are percent-encoded individually when the URL is built, so
/// user-supplied names cannot alter the path structure.
#[derive(Debug, Clone, PartialEq)]
pub struct RedditRequest {
    segments: Vec<String>,
    params: Vec<(&'static str, String)>,
}

impl RedditRequest {
    /// `[/r/{subreddit}]/search?q=..&sort=..&t=..&limit=..`
    pub fn search(query: &SearchQuery) -> Self {
        let mut segments = Vec::new();
        let mut params = vec![
            ("q", query.query.clone()),
            ("sort", query.sort.to_string()),
            ("t", query.time.to_string()),
            ("limit", query.limit.to_string()),
        ];
        if let Some(subreddit) = query.subreddit.as_deref().map(subreddit_name).filter(|s| !s.is_empty()) {
            segments.push("r".to_string());
            segments.push(subreddit.to_string());
            params.push(("restrict_sr", "1".to_string()));
        }
        segments.push("search".to_string());
        Self { segments, params }
    }

    /// `/r/{subreddit}/{sort}?limit=..`
    pub fn listing(query: &ListingQuery) -> Self {
        Self {
            segments: vec![
                "r".to_string(),
                subreddit_name(&query.subreddit).to_string(),
                query.sort.to_string(),
            ],
            params: vec![("limit", query.limit.to_string())],
        }
    }

    /// `/r/{subreddit}/comments/{post_id}.json`
    pub fn comments(query: &CommentsQuery) -> Self {
        Self {
            segments: vec![
                "r".to_string(),
                subreddit_name(&query.subreddit).to_string(),
                "comments".to_string(),
                format!("{}.json", post_id(&query.post_id)),
            ],
            params: Vec::new(),
        }
    }

    /// Resolve against the API base, e.g. `https://oauth.reddit.com`.
    pub fn url(&self, base: &str) -> Result<Url, ContentSourceError> {
        let mut url = Url::parse(base)
            .map_err(|e| ContentSourceError::Transport(format!("invalid base URL '{base}': {e}")))?;
        url.path_segments_mut()
            .map_err(|()| ContentSourceError::Transport(format!("base URL '{base}' cannot have a path")))?
            .pop_if_empty()
            .extend(&self.segments);
        if !self.params.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.params);
        }
        Ok(url)
    }
}

/// Accept `headphones`, `r/headphones`, and `/r/headphones`.
fn subreddit_name(raw: &str) -> &str {
    let trimmed = raw.trim().trim_start_matches('/');
    trimmed.strip_prefix("r/").unwrap_or(trimmed).trim_end_matches('/')
}

/// Accept bare ids and `t3_` fullnames.
fn post_id(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed.strip_prefix("t3_").unwrap_or(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gadgetbuddy_types::content::{ListingSort, SearchSort, TimeWindow};

    const BASE: &str = "https://oauth.reddit.com";

    #[test]
    fn site_wide_search() {
        let url = RedditRequest::search(&SearchQuery::new("anc earbuds")).url(BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://oauth.reddit.com/search?q=anc+earbuds&sort=relevance&t=month&limit=20"
        );
    }

    #[test]
    fn subreddit_search_is_restricted() {
        let query = SearchQuery {
            subreddit: Some("r/headphones".to_string()),
            sort: SearchSort::Top,
            time: TimeWindow::Year,
            limit: 5,
            ..SearchQuery::new("sony")
        };
        let url = RedditRequest::search(&query).url(BASE).unwrap();
        assert_eq!(
            url.as_str(),
            "https://oauth.reddit.com/r/headphones/search?q=sony&sort=top&t=year&limit=5&restrict_sr=1"
        );
    }

    #[test]
    fn listing_path() {
        let query = ListingQuery {
            subreddit: "/r/BudgetAudiophile/".to_string(),
            sort: ListingSort::New,
            limit: 10,
        };
        let url = RedditRequest::listing(&query).url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://oauth.reddit.com/r/BudgetAudiophile/new?limit=10");
    }

    #[test]
    fn comments_path_accepts_fullname() {
        let query = CommentsQuery {
            subreddit: "headphones".to_string(),
            post_id: "t3_1k2j3h".to_string(),
        };
        let url = RedditRequest::comments(&query).url(BASE).unwrap();
        assert_eq!(url.as_str(), "https://oauth.reddit.com/r/headphones/comments/1k2j3h.json");
    }

    #[test]
    fn segments_are_encoded() {
        let query = ListingQuery {
            subreddit: "a/../b".to_string(),
            sort: ListingSort::Hot,
            limit: 1,
        };
        let url = RedditRequest::listing(&query).url(BASE).unwrap();
        assert!(url.path().starts_with("/r/a%2F..%2Fb/"));
    }
}
