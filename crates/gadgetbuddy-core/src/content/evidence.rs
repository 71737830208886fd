//! Reduce Reddit listing JSON to prompt-sized evidence.

use serde_json::Value;

use gadgetbuddy_types::content::EvidencePost;

const SITE_ROOT: &str = "https://www.reddit.com";

/// Collect posts from a listing (`data.children[].data`).
///
/// Children without a title are skipped; missing counters default to zero.
/// Anything that is not a listing yields no posts.
pub fn extract_posts(listing: &Value) -> Vec<EvidencePost> {
    let Some(children) = listing
        .pointer("/data/children")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };

    children
        .iter()
        .filter_map(|child| {
            let data = child.get("data")?;
            let title = data.get("title")?.as_str()?.trim();
            if title.is_empty() {
                return None;
            }
            Some(EvidencePost {
                title: title.to_string(),
                subreddit: str_field(data, "subreddit"),
                score: data.get("score").and_then(Value::as_i64).unwrap_or(0),
                num_comments: data.get("num_comments").and_then(Value::as_u64).unwrap_or(0),
                permalink: absolute_permalink(&str_field(data, "permalink")),
            })
        })
        .collect()
}

fn str_field(data: &Value, key: &str) -> String {
    data.get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn absolute_permalink(permalink: &str) -> String {
    if permalink.starts_with('/') {
        format!("{SITE_ROOT}{permalink}")
    } else {
        permalink.to_string()
    }
}
