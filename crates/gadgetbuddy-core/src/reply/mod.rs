//! Length-bounded reply chunking and delivery.
//!
//! Chat platforms cap message length (Discord: 2000 characters), so a reply
//! is split into chunks. The first chunk replaces the deferred
//! "thinking..." reply and the rest are posted as follow-ups.

use std::future::Future;

use gadgetbuddy_types::error::ReplyError;

/// Placeholder sent when the reply text is empty.
pub const EMPTY_REPLY: &str = "No content.";

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Splits on `char` boundaries, never inside a code point. An empty text
/// yields a single [`EMPTY_REPLY`] chunk. A `max_chars` of zero is treated
/// as one.
pub fn chunk_reply(text: &str, max_chars: usize) -> Vec<String> {
    if text.is_empty() {
        return vec![EMPTY_REPLY.to_string()];
    }

    let max_chars = max_chars.max(1);
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(max_chars)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

/// Destination for a chunked reply.
pub trait ReplySink: Send + Sync {
    /// Replace the deferred reply with `content`.
    fn edit_original(&self, content: &str) -> impl Future<Output = Result<(), ReplyError>> + Send;

    /// Post `content` as an additional message.
    fn follow_up(&self, content: &str) -> impl Future<Output = Result<(), ReplyError>> + Send;
}

/// Deliver `chunks` in order: edit first, then follow up with the rest.
pub async fn deliver<S: ReplySink>(sink: &S, chunks: &[String]) -> Result<(), ReplyError> {
    let Some((first, rest)) = chunks.split_first() else {
        return sink.edit_original(EMPTY_REPLY).await;
    };

    sink.edit_original(first).await?;
    for chunk in rest {
        sink.follow_up(chunk).await?;
    }
    tracing::debug!(chunks = chunks.len(), "reply delivered");
    Ok(())
}
