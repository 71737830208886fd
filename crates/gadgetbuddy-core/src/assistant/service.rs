//! AssistantService -- the chat command pipeline.
//!
//! Detects the budget, gathers evidence from the content source, asks the
//! LLM, ranks structured answers with the tier scorer, and chunks the reply.
//! Generic over the LLM provider and content source so tests can drive it
//! with in-memory fakes.

use std::collections::HashSet;

use futures_util::future::join_all;

use gadgetbuddy_types::command::{ChatCommand, CommandReply};
use gadgetbuddy_types::config::AppConfig;
use gadgetbuddy_types::content::{EvidencePost, SearchQuery, SearchSort, TimeWindow};
use gadgetbuddy_types::error::{CommandError, ReplyError};

use crate::budget::detect_budget;
use crate::content::evidence::extract_posts;
use crate::content::source::ContentSource;
use crate::llm::provider::LlmProvider;
use crate::reply::{ReplySink, chunk_reply, deliver};
use crate::tier::build_tier_list;

use super::{prompt, render};

/// Sent instead of a reply when the pipeline fails after accepting a command.
pub const APOLOGY: &str = "Sorry, something went wrong while processing that.";

/// Sent when the model returns no content at all.
pub const EMPTY_ANSWER: &str = "Done.";

/// Tunables for the pipeline, usually taken from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct AssistantSettings {
    pub model: String,
    pub max_tokens: u32,
    pub temperature: Option<f64>,
    pub max_chunk_chars: usize,
    pub evidence_limit: u32,
    pub evidence_subreddits: Vec<String>,
}

impl Default for AssistantSettings {
    fn default() -> Self {
        Self::from_config(&AppConfig::default())
    }
}

impl AssistantSettings {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            model: config.llm.model.clone(),
            max_tokens: config.llm.max_tokens,
            temperature: config.llm.temperature,
            max_chunk_chars: config.reply.max_chunk_chars,
            evidence_limit: config.content_source.evidence_limit,
            evidence_subreddits: config.content_source.evidence_subreddits.clone(),
        }
    }
}

/// Runs chat commands end to end.
pub struct AssistantService<P, S> {
    llm: P,
    source: Option<S>,
    settings: AssistantSettings,
}

impl<P: LlmProvider, S: ContentSource> AssistantService<P, S> {
    /// `source` is optional: without one, prompts carry no evidence.
    pub fn new(llm: P, source: Option<S>, settings: AssistantSettings) -> Self {
        Self {
            llm,
            source,
            settings,
        }
    }

    pub fn settings(&self) -> &AssistantSettings {
        &self.settings
    }

    /// Access the content source, if one is configured.
    pub fn source(&self) -> Option<&S> {
        self.source.as_ref()
    }

    /// Run `command` for `query` and return the chunked reply.
    pub async fn handle(&self, command: ChatCommand, query: &str) -> Result<CommandReply, CommandError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(CommandError::EmptyQuery);
        }

        let budget = detect_budget(query);
        let evidence = self.gather_evidence(query).await;
        let request = prompt::build_request(command, query, budget.as_ref(), &evidence, &self.settings);

        let response = self.llm.complete(&request).await?;
        tracing::info!(
            provider = self.llm.name(),
            model = %response.model,
            %command,
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion received"
        );

        let content = response.content.trim();
        let (text, ranked) = match command {
            ChatCommand::Tierlist => match render::parse_candidates(content) {
                Some(items) => {
                    let ranked = build_tier_list(&items);
                    (render::render_tier_table(&ranked), Some(ranked))
                }
                None => {
                    tracing::warn!("model answer had no parseable candidates, replying with raw text");
                    (content.to_string(), None)
                }
            },
            ChatCommand::Browse => (content.to_string(), None),
        };

        let text = if text.is_empty() { EMPTY_ANSWER.to_string() } else { text };

        Ok(CommandReply {
            command,
            budget,
            ranked,
            evidence_count: evidence.len(),
            chunks: chunk_reply(&text, self.settings.max_chunk_chars),
        })
    }

    /// Run `command` and deliver the result through `sink`.
    ///
    /// On failure the deferred reply is replaced with [`APOLOGY`] (best
    /// effort) and the original error is returned.
    pub async fn handle_and_deliver<R: ReplySink>(
        &self,
        command: ChatCommand,
        query: &str,
        sink: &R,
    ) -> Result<CommandReply, CommandError> {
        match self.handle(command, query).await {
            Ok(reply) => {
                deliver(sink, &reply.chunks).await?;
                Ok(reply)
            }
            Err(err) => {
                tracing::error!(error = %err, %command, "command failed");
                match sink.edit_original(APOLOGY).await {
                    Ok(()) | Err(ReplyError::UnknownInteraction) => {}
                    Err(reply_err) => {
                        tracing::warn!(error = %reply_err, "failed to deliver apology");
                    }
                }
                Err(err)
            }
        }
    }

    /// Search the content source for `query`.
    ///
    /// One search per configured subreddit (or one site-wide search), run
    /// concurrently. Failures are logged and skipped; duplicates by
    /// permalink are dropped; the total is capped at the evidence limit.
    async fn gather_evidence(&self, query: &str) -> Vec<EvidencePost> {
        let Some(source) = self.source.as_ref() else {
            return Vec::new();
        };
        let limit = self.settings.evidence_limit;
        if limit == 0 {
            return Vec::new();
        }

        let subreddits: Vec<Option<String>> = if self.settings.evidence_subreddits.is_empty() {
            vec![None]
        } else {
            self.settings.evidence_subreddits.iter().cloned().map(Some).collect()
        };

        let searches = subreddits.into_iter().map(|subreddit| {
            let search = SearchQuery {
                query: query.to_string(),
                subreddit,
                sort: SearchSort::Relevance,
                time: TimeWindow::Month,
                limit,
            };
            async move {
                let result = source.search(&search).await;
                (search.subreddit, result)
            }
        });

        let mut seen = HashSet::new();
        let mut posts = Vec::new();
        for (subreddit, result) in join_all(searches).await {
            match result {
                Ok(listing) => {
                    posts.extend(
                        extract_posts(&listing)
                            .into_iter()
                            .filter(|post| seen.insert(post.permalink.clone())),
                    );
                }
                Err(err) => {
                    tracing::warn!(error = %err, subreddit = ?subreddit, "evidence search failed");
                }
            }
        }

        posts.truncate(limit as usize);
        tracing::debug!(posts = posts.len(), "evidence gathered");
        posts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use serde_json::{Value, json};

    use gadgetbuddy_types::content::{CommentsQuery, ListingQuery};
    use gadgetbuddy_types::error::ContentSourceError;
    use gadgetbuddy_types::llm::{
        CompletionRequest, CompletionResponse, LlmError, StopReason, Usage,
    };
    use gadgetbuddy_types::money::{Currency, Qualifier};
    use gadgetbuddy_types::tier::Tier;

    struct CannedLlm {
        answer: Result<String, ()>,
        requests: Mutex<Vec<CompletionRequest>>,
    }

    impl CannedLlm {
        fn answering(answer: &str) -> Self {
            Self {
                answer: Ok(answer.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                answer: Err(()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn last_user_message(&self) -> String {
            let requests = self.requests.lock().unwrap();
            requests.last().unwrap().messages[1].content.clone()
        }
    }

    impl LlmProvider for CannedLlm {
        fn name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, request: &CompletionRequest) -> Result<CompletionResponse, LlmError> {
            self.requests.lock().unwrap().push(request.clone());
            match &self.answer {
                Ok(content) => Ok(CompletionResponse {
                    id: "resp-1".to_string(),
                    content: content.clone(),
                    model: "canned-model".to_string(),
                    stop_reason: StopReason::EndTurn,
                    usage: Usage::default(),
                }),
                Err(()) => Err(LlmError::Overloaded("busy".to_string())),
            }
        }
    }

    struct FakeReddit {
        fail_for: Option<String>,
    }

    impl ContentSource for FakeReddit {
        async fn search(&self, query: &SearchQuery) -> Result<Value, ContentSourceError> {
            if query.subreddit.is_some() && query.subreddit == self.fail_for {
                return Err(ContentSourceError::Http {
                    status: 503,
                    body: "down".to_string(),
                });
            }
            let sub = query.subreddit.clone().unwrap_or_else(|| "all".to_string());
            Ok(json!({"data": {"children": [
                {"data": {"title": format!("{sub}: Liberty 4 NC thread"), "subreddit": sub,
                          "score": 10, "num_comments": 4, "permalink": format!("/r/{sub}/1")}},
                {"data": {"title": "shared crosspost", "subreddit": sub,
                          "score": 2, "num_comments": 0, "permalink": "/r/shared/2"}}
            ]}}))
        }

        async fn listing(&self, _query: &ListingQuery) -> Result<Value, ContentSourceError> {
            Ok(Value::Null)
        }

        async fn comments(&self, _query: &CommentsQuery) -> Result<Value, ContentSourceError> {
            Ok(Value::Null)
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        edits: Mutex<Vec<String>>,
        follow_ups: Mutex<Vec<String>>,
    }

    impl ReplySink for RecordingSink {
        async fn edit_original(&self, content: &str) -> Result<(), ReplyError> {
            self.edits.lock().unwrap().push(content.to_string());
            Ok(())
        }

        async fn follow_up(&self, content: &str) -> Result<(), ReplyError> {
            self.follow_ups.lock().unwrap().push(content.to_string());
            Ok(())
        }
    }

    fn service(llm: CannedLlm, source: Option<FakeReddit>) -> AssistantService<CannedLlm, FakeReddit> {
        AssistantService::new(llm, source, AssistantSettings::default())
    }

    const CANDIDATES: &str = r#"```json
[
  {"name": "Budget Buds", "price": 39, "mentions": 1, "pros": [], "cons": ["thin bass"]},
  {"name": "Liberty 4 NC", "price": 99, "currency": "EUR", "mentions": 40, "pros": ["ANC", "battery"], "cons": []}
]
```"#;

    #[tokio::test]
    async fn tierlist_ranks_structured_answer() {
        let svc = service(CannedLlm::answering(CANDIDATES), None);
        let reply = svc
            .handle(ChatCommand::Tierlist, "best ANC earbuds under €150")
            .await
            .unwrap();

        let ranked = reply.ranked.unwrap();
        assert_eq!(ranked[0].item.name, "Liberty 4 NC");
        assert_eq!(ranked[0].tier, Tier::S);
        assert_eq!(ranked[1].tier, Tier::B);
        assert!(reply.chunks[0].starts_with("| Tier | Model | Why | Price |"));
        assert_eq!(
            reply.budget,
            Some(gadgetbuddy_types::money::Money {
                value: 150.0,
                currency: Currency::Eur,
                qualifier: Some(Qualifier::Under),
            })
        );
    }

    #[tokio::test]
    async fn tierlist_falls_back_to_raw_text() {
        let svc = service(CannedLlm::answering("S: Sony\nA: Bose"), None);
        let reply = svc.handle(ChatCommand::Tierlist, "earbuds").await.unwrap();
        assert!(reply.ranked.is_none());
        assert_eq!(reply.chunks, vec!["S: Sony\nA: Bose".to_string()]);
    }

    #[tokio::test]
    async fn prompt_carries_budget_line() {
        let llm = CannedLlm::answering("ok");
        let svc = service(llm, None);
        svc.handle(ChatCommand::Browse, "headphones under $150").await.unwrap();
        assert!(svc.llm.last_user_message().ends_with("Detected budget: 150 USD (under)"));

        svc.handle(ChatCommand::Browse, "nice headphones").await.unwrap();
        assert_eq!(svc.llm.last_user_message(), "nice headphones");
    }

    #[tokio::test]
    async fn empty_answer_becomes_done() {
        let svc = service(CannedLlm::answering("   "), None);
        let reply = svc.handle(ChatCommand::Browse, "anything").await.unwrap();
        assert_eq!(reply.chunks, vec![EMPTY_ANSWER.to_string()]);
    }

    #[tokio::test]
    async fn empty_query_is_rejected() {
        let svc = service(CannedLlm::answering("ok"), None);
        let err = svc.handle(ChatCommand::Browse, "  ").await.unwrap_err();
        assert!(matches!(err, CommandError::EmptyQuery));
    }

    #[tokio::test]
    async fn long_answers_are_chunked() {
        let answer = "a".repeat(4000);
        let svc = service(CannedLlm::answering(&answer), None);
        let reply = svc.handle(ChatCommand::Browse, "long").await.unwrap();
        assert_eq!(reply.chunks.len(), 3);
        assert!(reply.chunks.iter().all(|c| c.chars().count() <= 1900));
    }

    #[tokio::test]
    async fn evidence_is_deduplicated_and_failures_skipped() {
        let mut settings = AssistantSettings::default();
        settings.evidence_subreddits = vec![
            "headphones".to_string(),
            "earbuds".to_string(),
            "broken".to_string(),
        ];
        let svc = AssistantService::new(
            CannedLlm::answering("ok"),
            Some(FakeReddit {
                fail_for: Some("broken".to_string()),
            }),
            settings,
        );

        let reply = svc.handle(ChatCommand::Browse, "anc earbuds").await.unwrap();
        // Two subreddit-specific threads plus one shared crosspost.
        assert_eq!(reply.evidence_count, 3);
        let prompt = svc.llm.last_user_message();
        assert!(prompt.contains("headphones: Liberty 4 NC thread"));
        assert!(prompt.contains("earbuds: Liberty 4 NC thread"));
        assert_eq!(prompt.matches("shared crosspost").count(), 1);
    }

    #[tokio::test]
    async fn evidence_limit_zero_disables_search() {
        let mut settings = AssistantSettings::default();
        settings.evidence_limit = 0;
        let svc = AssistantService::new(
            CannedLlm::answering("ok"),
            Some(FakeReddit { fail_for: None }),
            settings,
        );
        let reply = svc.handle(ChatCommand::Browse, "anc earbuds").await.unwrap();
        assert_eq!(reply.evidence_count, 0);
    }

    #[tokio::test]
    async fn deliver_sends_edit_then_follow_ups() {
        let answer = "b".repeat(2000);
        let svc = service(CannedLlm::answering(&answer), None);
        let sink = RecordingSink::default();
        svc.handle_and_deliver(ChatCommand::Browse, "q", &sink).await.unwrap();

        assert_eq!(sink.edits.lock().unwrap().len(), 1);
        assert_eq!(sink.follow_ups.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn failure_sends_apology() {
        let svc = service(CannedLlm::failing(), None);
        let sink = RecordingSink::default();
        let err = svc
            .handle_and_deliver(ChatCommand::Tierlist, "earbuds", &sink)
            .await
            .unwrap_err();

        assert!(matches!(err, CommandError::Llm(LlmError::Overloaded(_))));
        assert_eq!(*sink.edits.lock().unwrap(), vec![APOLOGY.to_string()]);
        assert!(sink.follow_ups.lock().unwrap().is_empty());
    }
}
