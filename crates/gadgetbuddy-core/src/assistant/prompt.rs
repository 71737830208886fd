//! Prompt construction for the chat commands.

use gadgetbuddy_types::command::ChatCommand;
use gadgetbuddy_types::content::EvidencePost;
use gadgetbuddy_types::llm::{CompletionRequest, Message};
use gadgetbuddy_types::money::Money;

use super::service::AssistantSettings;

const PERSONA: &str = "You are GadgetBuddy.";

/// System prompt for `command`.
///
/// The tier list asks for structured candidates so the ranking itself is
/// computed locally; browse asks for a finished Markdown answer.
pub fn system_prompt(command: ChatCommand) -> String {
    let lines: &[&str] = match command {
        ChatCommand::Tierlist => &[
            PERSONA,
            "Return ONLY a JSON array of candidate products, no prose.",
            "Each element: {\"name\": string, \"price\": number|null, \"currency\": \"USD\"|\"EUR\"|\"GBP\"|null,",
            "\"mentions\": integer, \"pros\": [string], \"cons\": [string], \"links\": [string]}.",
            "mentions = number of independent sources recommending the product.",
            "Keep pros and cons to short bullets. At most 10 products.",
            "Respect the user's budget if provided.",
        ],
        ChatCommand::Browse => &[
            PERSONA,
            "Answer concisely in Markdown.",
            "Keep total under 1800 characters. No intro/outro.",
            "Cite sources as links when evidence is provided.",
            "Respect the user's budget if provided.",
        ],
    };
    lines.join("\n")
}

/// The user turn: the query, the detected budget, and any evidence.
pub fn user_message(query: &str, budget: Option<&Money>, evidence: &[EvidencePost]) -> String {
    let mut content = query.to_string();

    if let Some(budget) = budget {
        content.push_str(&format!("\nDetected budget: {budget}"));
    }

    if !evidence.is_empty() {
        content.push_str("\n\nReddit evidence:");
        for post in evidence {
            content.push_str(&format!(
                "\n- [r/{}] {} (score {}, {} comments) {}",
                post.subreddit, post.title, post.score, post.num_comments, post.permalink
            ));
        }
    }

    content
}

/// Assemble the completion request for one command.
pub fn build_request(
    command: ChatCommand,
    query: &str,
    budget: Option<&Money>,
    evidence: &[EvidencePost],
    settings: &AssistantSettings,
) -> CompletionRequest {
    CompletionRequest {
        model: settings.model.clone(),
        messages: vec![
            Message::system(system_prompt(command)),
            Message::user(user_message(query, budget, evidence)),
        ],
        max_tokens: settings.max_tokens,
        temperature: settings.temperature,
    }
}
