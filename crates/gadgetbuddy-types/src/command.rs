//! Chat commands understood by the assistant.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::money::Money;
use crate::tier::RankedItem;

/// A slash command the assistant answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatCommand {
    /// Build a ranked S-D tier list of products.
    Tierlist,
    /// Free-form research answer.
    Browse,
}

impl ChatCommand {
    pub const ALL: [ChatCommand; 2] = [ChatCommand::Tierlist, ChatCommand::Browse];

    pub fn name(&self) -> &'static str {
        match self {
            ChatCommand::Tierlist => "tierlist",
            ChatCommand::Browse => "browse",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ChatCommand::Tierlist => "Build a tier list",
            ChatCommand::Browse => "Ask the bot to browse",
        }
    }

    /// Help text shown for the required `query` option.
    pub fn query_hint(&self) -> &'static str {
        match self {
            ChatCommand::Tierlist => "e.g. 'best ANC earbuds under €150 from reddit'",
            ChatCommand::Browse => "What should I look up?",
        }
    }
}

impl fmt::Display for ChatCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChatCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('/').to_lowercase().as_str() {
            "tierlist" => Ok(ChatCommand::Tierlist),
            "browse" => Ok(ChatCommand::Browse),
            other => Err(format!("unknown command: '{other}'")),
        }
    }
}

/// The outcome of one command, ready for delivery.
#[derive(Debug, Clone, Serialize)]
pub struct CommandReply {
    pub command: ChatCommand,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub budget: Option<Money>,
    /// Ranked candidates when the model returned structured items.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ranked: Option<Vec<RankedItem>>,
    /// Number of evidence posts the prompt was built with.
    pub evidence_count: usize,
    /// Reply text split to the chat platform's message limit.
    pub chunks: Vec<String>,
}
