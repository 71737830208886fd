//! CLI command definitions for the `gbuddy` binary.
//!
//! Uses clap derive macros for argument parsing.

pub mod ask;
pub mod discord;
pub mod scoring;
pub mod status;
pub mod tool;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use clap_complete::Shell;

use gadgetbuddy_types::command::ChatCommand;

/// Gadget research assistant: budgets, tier lists, and Reddit evidence.
#[derive(Parser)]
#[command(name = "gbuddy", version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output machine-readable JSON instead of styled text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress all output except errors.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Detailed output (-v for info, -vv for debug, -vvv for trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Export tracing spans through OpenTelemetry (stdout exporter).
    #[arg(long, global = true)]
    pub otel: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect a budget in free text.
    Budget {
        /// Text to scan, e.g. "anc earbuds under $150".
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
    },

    /// Rank items from a JSON file into an S-D tier list.
    Tier {
        /// Path to a JSON array of items.
        file: PathBuf,
    },

    /// Run a chat command through the assistant and print the reply.
    Ask {
        /// Command to run (tierlist or browse).
        command: ChatCommand,

        /// The user's query.
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Invoke a content-source tool directly.
    Tool {
        /// Tool name (search_subreddits, fetch_posts, fetch_comments).
        name: String,

        /// Tool input as a JSON object.
        #[arg(long, default_value = "{}")]
        input: String,
    },

    /// Register the slash commands with Discord.
    #[command(name = "register-commands")]
    RegisterCommands,

    /// Show configuration and credential status.
    Status,

    /// Start the HTTP server (tool server and REST API).
    Serve {
        /// Port to listen on (defaults to the configured port).
        #[arg(short, long)]
        port: Option<u16>,

        /// Host to bind to (defaults to the configured host).
        #[arg(long)]
        host: Option<String>,
    },

    /// Generate shell completions.
    Completions {
        /// Shell to generate completions for.
        shell: Shell,
    },
}
