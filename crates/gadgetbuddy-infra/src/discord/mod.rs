//! Discord REST adapter (API v10).
//!
//! Slash-command registration and delivery of deferred interaction replies.
//! Receiving interactions is up to the gateway or HTTP front end in use;
//! this module only needs the application id and interaction token.

pub mod client;
pub mod commands;
pub mod sink;

pub use client::DiscordClient;
pub use sink::InteractionReplySink;
