//! OpenAI-compatible LLM provider implementation.
//!
//! A single [`OpenAiCompatibleProvider`] serves OpenAI and any endpoint that
//! speaks the Chat Completions protocol, selected by base URL.

pub mod client;
pub mod config;
pub mod types;

pub use client::OpenAiCompatibleProvider;
pub use config::OpenAiCompatConfig;
