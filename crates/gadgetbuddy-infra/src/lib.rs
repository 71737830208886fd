//! Infrastructure layer for GadgetBuddy.
//!
//! Contains implementations of the port traits defined in `gadgetbuddy-core`:
//! the OpenAI-compatible LLM provider, the Reddit content source, the
//! Discord REST client and reply sink, plus config and credential loading.

pub mod config;
pub mod discord;
pub mod llm;
pub mod reddit;
pub mod secret;
