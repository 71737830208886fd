//! Shared domain types for GadgetBuddy.
//!
//! This crate contains the types passed between the budget extractor, the
//! tier scorer, and the collaborators around them (LLM provider, content
//! source, chat platform), plus their error enums.
//!
//! Zero infrastructure dependencies -- only serde, schemars, thiserror.

pub mod command;
pub mod config;
pub mod content;
pub mod error;
pub mod llm;
pub mod money;
pub mod tier;
