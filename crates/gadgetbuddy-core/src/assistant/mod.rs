//! The chat command pipeline and its prompt/render helpers.

pub mod prompt;
pub mod render;
pub mod service;

pub use service::{APOLOGY, AssistantService, AssistantSettings, EMPTY_ANSWER};
