//! LLM provider abstraction for GadgetBuddy.
//!
//! Concrete providers live in `gadgetbuddy-infra`; the assistant pipeline
//! only sees the [`provider::LlmProvider`] trait.

pub mod provider;
