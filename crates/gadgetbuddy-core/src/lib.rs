//! Business logic and port traits for GadgetBuddy.
//!
//! The pure core (budget extraction, tier scoring, reply chunking) plus the
//! assistant pipeline that ties them to the LLM provider, content source,
//! and reply sink ports. Depends only on `gadgetbuddy-types` -- never on
//! `gadgetbuddy-infra` or any HTTP crate.

pub mod assistant;
pub mod budget;
pub mod content;
pub mod llm;
pub mod reply;
pub mod tier;
pub mod tools;
