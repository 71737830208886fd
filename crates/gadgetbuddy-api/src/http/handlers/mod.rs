//! HTTP request handlers.

pub mod commands;
pub mod scoring;
pub mod tools;
