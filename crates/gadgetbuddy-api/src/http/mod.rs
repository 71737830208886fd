//! HTTP API layer for GadgetBuddy.
//!
//! Axum-based API: the scoring and command endpoints at `/api/v1/` use the
//! envelope response format; the tool server at `/mcp` keeps its own
//! `{ok, result}` wire format. Optional API key authentication and CORS.

pub mod error;
pub mod extractors;
pub mod handlers;
pub mod response;
pub mod router;
