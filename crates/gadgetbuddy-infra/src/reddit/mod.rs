//! Reddit content source.
//!
//! [`RedditClient`] implements
//! [`ContentSource`](gadgetbuddy_core::content::source::ContentSource)
//! against the OAuth API, refreshing its access token from a long-lived
//! refresh token.

pub mod client;
pub mod request;
pub mod token;

pub use client::RedditClient;
