//! Observability for GadgetBuddy: subscriber setup and trace export.

pub mod tracing_setup;
