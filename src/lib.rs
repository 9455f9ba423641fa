//! MindMate — a supportive chat responder and an LLM pass-through, served over HTTP.

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod responder;
pub mod safety;

/// Install the `tracing` subscriber used by both binaries.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();
}
