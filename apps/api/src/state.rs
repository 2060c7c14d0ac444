use std::sync::Arc;

use crate::config::ConfigProvider;
use crate::llm_client::LlmClient;

/// Shared application state injected into route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    /// Per-invocation config lookups (API key, model). Injected as a trait
    /// object so tests can substitute fixed values.
    pub config: Arc<dyn ConfigProvider>,
    pub policy: ChatPolicy,
}

/// Deployment-variant knobs for the chat handler: which persona the model
/// speaks as, and whether its replies are stripped of markup before being
/// returned. One handler serves every variant.
#[derive(Clone, Copy)]
pub struct ChatPolicy {
    pub system_prompt: &'static str,
    pub sanitize_reply: bool,
}
