use std::sync::Arc;

use crate::llm_client::CompletionBackend;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable model backend. Production: `LlmClient`. Tests: scripted stub.
    pub llm: Arc<dyn CompletionBackend>,
}
