use std::sync::Arc;

use crate::llm_client::LlmProvider;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// The model capability every flow runs against. `LlmClient` in production.
    pub llm: Arc<dyn LlmProvider>,
}
