use std::sync::Arc;

use crate::advisor::PromptComposer;
use crate::config::Config;
use crate::llm_client::CompletionClient;

/// Shared application state injected into all route handlers via Axum
/// extractors. Read-only after startup; requests share nothing else.
#[derive(Clone)]
pub struct AppState {
    /// Provider-polymorphic completion backend, selected at startup.
    pub llm: Arc<dyn CompletionClient>,
    pub composer: Arc<PromptComposer>,
    pub config: Arc<Config>,
}
