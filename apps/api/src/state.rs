use std::sync::Arc;

use crate::llm_client::ChatModel;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub sessions: SessionStore,
    /// Pluggable chat backend. Production wires `OpenAiClient`; tests script
    /// their own. Swapping backends never touches handler code.
    pub llm: Arc<dyn ChatModel>,
}
