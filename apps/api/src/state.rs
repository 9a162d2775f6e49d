use std::sync::Arc;

use crate::llm_client::LanguageModel;
use crate::scrape::PageLoader;

/// Shared application state injected into all route handlers via Axum extractors.
/// Built once in `main`; nothing in it changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LanguageModel>,
    pub loader: Arc<dyn PageLoader>,
}
