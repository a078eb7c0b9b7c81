use std::sync::Arc;

use crate::config::Config;
use crate::execution::ExecutionClient;
use crate::extraction::{PdfTextExtractor, TextExtractor};
use crate::llm_client::LlmClient;

/// Shared application state injected into all route handlers via Axum extractors.
/// Holds only immutable clients; nothing here changes after startup.
#[derive(Clone)]
pub struct AppState {
    pub llm: LlmClient,
    pub executor: ExecutionClient,
    /// Pluggable document extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn from_config(config: &Config) -> Self {
        Self {
            llm: LlmClient::new(&config.ollama_url, &config.ollama_model),
            executor: ExecutionClient::new(&config.piston_url),
            extractor: Arc::new(PdfTextExtractor),
        }
    }
}
