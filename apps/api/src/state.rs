use std::sync::Arc;

use crate::config::Config;
use crate::intake::extract::{NativeExtractor, TextExtractor};

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable document decoder. Default: NativeExtractor.
    pub extractor: Arc<dyn TextExtractor>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        AppState {
            config,
            extractor: Arc::new(NativeExtractor),
        }
    }
}
