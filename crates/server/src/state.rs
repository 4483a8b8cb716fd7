use clusterfind_common::AppConfig;
use clusterfind_index::SearchEngine;

/// Shared application state
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Nearest-centroid search engine
    pub engine: SearchEngine,
}

impl AppState {
    /// Create new application state with an empty index
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            engine: SearchEngine::new(),
        }
    }
}
