use std::sync::Arc;

use crate::config::Config;
use crate::source::quote_garden::QuoteGarden;
use crate::source::QuoteSource;

pub struct AppContext {
    pub source: Arc<dyn QuoteSource + Send + Sync>,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Self {
        let source: Arc<dyn QuoteSource + Send + Sync> =
            Arc::new(QuoteGarden::new(&config.source.base_url));
        Self { source, config }
    }

    /// Wire in a different source, e.g. a mock in tests.
    pub fn with_source(source: Arc<dyn QuoteSource + Send + Sync>, config: Config) -> Self {
        Self { source, config }
    }

    pub fn page_limit(&self) -> u32 {
        self.config.source.page_limit.max(1)
    }
}
