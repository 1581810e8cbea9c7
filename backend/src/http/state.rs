//! Application state for the HTTP server.

use std::sync::Arc;

use crate::config::ExplorerSettings;
use crate::db::CatalogRepository;

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Source of planet records
    pub repository: Arc<dyn CatalogRepository>,
    /// Paging defaults and limits for the explorer endpoint
    pub explorer: ExplorerSettings,
}

impl AppState {
    /// Create a new application state with default explorer settings.
    pub fn new(repository: Arc<dyn CatalogRepository>) -> Self {
        Self {
            repository,
            explorer: ExplorerSettings::default(),
        }
    }

    pub fn with_explorer_settings(mut self, explorer: ExplorerSettings) -> Self {
        self.explorer = explorer;
        self
    }
}
