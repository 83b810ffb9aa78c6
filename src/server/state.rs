use std::sync::Arc;

use crate::config::ServerConfig;
use crate::item::ItemCollection;

/// Shared state handed to every route handler.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<ItemCollection>,
    pub server: Arc<ServerConfig>,
}

impl AppState {
    /// State over `items` with the default server settings.
    #[must_use]
    pub fn new(items: Arc<ItemCollection>) -> Self {
        Self::with_config(items, ServerConfig::default())
    }

    #[must_use]
    pub fn with_config(items: Arc<ItemCollection>, server: ServerConfig) -> Self {
        Self {
            items,
            server: Arc::new(server),
        }
    }
}
