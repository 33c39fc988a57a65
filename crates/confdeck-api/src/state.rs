//! Shared application state for request handlers.

use confdeck_model::Catalog;
use tokio::sync::RwLock;

/// State shared by every handler: the configuration catalog.
pub(crate) struct ApiState {
    pub(crate) catalog: RwLock<Catalog>,
}

impl ApiState {
    pub(crate) fn new(catalog: Catalog) -> Self {
        Self {
            catalog: RwLock::new(catalog),
        }
    }
}
