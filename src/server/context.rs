//! Shared application context handed to every route handler via Axum state.

use std::sync::Arc;

use catalog_core::config::Config;

use crate::service::ItemService;

/// Immutable state shared across handlers. Cheap to clone.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<Config>,
    pub service: Arc<ItemService>,
}

impl AppContext {
    pub fn new(config: Config, service: ItemService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}
