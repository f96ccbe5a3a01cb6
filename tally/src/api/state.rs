use std::sync::Arc;

use crate::config::Config;
use crate::db::DocumentStore;
use crate::error::{Result, TallyError};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// `None` when no connection string was configured. Handlers that need
    /// storage obtain it through [`AppState::store`], which turns absence
    /// into a typed `StorageUnavailable` instead of a panic.
    pub store: Option<Arc<dyn DocumentStore>>,
}

impl AppState {
    pub fn new(config: Config, store: Option<Arc<dyn DocumentStore>>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }

    pub fn store(&self) -> Result<Arc<dyn DocumentStore>> {
        self.store.clone().ok_or(TallyError::StorageUnavailable)
    }
}
