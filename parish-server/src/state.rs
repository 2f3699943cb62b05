use std::sync::Arc;

use anyhow::Result;
use parish_core::admin::{AdminCheck, CachedAdminCheck, ConfigAdmins};
use parish_core::config::ParishConfig;
use parish_core::store::{EventStore, JsonFileStore};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    // The store re-reads on every request so edits to the export show up
    // without a restart.
    pub store: Arc<dyn EventStore>,
    pub admin: Arc<dyn AdminCheck>,
}

impl AppState {
    pub fn new(store: Arc<dyn EventStore>, admin: Arc<dyn AdminCheck>) -> Self {
        AppState { store, admin }
    }

    pub fn from_config(config: &ParishConfig) -> Result<Self> {
        let store = JsonFileStore::new(config.events_path());
        // Fail at startup rather than on the first request
        let count = store.all_events()?.len();
        tracing::info!(path = %store.path().display(), count, "events store ready");

        let admin = CachedAdminCheck::new(
            ConfigAdmins::new(config.admins.clone()),
            config.admin_cache_ttl()?,
        );

        Ok(AppState::new(Arc::new(store), Arc::new(admin)))
    }
}
