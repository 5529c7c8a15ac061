use std::sync::Arc;

use railops_core::types::Timestamp;
use railops_events::HookRegistry;
use railops_store::StorePool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// In-memory entity store.
    pub store: StorePool,
    /// Server configuration (read by the auth extractor and `/version`).
    pub config: Arc<ServerConfig>,
    /// Post-commit hooks dispatched after primary mutations.
    pub hooks: Arc<HookRegistry>,
    /// When this process started serving.
    pub started_at: Timestamp,
}

impl AppState {
    pub fn new(store: StorePool, config: ServerConfig, hooks: HookRegistry) -> Self {
        Self {
            store,
            config: Arc::new(config),
            hooks: Arc::new(hooks),
            started_at: chrono::Utc::now(),
        }
    }
}
