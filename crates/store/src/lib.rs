//! Volatile in-memory entity store for the dashboard.
//!
//! One insertion-ordered [`Collection`] per entity type, each behind its own
//! `tokio::sync::RwLock`. Repositories in [`repositories`] are the only
//! intended access path; they take `&Store` the same way a SQL repository
//! would take a pool. Nothing is persisted: state lives as long as the
//! process.

use std::sync::Arc;

use tokio::sync::RwLock;

pub mod collection;
pub mod error;
pub mod models;
pub mod repositories;
pub mod seed;

pub use collection::{Collection, Entity};
pub use error::StoreError;

use models::activity::Activity;
use models::alert::Alert;
use models::metrics::MetricSample;
use models::notification::Notification;
use models::project::Project;

/// Shared handle to the store, cheap to clone into handler state.
pub type StorePool = Arc<Store>;

/// All dashboard collections.
#[derive(Default)]
pub struct Store {
    pub(crate) projects: RwLock<Collection<Project>>,
    pub(crate) alerts: RwLock<Collection<Alert>>,
    pub(crate) notifications: RwLock<Collection<Notification>>,
    pub(crate) activities: RwLock<Collection<Activity>>,
    pub(crate) metrics: RwLock<Collection<MetricSample>>,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Create an empty shared store.
pub fn create_store() -> StorePool {
    Arc::new(Store::new())
}

/// Generate a new entity id.
///
/// UUID v7 embeds a millisecond timestamp, so ids sort in creation order.
pub fn new_id() -> String {
    uuid::Uuid::now_v7().to_string()
}
