//! Repository for the append-only activity feed.

use chrono::Utc;
use railops_core::types::Timestamp;

use crate::error::StoreError;
use crate::models::activity::{Activity, CreateActivity};
use crate::{new_id, Store};

/// Append and read activity records. There is no update or delete.
pub struct ActivityRepo;

impl ActivityRepo {
    pub async fn create(store: &Store, input: &CreateActivity) -> Result<Activity, StoreError> {
        let activity = Activity {
            id: new_id(),
            action: input.action.clone(),
            system: input.system.clone(),
            status: input.status,
            created_at: Utc::now(),
        };
        store.activities.write().await.insert(activity).cloned()
    }

    /// The most recent activities, newest first.
    pub async fn list(store: &Store, limit: usize) -> Vec<Activity> {
        store
            .activities
            .read()
            .await
            .iter()
            .rev()
            .take(limit)
            .cloned()
            .collect()
    }

    pub async fn count(store: &Store) -> usize {
        store.activities.read().await.len()
    }

    /// Number of activities recorded at or after `since`.
    pub async fn count_since(store: &Store, since: Timestamp) -> usize {
        store
            .activities
            .read()
            .await
            .iter()
            .filter(|a| a.created_at >= since)
            .count()
    }
}
