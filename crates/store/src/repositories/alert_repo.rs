//! Repository for the alerts collection.

use chrono::Utc;
use railops_core::alert::AlertStatus;

use crate::error::StoreError;
use crate::models::alert::{Alert, CreateAlert, UpdateAlert};
use crate::{new_id, Store};

/// Provides CRUD operations for alerts. Alerts are not owner-scoped.
pub struct AlertRepo;

impl AlertRepo {
    /// Raise a new alert with status `open`.
    pub async fn create(store: &Store, input: &CreateAlert) -> Result<Alert, StoreError> {
        let now = Utc::now();
        let alert = Alert {
            id: new_id(),
            title: input.title.clone(),
            message: input.message.clone(),
            severity: input.severity.clone(),
            system: input.system.clone(),
            status: AlertStatus::Open,
            created_at: now,
            updated_at: now,
        };
        store.alerts.write().await.insert(alert).cloned()
    }

    pub async fn find_by_id(store: &Store, id: &str) -> Option<Alert> {
        store.alerts.read().await.get(id).cloned()
    }

    /// List alerts in creation order, optionally filtered by status.
    pub async fn list(store: &Store, status: Option<AlertStatus>) -> Vec<Alert> {
        store
            .alerts
            .read()
            .await
            .iter()
            .filter(|a| status.map_or(true, |s| a.status == s))
            .cloned()
            .collect()
    }

    /// Shallow-merge the provided fields. Returns `None` if the id is absent.
    pub async fn update(store: &Store, id: &str, input: &UpdateAlert) -> Option<Alert> {
        let mut alerts = store.alerts.write().await;
        let alert = alerts.get_mut(id)?;

        if let Some(title) = &input.title {
            alert.title = title.clone();
        }
        if let Some(message) = &input.message {
            alert.message = message.clone();
        }
        if let Some(severity) = &input.severity {
            alert.severity = severity.clone();
        }
        if let Some(system) = &input.system {
            alert.system = system.clone();
        }
        if let Some(status) = input.status {
            alert.status = status;
        }
        alert.updated_at = Utc::now();

        Some(alert.clone())
    }
}
