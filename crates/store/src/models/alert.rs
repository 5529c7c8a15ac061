//! Alert entity model and DTOs.

use railops_core::alert::AlertStatus;
use railops_core::types::{EntityId, Timestamp};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;

/// A system alert, visible to every user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    pub severity: String,
    pub system: String,
    pub status: AlertStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Entity for Alert {
    const NAME: &'static str = "Alert";

    fn id(&self) -> &str {
        &self.id
    }
}

/// DTO for raising a new alert. Status is always `open` on creation.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAlert {
    pub title: String,
    pub message: String,
    pub severity: String,
    pub system: String,
}

/// DTO for a partial alert update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAlert {
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<String>,
    pub system: Option<String>,
    pub status: Option<AlertStatus>,
}
