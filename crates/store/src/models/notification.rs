//! Notification entity model and DTOs.

use railops_core::notification::NotificationKind;
use railops_core::types::{EntityId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use crate::collection::Entity;

/// An in-app notification addressed to one user.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: EntityId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub user_id: UserId,
    pub action_url: Option<String>,
    pub read: bool,
    pub created_at: Timestamp,
}

impl Entity for Notification {
    const NAME: &'static str = "Notification";

    fn id(&self) -> &str {
        &self.id
    }
}

/// DTO for creating a notification. The recipient comes from the caller.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub action_url: Option<String>,
}
