//! Notification kinds.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Visual category of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

/// Validate the required text fields of a notification.
pub fn validate_notification_fields(title: &str, message: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification title is required".to_string(),
        ));
    }
    if message.trim().is_empty() {
        return Err(CoreError::Validation(
            "Notification message is required".to_string(),
        ));
    }
    Ok(())
}
