//! Alert statuses and severity constants.
//!
//! Severity is a free-form label; only `critical` and `high` carry special
//! meaning (they escalate the generated notification to an error).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::notification::NotificationKind;

pub const SEVERITY_CRITICAL: &str = "critical";
pub const SEVERITY_HIGH: &str = "high";
pub const SEVERITY_MEDIUM: &str = "medium";
pub const SEVERITY_LOW: &str = "low";

/// Severities that produce an `error` notification.
pub const ESCALATING_SEVERITIES: &[&str] = &[SEVERITY_CRITICAL, SEVERITY_HIGH];

/// Alert lifecycle status. New alerts always start as [`AlertStatus::Open`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    #[default]
    Open,
    Acknowledged,
    Resolved,
}

/// Notification kind raised for a new alert of the given severity.
pub fn notification_kind_for_severity(severity: &str) -> NotificationKind {
    if ESCALATING_SEVERITIES.contains(&severity) {
        NotificationKind::Error
    } else {
        NotificationKind::Warning
    }
}

/// Validate the required text fields of an alert.
pub fn validate_alert_fields(
    title: &str,
    message: &str,
    severity: &str,
    system: &str,
) -> Result<(), CoreError> {
    for (field, value) in [
        ("title", title),
        ("message", message),
        ("severity", severity),
        ("system", system),
    ] {
        if value.trim().is_empty() {
            return Err(CoreError::Validation(format!("Alert {field} is required")));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn critical_and_high_escalate_to_error() {
        assert_eq!(
            notification_kind_for_severity(SEVERITY_CRITICAL),
            NotificationKind::Error
        );
        assert_eq!(
            notification_kind_for_severity(SEVERITY_HIGH),
            NotificationKind::Error
        );
    }

    #[test]
    fn other_severities_are_warnings() {
        for severity in [SEVERITY_MEDIUM, SEVERITY_LOW, "info", "CRITICAL", ""] {
            assert_eq!(
                notification_kind_for_severity(severity),
                NotificationKind::Warning,
                "severity {severity:?}"
            );
        }
    }

    #[test]
    fn blank_field_names_the_field() {
        let err = validate_alert_fields("Track fault", "", "high", "Signalling").unwrap_err();
        assert!(err.to_string().contains("message"));
    }
}
