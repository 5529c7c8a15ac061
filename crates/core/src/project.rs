//! Project lifecycle statuses, field validation, and the ownership rule.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Maximum length of a project name in characters.
pub const MAX_PROJECT_NAME_LENGTH: usize = 200;

/// Upper bound (inclusive) for `progress`.
pub const MAX_PROGRESS: u8 = 100;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Archived,
    Pending,
}

impl ProjectStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Archived => "archived",
            ProjectStatus::Pending => "pending",
        }
    }
}

/// Validate a project name: must be non-blank and within the length limit.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation("Project name is required".to_string()));
    }
    if name.chars().count() > MAX_PROJECT_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Project name exceeds maximum length of {MAX_PROJECT_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate a progress percentage (0-100 inclusive).
pub fn validate_progress(progress: i64) -> Result<u8, CoreError> {
    if (0..=i64::from(MAX_PROGRESS)).contains(&progress) {
        Ok(progress as u8)
    } else {
        Err(CoreError::Validation(format!(
            "Progress must be between 0 and {MAX_PROGRESS}, got {progress}"
        )))
    }
}

/// Reject access to a project owned by someone other than `user_id`.
pub fn ensure_owner(owner_id: &str, user_id: &str) -> Result<(), CoreError> {
    if owner_id == user_id {
        Ok(())
    } else {
        Err(CoreError::Forbidden(
            "You do not have access to this project".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_status_is_active() {
        assert_eq!(ProjectStatus::default(), ProjectStatus::Active);
    }

    #[test]
    fn status_labels_are_lowercase() {
        assert_eq!(ProjectStatus::Completed.as_str(), "completed");
        assert_eq!(ProjectStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn blank_name_rejected() {
        assert!(validate_project_name("   ").is_err());
        assert!(validate_project_name("Signal upgrade").is_ok());
    }

    #[test]
    fn overlong_name_rejected() {
        let name = "x".repeat(MAX_PROJECT_NAME_LENGTH + 1);
        assert!(validate_project_name(&name).is_err());
    }

    #[test]
    fn progress_bounds() {
        assert_eq!(validate_progress(0).unwrap(), 0);
        assert_eq!(validate_progress(100).unwrap(), 100);
        assert!(validate_progress(-1).is_err());
        assert!(validate_progress(101).is_err());
    }

    #[test]
    fn owner_mismatch_is_forbidden() {
        assert!(ensure_owner("u1", "u1").is_ok());
        assert!(matches!(
            ensure_owner("u1", "u2"),
            Err(CoreError::Forbidden(_))
        ));
    }
}
