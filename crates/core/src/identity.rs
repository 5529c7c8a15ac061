//! Acting-user resolution.
//!
//! Session tokens normally carry the user id in `sub`. Tokens minted
//! without one fall back to a single configured identity; when no fallback
//! is configured such tokens are rejected.

use crate::error::CoreError;
use crate::types::UserId;

/// Fallback identity used when `FALLBACK_USER_ID` is not set.
pub const DEFAULT_FALLBACK_USER_ID: &str = "1";

/// Resolve the acting user from the token subject and the optional fallback.
pub fn resolve_acting_user(
    subject: Option<&str>,
    fallback: Option<&str>,
) -> Result<UserId, CoreError> {
    match subject.map(str::trim).filter(|s| !s.is_empty()) {
        Some(sub) => Ok(sub.to_string()),
        None => fallback
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .ok_or_else(|| CoreError::Unauthorized("Session has no user id".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_wins_over_fallback() {
        let user = resolve_acting_user(Some("42"), Some(DEFAULT_FALLBACK_USER_ID)).unwrap();
        assert_eq!(user, "42");
    }

    #[test]
    fn missing_subject_uses_fallback() {
        let user = resolve_acting_user(None, Some(DEFAULT_FALLBACK_USER_ID)).unwrap();
        assert_eq!(user, DEFAULT_FALLBACK_USER_ID);

        let user = resolve_acting_user(Some("  "), Some("ops")).unwrap();
        assert_eq!(user, "ops");
    }

    #[test]
    fn missing_subject_without_fallback_is_unauthorized() {
        assert!(matches!(
            resolve_acting_user(None, None),
            Err(CoreError::Unauthorized(_))
        ));
        assert!(resolve_acting_user(None, Some("")).is_err());
    }
}
