//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use railops_core::error::CoreError;
use railops_core::identity::resolve_acting_user;
use railops_core::types::UserId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// The acting user, resolved from a JWT Bearer token in the `Authorization`
/// header.
///
/// Every dashboard handler takes this as an explicit argument:
///
/// ```ignore
/// async fn my_handler(auth: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = %auth.user_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: UserId,
    /// `true` when the token had no subject and the fallback identity was used.
    pub is_fallback: bool,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        let subject = claims.sub.as_deref();
        let user_id = resolve_acting_user(subject, state.config.fallback_user_id.as_deref())?;
        let is_fallback = subject.map_or(true, |s| s.trim().is_empty());
        if is_fallback {
            tracing::debug!(user_id = %user_id, "Session without user id, using fallback identity");
        }

        Ok(AuthUser {
            user_id,
            is_fallback,
        })
    }
}
