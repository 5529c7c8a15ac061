//! Handlers for the `/activities` feed.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use railops_core::activity::clamp_activity_limit;
use railops_core::error::CoreError;
use railops_store::models::activity::{ActivityEntry, CreateActivity};
use railops_store::repositories::ActivityRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /activities`.
#[derive(Debug, Deserialize)]
pub struct ActivityQuery {
    /// Maximum entries to return. Defaults to 10, capped at 100.
    pub limit: Option<usize>,
}

/// GET /api/dashboard/activities
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ActivityQuery>,
) -> AppResult<Json<Vec<ActivityEntry>>> {
    let limit = clamp_activity_limit(params.limit);
    let now = Utc::now();
    let entries: Vec<_> = ActivityRepo::list(&state.store, limit)
        .await
        .into_iter()
        .map(|a| ActivityEntry::new(a, now))
        .collect();
    Ok(Json(entries))
}

/// POST /api/dashboard/activities
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateActivity>,
) -> AppResult<(StatusCode, Json<ActivityEntry>)> {
    if input.action.trim().is_empty() {
        return Err(CoreError::Validation("Activity action is required".into()).into());
    }
    if input.system.trim().is_empty() {
        return Err(CoreError::Validation("Activity system is required".into()).into());
    }
    let activity = ActivityRepo::create(&state.store, &input).await?;
    tracing::debug!(
        activity_id = %activity.id,
        status = activity.status.as_str(),
        user_id = %auth.user_id,
        "Activity recorded"
    );

    Ok((StatusCode::CREATED, Json(ActivityEntry::new(activity, Utc::now()))))
}
