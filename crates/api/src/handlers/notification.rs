//! Handlers for the `/notifications` resource.
//!
//! All endpoints act on the authenticated user's own notifications; another
//! user's notification id is indistinguishable from an unknown one (404).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railops_core::error::CoreError;
use railops_core::notification::validate_notification_fields;
use railops_store::models::notification::{CreateNotification, Notification};
use railops_store::repositories::NotificationRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::{SuccessCountResponse, SuccessResponse};
use crate::state::AppState;

/// Query parameters for `GET /notifications`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationQuery {
    /// If `true`, return only unread notifications. Defaults to `false`.
    pub unread_only: Option<bool>,
}

/// Body for `PATCH /notifications/{id}`.
#[derive(Debug, Deserialize)]
pub struct MarkReadRequest {
    pub read: bool,
}

/// GET /api/dashboard/notifications
///
/// Newest first.
pub async fn list_notifications(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<NotificationQuery>,
) -> AppResult<Json<Vec<Notification>>> {
    let unread_only = params.unread_only.unwrap_or(false);
    let notifications =
        NotificationRepo::list_for_user(&state.store, &auth.user_id, unread_only).await;
    Ok(Json(notifications))
}

/// POST /api/dashboard/notifications
///
/// Creates a notification addressed to the authenticated user.
pub async fn create_notification(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateNotification>,
) -> AppResult<(StatusCode, Json<Notification>)> {
    validate_notification_fields(&input.title, &input.message)?;

    let notification = NotificationRepo::create(&state.store, &auth.user_id, &input).await?;
    tracing::debug!(notification_id = %notification.id, user_id = %auth.user_id, "Notification created");

    Ok((StatusCode::CREATED, Json(notification)))
}

/// PATCH /api/dashboard/notifications/{id}
///
/// Only `{ "read": true }` is accepted; notifications cannot be marked
/// unread.
pub async fn mark_read(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<MarkReadRequest>,
) -> AppResult<Json<SuccessResponse>> {
    if !input.read {
        return Err(AppError::BadRequest(
            "Notifications can only be marked as read".into(),
        ));
    }

    if !NotificationRepo::mark_read(&state.store, &id, &auth.user_id).await {
        return Err(CoreError::not_found("Notification", &id).into());
    }

    Ok(Json(SuccessResponse::ok()))
}

/// DELETE /api/dashboard/notifications/{id}
pub async fn delete_notification(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    if !NotificationRepo::delete(&state.store, &id, &auth.user_id).await {
        return Err(CoreError::not_found("Notification", &id).into());
    }
    Ok(Json(SuccessResponse::ok()))
}

/// POST /api/dashboard/notifications/read-all
///
/// Returns the number of notifications that were marked.
pub async fn mark_all_read(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<SuccessCountResponse>> {
    let count = NotificationRepo::mark_all_read(&state.store, &auth.user_id).await;
    tracing::debug!(user_id = %auth.user_id, count, "Marked all notifications read");

    Ok(Json(SuccessCountResponse {
        success: true,
        count,
    }))
}
