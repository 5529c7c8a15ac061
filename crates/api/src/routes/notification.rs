//! Route definitions for the `/notifications` resource.
//!
//! All endpoints require authentication.

use axum::routing::{get, patch, post};
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// Routes mounted at `/notifications`.
///
/// ```text
/// GET    /            -> list_notifications
/// POST   /            -> create_notification
/// POST   /read-all    -> mark_all_read
/// PATCH  /{id}        -> mark_read
/// DELETE /{id}        -> delete_notification
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(notification::list_notifications).post(notification::create_notification),
        )
        .route("/read-all", post(notification::mark_all_read))
        .route(
            "/{id}",
            patch(notification::mark_read).delete(notification::delete_notification),
        )
}
