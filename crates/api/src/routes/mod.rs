pub mod activity;
pub mod alert;
pub mod health;
pub mod notification;
pub mod project;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/dashboard` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /activities                                      list, create
///
/// /alerts                                          list (?status=), create
/// /alerts/{id}                                     get, update (PATCH)
///
/// /notifications                                   list (?unreadOnly=), create
/// /notifications/read-all                          mark all read (POST)
/// /notifications/{id}                              mark read (PATCH), delete
///
/// /projects                                        list (?status=), create
/// /projects/{id}                                   get, update (PATCH), delete
///
/// /stats                                           dashboard stats + metrics
/// /version                                         build metadata (no-cache)
/// ```
pub fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .nest("/activities", activity::router())
        .nest("/alerts", alert::router())
        .nest("/notifications", notification::router())
        .nest("/projects", project::router())
        .route("/stats", get(handlers::stats::get_stats))
        .route("/version", get(handlers::version::get_version))
}
