//! Route definitions for the `/alerts` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::alert;
use crate::state::AppState;

/// Routes mounted at `/alerts`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PATCH  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(alert::list).post(alert::create))
        .route("/{id}", get(alert::get_by_id).patch(alert::update))
}
