//! Handler for `/version`, polled by clients to detect new deployments.

use axum::extract::State;
use axum::http::header::{CACHE_CONTROL, EXPIRES, PRAGMA};
use axum::response::IntoResponse;
use axum::Json;
use railops_core::types::Timestamp;
use serde::Serialize;

use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionResponse {
    pub version: &'static str,
    pub build_id: String,
    pub started_at: Timestamp,
}

/// GET /api/dashboard/version
pub async fn get_version(_auth: AuthUser, State(state): State<AppState>) -> impl IntoResponse {
    let body = VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
        build_id: state.config.build_id.clone(),
        started_at: state.started_at,
    };

    (
        [
            (CACHE_CONTROL, "no-store, no-cache, must-revalidate"),
            (PRAGMA, "no-cache"),
            (EXPIRES, "0"),
        ],
        Json(body),
    )
}
