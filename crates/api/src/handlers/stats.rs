//! Handler for `/stats`: per-user dashboard counts plus fleet metrics.

use axum::extract::State;
use axum::Json;
use railops_store::models::stats::{DashboardStats, SystemMetrics};
use railops_store::repositories::StatsRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub stats: DashboardStats,
    pub metrics: SystemMetrics,
}

/// GET /api/dashboard/stats
///
/// Recomputed from the store on every call.
pub async fn get_stats(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<StatsResponse>> {
    let stats = StatsRepo::dashboard_stats(&state.store, &auth.user_id).await;
    let metrics = StatsRepo::latest_metrics(&state.store).await;
    Ok(Json(StatsResponse { stats, metrics }))
}
