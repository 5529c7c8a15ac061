//! Handlers for the `/alerts` resource.
//!
//! Alerts are global: any authenticated user can list, read, and update them.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railops_core::alert::{validate_alert_fields, AlertStatus};
use railops_core::error::CoreError;
use railops_events::StoreEvent;
use railops_store::models::alert::{Alert, CreateAlert, UpdateAlert};
use railops_store::repositories::AlertRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `GET /alerts`.
#[derive(Debug, Deserialize)]
pub struct AlertQuery {
    pub status: Option<AlertStatus>,
}

/// GET /api/dashboard/alerts
pub async fn list(
    _auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<AlertQuery>,
) -> AppResult<Json<Vec<Alert>>> {
    Ok(Json(AlertRepo::list(&state.store, params.status).await))
}

/// POST /api/dashboard/alerts
///
/// The new alert is always `open`. The acting user receives a notification
/// whose type depends on the severity.
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateAlert>,
) -> AppResult<(StatusCode, Json<Alert>)> {
    validate_alert_fields(&input.title, &input.message, &input.severity, &input.system)?;

    let alert = AlertRepo::create(&state.store, &input).await?;
    tracing::info!(
        alert_id = %alert.id,
        severity = %alert.severity,
        system = %alert.system,
        user_id = %auth.user_id,
        fallback_identity = auth.is_fallback,
        "Alert raised"
    );

    let event = StoreEvent::AlertCreated {
        alert: alert.clone(),
        actor: auth.user_id,
    };
    state.hooks.dispatch(&state.store, &event).await;

    Ok((StatusCode::CREATED, Json(alert)))
}

/// GET /api/dashboard/alerts/{id}
pub async fn get_by_id(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Alert>> {
    let alert = AlertRepo::find_by_id(&state.store, &id)
        .await
        .ok_or_else(|| CoreError::not_found("Alert", &id))?;
    Ok(Json(alert))
}

/// PATCH /api/dashboard/alerts/{id}
///
/// Status changes do not notify anyone.
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateAlert>,
) -> AppResult<Json<Alert>> {
    for (field, value) in [
        ("title", &input.title),
        ("message", &input.message),
        ("severity", &input.severity),
        ("system", &input.system),
    ] {
        if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
            return Err(CoreError::Validation(format!("Alert {field} cannot be empty")).into());
        }
    }

    let alert = AlertRepo::update(&state.store, &id, &input)
        .await
        .ok_or_else(|| CoreError::not_found("Alert", &id))?;
    tracing::info!(alert_id = %id, status = ?alert.status, user_id = %auth.user_id, "Alert updated");

    Ok(Json(alert))
}
