//! Handlers for the `/projects` resource.
//!
//! Projects are private to their owner: every by-id operation returns 404
//! for an unknown id and 403 when the acting user is not the owner.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use railops_core::error::CoreError;
use railops_core::project::{ensure_owner, validate_progress, validate_project_name, ProjectStatus};
use railops_events::StoreEvent;
use railops_store::models::project::{CreateProject, Project, UpdateProject};
use railops_store::repositories::ProjectRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppQuery};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    pub status: Option<ProjectStatus>,
}

/// Load a project and check that `auth` owns it.
async fn find_owned(state: &AppState, auth: &AuthUser, id: &str) -> AppResult<Project> {
    let project = ProjectRepo::find_by_id(&state.store, id)
        .await
        .ok_or_else(|| CoreError::not_found("Project", id))?;
    ensure_owner(&project.owner_id, &auth.user_id)?;
    Ok(project)
}

/// Write an update for a project that already passed [`find_owned`].
///
/// The ownership check and the write take the lock separately, so a
/// concurrent delete can land in between; that surfaces as a 500.
async fn apply_update(state: &AppState, id: &str, input: &UpdateProject) -> AppResult<Project> {
    ProjectRepo::update(&state.store, id, input)
        .await
        .ok_or_else(|| AppError::InternalError(format!("Project {id} vanished during update")))
}

/// Delete counterpart of [`apply_update`].
async fn apply_delete(state: &AppState, id: &str) -> AppResult<()> {
    if ProjectRepo::delete(&state.store, id).await {
        Ok(())
    } else {
        Err(AppError::InternalError(format!(
            "Project {id} vanished during delete"
        )))
    }
}

/// POST /api/dashboard/projects
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    validate_project_name(&input.name)?;

    let project = ProjectRepo::create(&state.store, &auth.user_id, &input).await?;
    tracing::info!(
        project_id = %project.id,
        user_id = %auth.user_id,
        fallback_identity = auth.is_fallback,
        "Project created"
    );

    let event = StoreEvent::ProjectCreated {
        project: project.clone(),
        actor: auth.user_id,
    };
    state.hooks.dispatch(&state.store, &event).await;

    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/dashboard/projects
pub async fn list(
    auth: AuthUser,
    State(state): State<AppState>,
    AppQuery(params): AppQuery<ProjectQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list_for_owner(&state.store, &auth.user_id, params.status).await;
    Ok(Json(projects))
}

/// GET /api/dashboard/projects/{id}
pub async fn get_by_id(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Project>> {
    let project = find_owned(&state, &auth, &id).await?;
    Ok(Json(project))
}

/// PATCH /api/dashboard/projects/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
    AppJson(input): AppJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    find_owned(&state, &auth, &id).await?;

    if let Some(name) = &input.name {
        validate_project_name(name)?;
    }
    if let Some(progress) = input.progress {
        validate_progress(progress)?;
    }

    let project = apply_update(&state, &id, &input).await?;
    tracing::info!(project_id = %id, user_id = %auth.user_id, "Project updated");

    Ok(Json(project))
}

/// DELETE /api/dashboard/projects/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<SuccessResponse>> {
    find_owned(&state, &auth, &id).await?;

    apply_delete(&state, &id).await?;
    tracing::info!(project_id = %id, user_id = %auth.user_id, "Project deleted");

    Ok(Json(SuccessResponse::ok()))
}
