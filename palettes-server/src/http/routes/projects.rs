//! Project endpoints

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, patch},
    Json, Router,
};

use super::{ensure_exists, CreatedResponse};
use crate::db::Table;
use crate::http::error::ApiError;
use crate::http::extractors::{JsonBody, ProjectQuery, ValidId};
use crate::http::server::AppState;
use crate::models::{CreateProjectRequest, Palette, Project, RenameRequest};

/// GET /projects - list projects, optionally filtered by exact `name`
async fn list_projects(
    State(state): State<AppState>,
    ProjectQuery(filter): ProjectQuery,
) -> Result<Json<Vec<Project>>, ApiError> {
    let projects = state.store().list_projects(&filter).await?;
    if projects.is_empty() {
        return Err(ApiError::NotFound { resource: "projects" });
    }

    Ok(Json(projects))
}

/// GET /projects/{id}/palettes - list a project's palettes
async fn list_palettes(
    State(state): State<AppState>,
    ValidId(project_id): ValidId,
) -> Result<Json<Vec<Palette>>, ApiError> {
    let palettes = state.store().list_palettes(project_id).await?;
    if palettes.is_empty() {
        return Err(ApiError::NotFound { resource: "palettes" });
    }

    Ok(Json(palettes))
}

/// POST /projects - create a project
async fn create_project(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateProjectRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let name = req.validate()?;
    let id = state.store().insert_project(&name).await?;

    tracing::info!(project_id = id, "project created");
    Ok((StatusCode::CREATED, Json(CreatedResponse { id })))
}

/// PATCH /projects/{id} - rename a project
async fn rename_project(
    State(state): State<AppState>,
    ValidId(id): ValidId,
    JsonBody(req): JsonBody<RenameRequest>,
) -> Result<StatusCode, ApiError> {
    let name = req.validate()?;
    ensure_exists(&state, Table::Projects, id).await?;
    state.store().rename_project(id, &name).await?;

    Ok(StatusCode::ACCEPTED)
}

/// DELETE /projects/{id} - delete a project and its palettes
async fn delete_project(
    State(state): State<AppState>,
    ValidId(id): ValidId,
) -> Result<StatusCode, ApiError> {
    ensure_exists(&state, Table::Projects, id).await?;
    state.store().delete_project(id).await?;

    tracing::info!(project_id = id, "project deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// Project routes
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/projects", get(list_projects).post(create_project))
        .route("/projects/{id}", patch(rename_project).delete(delete_project))
        .route("/projects/{id}/palettes", get(list_palettes))
}
