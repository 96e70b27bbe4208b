//! Handlers for the `/projects` resource.
//!
//! Pure CRUD delegation: request validation happens here at the boundary,
//! every decision beyond that belongs to the store or the pipelines.

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::de::DeserializeOwned;
use validator::Validate;
use voxreel_core::error::CoreError;
use voxreel_core::types::ProjectId;
use voxreel_db::models::project::{CreateProject, Project, UpdateProject};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a JSON request body, turning any malformed payload into a 400.
///
/// The stock `Json` extractor answers 422 for type-level mismatches; the
/// documented contract is 400 for every malformed creation/update payload,
/// so parsing happens here at the boundary instead.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body)
        .map_err(|e| AppError::Core(CoreError::Validation(format!("Invalid project data: {e}"))))
}

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<(StatusCode, Json<Project>)> {
    let input: CreateProject = parse_body(&body)?;
    input.validate()?;
    let project = state.store.create(input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = state.store.list().await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
) -> AppResult<Json<Project>> {
    let project = state
        .store
        .get(id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<ProjectId>,
    body: Bytes,
) -> AppResult<Json<Project>> {
    let input: UpdateProject = parse_body(&body)?;
    let project = state
        .store
        .update(id, input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<ProjectId>) -> AppResult<StatusCode> {
    let deleted = state.store.delete(id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
