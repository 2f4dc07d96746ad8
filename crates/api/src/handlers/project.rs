//! Handlers for the `/projects` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storyline_core::error::CoreError;
use storyline_core::types::DbId;
use storyline_db::models::project::{CreateProject, Project, ProjectFull, UpdateProject};
use storyline_db::repositories::{ConnectionRepo, ProjectRepo, SceneRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /projects`.
#[derive(Debug, Deserialize)]
pub struct ListProjectsQuery {
    /// Restrict the listing to one owner.
    pub user_id: Option<DbId>,
}

/// POST /api/v1/projects
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    // The owner registry has no CRUD surface, so the row is ensured here
    // to keep the nullable foreign key satisfied.
    if let Some(user_id) = input.user_id {
        UserRepo::ensure(&state.pool, user_id).await?;
    }
    let project = ProjectRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListProjectsQuery>,
) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool, query.user_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// GET /api/v1/projects/{id}/full
///
/// The project plus its complete scene and connection sets.
pub async fn get_full(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectFull>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let scenes = SceneRepo::list_by_project(&state.pool, id).await?;
    let connections = ConnectionRepo::list_by_project(&state.pool, id).await?;

    Ok(Json(ProjectFull {
        project,
        scenes,
        connections,
    }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
///
/// Cascades to the project's scenes and connections.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
