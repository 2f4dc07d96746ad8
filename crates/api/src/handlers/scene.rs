//! Handlers for the `/scenes` resource.
//!
//! Listing is scoped by the `project_id` query parameter, matching how
//! the canvas loads one project at a time.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storyline_core::error::CoreError;
use storyline_core::types::DbId;
use storyline_db::models::scene::{CreateScene, Scene, UpdateScene};
use storyline_db::repositories::SceneRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /scenes`.
#[derive(Debug, Deserialize)]
pub struct ListScenesQuery {
    pub project_id: DbId,
}

/// POST /api/v1/scenes
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateScene>,
) -> AppResult<(StatusCode, Json<Scene>)> {
    let scene = SceneRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(scene)))
}

/// GET /api/v1/scenes?project_id=
pub async fn list_by_project(
    State(state): State<AppState>,
    Query(query): Query<ListScenesQuery>,
) -> AppResult<Json<Vec<Scene>>> {
    let scenes = SceneRepo::list_by_project(&state.pool, query.project_id).await?;
    Ok(Json(scenes))
}

/// GET /api/v1/scenes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Scene>> {
    let scene = SceneRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id,
        }))?;
    Ok(Json(scene))
}

/// PATCH /api/v1/scenes/{id}
///
/// Partial update: only fields present in the body overwrite the row.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateScene>,
) -> AppResult<Json<Scene>> {
    let scene = SceneRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id,
        }))?;
    Ok(Json(scene))
}

/// DELETE /api/v1/scenes/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = SceneRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Scene",
            id,
        }))
    }
}
