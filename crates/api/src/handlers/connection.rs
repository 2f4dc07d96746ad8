//! Handlers for the `/connections` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use storyline_core::error::CoreError;
use storyline_core::storyboard::validate_connection_endpoints;
use storyline_core::types::DbId;
use storyline_db::models::connection::{Connection, CreateConnection, UpdateConnection};
use storyline_db::repositories::ConnectionRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Query parameters for `GET /connections`.
#[derive(Debug, Deserialize)]
pub struct ListConnectionsQuery {
    pub project_id: DbId,
}

/// POST /api/v1/connections
///
/// Rejects self-loops before any row is written; endpoint existence is
/// enforced by the storage layer's foreign keys.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateConnection>,
) -> AppResult<(StatusCode, Json<Connection>)> {
    validate_connection_endpoints(input.from_scene_id, input.to_scene_id)?;
    let connection = ConnectionRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(connection)))
}

/// GET /api/v1/connections?project_id=
pub async fn list_by_project(
    State(state): State<AppState>,
    Query(query): Query<ListConnectionsQuery>,
) -> AppResult<Json<Vec<Connection>>> {
    let connections = ConnectionRepo::list_by_project(&state.pool, query.project_id).await?;
    Ok(Json(connections))
}

/// PATCH /api/v1/connections/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateConnection>,
) -> AppResult<Json<Connection>> {
    let connection = ConnectionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Connection",
            id,
        }))?;
    Ok(Json(connection))
}

/// DELETE /api/v1/connections/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ConnectionRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Connection",
            id,
        }))
    }
}
