//! Connection entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyline_core::types::{DbId, Timestamp};

/// A row from the `connections` table: a directed, optionally labeled
/// edge between two scenes in the same project.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Connection {
    pub id: DbId,
    pub project_id: DbId,
    pub from_scene_id: DbId,
    pub to_scene_id: DbId,
    pub label: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new connection.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateConnection {
    pub project_id: DbId,
    pub from_scene_id: DbId,
    pub to_scene_id: DbId,
    pub label: Option<String>,
}

/// DTO for updating an existing connection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateConnection {
    pub label: Option<String>,
}
