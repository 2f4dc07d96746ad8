//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyline_core::types::{DbId, Timestamp};

use crate::models::connection::Connection;
use crate::models::scene::Scene;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub user_id: Option<DbId>,
    pub title: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A project together with its full scene and connection sets.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectFull {
    #[serde(flatten)]
    pub project: Project,
    pub scenes: Vec<Scene>,
    pub connections: Vec<Connection>,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub title: String,
    pub user_id: Option<DbId>,
}

/// DTO for updating an existing project.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: String,
}
