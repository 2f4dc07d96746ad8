//! Repository for the `connections` table.

use sqlx::PgPool;
use storyline_core::types::DbId;
use uuid::Uuid;

use crate::models::connection::{Connection, CreateConnection, UpdateConnection};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, from_scene_id, to_scene_id, label, created_at";

/// Provides CRUD operations for connections.
pub struct ConnectionRepo;

impl ConnectionRepo {
    /// Insert a new connection, returning the created row.
    ///
    /// Endpoint validation (no self-loop) happens in the service layer
    /// before this is called; endpoint existence is enforced by foreign
    /// keys.
    pub async fn create(
        pool: &PgPool,
        input: &CreateConnection,
    ) -> Result<Connection, sqlx::Error> {
        let query = format!(
            "INSERT INTO connections (id, project_id, from_scene_id, to_scene_id, label)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(Uuid::new_v4())
            .bind(input.project_id)
            .bind(input.from_scene_id)
            .bind(input.to_scene_id)
            .bind(&input.label)
            .fetch_one(pool)
            .await
    }

    /// Find a connection by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Connection>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM connections WHERE id = $1");
        sqlx::query_as::<_, Connection>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all connections for a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Connection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM connections
             WHERE project_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a connection's label if supplied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateConnection,
    ) -> Result<Option<Connection>, sqlx::Error> {
        let query = format!(
            "UPDATE connections SET label = COALESCE($2, label)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Connection>(&query)
            .bind(id)
            .bind(&input.label)
            .fetch_optional(pool)
            .await
    }

    /// Delete a connection by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM connections WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
