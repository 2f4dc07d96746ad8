//! Repository for the `scenes` table.

use sqlx::PgPool;
use storyline_core::types::DbId;
use uuid::Uuid;

use crate::models::scene::{CreateScene, Scene, UpdateScene};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, prompt_text, caption, image_url, x, y, width, height, created_at";

/// Provides CRUD operations for scenes.
pub struct SceneRepo;

impl SceneRepo {
    /// Insert a new scene, returning the created row.
    ///
    /// Omitted geometry fields fall back to the canvas defaults
    /// (x=0, y=0, width=300, height=200).
    pub async fn create(pool: &PgPool, input: &CreateScene) -> Result<Scene, sqlx::Error> {
        let query = format!(
            "INSERT INTO scenes
                (id, project_id, prompt_text, caption, image_url, x, y, width, height)
             VALUES ($1, $2, $3, $4, $5,
                     COALESCE($6, 0), COALESCE($7, 0), COALESCE($8, 300), COALESCE($9, 200))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(Uuid::new_v4())
            .bind(input.project_id)
            .bind(&input.prompt_text)
            .bind(&input.caption)
            .bind(&input.image_url)
            .bind(input.x)
            .bind(input.y)
            .bind(input.width)
            .bind(input.height)
            .fetch_one(pool)
            .await
    }

    /// Find a scene by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM scenes WHERE id = $1");
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all scenes for a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Scene>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM scenes
             WHERE project_id = $1
             ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a scene. Only non-`None` fields in `input` are applied;
    /// numeric fields accept 0 as a supplied value.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateScene,
    ) -> Result<Option<Scene>, sqlx::Error> {
        let query = format!(
            "UPDATE scenes SET
                prompt_text = COALESCE($2, prompt_text),
                caption = COALESCE($3, caption),
                image_url = COALESCE($4, image_url),
                x = COALESCE($5, x),
                y = COALESCE($6, y),
                width = COALESCE($7, width),
                height = COALESCE($8, height)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Scene>(&query)
            .bind(id)
            .bind(&input.prompt_text)
            .bind(&input.caption)
            .bind(&input.image_url)
            .bind(input.x)
            .bind(input.y)
            .bind(input.width)
            .bind(input.height)
            .fetch_optional(pool)
            .await
    }

    /// Delete a scene by ID. Connections referencing it from either end
    /// are removed by the storage layer's cascade.
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM scenes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
