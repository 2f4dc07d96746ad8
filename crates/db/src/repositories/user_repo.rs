//! Repository for the `users` table.

use sqlx::PgPool;
use storyline_core::types::DbId;

use crate::models::user::User;

/// Provides owner-registry operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert the user row if it does not already exist.
    ///
    /// Called before creating an owned project so the `projects.user_id`
    /// foreign key never rejects a create.
    pub async fn ensure(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO users (id) VALUES ($1) ON CONFLICT (id) DO NOTHING")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }

    /// Find a user by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        sqlx::query_as::<_, User>("SELECT id, created_at FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
