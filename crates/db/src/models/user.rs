//! User entity model.
//!
//! Users are a minimal owner registry for project scoping; there is no
//! user CRUD surface.

use serde::Serialize;
use sqlx::FromRow;
use storyline_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub created_at: Timestamp,
}
