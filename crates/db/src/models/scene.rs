//! Scene entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use storyline_core::types::{DbId, Timestamp};

/// A row from the `scenes` table: one storyboard node on the canvas.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Scene {
    pub id: DbId,
    pub project_id: DbId,
    pub prompt_text: String,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    // -- Canvas geometry --
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub created_at: Timestamp,
}

/// DTO for creating a new scene.
///
/// Geometry fields default server-side (x=0, y=0, width=300, height=200)
/// when omitted.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateScene {
    pub project_id: DbId,
    pub prompt_text: String,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// DTO for updating an existing scene. All fields are optional; only
/// supplied fields overwrite the row (0 is a valid supplied value).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateScene {
    pub prompt_text: Option<String>,
    pub caption: Option<String>,
    pub image_url: Option<String>,
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}
