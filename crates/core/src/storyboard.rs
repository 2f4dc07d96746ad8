//! Storyboard canvas rules: connection validation, default scene
//! geometry, and blob object key construction.

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// Canvas defaults
// ---------------------------------------------------------------------------

/// Default x coordinate for a newly placed scene.
pub const DEFAULT_SCENE_X: f64 = 0.0;
/// Default y coordinate for a newly placed scene.
pub const DEFAULT_SCENE_Y: f64 = 0.0;
/// Default width of a scene card on the canvas.
pub const DEFAULT_SCENE_WIDTH: f64 = 300.0;
/// Default height of a scene card on the canvas.
pub const DEFAULT_SCENE_HEIGHT: f64 = 200.0;

// ---------------------------------------------------------------------------
// Connection rules
// ---------------------------------------------------------------------------

/// Validate the endpoints of a new connection.
///
/// The only structural rule is that a scene may not connect to itself.
/// Duplicate edges and multi-hop cycles are allowed; endpoint existence
/// and project membership are left to the storage layer's foreign keys.
pub fn validate_connection_endpoints(
    from_scene_id: DbId,
    to_scene_id: DbId,
) -> Result<(), CoreError> {
    if from_scene_id == to_scene_id {
        return Err(CoreError::Validation(
            "cannot connect a scene to itself".to_string(),
        ));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Blob object keys
// ---------------------------------------------------------------------------

/// Content type for every generated storyboard image.
pub const IMAGE_CONTENT_TYPE: &str = "image/png";

/// Build the blob storage key for a generated image:
/// `{project_id}/{image_id}.png`.
pub fn image_object_key(project_id: DbId, image_id: DbId) -> String {
    format!("{project_id}/{image_id}.png")
}
