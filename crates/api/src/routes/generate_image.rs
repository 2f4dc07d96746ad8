//! Route definition for the image generation endpoint.

use axum::routing::post;
use axum::Router;

use crate::handlers::generate_image;
use crate::state::AppState;

/// `POST /generate-image`.
pub fn router() -> Router<AppState> {
    Router::new().route("/generate-image", post(generate_image::generate))
}
