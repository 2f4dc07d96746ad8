//! Handler for the `/generate-image` endpoint.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use storyline_core::types::DbId;

use crate::error::AppResult;
use crate::generation::generate_and_store;
use crate::state::AppState;

/// Request body for `POST /generate-image`.
#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: String,
    pub project_id: DbId,
}

/// Response body: the URL the client should use for the image.
#[derive(Debug, Serialize)]
pub struct GenerateImageResponse {
    pub image_url: String,
}

/// POST /api/v1/generate-image
///
/// Runs the generate / fetch / persist workflow and returns the stored
/// URL, or the raw provider URL when persistence degraded.
pub async fn generate(
    State(state): State<AppState>,
    Json(input): Json<GenerateImageRequest>,
) -> AppResult<Json<GenerateImageResponse>> {
    tracing::info!(
        project_id = %input.project_id,
        prompt_len = input.prompt.len(),
        "Generating image"
    );

    let image_url = generate_and_store(
        &state.generator,
        state.blob_store.as_ref(),
        input.project_id,
        &input.prompt,
    )
    .await?;

    Ok(Json(GenerateImageResponse { image_url }))
}
