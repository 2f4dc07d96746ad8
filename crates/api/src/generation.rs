//! The image-generation workflow: generate, fetch, persist.
//!
//! Failure handling is tolerant: a failed download or blob upload
//! degrades to returning the provider's raw URL instead of erroring.
//! The one exception is a provider that returns inline bytes -- with no
//! URL to fall back to, a failed upload is fatal.

use storyline_cloud::BlobStore;
use storyline_core::storyboard::{image_object_key, IMAGE_CONTENT_TYPE};
use storyline_core::types::DbId;
use storyline_imagegen::{GeneratedImage, Generator};
use uuid::Uuid;

use crate::error::AppResult;

/// Run the three-stage workflow for one prompt and return the image URL
/// to hand back to the client.
///
/// 1. **Generate** via the provider chain (fatal on failure).
/// 2. **Fetch** the image bytes from the provider URL (non-fatal: falls
///    back to the provider URL). Skipped for inline-byte providers.
/// 3. **Persist** to blob storage under `{project_id}/{uuid}.png`
///    (non-fatal when a provider URL exists to fall back to).
pub async fn generate_and_store(
    generator: &Generator,
    blob_store: &dyn BlobStore,
    project_id: DbId,
    prompt: &str,
) -> AppResult<String> {
    let image = generator.generate(prompt).await?;

    match image {
        GeneratedImage::Url(provider_url) => {
            let bytes = match generator.download_image(&provider_url).await {
                Ok(bytes) => bytes,
                Err(err) => {
                    tracing::warn!(
                        error = %err,
                        "Image download failed; returning provider URL unpersisted"
                    );
                    return Ok(provider_url);
                }
            };

            let key = image_object_key(project_id, Uuid::new_v4());
            match blob_store.put(&key, bytes, IMAGE_CONTENT_TYPE).await {
                Ok(stored_url) => Ok(stored_url),
                Err(err) => {
                    tracing::warn!(
                        key,
                        error = %err,
                        "Blob upload failed; returning provider URL unpersisted"
                    );
                    Ok(provider_url)
                }
            }
        }
        GeneratedImage::Png(bytes) => {
            // Inline bytes have no provider URL to fall back to.
            let key = image_object_key(project_id, Uuid::new_v4());
            let stored_url = blob_store.put(&key, bytes, IMAGE_CONTENT_TYPE).await?;
            Ok(stored_url)
        }
    }
}
