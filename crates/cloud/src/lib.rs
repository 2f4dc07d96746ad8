//! Blob storage: the [`BlobStore`] trait and its S3 implementation.

pub mod s3;

pub use s3::S3Store;

/// Errors from the blob storage layer.
#[derive(Debug, thiserror::Error)]
pub enum CloudError {
    /// The upload call failed (network, auth, bucket policy, etc.).
    #[error("blob upload failed: {0}")]
    Upload(String),

    /// Required storage configuration is missing or invalid.
    #[error("blob storage misconfigured: {0}")]
    Config(String),
}

/// A destination for generated image bytes.
///
/// Implementations must be safe for concurrent use by independent
/// requests; the API server holds one long-lived instance.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    /// Upload `bytes` under `key` with the given content type and return
    /// a publicly reachable URL.
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, CloudError>;
}
