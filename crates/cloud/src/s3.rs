//! S3 implementation of [`BlobStore`].
//!
//! Objects are written without per-object ACLs; public reads come from
//! the bucket policy. Public URLs use the virtual-hosted style
//! `https://{bucket}.s3.{region}.amazonaws.com/{key}`.

use aws_sdk_s3::primitives::ByteStream;

use crate::{BlobStore, CloudError};

/// Default bucket when `S3_BUCKET_NAME` is unset.
const DEFAULT_BUCKET: &str = "storyboard-images";
/// Default region when `AWS_REGION` is unset.
const DEFAULT_REGION: &str = "us-east-1";

/// Long-lived S3 client plus bucket/region for URL construction.
pub struct S3Store {
    client: aws_sdk_s3::Client,
    bucket: String,
    region: String,
}

impl S3Store {
    /// Build a store from the standard AWS environment (credential
    /// chain, `AWS_REGION`, `S3_BUCKET_NAME`).
    pub async fn from_env() -> Self {
        let config = aws_config::load_from_env().await;
        let bucket =
            std::env::var("S3_BUCKET_NAME").unwrap_or_else(|_| DEFAULT_BUCKET.to_string());
        let region = config
            .region()
            .map(|r| r.to_string())
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Self {
            client: aws_sdk_s3::Client::new(&config),
            bucket,
            region,
        }
    }

    /// Public URL for an uploaded object.
    fn public_url(&self, key: &str) -> String {
        format!(
            "https://{}.s3.{}.amazonaws.com/{}",
            self.bucket, self.region, key
        )
    }
}

#[async_trait::async_trait]
impl BlobStore for S3Store {
    async fn put(
        &self,
        key: &str,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, CloudError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(bytes))
            .content_type(content_type)
            .send()
            .await
            .map_err(|err| {
                tracing::error!(bucket = %self.bucket, key, error = %err, "S3 upload failed");
                CloudError::Upload(err.to_string())
            })?;

        Ok(self.public_url(key))
    }
}
