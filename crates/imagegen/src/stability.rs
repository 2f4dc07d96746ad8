//! Stability AI v2beta stable-image provider.
//!
//! Unlike OpenAI, Stability returns the PNG bytes inline in the response
//! body rather than a fetchable URL.

use crate::error::ImageGenError;
use crate::generator::{GeneratedImage, ImageProvider};

const PROVIDER_NAME: &str = "stability";

/// Client for the Stability `stable-image/generate/core` endpoint.
pub struct StabilityProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StabilityProvider {
    /// Create a provider against `base_url` (normally
    /// `https://api.stability.ai`; overridable for tests).
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for StabilityProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Generate one square PNG and return its bytes.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        let form = reqwest::multipart::Form::new()
            .text("prompt", prompt.to_string())
            .text("output_format", "png")
            .text("aspect_ratio", "1:1");

        let response = self
            .client
            .post(format!(
                "{}/v2beta/stable-image/generate/core",
                self.base_url
            ))
            .bearer_auth(&self.api_key)
            .header(reqwest::header::ACCEPT, "image/*")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageGenError::ApiError {
                provider: PROVIDER_NAME,
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?.to_vec();
        if bytes.is_empty() {
            return Err(ImageGenError::UnexpectedResponse {
                provider: PROVIDER_NAME,
                detail: "response body was empty".to_string(),
            });
        }

        Ok(GeneratedImage::Png(bytes))
    }
}
