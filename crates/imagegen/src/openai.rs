//! OpenAI images API provider (DALL-E 3).

use serde::Deserialize;

use crate::error::ImageGenError;
use crate::generator::{GeneratedImage, ImageProvider};

const PROVIDER_NAME: &str = "openai";

/// Client for the OpenAI `images/generations` endpoint.
pub struct OpenAiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    data: Vec<ImageDatum>,
}

#[derive(Debug, Deserialize)]
struct ImageDatum {
    url: Option<String>,
}

impl OpenAiProvider {
    /// Create a provider against `base_url` (normally
    /// `https://api.openai.com/v1`; overridable for tests).
    pub fn new(client: reqwest::Client, base_url: String, api_key: String) -> Self {
        Self {
            client,
            base_url,
            api_key,
        }
    }
}

#[async_trait::async_trait]
impl ImageProvider for OpenAiProvider {
    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }

    /// Generate one 1024x1024 standard-quality image and return its
    /// short-lived download URL.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        let body = serde_json::json!({
            "model": "dall-e-3",
            "prompt": prompt,
            "size": "1024x1024",
            "quality": "standard",
            "n": 1,
        });

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&body)
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

        let parsed: ImagesResponse = response.json().await?;
        let url = parsed
            .data
            .into_iter()
            .next()
            .and_then(|d| d.url)
            .ok_or(ImageGenError::UnexpectedResponse {
                provider: PROVIDER_NAME,
                detail: "response contained no image url".to_string(),
            })?;

        Ok(GeneratedImage::Url(url))
    }
}
