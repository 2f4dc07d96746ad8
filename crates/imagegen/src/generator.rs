//! Provider trait, provider chain, and image download.

use std::time::Duration;

use crate::error::ImageGenError;
use crate::openai::OpenAiProvider;
use crate::stability::StabilityProvider;

/// Default timeout for provider calls and image downloads.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 60;

/// Output of a generation call.
///
/// OpenAI returns a short-lived fetchable URL; Stability returns the PNG
/// bytes inline.
#[derive(Debug, Clone)]
pub enum GeneratedImage {
    /// A fetchable URL to the generated image.
    Url(String),
    /// Raw PNG bytes returned inline by the provider.
    Png(Vec<u8>),
}

/// A single image generation backend.
#[async_trait::async_trait]
pub trait ImageProvider: Send + Sync {
    /// Provider name used in logs and error messages.
    fn name(&self) -> &'static str;

    /// Generate one image for the prompt.
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError>;
}

/// Ordered chain of configured providers sharing one HTTP client.
pub struct Generator {
    client: reqwest::Client,
    providers: Vec<Box<dyn ImageProvider>>,
}

impl Generator {
    /// Build the provider chain from the environment.
    ///
    /// Providers are added in priority order: OpenAI if `OPENAI_API_KEY`
    /// is set, then Stability if `STABILITY_API_KEY` is set. The chain
    /// may be empty; [`Generator::generate`] then fails with
    /// [`ImageGenError::NoProviderConfigured`].
    pub fn from_env() -> Self {
        let timeout_secs: u64 = std::env::var("IMAGE_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        let mut providers: Vec<Box<dyn ImageProvider>> = Vec::new();

        if let Ok(key) = std::env::var("OPENAI_API_KEY") {
            if !key.is_empty() {
                let base_url = std::env::var("OPENAI_BASE_URL")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string());
                providers.push(Box::new(OpenAiProvider::new(client.clone(), base_url, key)));
            }
        }

        if let Ok(key) = std::env::var("STABILITY_API_KEY") {
            if !key.is_empty() {
                let base_url = std::env::var("STABILITY_BASE_URL")
                    .unwrap_or_else(|_| "https://api.stability.ai".to_string());
                providers.push(Box::new(StabilityProvider::new(
                    client.clone(),
                    base_url,
                    key,
                )));
            }
        }

        Self { client, providers }
    }

    /// Build a chain with explicit providers (used by tests).
    pub fn with_providers(providers: Vec<Box<dyn ImageProvider>>) -> Self {
        Self {
            client: reqwest::Client::new(),
            providers,
        }
    }

    /// Names of the configured providers, in priority order.
    pub fn provider_names(&self) -> Vec<&'static str> {
        self.providers.iter().map(|p| p.name()).collect()
    }

    /// Generate an image by trying each configured provider in order.
    ///
    /// A provider failure is logged and the next provider is tried.
    /// Fails with [`ImageGenError::NoProviderConfigured`] when the chain
    /// is empty and [`ImageGenError::AllProvidersFailed`] when every
    /// provider errored.
    pub async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        if self.providers.is_empty() {
            return Err(ImageGenError::NoProviderConfigured);
        }

        let mut last_error = None;
        for provider in &self.providers {
            match provider.generate(prompt).await {
                Ok(image) => {
                    tracing::info!(provider = provider.name(), "Image generated");
                    return Ok(image);
                }
                Err(err) => {
                    tracing::warn!(
                        provider = provider.name(),
                        error = %err,
                        "Image provider failed, trying next"
                    );
                    last_error = Some(err);
                }
            }
        }

        Err(ImageGenError::AllProvidersFailed(
            last_error
                .map(|e| e.to_string())
                .unwrap_or_else(|| "unknown".to_string()),
        ))
    }

    /// Download image bytes from a provider-returned URL.
    pub async fn download_image(&self, url: &str) -> Result<Vec<u8>, ImageGenError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageGenError::ApiError {
                provider: "image download",
                status: status.as_u16(),
                body,
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    struct StaticProvider {
        result: Result<&'static str, &'static str>,
    }

    #[async_trait::async_trait]
    impl ImageProvider for StaticProvider {
        fn name(&self) -> &'static str {
            "static"
        }

        async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenError> {
            match self.result {
                Ok(url) => Ok(GeneratedImage::Url(url.to_string())),
                Err(detail) => Err(ImageGenError::UnexpectedResponse {
                    provider: "static",
                    detail: detail.to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn empty_chain_is_a_config_error() {
        let generator = Generator::with_providers(vec![]);
        let err = generator.generate("a red barn").await.unwrap_err();
        assert_matches!(err, ImageGenError::NoProviderConfigured);
    }

    #[tokio::test]
    async fn falls_through_to_next_provider() {
        let generator = Generator::with_providers(vec![
            Box::new(StaticProvider {
                result: Err("boom"),
            }),
            Box::new(StaticProvider {
                result: Ok("https://img.example/u.png"),
            }),
        ]);
        let image = generator.generate("a red barn").await.unwrap();
        assert_matches!(image, GeneratedImage::Url(url) if url == "https://img.example/u.png");
    }

    #[tokio::test]
    async fn reports_last_error_when_all_fail() {
        let generator = Generator::with_providers(vec![Box::new(StaticProvider {
            result: Err("boom"),
        })]);
        let err = generator.generate("a red barn").await.unwrap_err();
        assert_matches!(err, ImageGenError::AllProvidersFailed(msg) if msg.contains("boom"));
    }
}
