/// Errors from the image generation layer.
#[derive(Debug, thiserror::Error)]
pub enum ImageGenError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(reqwest::Error),

    /// The request did not complete within the configured deadline.
    #[error("Upstream request timed out: {0}")]
    Timeout(reqwest::Error),

    /// The provider returned a non-2xx status code.
    #[error("{provider} API error ({status}): {body}")]
    ApiError {
        provider: &'static str,
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// The provider returned a 2xx response missing the expected payload.
    #[error("{provider} returned an unexpected response: {detail}")]
    UnexpectedResponse {
        provider: &'static str,
        detail: String,
    },

    /// No image generation provider credential is configured.
    #[error("no image generation provider configured; set OPENAI_API_KEY or STABILITY_API_KEY")]
    NoProviderConfigured,

    /// Every configured provider failed; holds the last provider error.
    #[error("all image generation providers failed; last error: {0}")]
    AllProvidersFailed(String),
}

impl From<reqwest::Error> for ImageGenError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ImageGenError::Timeout(err)
        } else {
            ImageGenError::Request(err)
        }
    }
}
