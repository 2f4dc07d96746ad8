//! Shared test harness: router construction and HTTP helpers.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use storyline_cloud::{BlobStore, CloudError};
use storyline_imagegen::{GeneratedImage, Generator, ImageGenError, ImageProvider};
use tower::ServiceExt;

use storyline_api::config::ServerConfig;
use storyline_api::router::build_app_router;
use storyline_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// In-memory blob store that accepts every upload.
pub struct StaticStore;

#[async_trait::async_trait]
impl BlobStore for StaticStore {
    async fn put(
        &self,
        key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, CloudError> {
        Ok(format!("https://blobs.test/{key}"))
    }
}

/// Blob store that rejects every upload.
pub struct FailingStore;

#[async_trait::async_trait]
impl BlobStore for FailingStore {
    async fn put(
        &self,
        _key: &str,
        _bytes: Vec<u8>,
        _content_type: &str,
    ) -> Result<String, CloudError> {
        Err(CloudError::Upload("bucket unavailable".to_string()))
    }
}

/// Provider that always yields the same URL.
pub struct FixedUrlProvider(pub String);

#[async_trait::async_trait]
impl ImageProvider for FixedUrlProvider {
    fn name(&self) -> &'static str {
        "fixed-url"
    }

    async fn generate(&self, _prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        Ok(GeneratedImage::Url(self.0.clone()))
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool, an empty provider chain, and an
/// accept-everything blob store.
///
/// Mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack that production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Generator::with_providers(vec![]), Arc::new(StaticStore))
}

/// Build the application router with explicit image generation doubles.
pub fn build_test_app_with(
    pool: PgPool,
    generator: Generator,
    blob_store: Arc<dyn BlobStore>,
) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        generator: Arc::new(generator),
        blob_store,
    };
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

async fn send_json(app: Router, method: &str, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "POST", uri, body).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PUT", uri, body).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, "PATCH", uri, body).await
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
