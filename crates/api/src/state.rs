use std::sync::Arc;

use storyline_cloud::BlobStore;
use storyline_imagegen::Generator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// All external clients are constructed once at startup and injected here;
/// there is no module-level global state.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: storyline_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// AI image provider chain.
    pub generator: Arc<Generator>,
    /// Blob storage for generated images.
    pub blob_store: Arc<dyn BlobStore>,
}
