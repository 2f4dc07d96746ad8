use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use storyline_cloud::CloudError;
use storyline_core::error::CoreError;
use storyline_imagegen::ImageGenError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storyline_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// An image generation error from `storyline_imagegen`.
    #[error("Image generation error: {0}")]
    ImageGen(#[from] ImageGenError),

    /// A blob storage error from `storyline_cloud`.
    #[error("Blob storage error: {0}")]
    Cloud(#[from] CloudError),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Config(msg) => {
                    tracing::error!(error = %msg, "Configuration error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        msg.clone(),
                    )
                }
                CoreError::Upstream(msg) => {
                    (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", msg.clone())
                }
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "Internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "INTERNAL_ERROR",
                        "An internal error occurred".to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- Image generation errors ---
            AppError::ImageGen(err) => classify_imagegen_error(err),

            // --- Blob storage errors ---
            AppError::Cloud(err) => match err {
                CloudError::Config(msg) => {
                    tracing::error!(error = %msg, "Blob storage misconfigured");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "CONFIG_ERROR",
                        msg.clone(),
                    )
                }
                CloudError::Upload(msg) => (
                    StatusCode::BAD_GATEWAY,
                    "UPSTREAM_ERROR",
                    format!("blob upload failed: {msg}"),
                ),
            },

            // --- HTTP-specific errors ---
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Foreign key violations (Postgres 23503) map to 400: the request
///   referenced an entity id that does not exist.
/// - Unique constraint violations (Postgres 23505) map to 409.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
            Some("23503") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::BAD_REQUEST,
                    "VALIDATION_ERROR",
                    format!("Referenced entity does not exist (constraint: {constraint})"),
                )
            }
            Some("23505") => {
                let constraint = db_err.constraint().unwrap_or("unknown");
                (
                    StatusCode::CONFLICT,
                    "CONFLICT",
                    format!("Duplicate value violates unique constraint: {constraint}"),
                )
            }
            _ => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        },
        other => {
            tracing::error!(error = %other, "Database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                "An internal error occurred".to_string(),
            )
        }
    }
}

/// Classify an image generation error.
///
/// A missing provider credential is a configuration problem (500);
/// provider/API failures and timeouts are upstream problems (502).
fn classify_imagegen_error(err: &ImageGenError) -> (StatusCode, &'static str, String) {
    match err {
        ImageGenError::NoProviderConfigured => {
            tracing::error!("No image generation provider configured");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "CONFIG_ERROR",
                err.to_string(),
            )
        }
        other => (
            StatusCode::BAD_GATEWAY,
            "UPSTREAM_ERROR",
            other.to_string(),
        ),
    }
}
