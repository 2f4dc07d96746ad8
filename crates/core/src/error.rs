use crate::types::DbId;

/// Domain error taxonomy shared by services and the API layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream call failed: {0}")]
    Upstream(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
