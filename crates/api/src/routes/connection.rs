//! Route definitions for the `/connections` resource.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::connection;
use crate::state::AppState;

/// Routes mounted at `/connections`.
///
/// ```text
/// GET    /       -> list_by_project (?project_id=)
/// POST   /       -> create
/// PATCH  /{id}   -> update
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(connection::list_by_project).post(connection::create),
        )
        .route(
            "/{id}",
            patch(connection::update).delete(connection::delete),
        )
}
