//! Route definitions for the `/scenes` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::scene;
use crate::state::AppState;

/// Routes mounted at `/scenes`.
///
/// ```text
/// GET    /       -> list_by_project (?project_id=)
/// POST   /       -> create
/// GET    /{id}   -> get_by_id
/// PATCH  /{id}   -> update (partial)
/// DELETE /{id}   -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(scene::list_by_project).post(scene::create))
        .route(
            "/{id}",
            get(scene::get_by_id)
                .patch(scene::update)
                .delete(scene::delete),
        )
}
