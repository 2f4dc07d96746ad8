pub mod connection;
pub mod generate_image;
pub mod health;
pub mod project;
pub mod scene;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /projects                      list, create
/// /projects/{id}                 get, update, delete
/// /projects/{id}/full            project + scenes + connections
///
/// /scenes?project_id=            list by project
/// /scenes                        create
/// /scenes/{id}                   get, patch, delete
///
/// /connections?project_id=       list by project
/// /connections                   create
/// /connections/{id}              patch, delete
///
/// /generate-image                generate + persist (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/scenes", scene::router())
        .nest("/connections", connection::router())
        .merge(generate_image::router())
}
