//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod connection_repo;
pub mod project_repo;
pub mod scene_repo;
pub mod user_repo;

pub use connection_repo::ConnectionRepo;
pub use project_repo::ProjectRepo;
pub use scene_repo::SceneRepo;
pub use user_repo::UserRepo;
