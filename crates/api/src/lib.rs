//! Storyline API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! the image-generation workflow) so integration tests and the binary
//! entrypoint can both access them.

pub mod config;
pub mod error;
pub mod generation;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
