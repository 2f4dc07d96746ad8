pub mod connection;
pub mod project;
pub mod scene;
pub mod user;
