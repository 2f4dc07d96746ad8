pub mod connection;
pub mod generate_image;
pub mod health;
pub mod project;
pub mod scene;
