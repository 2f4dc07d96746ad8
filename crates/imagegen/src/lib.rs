//! AI image generation clients.
//!
//! Wraps the OpenAI images API and the Stability AI v2beta endpoint
//! behind a single [`ImageProvider`] trait, and chains configured
//! providers in order behind [`Generator`].

pub mod error;
pub mod generator;
pub mod openai;
pub mod stability;

pub use error::ImageGenError;
pub use generator::{GeneratedImage, Generator, ImageProvider};
