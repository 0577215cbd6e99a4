//! Shared types for the cubeview viewer.
//!
//! Holds the vocabulary every other crate agrees on: which shading models
//! exist and how the viewer is configured.

mod config;
mod types;

pub use config::{ConfigError, ControlSettings, ViewerConfig, WindowSettings};
pub use types::ShadingModel;
