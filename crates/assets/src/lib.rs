//! Built-in assets for the viewer.
//!
//! The viewer has exactly one mesh (a unit cube), at most one texture, and a
//! fixed set of shader programs. Everything here is resolved once at startup;
//! the render loop never touches the filesystem.

mod mesh;
pub mod shader;
mod texture;

use std::path::PathBuf;

pub use mesh::{Mesh, Vertex};
pub use shader::{ShaderLibrary, ShaderSource, SourceOrigin};
pub use texture::TextureData;

/// Errors from asset operations.
#[derive(Debug, thiserror::Error)]
pub enum AssetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),
    #[error("texture has zero size")]
    EmptyTexture,
    #[error("shader source not found: {}", .0.display())]
    MissingShader(PathBuf),
}
