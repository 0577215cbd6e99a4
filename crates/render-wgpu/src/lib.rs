//! wgpu render backend for the cube viewer.
//!
//! Draws a [`cubeview_render::FramePlan`]: one textured cube per draw, each
//! with the pipeline for its shading model.
//!
//! # Invariants
//! - Shader programs are compiled once, in [`WgpuRenderer::new`].
//! - A program that fails to compile never aborts startup while the built-in
//!   unlit program still compiles.
//! - Renderer never mutates camera or scene.

mod gpu;
mod pipelines;
mod texture;
mod uniforms;

pub use gpu::WgpuRenderer;

/// Errors from the GPU backend.
#[derive(Debug, thiserror::Error)]
pub enum GpuError {
    #[error("shader `{label}` failed validation: {message}")]
    Shader { label: String, message: String },
}
