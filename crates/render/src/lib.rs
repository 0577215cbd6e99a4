//! Renderer-agnostic viewer core.
//!
//! Owns the camera and scene, turns input actions into state changes, and
//! builds a [`FramePlan`] each frame that any backend can draw.
//!
//! # Invariants
//! - Renderers only read a plan; they never mutate camera or scene.
//! - The light position used for shading is always the light transform's translation.
//! - Camera pitch stays within ±89°, field of view within the configured range.

mod camera;
mod frame;
mod renderer;
mod scene;
mod state;

pub use camera::{Camera, FOV_BOUNDS, PITCH_LIMIT, Z_FAR, Z_NEAR};
pub use frame::{DrawCall, FramePlan};
pub use renderer::{DebugTextRenderer, Renderer};
pub use scene::{CubeInstance, Light, Scene};
pub use state::ViewerState;

pub fn crate_info() -> &'static str {
    concat!("cubeview-render v", env!("CARGO_PKG_VERSION"))
}
