//! Input handling: raw key and mouse events in, viewer actions out.
//!
//! # Invariants
//! - The camera and the light are never driven by the same frame's movement keys.
//! - The mode toggle fires once per key press, not once per frame held.

pub mod action;
pub mod state;

pub use action::{Action, CameraMotion};
pub use state::{ControlMode, InputState, Key, KeyParseError};
