use glam::Vec3;

/// Direction of a camera translation, relative to where the camera looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraMotion {
    Forward,
    Backward,
    Left,
    Right,
}

/// A high-level action produced from one frame of input.
///
/// The viewer state consumes actions, never raw input events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Rotate the camera by yaw/pitch deltas, in degrees.
    Look { yaw: f32, pitch: f32 },
    /// Translate the camera along its own axes.
    MoveCamera { motion: CameraMotion, distance: f32 },
    /// Change the field of view by a delta, in degrees.
    Zoom(f32),
    /// Translate the light in world space.
    MoveLight(Vec3),
}

impl Action {
    /// True for actions that act on the light rather than the camera.
    pub fn targets_light(&self) -> bool {
        matches!(self, Action::MoveLight(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_move_light_targets_light() {
        assert!(Action::MoveLight(Vec3::X).targets_light());
        assert!(!Action::Zoom(1.0).targets_light());
        assert!(
            !Action::MoveCamera {
                motion: CameraMotion::Left,
                distance: 0.1,
            }
            .targets_light()
        );
        assert!(!Action::Look { yaw: 1.0, pitch: 0.0 }.targets_light());
    }
}
