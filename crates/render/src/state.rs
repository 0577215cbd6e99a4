use cubeview_common::ControlSettings;
use cubeview_input::Action;

use crate::camera::Camera;
use crate::frame::FramePlan;
use crate::scene::Scene;

/// Mutable viewer state: the camera and the scene it looks at.
///
/// Owned by the application; there is no global camera.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerState {
    pub camera: Camera,
    pub scene: Scene,
}

impl Default for ViewerState {
    fn default() -> Self {
        Self::new(&ControlSettings::default())
    }
}

impl ViewerState {
    pub fn new(controls: &ControlSettings) -> Self {
        Self {
            camera: Camera::default().with_fov_limits(controls.fov_min, controls.fov_max),
            scene: Scene::demo(),
        }
    }

    pub fn apply(&mut self, action: &Action) {
        match *action {
            Action::Look { yaw, pitch } => self.camera.look(yaw, pitch),
            Action::MoveCamera { motion, distance } => self.camera.translate(motion, distance),
            Action::Zoom(delta) => self.camera.zoom(delta),
            Action::MoveLight(delta) => {
                self.scene.light.translate(delta);
                tracing::trace!(position = ?self.scene.light.position(), "light moved");
            }
        }
    }

    pub fn apply_all<'a>(&mut self, actions: impl IntoIterator<Item = &'a Action>) {
        for action in actions {
            self.apply(action);
        }
    }

    pub fn frame_plan(&self, aspect: f32) -> FramePlan {
        FramePlan::build(&self.scene, &self.camera, aspect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_input::{CameraMotion, InputState, Key};
    use glam::Vec3;

    #[test]
    fn light_actions_leave_camera_alone() {
        let mut state = ViewerState::default();
        let camera_before = state.camera.clone();
        state.apply(&Action::MoveLight(Vec3::new(0.0, 1.0, 0.0)));
        assert_eq!(state.camera, camera_before);
        assert_eq!(state.scene.light.position(), Vec3::new(0.0, 3.0, -6.0));
    }

    #[test]
    fn camera_actions_leave_light_alone() {
        let mut state = ViewerState::default();
        let light_before = state.scene.light.clone();
        state.apply_all(&[
            Action::MoveCamera {
                motion: CameraMotion::Forward,
                distance: 1.0,
            },
            Action::Look {
                yaw: 10.0,
                pitch: 5.0,
            },
            Action::Zoom(-5.0),
        ]);
        assert_eq!(state.scene.light, light_before);
        assert_eq!(state.camera.fov(), 40.0);
        assert_eq!(state.camera.pitch(), 5.0);
    }

    #[test]
    fn light_mode_input_moves_rendered_light() {
        let controls = ControlSettings::default();
        let mut state = ViewerState::new(&controls);
        let mut input = InputState::new();
        input.key_pressed(Key::L);
        input.key_pressed(Key::D);

        for _ in 0..10 {
            let actions = input.frame_actions(0.1, &controls);
            state.apply_all(&actions);
        }

        let plan = state.frame_plan(1.0);
        let expected_x = controls.light_speed * 0.1 * 10.0;
        assert!((plan.light_position.x - expected_x).abs() < 1e-4);
        assert_eq!(plan.view_position, Vec3::new(0.0, 0.0, 3.0));
    }

    #[test]
    fn fov_limits_come_from_settings() {
        let controls = ControlSettings {
            fov_min: 30.0,
            fov_max: 60.0,
            ..ControlSettings::default()
        };
        let mut state = ViewerState::new(&controls);
        state.apply(&Action::Zoom(100.0));
        assert_eq!(state.camera.fov(), 60.0);
    }

    #[test]
    fn inverted_fov_settings_do_not_panic() {
        let controls = ControlSettings {
            fov_min: 90.0,
            fov_max: 30.0,
            ..ControlSettings::default()
        };
        let mut state = ViewerState::new(&controls);
        assert_eq!(state.camera.fov_limits(), (30.0, 90.0));
        state.apply(&Action::Zoom(-100.0));
        assert_eq!(state.camera.fov(), 30.0);
    }
}
