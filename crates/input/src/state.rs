use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use cubeview_common::ControlSettings;
use glam::Vec3;

use crate::action::{Action, CameraMotion};

/// Physical keys the viewer binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    C,
    L,
    Space,
    /// Numpad `+` (or `=`): widen the field of view.
    Plus,
    /// Numpad `-` (or `-`): narrow the field of view.
    Minus,
    Escape,
}

/// Error returned when a key name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown key name: {0:?}")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let key = match name.trim().to_ascii_lowercase().as_str() {
            "w" => Key::W,
            "a" => Key::A,
            "s" => Key::S,
            "d" => Key::D,
            "c" => Key::C,
            "l" => Key::L,
            "space" => Key::Space,
            "plus" | "+" => Key::Plus,
            "minus" | "-" => Key::Minus,
            "escape" | "esc" => Key::Escape,
            _ => return Err(KeyParseError(name.to_string())),
        };
        Ok(key)
    }
}

/// What the movement keys currently drive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlMode {
    #[default]
    Camera,
    Light,
}

impl ControlMode {
    pub fn toggled(self) -> Self {
        match self {
            ControlMode::Camera => ControlMode::Light,
            ControlMode::Light => ControlMode::Camera,
        }
    }
}

impl fmt::Display for ControlMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ControlMode::Camera => f.write_str("camera"),
            ControlMode::Light => f.write_str("light"),
        }
    }
}

/// Keyboard/mouse snapshot accumulated between frames.
#[derive(Debug, Default)]
pub struct InputState {
    held: HashSet<Key>,
    mode: ControlMode,
    pending_look: Vec<Action>,
}

const CAMERA_BINDINGS: [(Key, CameraMotion); 4] = [
    (Key::W, CameraMotion::Forward),
    (Key::S, CameraMotion::Backward),
    (Key::A, CameraMotion::Left),
    (Key::D, CameraMotion::Right),
];

const LIGHT_BINDINGS: [(Key, Vec3); 6] = [
    (Key::W, Vec3::NEG_Z),
    (Key::S, Vec3::Z),
    (Key::A, Vec3::NEG_X),
    (Key::D, Vec3::X),
    (Key::Space, Vec3::Y),
    (Key::C, Vec3::NEG_Y),
];

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> ControlMode {
        self.mode
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Record a key press. OS auto-repeat presses of a held key are ignored.
    pub fn key_pressed(&mut self, key: Key) {
        let newly_pressed = self.held.insert(key);
        if newly_pressed && key == Key::L {
            self.mode = self.mode.toggled();
            tracing::info!(mode = %self.mode, "control mode switched");
        }
    }

    pub fn key_released(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Queue a look action from a mouse delta in pixels.
    ///
    /// Screen-space y grows downward, so moving the mouse up pitches up.
    pub fn mouse_motion(&mut self, dx: f32, dy: f32, sensitivity: f32) {
        if dx == 0.0 && dy == 0.0 {
            return;
        }
        self.pending_look.push(Action::Look {
            yaw: dx * sensitivity,
            pitch: -dy * sensitivity,
        });
    }

    /// Drain queued look actions and emit movement for every held key.
    pub fn frame_actions(&mut self, dt: f32, controls: &ControlSettings) -> Vec<Action> {
        let mut actions: Vec<Action> = self.pending_look.drain(..).collect();

        match self.mode {
            ControlMode::Camera => {
                let distance = controls.movement_speed * dt;
                for (key, motion) in CAMERA_BINDINGS {
                    if self.is_held(key) {
                        actions.push(Action::MoveCamera { motion, distance });
                    }
                }
                let zoom = controls.zoom_rate * dt;
                if self.is_held(Key::Plus) {
                    actions.push(Action::Zoom(zoom));
                }
                if self.is_held(Key::Minus) {
                    actions.push(Action::Zoom(-zoom));
                }
            }
            ControlMode::Light => {
                let step = controls.light_speed * dt;
                for (key, direction) in LIGHT_BINDINGS {
                    if self.is_held(key) {
                        actions.push(Action::MoveLight(direction * step));
                    }
                }
            }
        }

        actions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn controls() -> ControlSettings {
        ControlSettings {
            movement_speed: 1.0,
            mouse_sensitivity: 0.1,
            zoom_rate: 60.0,
            fov_min: 10.0,
            fov_max: 120.0,
            light_speed: 2.0,
        }
    }

    #[test]
    fn parses_key_names() {
        assert_eq!("W".parse::<Key>(), Ok(Key::W));
        assert_eq!("space".parse::<Key>(), Ok(Key::Space));
        assert_eq!("+".parse::<Key>(), Ok(Key::Plus));
        assert!("F13".parse::<Key>().is_err());
    }

    #[test]
    fn camera_mode_moves_camera() {
        let mut input = InputState::new();
        input.key_pressed(Key::W);
        input.key_pressed(Key::D);
        let actions = input.frame_actions(0.5, &controls());
        assert_eq!(
            actions,
            vec![
                Action::MoveCamera {
                    motion: CameraMotion::Forward,
                    distance: 0.5,
                },
                Action::MoveCamera {
                    motion: CameraMotion::Right,
                    distance: 0.5,
                },
            ]
        );
    }

    #[test]
    fn space_and_c_do_nothing_in_camera_mode() {
        let mut input = InputState::new();
        input.key_pressed(Key::Space);
        input.key_pressed(Key::C);
        assert!(input.frame_actions(1.0, &controls()).is_empty());
    }

    #[test]
    fn light_mode_moves_light_only() {
        let mut input = InputState::new();
        input.key_pressed(Key::L);
        input.key_released(Key::L);
        assert_eq!(input.mode(), ControlMode::Light);

        input.key_pressed(Key::W);
        input.key_pressed(Key::Space);
        let actions = input.frame_actions(0.5, &controls());
        assert_eq!(
            actions,
            vec![
                Action::MoveLight(Vec3::new(0.0, 0.0, -1.0)),
                Action::MoveLight(Vec3::new(0.0, 1.0, 0.0)),
            ]
        );
        assert!(actions.iter().all(Action::targets_light));
    }

    #[test]
    fn zoom_keys_only_in_camera_mode() {
        let mut input = InputState::new();
        input.key_pressed(Key::Plus);
        assert_eq!(input.frame_actions(0.5, &controls()), vec![Action::Zoom(30.0)]);

        input.key_pressed(Key::L);
        assert!(input.frame_actions(0.5, &controls()).is_empty());
    }

    #[test]
    fn holding_toggle_key_switches_once() {
        let mut input = InputState::new();
        input.key_pressed(Key::L);
        // OS key repeat delivers more presses while held
        input.key_pressed(Key::L);
        input.key_pressed(Key::L);
        assert_eq!(input.mode(), ControlMode::Light);

        input.key_released(Key::L);
        input.key_pressed(Key::L);
        assert_eq!(input.mode(), ControlMode::Camera);
    }

    #[test]
    fn mouse_motion_is_drained_once() {
        let mut input = InputState::new();
        input.mouse_motion(10.0, 20.0, 0.1);
        let actions = input.frame_actions(0.016, &controls());
        assert_eq!(actions.len(), 1);
        match actions[0] {
            Action::Look { yaw, pitch } => {
                assert!((yaw - 1.0).abs() < 1e-6);
                assert!((pitch + 2.0).abs() < 1e-6);
            }
            other => panic!("expected look, got {other:?}"),
        }
        assert!(input.frame_actions(0.016, &controls()).is_empty());
    }

    #[test]
    fn zero_motion_is_ignored() {
        let mut input = InputState::new();
        input.mouse_motion(0.0, 0.0, 0.1);
        assert!(input.frame_actions(0.016, &controls()).is_empty());
    }
}
