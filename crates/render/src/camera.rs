use cubeview_input::CameraMotion;
use glam::{Mat4, Vec3};

pub const PITCH_LIMIT: f32 = 89.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
/// Widest usable field-of-view range; beyond it the projection degenerates.
pub const FOV_BOUNDS: (f32, f32) = (1.0, 179.0);

/// First-person camera driven by Euler angles.
///
/// Angles are in degrees. `front`, `right` and `up` are derived from yaw and
/// pitch and are only ever recomputed together, so they stay orthonormal.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    world_up: Vec3,
    front: Vec3,
    right: Vec3,
    up: Vec3,
    yaw: f32,
    pitch: f32,
    fov: f32,
    fov_min: f32,
    fov_max: f32,
}

impl Default for Camera {
    fn default() -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, 3.0),
            world_up: Vec3::Y,
            front: Vec3::NEG_Z,
            right: Vec3::X,
            up: Vec3::Y,
            yaw: -90.0,
            pitch: 0.0,
            fov: 45.0,
            fov_min: 10.0,
            fov_max: 120.0,
        };
        camera.update_vectors();
        camera
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the zoom range, clamping the current field of view into it.
    ///
    /// The bounds may come in either order and are kept inside [`FOV_BOUNDS`].
    /// A NaN bound leaves the existing range in place.
    pub fn with_fov_limits(mut self, min: f32, max: f32) -> Self {
        if min.is_nan() || max.is_nan() {
            tracing::warn!(min, max, "ignoring NaN field of view limits");
            return self;
        }
        let (lo, hi) = FOV_BOUNDS;
        self.fov_min = min.min(max).clamp(lo, hi);
        self.fov_max = min.max(max).clamp(lo, hi);
        self.fov = self.fov.clamp(self.fov_min, self.fov_max);
        self
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Vertical field of view in degrees.
    pub fn fov(&self) -> f32 {
        self.fov
    }

    pub fn fov_limits(&self) -> (f32, f32) {
        (self.fov_min, self.fov_max)
    }

    pub fn front(&self) -> Vec3 {
        self.front
    }

    pub fn right(&self) -> Vec3 {
        self.right
    }

    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// Rotate by yaw/pitch deltas. Pitch stops at ±89° so the view never flips.
    pub fn look(&mut self, yaw_delta: f32, pitch_delta: f32) {
        self.set_orientation(self.yaw + yaw_delta, self.pitch + pitch_delta);
    }

    pub fn set_orientation(&mut self, yaw: f32, pitch: f32) {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.update_vectors();
    }

    pub fn translate(&mut self, motion: CameraMotion, distance: f32) {
        let offset = match motion {
            CameraMotion::Forward => self.front * distance,
            CameraMotion::Backward => -self.front * distance,
            CameraMotion::Left => -self.right * distance,
            CameraMotion::Right => self.right * distance,
        };
        self.position += offset;
    }

    /// Change the field of view, clamped to the configured range.
    pub fn zoom(&mut self, delta: f32) {
        self.fov = (self.fov + delta).clamp(self.fov_min, self.fov_max);
    }

    fn update_vectors(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, self.world_up)
    }

    pub fn projection_matrix(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov.to_radians(), aspect.max(0.01), Z_NEAR, Z_FAR)
    }
}
