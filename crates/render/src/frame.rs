use cubeview_common::ShadingModel;
use glam::{Mat4, Vec3, Vec4};

use crate::camera::Camera;
use crate::scene::Scene;

/// One draw of the cube mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCall {
    pub label: String,
    pub shading: ShadingModel,
    pub model: Mat4,
    /// `projection * view * model`.
    pub mvp: Mat4,
    pub color: Vec4,
}

impl DrawCall {
    pub fn world_position(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Everything a backend needs to draw one frame. Built fresh every frame
/// from the scene and camera; backends only read it.
#[derive(Debug, Clone, PartialEq)]
pub struct FramePlan {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_position: Vec3,
    pub fov_degrees: f32,
    pub light_position: Vec3,
    pub light_color: Vec3,
    /// Light cube first, then the scene cubes in order.
    pub draws: Vec<DrawCall>,
}

impl FramePlan {
    pub fn build(scene: &Scene, camera: &Camera, aspect: f32) -> Self {
        let view = camera.view_matrix();
        let projection = camera.projection_matrix(aspect);
        let view_projection = projection * view;

        let light = &scene.light;
        let mut draws = Vec::with_capacity(scene.cubes.len() + 1);
        draws.push(DrawCall {
            label: "light".into(),
            shading: ShadingModel::LightSource,
            model: light.transform(),
            mvp: view_projection * light.transform(),
            color: light.color.extend(1.0),
        });
        draws.extend(scene.cubes.iter().map(|cube| {
            let model = cube.model_matrix();
            DrawCall {
                label: cube.label.clone(),
                shading: cube.shading,
                model,
                mvp: view_projection * model,
                color: cube.color,
            }
        }));

        Self {
            view,
            projection,
            view_position: camera.position,
            fov_degrees: camera.fov(),
            light_position: light.position(),
            light_color: light.color,
            draws,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_plan() -> FramePlan {
        FramePlan::build(&Scene::demo(), &Camera::default(), 800.0 / 600.0)
    }

    #[test]
    fn light_cube_is_drawn_first() {
        let plan = demo_plan();
        assert_eq!(plan.draws.len(), 6);
        assert_eq!(plan.draws[0].shading, ShadingModel::LightSource);
        assert_eq!(plan.draws[0].world_position(), plan.light_position);
        assert_eq!(plan.draws[1].shading, ShadingModel::Phong);
        assert_eq!(plan.draws[5].shading, ShadingModel::Unlit);
    }

    #[test]
    fn light_position_tracks_light_transform() {
        let mut scene = Scene::demo();
        scene.light.translate(Vec3::new(1.0, 0.0, 0.0));
        let plan = FramePlan::build(&scene, &Camera::default(), 1.0);
        assert_eq!(plan.light_position, Vec3::new(1.0, 2.0, -6.0));
        assert_eq!(plan.draws[0].world_position(), Vec3::new(1.0, 2.0, -6.0));
    }

    #[test]
    fn mvp_is_projection_view_model() {
        let plan = demo_plan();
        for draw in &plan.draws {
            let expected = plan.projection * plan.view * draw.model;
            assert!(draw.mvp.abs_diff_eq(expected, 1e-5), "{}", draw.label);
        }
    }

    #[test]
    fn cubes_in_front_of_default_camera_are_visible() {
        let plan = demo_plan();
        for draw in &plan.draws[1..] {
            let ndc = draw.mvp.project_point3(Vec3::ZERO);
            assert!(ndc.z > 0.0 && ndc.z < 1.0, "{} depth {}", draw.label, ndc.z);
            assert!(ndc.x.abs() <= 1.0, "{} off screen at x={}", draw.label, ndc.x);
        }
    }

    #[test]
    fn plan_records_camera_state() {
        let mut camera = Camera::default();
        camera.zoom(15.0);
        let plan = FramePlan::build(&Scene::demo(), &camera, 1.0);
        assert_eq!(plan.view_position, camera.position);
        assert_eq!(plan.fov_degrees, 60.0);
    }
}
