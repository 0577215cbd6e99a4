use cubeview_common::ShadingModel;
use glam::{Mat4, Vec3, Vec4};

/// Point light placed by a full transform. The light cube is drawn with this
/// transform; the shading position is read back from its translation.
#[derive(Debug, Clone, PartialEq)]
pub struct Light {
    transform: Mat4,
    pub color: Vec3,
}

impl Light {
    pub fn new(transform: Mat4, color: Vec3) -> Self {
        Self { transform, color }
    }

    pub fn at(position: Vec3) -> Self {
        Self::new(Mat4::from_translation(position), Vec3::ONE)
    }

    pub fn transform(&self) -> Mat4 {
        self.transform
    }

    /// World-space position, taken from the transform's translation column.
    pub fn position(&self) -> Vec3 {
        self.transform.w_axis.truncate()
    }

    /// Move the light in world space.
    pub fn translate(&mut self, delta: Vec3) {
        self.transform = Mat4::from_translation(delta) * self.transform;
    }
}

/// One cube in the scene, with the shading model used to draw it.
#[derive(Debug, Clone, PartialEq)]
pub struct CubeInstance {
    pub label: String,
    pub position: Vec3,
    pub color: Vec4,
    pub shading: ShadingModel,
}

impl CubeInstance {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
    }
}

/// Everything the viewer draws: the cubes and the light.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub cubes: Vec<CubeInstance>,
    pub light: Light,
}

impl Default for Scene {
    fn default() -> Self {
        Self::demo()
    }
}

impl Scene {
    /// Five cubes in a row at z = -5, one per shading model, with the light
    /// above and behind them.
    pub fn demo() -> Self {
        let layout = [
            (-4.0, Vec4::new(1.0, 0.0, 0.0, 1.0), ShadingModel::Phong),
            (-2.0, Vec4::new(0.0, 1.0, 0.0, 1.0), ShadingModel::Diffuse),
            (0.0, Vec4::new(0.0, 0.0, 1.0, 1.0), ShadingModel::Specular),
            (2.0, Vec4::new(1.0, 1.0, 0.0, 1.0), ShadingModel::Lambert),
            (4.0, Vec4::new(1.0, 0.0, 1.0, 1.0), ShadingModel::Unlit),
        ];
        let cubes = layout
            .into_iter()
            .map(|(x, color, shading)| CubeInstance {
                label: format!("{shading} cube"),
                position: Vec3::new(x, 0.0, -5.0),
                color,
                shading,
            })
            .collect();

        Self {
            cubes,
            light: Light::at(Vec3::new(0.0, 2.0, -6.0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_position_comes_from_transform() {
        let light = Light::at(Vec3::new(0.0, 2.0, -6.0));
        assert_eq!(light.position(), Vec3::new(0.0, 2.0, -6.0));

        let rotated = Light::new(
            Mat4::from_rotation_translation(
                glam::Quat::from_rotation_y(1.0),
                Vec3::new(3.0, 1.0, 0.0),
            ),
            Vec3::ONE,
        );
        assert!(rotated.position().abs_diff_eq(Vec3::new(3.0, 1.0, 0.0), 1e-6));
    }

    #[test]
    fn translating_light_moves_position() {
        let mut light = Light::at(Vec3::new(0.0, 2.0, -6.0));
        light.translate(Vec3::new(0.5, -1.0, 0.0));
        assert_eq!(light.position(), Vec3::new(0.5, 1.0, -6.0));
    }

    #[test]
    fn demo_scene_has_one_cube_per_surface_model() {
        let scene = Scene::demo();
        let models: Vec<_> = scene.cubes.iter().map(|c| c.shading).collect();
        assert_eq!(
            models,
            vec![
                ShadingModel::Phong,
                ShadingModel::Diffuse,
                ShadingModel::Specular,
                ShadingModel::Lambert,
                ShadingModel::Unlit,
            ]
        );
        assert!(scene.cubes.iter().all(|c| c.position.z == -5.0));
        assert_eq!(scene.cubes[0].color, Vec4::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(scene.cubes[4].position, Vec3::new(4.0, 0.0, -5.0));
        assert_eq!(scene.light.position(), Vec3::new(0.0, 2.0, -6.0));
        assert_eq!(scene.light.color, Vec3::ONE);
    }
}
