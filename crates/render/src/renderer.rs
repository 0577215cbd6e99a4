use std::fmt::Write;

use crate::frame::FramePlan;

/// Renderer-agnostic interface. All backends consume a [`FramePlan`].
///
/// A renderer reads the plan and produces output; it never feeds back into
/// the camera or scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, plan: &FramePlan) -> Self::Output;
}

/// Renders a frame plan as human-readable text.
///
/// Used by the CLI and by tests that need to inspect a frame without a GPU.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, plan: &FramePlan) -> String {
        let mut out = String::new();
        let eye = plan.view_position;
        let light = plan.light_position;
        let color = plan.light_color;
        // writing into a String cannot fail
        let _ = writeln!(out, "=== Frame ({} draws) ===", plan.draws.len());
        let _ = writeln!(
            out,
            "Camera: eye=({:.2}, {:.2}, {:.2}) fov={:.1}",
            eye.x, eye.y, eye.z, plan.fov_degrees
        );
        let _ = writeln!(
            out,
            "Light: pos=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2})",
            light.x, light.y, light.z, color.x, color.y, color.z
        );

        for draw in &plan.draws {
            let p = draw.world_position();
            let c = draw.color;
            let _ = writeln!(
                out,
                "  [{}] shader={} pos=({:.2}, {:.2}, {:.2}) color=({:.2}, {:.2}, {:.2}, {:.2})",
                draw.label, draw.shading, p.x, p.y, p.z, c.x, c.y, c.z, c.w
            );
        }

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Camera, Scene};

    #[test]
    fn debug_renderer_lists_every_draw() {
        let plan = FramePlan::build(&Scene::demo(), &Camera::default(), 4.0 / 3.0);
        let output = DebugTextRenderer::new().render(&plan);

        assert!(output.contains("=== Frame (6 draws) ==="));
        assert!(output.contains("Camera: eye=(0.00, 0.00, 3.00) fov=45.0"));
        assert!(output.contains("Light: pos=(0.00, 2.00, -6.00)"));
        assert!(output.contains("[light] shader=light pos=(0.00, 2.00, -6.00)"));
        assert!(output.contains("[phong cube] shader=phong pos=(-4.00, 0.00, -5.00)"));
        assert!(output.contains("[unlit cube] shader=unlit pos=(4.00, 0.00, -5.00)"));
    }

    #[test]
    fn empty_scene_still_draws_light() {
        let mut scene = Scene::demo();
        scene.cubes.clear();
        let plan = FramePlan::build(&scene, &Camera::default(), 1.0);
        let output = DebugTextRenderer::new().render(&plan);
        assert!(output.contains("(1 draws)"));
        assert!(output.contains("[light]"));
    }
}
