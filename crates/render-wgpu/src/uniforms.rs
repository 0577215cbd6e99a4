use bytemuck::{Pod, Zeroable};
use cubeview_render::{DrawCall, FramePlan};

/// Per-frame data at `@group(0)`. Layout matches `FrameUniform` in `common.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct FrameUniform {
    view: [[f32; 4]; 4],
    projection: [[f32; 4]; 4],
    view_position: [f32; 4],
    light_position: [f32; 4],
    light_color: [f32; 4],
}

impl FrameUniform {
    pub(crate) fn from_plan(plan: &FramePlan) -> Self {
        Self {
            view: plan.view.to_cols_array_2d(),
            projection: plan.projection.to_cols_array_2d(),
            view_position: plan.view_position.extend(1.0).to_array(),
            light_position: plan.light_position.extend(1.0).to_array(),
            light_color: plan.light_color.extend(1.0).to_array(),
        }
    }
}

/// Per-draw data at `@group(1)`. Layout matches `ObjectUniform` in `common.wgsl`.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub(crate) struct ObjectUniform {
    model: [[f32; 4]; 4],
    mvp: [[f32; 4]; 4],
    color: [f32; 4],
}

impl ObjectUniform {
    pub(crate) fn from_draw(draw: &DrawCall) -> Self {
        Self {
            model: draw.model.to_cols_array_2d(),
            mvp: draw.mvp.to_cols_array_2d(),
            color: draw.color.to_array(),
        }
    }
}
