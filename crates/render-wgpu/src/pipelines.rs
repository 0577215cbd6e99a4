use std::collections::BTreeMap;

use cubeview_assets::{ShaderLibrary, ShaderSource, Vertex};
use cubeview_common::ShadingModel;

use crate::GpuError;

pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

/// One render pipeline per shading model, all sharing one layout.
pub(crate) struct PipelineSet {
    pipelines: BTreeMap<ShadingModel, wgpu::RenderPipeline>,
}

impl PipelineSet {
    /// Compile every program in `library`. A program that fails validation is
    /// replaced by its built-in source, then by the built-in unlit program.
    pub(crate) fn build(
        device: &wgpu::Device,
        layout: &wgpu::PipelineLayout,
        format: wgpu::TextureFormat,
        library: &ShaderLibrary,
    ) -> Result<Self, GpuError> {
        let mut pipelines = BTreeMap::new();

        for model in ShadingModel::ALL {
            let mut last_error = None;
            for source in candidates(library.get(model)) {
                match compile(device, layout, format, &source) {
                    Ok(pipeline) => {
                        if source.model != model {
                            tracing::warn!(%model, fallback = %source.model, "using fallback pipeline");
                        }
                        pipelines.insert(model, pipeline);
                        last_error = None;
                        break;
                    }
                    Err(e) => {
                        tracing::error!("{e}");
                        last_error = Some(e);
                    }
                }
            }
            if let Some(e) = last_error {
                return Err(e);
            }
        }

        tracing::info!(count = pipelines.len(), "render pipelines ready");
        Ok(Self { pipelines })
    }

    pub(crate) fn get(&self, model: ShadingModel) -> Option<&wgpu::RenderPipeline> {
        self.pipelines.get(&model)
    }
}

/// Sources to try, in order, for the program that `source` provides.
fn candidates(source: &ShaderSource) -> Vec<ShaderSource> {
    let mut out = vec![source.clone()];
    if !source.is_embedded() {
        out.push(ShaderSource::embedded(source.model));
    }
    if source.model != ShadingModel::Unlit {
        out.push(ShaderSource::embedded(ShadingModel::Unlit));
    }
    out
}

fn compile(
    device: &wgpu::Device,
    layout: &wgpu::PipelineLayout,
    format: wgpu::TextureFormat,
    source: &ShaderSource,
) -> Result<wgpu::RenderPipeline, GpuError> {
    let label = source.label();
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some(label.as_str()),
        source: wgpu::ShaderSource::Wgsl(source.code.as_str().into()),
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some(label.as_str()),
        layout: Some(layout),
        vertex: wgpu::VertexState {
            module: &module,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<Vertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &wgpu::vertex_attr_array![
                    0 => Float32x3,
                    1 => Float32x3,
                    2 => Float32x2,
                ],
            }],
        },
        fragment: Some(wgpu::FragmentState {
            module: &module,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: Default::default(),
            bias: Default::default(),
        }),
        multisample: Default::default(),
        multiview: None,
        cache: None,
    });

    match pollster::block_on(device.pop_error_scope()) {
        Some(err) => Err(GpuError::Shader {
            label,
            message: err.to_string(),
        }),
        None => {
            tracing::debug!(shader = %label, "pipeline compiled");
            Ok(pipeline)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubeview_assets::SourceOrigin;
    use std::path::PathBuf;

    fn models(sources: &[ShaderSource]) -> Vec<ShadingModel> {
        sources.iter().map(|s| s.model).collect()
    }

    #[test]
    fn embedded_source_falls_back_to_unlit() {
        let chain = candidates(&ShaderSource::embedded(ShadingModel::Phong));
        assert_eq!(models(&chain), vec![ShadingModel::Phong, ShadingModel::Unlit]);
        assert!(chain.iter().all(ShaderSource::is_embedded));
    }

    #[test]
    fn unlit_has_no_further_fallback() {
        let chain = candidates(&ShaderSource::embedded(ShadingModel::Unlit));
        assert_eq!(models(&chain), vec![ShadingModel::Unlit]);
    }

    #[test]
    fn disk_source_tries_builtin_before_unlit() {
        let disk = ShaderSource {
            model: ShadingModel::Lambert,
            code: "not wgsl".into(),
            common: SourceOrigin::Embedded,
            fragment: SourceOrigin::Disk(PathBuf::from("shaders/lambert.wgsl")),
        };
        let chain = candidates(&disk);
        assert_eq!(
            models(&chain),
            vec![ShadingModel::Lambert, ShadingModel::Lambert, ShadingModel::Unlit]
        );
        assert!(!chain[0].is_embedded());
        assert!(chain[1].is_embedded());
    }
}
