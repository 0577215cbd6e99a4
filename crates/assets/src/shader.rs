//! WGSL source library, one program per shading model.
//!
//! Every program is `common.wgsl` (uniforms, bindings, `vs_main`) followed by
//! the model's fragment file (`fs_main`). Sources are embedded at build time
//! and may be overridden file by file from a directory.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use cubeview_common::ShadingModel;

use crate::AssetError;

pub const COMMON_FILE: &str = "common.wgsl";

const EMBEDDED_COMMON: &str = include_str!("../shaders/common.wgsl");

fn embedded_fragment(model: ShadingModel) -> &'static str {
    match model {
        ShadingModel::Phong => include_str!("../shaders/phong.wgsl"),
        ShadingModel::Diffuse => include_str!("../shaders/diffuse.wgsl"),
        ShadingModel::Specular => include_str!("../shaders/specular.wgsl"),
        ShadingModel::Lambert => include_str!("../shaders/lambert.wgsl"),
        ShadingModel::Unlit => include_str!("../shaders/no_lighting.wgsl"),
        ShadingModel::LightSource => include_str!("../shaders/light_shader.wgsl"),
    }
}

/// Where a piece of shader source came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOrigin {
    Embedded,
    Disk(PathBuf),
}

impl SourceOrigin {
    pub fn is_embedded(&self) -> bool {
        matches!(self, SourceOrigin::Embedded)
    }
}

/// Complete WGSL module for one shading model.
#[derive(Debug, Clone)]
pub struct ShaderSource {
    pub model: ShadingModel,
    pub code: String,
    pub common: SourceOrigin,
    pub fragment: SourceOrigin,
}

impl ShaderSource {
    /// The built-in program for `model`.
    pub fn embedded(model: ShadingModel) -> Self {
        Self {
            model,
            code: join(EMBEDDED_COMMON, embedded_fragment(model)),
            common: SourceOrigin::Embedded,
            fragment: SourceOrigin::Embedded,
        }
    }

    pub fn is_embedded(&self) -> bool {
        self.common.is_embedded() && self.fragment.is_embedded()
    }

    /// Label used for GPU objects and log lines.
    pub fn label(&self) -> String {
        format!("{}_shader", self.model.file_stem())
    }
}

fn join(common: &str, fragment: &str) -> String {
    format!("{common}\n{fragment}")
}

/// Read a shader file, mapping absence to [`AssetError::MissingShader`].
pub fn read_source(path: &Path) -> Result<String, AssetError> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => AssetError::MissingShader(path.to_path_buf()),
        _ => AssetError::Io(e),
    })
}

/// All shader programs the viewer needs, resolved once at startup.
#[derive(Debug, Clone)]
pub struct ShaderLibrary {
    sources: BTreeMap<ShadingModel, ShaderSource>,
}

impl ShaderLibrary {
    pub fn embedded() -> Self {
        let sources = ShadingModel::ALL
            .into_iter()
            .map(|model| (model, ShaderSource::embedded(model)))
            .collect();
        Self { sources }
    }

    /// Resolve sources from `dir`, falling back to the embedded copy for any
    /// file that is missing or unreadable.
    pub fn load(dir: Option<&Path>) -> Self {
        let Some(dir) = dir else {
            return Self::embedded();
        };
        if !dir.is_dir() {
            tracing::warn!(
                "shader directory {} does not exist; using embedded shaders",
                dir.display()
            );
            return Self::embedded();
        }

        let (common, common_origin) = resolve(dir.join(COMMON_FILE), EMBEDDED_COMMON);
        let sources = ShadingModel::ALL
            .into_iter()
            .map(|model| {
                let path = dir.join(format!("{}.wgsl", model.file_stem()));
                let (fragment, fragment_origin) = resolve(path, embedded_fragment(model));
                let source = ShaderSource {
                    model,
                    code: join(&common, &fragment),
                    common: common_origin.clone(),
                    fragment: fragment_origin,
                };
                (model, source)
            })
            .collect();
        Self { sources }
    }

    pub fn get(&self, model: ShadingModel) -> &ShaderSource {
        // every model is inserted by both constructors
        &self.sources[&model]
    }

    pub fn iter(&self) -> impl Iterator<Item = &ShaderSource> {
        self.sources.values()
    }

    /// Number of programs whose source was at least partly read from disk.
    pub fn disk_count(&self) -> usize {
        self.iter().filter(|s| !s.is_embedded()).count()
    }
}

impl Default for ShaderLibrary {
    fn default() -> Self {
        Self::embedded()
    }
}

fn resolve(path: PathBuf, embedded: &str) -> (String, SourceOrigin) {
    match read_source(&path) {
        Ok(code) => {
            tracing::debug!("loaded shader source {}", path.display());
            (code, SourceOrigin::Disk(path))
        }
        Err(AssetError::MissingShader(_)) => {
            tracing::info!("{} not found; using embedded source", path.display());
            (embedded.to_string(), SourceOrigin::Embedded)
        }
        Err(e) => {
            tracing::warn!("failed to read {}: {e}; using embedded source", path.display());
            (embedded.to_string(), SourceOrigin::Embedded)
        }
    }
}
