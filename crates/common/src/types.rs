use serde::{Deserialize, Serialize};
use std::fmt;

/// Per-object lighting model. Each variant owns one shader program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShadingModel {
    /// Ambient + diffuse + specular.
    Phong,
    /// Ambient + diffuse.
    Diffuse,
    /// Ambient + specular highlight only.
    Specular,
    /// Pure Lambertian term, no ambient.
    Lambert,
    /// Texture and color only.
    Unlit,
    /// Flat light color, used for the light cube itself.
    LightSource,
}

impl ShadingModel {
    /// Every model, in shader-library order.
    pub const ALL: [ShadingModel; 6] = [
        ShadingModel::Phong,
        ShadingModel::Diffuse,
        ShadingModel::Specular,
        ShadingModel::Lambert,
        ShadingModel::Unlit,
        ShadingModel::LightSource,
    ];

    /// File stem of the fragment source for this model (`<stem>.wgsl`).
    pub fn file_stem(self) -> &'static str {
        match self {
            Self::Phong => "phong",
            Self::Diffuse => "diffuse",
            Self::Specular => "specular",
            Self::Lambert => "lambert",
            Self::Unlit => "no_lighting",
            Self::LightSource => "light_shader",
        }
    }

    /// Whether the model reads the light position at all.
    pub fn is_lit(self) -> bool {
        !matches!(self, Self::Unlit | Self::LightSource)
    }
}

impl fmt::Display for ShadingModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Phong => "phong",
            Self::Diffuse => "diffuse",
            Self::Specular => "specular",
            Self::Lambert => "lambert",
            Self::Unlit => "unlit",
            Self::LightSource => "light",
        };
        f.write_str(name)
    }
}
