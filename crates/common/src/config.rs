//! Viewer configuration.
//!
//! Loaded from an optional JSON file. Every field has a default, so an empty
//! object (`{}`) is a valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from loading or saving a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid field of view range: need 0 < min ({min}) < max ({max}) < 180")]
    InvalidFovRange { min: f32, max: f32 },
    #[error("{field} must be a positive number, got {value}")]
    NonPositive { field: &'static str, value: f32 },
    #[error("window size must be non-zero, got {width}x{height}")]
    InvalidWindowSize { width: u32, height: u32 },
}

/// Window creation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "Virtual Camera with Light".into(),
            width: 800,
            height: 600,
        }
    }
}

/// Camera and light control tuning. Speeds are per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlSettings {
    /// Camera translation, world units per second.
    pub movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of mouse motion.
    pub mouse_sensitivity: f32,
    /// Field-of-view change, degrees per second.
    pub zoom_rate: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    /// Light translation, world units per second.
    pub light_speed: f32,
}

impl Default for ControlSettings {
    fn default() -> Self {
        Self {
            movement_speed: 6.0,
            mouse_sensitivity: 0.1,
            zoom_rate: 60.0,
            fov_min: 10.0,
            fov_max: 120.0,
            light_speed: 6.0,
        }
    }
}

/// Top-level viewer configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    pub window: WindowSettings,
    pub controls: ControlSettings,
    /// Directory holding `common.wgsl` and per-model shader files.
    /// Embedded sources are used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shader_dir: Option<PathBuf>,
    /// Image applied to every lit cube. A white texture is used when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub texture: Option<PathBuf>,
}

impl ViewerConfig {
    /// Read and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config: Self = serde_json::from_reader(std::fs::File::open(path)?)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded viewer config");
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        serde_json::to_writer_pretty(std::fs::File::create(path.as_ref())?, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let controls = &self.controls;
        let ordered = 0.0 < controls.fov_min
            && controls.fov_min < controls.fov_max
            && controls.fov_max < 180.0;
        if !ordered {
            return Err(ConfigError::InvalidFovRange {
                min: controls.fov_min,
                max: controls.fov_max,
            });
        }
        for (field, value) in [
            ("movement_speed", controls.movement_speed),
            ("mouse_sensitivity", controls.mouse_sensitivity),
            ("zoom_rate", controls.zoom_rate),
            ("light_speed", controls.light_speed),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::NonPositive { field, value });
            }
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::InvalidWindowSize {
                width: self.window.width,
                height: self.window.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_window_constants() {
        let config = ViewerConfig::default();
        assert_eq!(config.window.title, "Virtual Camera with Light");
        assert_eq!((config.window.width, config.window.height), (800, 600));
        assert_eq!(config.controls.fov_min, 10.0);
        assert_eq!(config.controls.fov_max, 120.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_object_uses_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("viewer.json");
        std::fs::write(&path, "{}").unwrap();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config, ViewerConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("viewer.json");
        std::fs::write(
            &path,
            r#"{ "controls": { "movement_speed": 2.5 }, "texture": "wood.jpg" }"#,
        )
        .unwrap();
        let config = ViewerConfig::load(&path).unwrap();
        assert_eq!(config.controls.movement_speed, 2.5);
        assert_eq!(config.controls.mouse_sensitivity, 0.1);
        assert_eq!(config.texture, Some(PathBuf::from("wood.jpg")));
        assert!(config.shader_dir.is_none());
    }

    #[test]
    fn save_then_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("viewer.json");
        let mut config = ViewerConfig::default();
        config.window.width = 1024;
        config.shader_dir = Some(PathBuf::from("shaders"));
        config.save(&path).unwrap();
        assert_eq!(ViewerConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn invalid_json_is_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("viewer.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            ViewerConfig::load(&path),
            Err(ConfigError::Json(_))
        ));
    }

    #[test]
    fn inverted_fov_range_is_rejected() {
        let mut config = ViewerConfig::default();
        config.controls.fov_min = 90.0;
        config.controls.fov_max = 30.0;
        match config.validate() {
            Err(ConfigError::InvalidFovRange { min, max }) => {
                assert_eq!(min, 90.0);
                assert_eq!(max, 30.0);
            }
            other => panic!("expected InvalidFovRange, got {other:?}"),
        }
    }

    #[test]
    fn fov_range_must_stay_inside_half_turn() {
        for (min, max) in [(-30.0, 60.0), (0.0, 60.0), (30.0, 180.0), (10.0, 200.0)] {
            let mut config = ViewerConfig::default();
            config.controls.fov_min = min;
            config.controls.fov_max = max;
            assert!(
                matches!(config.validate(), Err(ConfigError::InvalidFovRange { .. })),
                "accepted {min}..{max}"
            );
        }
    }

    #[test]
    fn speeds_must_be_positive() {
        let mut config = ViewerConfig::default();
        config.controls.light_speed = 0.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "light_speed", .. })
        ));

        let mut config = ViewerConfig::default();
        config.controls.movement_speed = f32::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::NonPositive { field: "movement_speed", .. })
        ));
    }

    #[test]
    fn out_of_range_file_is_rejected_on_load() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("viewer.json");
        std::fs::write(&path, r#"{ "controls": { "fov_min": -30, "fov_max": 200 } }"#).unwrap();
        assert!(matches!(
            ViewerConfig::load(&path),
            Err(ConfigError::InvalidFovRange { .. })
        ));
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = tempfile::tempdir().unwrap();
        assert!(matches!(
            ViewerConfig::load(tmp.path().join("absent.json")),
            Err(ConfigError::Io(_))
        ));
    }
}
