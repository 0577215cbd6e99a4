use std::path::Path;

use crate::AssetError;

/// Decoded RGBA8 image ready for upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

impl TextureData {
    /// Decode a PNG or JPEG file. Any channel layout is expanded to RGBA8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        let texture = Self::from_bytes(&bytes)?;
        tracing::debug!(
            path = %path.display(),
            width = texture.width,
            height = texture.height,
            "decoded texture"
        );
        Ok(texture)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, AssetError> {
        let image = image::load_from_memory(bytes)?.to_rgba8();
        let (width, height) = image.dimensions();
        if width == 0 || height == 0 {
            return Err(AssetError::EmptyTexture);
        }
        Ok(Self {
            width,
            height,
            rgba: image.into_raw(),
        })
    }

    /// Load `path`, or fall back to a white texture if it is unset or unreadable.
    pub fn load_or_fallback(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::white();
        };
        match Self::load(path) {
            Ok(texture) => texture,
            Err(e) => {
                tracing::warn!("failed to load texture {}: {e}; using white", path.display());
                Self::white()
            }
        }
    }

    /// 1x1 opaque white; sampling it leaves object colors unchanged.
    pub fn white() -> Self {
        Self {
            width: 1,
            height: 1,
            rgba: vec![255; 4],
        }
    }
}
