use crate::{
    core::{geo::ImageSize, projection::Equirectangular},
    MapError, Result,
};
use image::RgbaImage;
use std::path::{Path, PathBuf};

/// A decoded equirectangular world image
#[derive(Debug, Clone)]
pub struct MapImage {
    source: Option<PathBuf>,
    pixels: RgbaImage,
}

impl MapImage {
    /// Decodes the image at `path`. Zero-sized images are rejected.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let pixels = image::open(path)?.to_rgba8();
        log::info!(
            "loaded map image {} ({}x{})",
            path.display(),
            pixels.width(),
            pixels.height()
        );

        let mut map = Self::from_rgba(pixels)?;
        map.source = Some(path.to_path_buf());
        Ok(map)
    }

    /// Decodes an encoded image held in memory
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_rgba(image::load_from_memory(bytes)?.to_rgba8())
    }

    pub fn from_rgba(pixels: RgbaImage) -> Result<Self> {
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(MapError::InvalidConfig(format!(
                "map image is empty ({}x{})",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self {
            source: None,
            pixels,
        })
    }

    pub fn size(&self) -> ImageSize {
        ImageSize::new(self.pixels.width(), self.pixels.height())
    }

    pub fn projection(&self) -> Equirectangular {
        Equirectangular::new(self.size())
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Texture upload format for egui
    #[cfg(feature = "egui")]
    pub fn to_color_image(&self) -> egui::ColorImage {
        let size = [self.pixels.width() as usize, self.pixels.height() as usize];
        egui::ColorImage::from_rgba_unmultiplied(size, self.pixels.as_raw())
    }
}
