//! Viewer configuration
//!
//! Every field has a default, so a config file only needs to name what it
//! changes. The defaults reproduce the fixed demo setup from
//! [`crate::core::constants`].

use crate::core::constants::{
    DEFAULT_IMAGE_PATH, DEFAULT_SCALE_FACTOR, DEFAULT_TARGET_LAT, DEFAULT_TARGET_LNG,
    DEFAULT_TITLE, DEFAULT_WINDOW_SIZE, MAX_SCALE_FACTOR, MIN_SCALE_FACTOR,
};
use crate::core::geo::LatLng;
use crate::layers::marker::Marker;
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewerConfig {
    /// Coordinate the view is centered on at startup
    pub target: LatLng,
    /// Full-world equirectangular image
    pub image_path: PathBuf,
    /// Initial zoom
    pub scale_factor: f64,
    pub min_scale: f64,
    pub max_scale: f64,
    /// Initial window size in logical pixels
    pub window_size: [f32; 2],
    pub dark_theme: bool,
    pub title: String,
    /// Pins drawn over the map
    pub pins: Vec<Marker>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            target: LatLng::new(DEFAULT_TARGET_LAT, DEFAULT_TARGET_LNG),
            image_path: PathBuf::from(DEFAULT_IMAGE_PATH),
            scale_factor: DEFAULT_SCALE_FACTOR,
            min_scale: MIN_SCALE_FACTOR,
            max_scale: MAX_SCALE_FACTOR,
            window_size: DEFAULT_WINDOW_SIZE,
            dark_theme: true,
            title: DEFAULT_TITLE.to_string(),
            pins: Vec::new(),
        }
    }
}

impl ViewerConfig {
    /// Reads and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parses and validates a JSON config
    pub fn from_json(text: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.target.is_finite() || !self.target.is_valid() {
            return Err(MapError::InvalidCoordinates(format!(
                "target ({}) is outside [-90, 90] x [-180, 180]",
                self.target
            )));
        }

        if let Some(pin) = self.pins.iter().find(|pin| !pin.position.is_finite()) {
            return Err(MapError::InvalidCoordinates(format!(
                "pin at ({}) is not finite",
                pin.position
            )));
        }

        if !(self.min_scale.is_finite() && self.min_scale > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "min_scale must be positive, got {}",
                self.min_scale
            )));
        }

        if !self.max_scale.is_finite() || self.max_scale < self.min_scale {
            return Err(MapError::InvalidConfig(format!(
                "max_scale {} is below min_scale {}",
                self.max_scale, self.min_scale
            )));
        }

        if !self.scale_factor.is_finite()
            || !(self.min_scale..=self.max_scale).contains(&self.scale_factor)
        {
            return Err(MapError::InvalidConfig(format!(
                "scale_factor {} is outside [{}, {}]",
                self.scale_factor, self.min_scale, self.max_scale
            )));
        }

        let [width, height] = self.window_size;
        if !(width > 0.0 && height > 0.0) {
            return Err(MapError::InvalidConfig(format!(
                "window_size must be positive, got {width}x{height}"
            )));
        }

        Ok(())
    }
}
