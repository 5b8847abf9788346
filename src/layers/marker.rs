use crate::core::{
    constants::PIN_COLOR,
    geo::{ImageSize, LatLng, PixelPos},
    projection::project,
};
use serde::{Deserialize, Serialize};

/// A pin on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub position: LatLng,
    #[serde(default)]
    pub label: Option<String>,
    /// RGBA
    #[serde(default = "default_color")]
    pub color: [u8; 4],
}

fn default_color() -> [u8; 4] {
    PIN_COLOR
}

impl Marker {
    pub fn new(position: LatLng) -> Self {
        Self {
            position,
            label: None,
            color: PIN_COLOR,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_color(mut self, color: [u8; 4]) -> Self {
        self.color = color;
        self
    }

    /// Pixel of the marker on an image of `size`
    pub fn pixel(&self, size: ImageSize) -> PixelPos {
        project(self.position.lat, self.position.lng, size.width, size.height)
    }

    /// Pixel to draw the marker at, or `None` for positions off the globe.
    ///
    /// `lng = 180` and `lat = -90` project one past the last column or row
    /// and are pulled back onto the image.
    pub fn pixel_on(&self, size: ImageSize) -> Option<PixelPos> {
        if !self.position.is_valid() {
            return None;
        }
        Some(self.pixel(size).clamped(size))
    }
}

impl From<LatLng> for Marker {
    fn from(position: LatLng) -> Self {
        Self::new(position)
    }
}
