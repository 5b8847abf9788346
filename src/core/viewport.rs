use crate::core::constants::{MAX_SCALE_FACTOR, MIN_SCALE_FACTOR, ZOOM_STEP};
use crate::core::geo::{ImageSize, Point};
use crate::{MapError, Result};
use serde::{Deserialize, Serialize};

/// Scroll offset that puts image pixel `pixel` at the center of a viewport of
/// `viewport_size`, when the image is drawn `scale_factor` times larger.
///
/// `offset = pixel * scale_factor - viewport_size / 2`, per axis. The result
/// is not clamped: targets near the image edge give negative offsets or
/// offsets past the scrollable range, and the display layer clamps.
pub fn center_offset(pixel: Point, scale_factor: f64, viewport_size: Point) -> Point {
    pixel.multiply(scale_factor).subtract(&viewport_size.half())
}

/// The visible window onto the scaled map image.
///
/// Pure presentation state owned by whatever draws the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Size of the visible area in screen pixels
    pub size: Point,
    /// Screen pixels per image pixel
    pub scale: f64,
    /// Scroll offset of the viewport's top-left corner, in screen pixels
    pub offset: Point,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl Viewport {
    /// Creates a new viewport at offset zero.
    ///
    /// `scale` is kept as given and the default zoom limits are widened to
    /// include it. A non-positive or non-finite scale falls back to 1.
    pub fn new(size: Point, scale: f64) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            log::warn!("invalid viewport scale {scale}, using 1");
            1.0
        };

        Self {
            size,
            scale,
            offset: Point::default(),
            min_scale: MIN_SCALE_FACTOR.min(scale),
            max_scale: MAX_SCALE_FACTOR.max(scale),
        }
    }

    /// Sets the zoom limits, clamping the current scale into them.
    ///
    /// Limits must be finite with `0 < min_scale <= max_scale`; anything else
    /// is rejected and leaves the viewport unchanged.
    pub fn set_zoom_limits(&mut self, min_scale: f64, max_scale: f64) -> Result<()> {
        let valid = min_scale.is_finite()
            && max_scale.is_finite()
            && min_scale > 0.0
            && min_scale <= max_scale;
        if !valid {
            return Err(MapError::InvalidConfig(format!(
                "zoom limits [{min_scale}, {max_scale}] are not a positive range"
            )));
        }

        self.min_scale = min_scale;
        self.max_scale = max_scale;
        self.scale = self.scale.clamp(min_scale, max_scale);
        Ok(())
    }

    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Scrolls so that image pixel `pixel` sits at the viewport center
    pub fn center_on(&mut self, pixel: Point) {
        self.offset = center_offset(pixel, self.scale, self.size);
    }

    /// Image pixel currently under the viewport center
    pub fn visible_center(&self) -> Point {
        self.offset.add(&self.size.half()).multiply(1.0 / self.scale)
    }

    /// Size of the whole image once scaled, in screen pixels
    pub fn content_size(&self, image: ImageSize) -> Point {
        image.scaled(self.scale)
    }

    /// `offset` limited to the scrollable range of `content`
    pub fn clamped_offset(&self, content: Point) -> Point {
        let max_x = (content.x - self.size.x).max(0.0);
        let max_y = (content.y - self.size.y).max(0.0);
        Point::new(self.offset.x.clamp(0.0, max_x), self.offset.y.clamp(0.0, max_y))
    }

    pub fn clamp_offset(&mut self, content: Point) {
        self.offset = self.clamped_offset(content);
    }

    /// Moves the view by a drag of `delta` screen pixels
    pub fn pan(&mut self, delta: Point) {
        self.offset = self.offset.subtract(&delta);
    }

    /// Sets the scale, clamped to the zoom limits, keeping the visible center
    /// fixed. Returns whether the scale changed.
    pub fn zoom_to(&mut self, scale: f64) -> bool {
        let new_scale = scale.clamp(self.min_scale, self.max_scale);
        if (new_scale - self.scale).abs() < f64::EPSILON {
            return false;
        }

        let center = self.visible_center();
        self.scale = new_scale;
        self.center_on(center);
        true
    }

    pub fn zoom_in(&mut self) -> bool {
        self.zoom_to(self.scale * ZOOM_STEP)
    }

    pub fn zoom_out(&mut self) -> bool {
        self.zoom_to(self.scale / ZOOM_STEP)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(Point::new(800.0, 600.0), 1.0)
    }
}
