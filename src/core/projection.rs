//! Linear equirectangular projection between geographic coordinates and
//! pixels of a full-world image.
//!
//! Longitude -180 maps to the left edge and +180 to the right edge, latitude
//! +90 to the top edge and -90 to the bottom edge. No range validation is
//! done: coordinates outside the world land outside the image.

use crate::core::constants::{LAT_SPAN, LNG_SPAN};
use crate::core::geo::{ImageSize, LatLng, PixelPos, Point};
use crate::core::viewport::center_offset;

/// Projects `(lat, lng)` to a pixel of an `image_width × image_height` image.
///
/// `x = trunc((lng + 180) * W / 360)`, `y = trunc((90 - lat) * H / 180)`.
///
/// The integer conversion truncates toward zero (an `as i32` cast), so an
/// intermediate of `-0.5` becomes `0`, not `-1`. Values beyond the `i32`
/// range saturate and NaN becomes `0`.
///
/// Both dimensions must be non-zero.
pub fn project(lat: f64, lng: f64, image_width: u32, image_height: u32) -> PixelPos {
    let point = project_point(
        &LatLng::new(lat, lng),
        ImageSize::new(image_width, image_height),
    );
    PixelPos::new(point.x as i32, point.y as i32)
}

/// Same formula as [`project`] without the integer conversion.
pub fn project_point(lat_lng: &LatLng, size: ImageSize) -> Point {
    Point::new(
        (lat_lng.lng + 180.0) * size.width as f64 / LNG_SPAN,
        (90.0 - lat_lng.lat) * size.height as f64 / LAT_SPAN,
    )
}

/// Inverse of [`project_point`]
pub fn unproject(point: &Point, size: ImageSize) -> LatLng {
    LatLng::new(
        90.0 - point.y * LAT_SPAN / size.height as f64,
        point.x * LNG_SPAN / size.width as f64 - 180.0,
    )
}

/// An equirectangular image of a known size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Equirectangular {
    pub size: ImageSize,
}

impl Equirectangular {
    pub fn new(size: ImageSize) -> Self {
        Self { size }
    }

    pub fn project(&self, lat_lng: &LatLng) -> PixelPos {
        project(lat_lng.lat, lat_lng.lng, self.size.width, self.size.height)
    }

    pub fn project_point(&self, lat_lng: &LatLng) -> Point {
        project_point(lat_lng, self.size)
    }

    pub fn unproject(&self, point: &Point) -> LatLng {
        unproject(point, self.size)
    }

    /// Scroll offset that centers `lat_lng` in a `viewport_size` viewport
    /// when the image is drawn at `scale`.
    ///
    /// Centers on the truncated pixel, not the exact projected point.
    pub fn center_offset_for(&self, lat_lng: &LatLng, scale: f64, viewport_size: Point) -> Point {
        center_offset(Point::from(self.project(lat_lng)), scale, viewport_size)
    }
}
