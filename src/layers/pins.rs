//! Plotting pins into a copy of the map image, for export as a still image.

use crate::{
    core::{constants::PIN_RADIUS, geo::PixelPos},
    layers::{image::MapImage, marker::Marker},
    Result,
};
use image::{Rgba, RgbaImage};
use std::path::Path;

/// Returns a copy of `map` with a filled disc of `radius` pixels drawn at
/// every marker. Markers off the globe are skipped; discs partly outside the
/// image are cut at the edge.
pub fn plot_pins(map: &MapImage, markers: &[Marker], radius: u32) -> RgbaImage {
    let mut canvas = map.pixels().clone();
    let size = map.size();

    for marker in markers {
        let Some(center) = marker.pixel_on(size) else {
            log::debug!("pin at ({}) is off the map, skipping", marker.position);
            continue;
        };
        draw_disc(&mut canvas, center, radius, Rgba(marker.color));
    }

    canvas
}

/// Plots `markers` with the default pin radius and writes the result to
/// `path`; the format follows the file extension.
pub fn export_pins(map: &MapImage, markers: &[Marker], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    plot_pins(map, markers, PIN_RADIUS).save(path)?;
    log::info!("wrote {} pins to {}", markers.len(), path.display());
    Ok(())
}

fn draw_disc(canvas: &mut RgbaImage, center: PixelPos, radius: u32, color: Rgba<u8>) {
    let r = radius as i64;
    let (width, height) = (canvas.width() as i64, canvas.height() as i64);

    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let x = center.x as i64 + dx;
            let y = center.y as i64 + dy;
            if (0..width).contains(&x) && (0..height).contains(&y) {
                canvas.put_pixel(x as u32, y as u32, color);
            }
        }
    }
}
