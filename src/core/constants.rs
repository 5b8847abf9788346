//! Viewer-wide defaults. The defaults reproduce the fixed demo setup: a
//! 1000×800 window over `out_test.png` at 2× zoom, centered on Ho Chi Minh City.

/// Initial window size in logical pixels (width, height).
pub const DEFAULT_WINDOW_SIZE: [f32; 2] = [1000.0, 800.0];

/// Latitude the view is centered on at startup.
pub const DEFAULT_TARGET_LAT: f64 = 10.7769;

/// Longitude the view is centered on at startup.
pub const DEFAULT_TARGET_LNG: f64 = 106.7009;

/// Initial zoom: image pixels are drawn this many times larger.
pub const DEFAULT_SCALE_FACTOR: f64 = 2.0;

/// Full equirectangular map image, relative to the working directory.
pub const DEFAULT_IMAGE_PATH: &str = "out_test.png";

/// Config file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "equimap.json";

pub const DEFAULT_TITLE: &str = "Interactive Map Zoom";

/// Zoom limits for the interactive controls.
pub const MIN_SCALE_FACTOR: f64 = 0.25;
pub const MAX_SCALE_FACTOR: f64 = 16.0;

/// Multiplicative step used by zoom in/out.
pub const ZOOM_STEP: f64 = 1.25;

/// Radius of a plotted pin in image pixels.
pub const PIN_RADIUS: u32 = 4;

/// Default pin color (RGBA).
pub const PIN_COLOR: [u8; 4] = [220, 40, 40, 255];

/// Degrees spanned by the full image horizontally and vertically.
pub const LNG_SPAN: f64 = 360.0;
pub const LAT_SPAN: f64 = 180.0;
