//! # equimap
//!
//! A small map viewer for equirectangular world images.
//!
//! The core is two pure functions: [`project`] turns a
//! latitude/longitude into a pixel of the map image, and
//! [`center_offset`] turns that pixel into the scroll offset
//! that centers it in a viewport. Around them sit the configuration, image
//! loading, pin plotting and (behind the `egui` feature) the map view widget.

pub mod core;
pub mod layers;
pub mod prelude;
#[cfg(feature = "egui")]
pub mod ui;

pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::ViewerConfig,
    geo::{ImageSize, LatLng, PixelPos, Point},
    projection::{project, unproject, Equirectangular},
    viewport::{center_offset, Viewport},
};

pub use layers::{
    image::MapImage,
    marker::Marker,
    pins::{export_pins, plot_pins},
};

#[cfg(feature = "egui")]
pub use ui::{controls::ZoomControls, widget::MapView};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

/// Error type alias for convenience
pub type Error = MapError;

/// Installs `env_logger`, defaulting to `info` unless `RUST_LOG` is set.
/// Calling it again is a no-op.
#[cfg(feature = "debug")]
pub fn init_logging() {
    let env = env_logger::Env::default().default_filter_or("info");
    let _ = env_logger::Builder::from_env(env).try_init();
}
