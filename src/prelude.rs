//! Prelude module for common equimap types and functions
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use equimap::prelude::*;`

pub use crate::core::{
    config::ViewerConfig,
    constants,
    geo::{ImageSize, LatLng, PixelPos, Point},
    projection::{project, project_point, unproject, Equirectangular},
    viewport::{center_offset, Viewport},
};

pub use crate::layers::{
    image::MapImage,
    marker::Marker,
    pins::{export_pins, plot_pins},
};

#[cfg(feature = "egui")]
pub use crate::ui::{
    controls::{Position, ZoomAction, ZoomControls},
    widget::{MapView, MapViewExt},
};

pub use crate::{Error as MapError, Result};
