pub mod controls;
pub mod widget;

pub use controls::{Position, ZoomAction, ZoomControls};
pub use widget::{MapView, MapViewExt};
