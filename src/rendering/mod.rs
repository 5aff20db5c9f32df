//! Rendering: cameras, the map image, and location markers

pub mod cameras;
pub mod map_background;
pub mod markers;

pub use cameras::{CameraPlugin, MapCamera, PanToLocation, UiCamera};
pub use map_background::MapBackgroundPlugin;
pub use markers::{LocationMarker, MarkerPlugin};
