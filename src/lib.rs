//! Loremap, an interactive atlas of the Falkrest campaign setting.
//!
//! The map is a fixed-size image plane on a pannable/zoomable 2D canvas;
//! one marker per location, filterable by category, searchable by name,
//! with a detail panel for the selected location.

pub mod core;
pub mod data;
pub mod explorer;
pub mod rendering;
pub mod ui;
