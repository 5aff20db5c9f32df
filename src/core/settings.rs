// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the non-visual tuning values for the app.

// Map Plane //////////////////////////////////////////////////////////////////

/// Width of the map plane in map units (the world-map image's pixel width)
pub const MAP_PLANE_WIDTH: f32 = 2048.0;
/// Height of the map plane in map units (the world-map image's pixel height)
pub const MAP_PLANE_HEIGHT: f32 = 1536.0;

// Markers ////////////////////////////////////////////////////////////////////

/// Radius of the clickable/hoverable area around a marker, in world units
pub const MARKER_HIT_RADIUS: f32 = 14.0;

/// How long a marker stays highlighted after being selected, in seconds
pub const HIGHLIGHT_DURATION_SECS: f32 = 2.0;

// Search /////////////////////////////////////////////////////////////////////

/// Search terms shorter than this perform no lookup at all
pub const MIN_SEARCH_TERM_LEN: usize = 2;

/// How long the "no match" notice stays on screen, in seconds
pub const SEARCH_NOTICE_DURATION_SECS: f32 = 3.0;

// Camera Zoom Settings ///////////////////////////////////////////////////////

/// The step multiplier for zooming with keyboard shortcuts (+ / -)
pub const KEYBOARD_ZOOM_STEP: f32 = 0.8;

/// Minimum allowed camera scale (maximum zoom in)
pub const MIN_ALLOWED_ZOOM_SCALE: f32 = 0.1;

/// Maximum allowed camera scale (maximum zoom out)
pub const MAX_ALLOWED_ZOOM_SCALE: f32 = 4.0;

/// Camera scale at startup, chosen so the whole map plane is in view
pub const INITIAL_ZOOM_SCALE: f32 = 2.0;
