//! Camera system for the atlas
//!
//! The application uses two cameras:
//! - The `MapCamera` for the pannable/zoomable map surface where the world
//!   map and location markers are displayed
//! - The `UiCamera` for user interface elements like the filter toolbar,
//!   the search box, and the detail panel
//!
//! The map camera is wrapped by `bevy_pancam`'s `PanCam` for drag-panning
//! and scroll-zooming; other components never touch the viewport directly
//! and instead send `PanToLocation` requests.

use crate::core::settings::{
    INITIAL_ZOOM_SCALE, KEYBOARD_ZOOM_STEP, MAP_PLANE_HEIGHT, MAP_PLANE_WIDTH,
    MAX_ALLOWED_ZOOM_SCALE, MIN_ALLOWED_ZOOM_SCALE,
};
use crate::data::MapPoint;
use bevy::prelude::*;
use bevy::render::view::RenderLayers;
use bevy_pancam::PanCam;

// Constants for camera positioning and rendering
const MAP_CAMERA_ORDER: isize = 0;
const UI_CAMERA_ORDER: isize = 1;

pub const MAP_CAMERA_LAYER: usize = 0;
pub const UI_CAMERA_LAYER: usize = 1;

/// Component that marks the main map camera
#[derive(Component)]
pub struct MapCamera;

/// Component that marks the UI camera
///
/// This camera renders HUD elements on a separate layer so they stay put
/// regardless of panning/zooming of the map view.
#[derive(Component)]
pub struct UiCamera;

/// Request to center the map camera on a point of the map plane.
#[derive(Event, Debug, Clone, Copy)]
pub struct PanToLocation {
    pub target: MapPoint,
}

/// Plugin that spawns both cameras and wires the viewport requests
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<PanToLocation>()
            .add_systems(
                Startup,
                (spawn_cameras, fit_map_to_window).chain(),
            )
            .add_systems(
                Update,
                (handle_pan_requests, keyboard_zoom),
            );
    }
}

/// Margin factor so the plane edges do not touch the window edges
const FIT_PADDING: f32 = 1.05;

/// Scale that fits the whole map plane into a window of the given size
fn plane_fit_scale(window_size: Vec2) -> f32 {
    let horizontal = MAP_PLANE_WIDTH / window_size.x;
    let vertical = MAP_PLANE_HEIGHT / window_size.y;
    (horizontal.max(vertical) * FIT_PADDING)
        .clamp(MIN_ALLOWED_ZOOM_SCALE, MAX_ALLOWED_ZOOM_SCALE)
}

fn spawn_cameras(mut commands: Commands) {
    spawn_map_camera(&mut commands);
    spawn_ui_camera(&mut commands);
}

/// Spawns the main camera for the map surface
///
/// Starts centered on the map plane, zoomed out far enough to show the
/// whole world map. Configured with PanCam for panning and zooming.
pub fn spawn_map_camera(commands: &mut Commands) {
    let start = MapPoint::plane_center().to_world();
    commands.spawn((
        Camera2d,
        Camera {
            // Lower camera order renders first; the map sits under the UI
            order: MAP_CAMERA_ORDER,
            ..default()
        },
        Projection::Orthographic(OrthographicProjection {
            scale: INITIAL_ZOOM_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(start.x, start.y, 0.0),
        MapCamera,
        RenderLayers::layer(MAP_CAMERA_LAYER),
        PanCam {
            enabled: true,
            min_scale: MIN_ALLOWED_ZOOM_SCALE,
            max_scale: MAX_ALLOWED_ZOOM_SCALE,
            ..default()
        },
    ));
}

/// Spawns the UI camera for the HUD
pub fn spawn_ui_camera(commands: &mut Commands) {
    commands.spawn((
        Camera2d,
        Camera {
            // UI camera renders on top of the map camera
            order: UI_CAMERA_ORDER,
            ..default()
        },
        RenderLayers::layer(UI_CAMERA_LAYER),
        // With two cameras, the HUD needs an explicit render target
        IsDefaultUiCamera,
        UiCamera,
    ));
}

/// Adjusts the starting zoom so the whole map plane fits in the window
fn fit_map_to_window(
    windows: Query<&Window>,
    mut camera_query: Query<&mut Projection, With<MapCamera>>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    if let Ok(mut projection) = camera_query.single_mut() {
        if let Projection::Orthographic(ortho) = &mut *projection {
            ortho.scale = plane_fit_scale(window.size());
        }
    }
}

/// Centers the camera on requested locations
///
/// This is the only write access to the viewport's pan state outside of
/// PanCam's own drag handling.
fn handle_pan_requests(
    mut requests: EventReader<PanToLocation>,
    mut camera_query: Query<&mut Transform, With<MapCamera>>,
) {
    let Some(request) = requests.read().last() else {
        return;
    };
    if let Ok(mut transform) = camera_query.single_mut() {
        let world = request.target.to_world();
        transform.translation.x = world.x;
        transform.translation.y = world.y;
    }
}

/// Handles keyboard zoom shortcuts (+ / -), clamped to the allowed range
fn keyboard_zoom(
    keys: Res<ButtonInput<KeyCode>>,
    mut camera_query: Query<&mut Projection, With<MapCamera>>,
) {
    let zoom_in = keys.just_pressed(KeyCode::Equal)
        || keys.just_pressed(KeyCode::NumpadAdd);
    let zoom_out = keys.just_pressed(KeyCode::Minus)
        || keys.just_pressed(KeyCode::NumpadSubtract);
    if !zoom_in && !zoom_out {
        return;
    }

    if let Ok(mut projection) = camera_query.single_mut() {
        if let Projection::Orthographic(ortho) = &mut *projection {
            let factor = if zoom_in {
                KEYBOARD_ZOOM_STEP
            } else {
                1.0 / KEYBOARD_ZOOM_STEP
            };
            ortho.scale = (ortho.scale * factor)
                .clamp(MIN_ALLOWED_ZOOM_SCALE, MAX_ALLOWED_ZOOM_SCALE);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fit_scale_covers_both_axes() {
        // Wide window: the vertical axis is the limiting one
        let scale = plane_fit_scale(Vec2::new(2048.0, 768.0));
        assert!(scale * 768.0 >= MAP_PLANE_HEIGHT);

        // Tall window: the horizontal axis is the limiting one
        let scale = plane_fit_scale(Vec2::new(512.0, 1536.0));
        assert!(scale * 512.0 >= MAP_PLANE_WIDTH);
    }

    #[test]
    fn fit_scale_stays_in_allowed_range() {
        let tiny = plane_fit_scale(Vec2::new(16.0, 16.0));
        assert!(tiny <= MAX_ALLOWED_ZOOM_SCALE);

        let huge = plane_fit_scale(Vec2::new(100_000.0, 100_000.0));
        assert!(huge >= MIN_ALLOWED_ZOOM_SCALE);
    }
}
