//! Mouse and trackpad management

use crate::data::MapPoint;
use crate::rendering::cameras::MapCamera;
use bevy::prelude::*;

/// Single source of truth for pointer (mouse/trackpad) position
#[derive(Resource)]
pub struct PointerInfo {
    /// Screen space coordinates (pixels)
    pub screen: Vec2,
    /// Map space coordinates (the world-map image's pixel grid)
    pub map: MapPoint,
    /// World space coordinates, used for marker hit-testing
    pub world: Vec2,
}

impl Default for PointerInfo {
    fn default() -> Self {
        Self {
            screen: Vec2::ZERO,
            map: MapPoint::new(0.0, 0.0),
            world: Vec2::ZERO,
        }
    }
}

/// Plugin that centrally manages pointer position conversions
pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerInfo>()
            .add_systems(Update, update_pointer_position);
    }
}

/// System that updates pointer position once per frame
/// This is the ONLY place coordinate conversions should happen
fn update_pointer_position(
    mut pointer_info: ResMut<PointerInfo>,
    windows: Query<&Window>,
    camera_query: Query<(&Camera, &GlobalTransform), With<MapCamera>>,
) {
    if let (Ok(window), Ok((camera, camera_transform))) =
        (windows.single(), camera_query.single())
    {
        if let Some(screen_pos) = window.cursor_position() {
            pointer_info.screen = screen_pos;

            // Convert to world space
            if let Ok(world_pos) =
                camera.viewport_to_world_2d(camera_transform, screen_pos)
            {
                pointer_info.world = world_pos;

                // Convert to map space
                pointer_info.map = MapPoint::from_world(world_pos);
            }
        }
    }
}
