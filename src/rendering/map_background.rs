//! The world-map image behind the markers

use crate::core::settings::{MAP_PLANE_HEIGHT, MAP_PLANE_WIDTH};
use crate::rendering::cameras::MAP_CAMERA_LAYER;
use crate::ui::theme::{MAP_IMAGE_PATH, MAP_UNDERLAY_COLOR};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;

// Z ordering on the map layer: underlay, map image, then markers above
const UNDERLAY_Z: f32 = -2.0;
const MAP_IMAGE_Z: f32 = -1.0;

pub struct MapBackgroundPlugin;

impl Plugin for MapBackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_map_background);
    }
}

/// Spawns the map image as a world-space sprite covering the whole plane,
/// over a solid underlay that shows through while the image loads (or if
/// it never does).
fn spawn_map_background(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    let plane = Vec2::new(MAP_PLANE_WIDTH, MAP_PLANE_HEIGHT);

    commands.spawn((
        Sprite {
            color: MAP_UNDERLAY_COLOR,
            custom_size: Some(plane),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, UNDERLAY_Z),
        RenderLayers::layer(MAP_CAMERA_LAYER),
        Name::new("MapUnderlay"),
    ));

    commands.spawn((
        Sprite {
            image: asset_server.load(MAP_IMAGE_PATH),
            custom_size: Some(plane),
            ..default()
        },
        Transform::from_xyz(0.0, 0.0, MAP_IMAGE_Z),
        RenderLayers::layer(MAP_CAMERA_LAYER),
        Name::new("WorldMap"),
    ));
}
