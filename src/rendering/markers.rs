//! Marker layer management
//!
//! One marker entity is created per location record at startup and lives
//! for the whole session. A marker's category is its layer: layer
//! visibility is a plain `Visibility` toggle over every marker of that
//! category, driven by the filter state. `Unknown`-category markers form an
//! implicit fifth bucket that no filter ever shows.
//!
//! Hover emphasis is purely presentational; the highlight visual follows
//! the `ActiveHighlight` resource and carries the selection meaning.

use crate::core::pointer::PointerInfo;
use crate::core::settings::MARKER_HIT_RADIUS;
use crate::data::{Category, LocationStore};
use crate::explorer::filters::CategoryFilters;
use crate::explorer::selection::{ActiveHighlight, SelectLocation};
use crate::rendering::cameras::MAP_CAMERA_LAYER;
use crate::ui::theme::{
    category_color, category_glyph, DEFAULT_FONT_PATH, HIGHLIGHT_COLOR,
    HIGHLIGHT_SCALE, MARKER_GLYPH_FONT_SIZE, MARKER_HOVER_TINT, MARKER_SIZE,
};
use crate::ui::ui_interaction::{update_ui_hover_state, UiHoverState};
use bevy::prelude::*;
use bevy::render::view::RenderLayers;

const MARKER_Z: f32 = 1.0;

/// Component tying a marker entity to its location record
#[derive(Component)]
pub struct LocationMarker {
    pub id: String,
}

/// The marker's layer bucket
#[derive(Component)]
pub struct MarkerCategory(pub Category);

/// Transient pointer-proximity emphasis, no business meaning
#[derive(Component)]
pub struct Hovered;

/// Plugin that spawns markers and keeps their visuals in sync
pub struct MarkerPlugin;

impl Plugin for MarkerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_location_markers)
            .add_systems(
                Update,
                (
                    sync_layer_visibility,
                    update_hover_state,
                    handle_marker_clicks,
                    update_marker_visuals,
                )
                    // Pointer-over-HUD must be settled before hit-testing
                    .after(update_ui_hover_state),
            );
    }
}

/// Spawns one marker per loaded location.
///
/// Markers are colored quads with a category glyph on top, placed at the
/// record's map coordinates. They are never added or removed afterwards;
/// filters only flip their visibility.
fn spawn_location_markers(
    mut commands: Commands,
    store: Res<LocationStore>,
    asset_server: Res<AssetServer>,
) {
    for record in store.iter() {
        let world = record.coordinates.to_world();
        commands
            .spawn((
                Sprite {
                    color: category_color(record.category),
                    custom_size: Some(Vec2::splat(MARKER_SIZE)),
                    ..default()
                },
                Transform::from_xyz(world.x, world.y, MARKER_Z),
                RenderLayers::layer(MAP_CAMERA_LAYER),
                LocationMarker {
                    id: record.id.clone(),
                },
                MarkerCategory(record.category),
                // Unknown-category markers exist but no filter shows them
                if record.category.is_known() {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                },
                Name::new(format!("Marker:{}", record.id)),
            ))
            .with_children(|marker| {
                marker.spawn((
                    Text2d::new(category_glyph(record.category)),
                    TextFont {
                        font: asset_server.load(DEFAULT_FONT_PATH),
                        font_size: MARKER_GLYPH_FONT_SIZE,
                        ..default()
                    },
                    TextColor(Color::WHITE),
                    Transform::from_xyz(0.0, 0.0, 0.1),
                    // RenderLayers does not propagate to children
                    RenderLayers::layer(MAP_CAMERA_LAYER),
                ));
            });
    }
    info!("Spawned {} location markers", store.len());
}

/// Attaches/detaches whole category layers as the filter set changes.
/// Idempotent; unknown-category markers stay hidden no matter what.
fn sync_layer_visibility(
    filters: Res<CategoryFilters>,
    mut markers: Query<(&MarkerCategory, &mut Visibility), With<LocationMarker>>,
) {
    if !filters.is_changed() {
        return;
    }
    for (category, mut visibility) in &mut markers {
        *visibility = if filters.0.is_active(category.0) {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

/// Finds the visible marker under `world_pos`, closest first
fn marker_under_pointer<'a>(
    world_pos: Vec2,
    markers: impl Iterator<
        Item = (Entity, &'a LocationMarker, &'a Transform, &'a Visibility),
    >,
) -> Option<(Entity, &'a LocationMarker)> {
    markers
        .filter(|(_, _, _, visibility)| **visibility != Visibility::Hidden)
        .map(|(entity, marker, transform, _)| {
            let distance =
                transform.translation.truncate().distance(world_pos);
            (entity, marker, distance)
        })
        .filter(|(_, _, distance)| *distance <= MARKER_HIT_RADIUS)
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(entity, marker, _)| (entity, marker))
}

/// Applies/clears hover emphasis from pointer proximity. Markers under a
/// HUD widget never read as hovered.
fn update_hover_state(
    mut commands: Commands,
    pointer: Res<PointerInfo>,
    ui_hover: Res<UiHoverState>,
    markers: Query<
        (Entity, &LocationMarker, &Transform, &Visibility),
        With<LocationMarker>,
    >,
    hovered: Query<Entity, With<Hovered>>,
) {
    let hit = if ui_hover.is_hovering_ui {
        None
    } else {
        marker_under_pointer(pointer.world, markers.iter())
            .map(|(entity, _)| entity)
    };

    for entity in &hovered {
        if Some(entity) != hit {
            commands.entity(entity).remove::<Hovered>();
        }
    }
    if let Some(entity) = hit {
        if !hovered.contains(entity) {
            commands.entity(entity).insert(Hovered);
        }
    }
}

/// Routes marker clicks into the select-location flow.
///
/// Clicks landing on a HUD widget belong to that widget; without this
/// guard a related-link click would also select whatever marker happens
/// to sit under the panel in world space.
fn handle_marker_clicks(
    buttons: Res<ButtonInput<MouseButton>>,
    pointer: Res<PointerInfo>,
    ui_hover: Res<UiHoverState>,
    markers: Query<
        (Entity, &LocationMarker, &Transform, &Visibility),
        With<LocationMarker>,
    >,
    mut select_requests: EventWriter<SelectLocation>,
) {
    if ui_hover.is_hovering_ui {
        return;
    }
    if !buttons.just_pressed(MouseButton::Left) {
        return;
    }
    if let Some((_, marker)) =
        marker_under_pointer(pointer.world, markers.iter())
    {
        select_requests.write(SelectLocation {
            id: marker.id.clone(),
        });
    }
}

/// Applies hover tint and highlight emphasis to marker sprites
fn update_marker_visuals(
    highlight: Res<ActiveHighlight>,
    mut markers: Query<
        (
            &LocationMarker,
            &MarkerCategory,
            &mut Sprite,
            &mut Transform,
            Option<&Hovered>,
        ),
        With<LocationMarker>,
    >,
) {
    for (marker, category, mut sprite, mut transform, hovered) in &mut markers
    {
        if highlight.is_highlighted(&marker.id) {
            sprite.color = HIGHLIGHT_COLOR;
            transform.scale = Vec3::splat(HIGHLIGHT_SCALE);
        } else if hovered.is_some() {
            sprite.color = MARKER_HOVER_TINT;
            transform.scale = Vec3::ONE;
        } else {
            sprite.color = category_color(category.0);
            transform.scale = Vec3::ONE;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn_test_marker(app: &mut App, id: &str, at: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                LocationMarker { id: id.to_string() },
                Transform::from_xyz(at.x, at.y, MARKER_Z),
                Visibility::Visible,
            ))
            .id()
    }

    fn click_app(hovering_ui: bool) -> App {
        let mut app = App::new();
        app.add_event::<SelectLocation>();
        let mut buttons = ButtonInput::<MouseButton>::default();
        buttons.press(MouseButton::Left);
        app.insert_resource(buttons);
        app.insert_resource(PointerInfo::default());
        app.insert_resource(UiHoverState {
            is_hovering_ui: hovering_ui,
        });
        app.add_systems(Update, handle_marker_clicks);
        spawn_test_marker(&mut app, "highcrown", Vec2::ZERO);
        app
    }

    #[test]
    fn clicks_over_the_hud_select_nothing() {
        let mut app = click_app(true);
        app.update();

        let events = app.world().resource::<Events<SelectLocation>>();
        assert!(events.is_empty());
    }

    #[test]
    fn clicks_on_the_map_select_the_marker_under_the_pointer() {
        let mut app = click_app(false);
        app.update();

        let events = app.world().resource::<Events<SelectLocation>>();
        let mut cursor = events.get_cursor();
        let ids: Vec<&str> =
            cursor.read(events).map(|event| event.id.as_str()).collect();
        assert_eq!(ids, ["highcrown"]);
    }

    #[test]
    fn hover_is_not_reapplied_while_the_pointer_stays_put() {
        let mut app = App::new();
        app.insert_resource(PointerInfo::default());
        app.insert_resource(UiHoverState::default());
        app.add_systems(Update, update_hover_state);
        let marker = spawn_test_marker(&mut app, "emberwood", Vec2::ZERO);

        app.update();
        let first = app
            .world()
            .entity(marker)
            .get_ref::<Hovered>()
            .unwrap()
            .last_changed();

        app.update();
        let second = app
            .world()
            .entity(marker)
            .get_ref::<Hovered>()
            .unwrap()
            .last_changed();
        assert_eq!(first, second);

        app.world_mut().resource_mut::<PointerInfo>().world =
            Vec2::new(1000.0, 1000.0);
        app.update();
        assert!(app.world().entity(marker).get::<Hovered>().is_none());
    }

    #[test]
    fn hud_hover_clears_marker_hover() {
        let mut app = App::new();
        app.insert_resource(PointerInfo::default());
        app.insert_resource(UiHoverState::default());
        app.add_systems(Update, update_hover_state);
        let marker = spawn_test_marker(&mut app, "falkrest", Vec2::ZERO);

        app.update();
        assert!(app.world().entity(marker).get::<Hovered>().is_some());

        app.world_mut()
            .resource_mut::<UiHoverState>()
            .is_hovering_ui = true;
        app.update();
        assert!(app.world().entity(marker).get::<Hovered>().is_none());
    }
}
