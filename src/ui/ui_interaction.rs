//! Pointer-over-HUD tracking
//!
//! Marker hit-testing and camera panning work in world space and would
//! otherwise fire right through the HUD. This resource flags when the
//! pointer is over any widget so world-space input can stand down.

use bevy::prelude::*;
use bevy_pancam::PanCam;

/// Whether the pointer is currently over a HUD widget
#[derive(Resource, Default)]
pub struct UiHoverState {
    pub is_hovering_ui: bool,
}

pub struct UiInteractionPlugin;

impl Plugin for UiInteractionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UiHoverState>().add_systems(
            Update,
            (update_ui_hover_state, sync_pan_enabled).chain(),
        );
    }
}

/// Derives the hover flag from the interaction state of HUD nodes.
/// Widget roots carry `Interaction` so the whole widget surface counts,
/// not just its buttons.
pub fn update_ui_hover_state(
    interactions: Query<&Interaction, With<Node>>,
    mut hover_state: ResMut<UiHoverState>,
) {
    let hovering = interactions.iter().any(|interaction| {
        matches!(interaction, Interaction::Hovered | Interaction::Pressed)
    });
    if hover_state.is_hovering_ui != hovering {
        hover_state.is_hovering_ui = hovering;
    }
}

/// Suspends drag-panning while the pointer is over a widget
fn sync_pan_enabled(
    hover_state: Res<UiHoverState>,
    mut pan_query: Query<&mut PanCam>,
) {
    if !hover_state.is_changed() {
        return;
    }
    for mut pancam in &mut pan_query {
        pancam.enabled = !hover_state.is_hovering_ui;
    }
}
