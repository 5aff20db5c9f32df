//! Top-level HUD wiring
//!
//! Everything outside the pannable map surface: the filter toolbar, the
//! search box, and the detail panel. Each widget is its own plugin; this
//! just groups them.

use crate::ui::panes::detail_pane::DetailPanePlugin;
use crate::ui::search_box::SearchBoxPlugin;
use crate::ui::toolbars::filter_toolbar::FilterToolbarPlugin;
use crate::ui::ui_interaction::UiInteractionPlugin;
use bevy::prelude::*;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            UiInteractionPlugin,
            FilterToolbarPlugin,
            SearchBoxPlugin,
            DetailPanePlugin,
        ));
    }
}
