//! The category filter toolbar
//!
//! A horizontal button row in the top-left corner: one button per known
//! category plus "All". Category buttons toggle their layer; "All" sets all
//! four at once. The "All" button's lit state is read from
//! `FilterState::is_all_active()` every frame. It has no state of its own,
//! so it can never disagree with the individual toggles.

use crate::data::{Category, KNOWN_CATEGORIES};
use crate::explorer::filters::CategoryFilters;
use crate::ui::theme::*;
use bevy::prelude::*;

/// What one toolbar button toggles
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterTarget {
    All,
    Layer(Category),
}

#[derive(Component)]
pub struct FilterToolbarButton;

/// Plugin that adds the filter toolbar
pub struct FilterToolbarPlugin;

impl Plugin for FilterToolbarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_filter_toolbar).add_systems(
            Update,
            (handle_filter_buttons, update_filter_button_visuals),
        );
    }
}

/// Spawns the toolbar with the "All" button followed by one button per
/// known category, in display order
fn spawn_filter_toolbar(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(TOOLBAR_MARGIN),
                left: Val::Px(TOOLBAR_MARGIN),
                flex_direction: FlexDirection::Row,
                padding: UiRect::all(Val::Px(TOOLBAR_PADDING)),
                column_gap: Val::Px(TOOLBAR_ITEM_SPACING),
                border: UiRect::all(Val::Px(TOOLBAR_BORDER_WIDTH)),
                ..default()
            },
            BackgroundColor(TOOLBAR_BACKGROUND_COLOR),
            BorderColor(TOOLBAR_BORDER_COLOR),
            BorderRadius::all(Val::Px(TOOLBAR_BORDER_RADIUS)),
            // The toolbar surface reports hover like the widget roots do
            Interaction::default(),
            Name::new("FilterToolbar"),
        ))
        .with_children(|toolbar| {
            spawn_filter_button(
                toolbar,
                FilterTarget::All,
                "All",
                &asset_server,
            );
            for category in KNOWN_CATEGORIES {
                spawn_filter_button(
                    toolbar,
                    FilterTarget::Layer(category),
                    category.plural_label(),
                    &asset_server,
                );
            }
        });
}

fn spawn_filter_button(
    toolbar: &mut ChildSpawnerCommands,
    target: FilterTarget,
    label: &str,
    asset_server: &AssetServer,
) {
    toolbar
        .spawn((
            Button,
            FilterToolbarButton,
            target,
            Node {
                padding: UiRect::axes(Val::Px(12.0), Val::Px(6.0)),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(ACTIVE_BUTTON),
        ))
        .with_children(|button| {
            button.spawn((
                Text::new(label),
                TextFont {
                    font: asset_server.load(DEFAULT_FONT_PATH),
                    font_size: TOOLBAR_BUTTON_FONT_SIZE,
                    ..default()
                },
                TextColor(ACTIVE_BUTTON_TEXT_COLOR),
            ));
        });
}

/// Toggles filter state on button presses
fn handle_filter_buttons(
    interactions: Query<
        (&Interaction, &FilterTarget),
        (Changed<Interaction>, With<FilterToolbarButton>),
    >,
    mut filters: ResMut<CategoryFilters>,
) {
    for (interaction, target) in &interactions {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match target {
            FilterTarget::All => {
                let visible = !filters.0.is_all_active();
                filters.0.set_all(visible);
            }
            FilterTarget::Layer(category) => {
                let visible = !filters.0.is_active(*category);
                filters.0.set_category(*category, visible);
            }
        }
    }
}

/// Keeps button visuals in sync with the filter set
///
/// The "All" button derives its lit state from the set itself, so toggling
/// a single category directly is immediately reflected here.
fn update_filter_button_visuals(
    filters: Res<CategoryFilters>,
    mut buttons: Query<
        (
            &Interaction,
            &FilterTarget,
            &mut BackgroundColor,
            &Children,
        ),
        With<FilterToolbarButton>,
    >,
    mut labels: Query<&mut TextColor>,
) {
    for (interaction, target, mut background, children) in &mut buttons {
        let lit = match target {
            FilterTarget::All => filters.0.is_all_active(),
            FilterTarget::Layer(category) => filters.0.is_active(*category),
        };
        *background = BackgroundColor(match (interaction, lit) {
            (Interaction::Pressed, _) => PRESSED_BUTTON,
            (Interaction::Hovered, _) => HOVERED_BUTTON,
            (Interaction::None, true) => ACTIVE_BUTTON,
            (Interaction::None, false) => NORMAL_BUTTON,
        });
        for child in children {
            if let Ok(mut color) = labels.get_mut(*child) {
                *color = TextColor(if lit {
                    ACTIVE_BUTTON_TEXT_COLOR
                } else {
                    BUTTON_TEXT_COLOR
                });
            }
        }
    }
}
