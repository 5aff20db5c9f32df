//! The search box and its transient notices
//!
//! A small widget in the top-right corner. Click it (or press `/`) to
//! focus, type a term, press Enter to search. A successful search feeds the
//! matched record into the select-location flow; a miss shows a short-lived
//! "not found" notice and touches nothing else. The search itself is the
//! pure lookup in `explorer::search`; this module only owns the input
//! buffer and the notice timer.

use crate::core::settings::{
    MIN_SEARCH_TERM_LEN, SEARCH_NOTICE_DURATION_SECS,
};
use crate::data::LocationStore;
use crate::explorer::filters::CategoryFilters;
use crate::explorer::search::{search, SearchOutcome};
use crate::explorer::selection::SelectLocation;
use crate::ui::panes::detail_pane::CurrentDetails;
use crate::ui::theme::*;
use bevy::input::keyboard::{Key, KeyboardInput};
use bevy::prelude::*;

/// The search box's input state.
#[derive(Resource, Default)]
pub struct SearchBox {
    pub focused: bool,
    pub buffer: String,
}

/// A transient message under the search box.
///
/// Re-showing a notice replaces the previous timer rather than stacking.
#[derive(Resource, Default)]
pub struct SearchNotice {
    entry: Option<(String, Timer)>,
}

impl SearchNotice {
    pub fn show(&mut self, text: impl Into<String>) {
        self.entry = Some((
            text.into(),
            Timer::from_seconds(SEARCH_NOTICE_DURATION_SECS, TimerMode::Once),
        ));
    }

    pub fn text(&self) -> Option<&str> {
        self.entry.as_ref().map(|(text, _)| text.as_str())
    }
}

#[derive(Component)]
struct SearchBoxWidget;

#[derive(Component)]
struct SearchInputText;

#[derive(Component)]
struct SearchNoticeText;

/// Plugin that adds the search box
pub struct SearchBoxPlugin;

impl Plugin for SearchBoxPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SearchBox>()
            .init_resource::<SearchNotice>()
            .add_systems(Startup, spawn_search_box)
            .add_systems(
                Update,
                (
                    // Capture must run before focus so the `/` that grabs
                    // focus is not also typed into the buffer
                    capture_typed_input,
                    focus_search_box,
                    handle_escape,
                )
                    .chain(),
            )
            .add_systems(
                Update,
                (tick_notice, update_search_display),
            );
    }
}

/// Spawns the search widget in the top-right corner
fn spawn_search_box(mut commands: Commands, asset_server: Res<AssetServer>) {
    let position_props = UiRect {
        right: Val::Px(WIDGET_MARGIN),
        top: Val::Px(TOOLBAR_MARGIN),
        left: Val::Auto,
        bottom: Val::Auto,
    };

    commands
        .spawn((
            create_widget_style(
                PositionType::Absolute,
                position_props,
                SearchBoxWidget,
                "SearchBox",
            ),
            Button,
        ))
        .with_children(|widget| {
            widget.spawn((
                Text::new("Search the atlas (/)"),
                TextFont {
                    font: asset_server.load(MONO_FONT_PATH),
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(WIDGET_LABEL_COLOR),
                SearchInputText,
            ));
            widget.spawn((
                Text::new(""),
                TextFont {
                    font: asset_server.load(DEFAULT_FONT_PATH),
                    font_size: WIDGET_TEXT_FONT_SIZE,
                    ..default()
                },
                TextColor(WIDGET_LABEL_COLOR),
                SearchNoticeText,
            ));
        });
}

/// Focus on click or on `/`
fn focus_search_box(
    interactions: Query<
        &Interaction,
        (Changed<Interaction>, With<SearchBoxWidget>),
    >,
    keys: Res<ButtonInput<KeyCode>>,
    mut search_box: ResMut<SearchBox>,
) {
    if keys.just_pressed(KeyCode::Slash) {
        search_box.focused = true;
    }
    for interaction in &interactions {
        if *interaction == Interaction::Pressed {
            search_box.focused = true;
        }
    }
}

/// Collects typed characters while focused and submits on Enter
fn capture_typed_input(
    mut keyboard_events: EventReader<KeyboardInput>,
    mut search_box: ResMut<SearchBox>,
    mut notice: ResMut<SearchNotice>,
    store: Res<LocationStore>,
    filters: Res<CategoryFilters>,
    mut select_requests: EventWriter<SelectLocation>,
) {
    if !search_box.focused {
        keyboard_events.clear();
        return;
    }

    for event in keyboard_events.read() {
        if !event.state.is_pressed() {
            continue;
        }
        match &event.logical_key {
            Key::Character(input) => {
                search_box.buffer.push_str(input.as_str());
            }
            Key::Space => {
                search_box.buffer.push(' ');
            }
            Key::Backspace => {
                search_box.buffer.pop();
            }
            Key::Enter => {
                submit_search(
                    &mut search_box,
                    &mut notice,
                    &store,
                    &filters,
                    &mut select_requests,
                );
            }
            _ => {}
        }
    }
}

fn submit_search(
    search_box: &mut SearchBox,
    notice: &mut SearchNotice,
    store: &LocationStore,
    filters: &CategoryFilters,
    select_requests: &mut EventWriter<SelectLocation>,
) {
    let term = search_box.buffer.clone();
    match search(store, &filters.0, &term) {
        SearchOutcome::Match(record) => {
            select_requests.write(SelectLocation {
                id: record.id.clone(),
            });
            search_box.focused = false;
            search_box.buffer.clear();
        }
        SearchOutcome::NoMatch => {
            notice.show(format!("No location matches '{}'", term.trim()));
        }
        SearchOutcome::TermTooShort => {
            notice.show(format!(
                "Type at least {MIN_SEARCH_TERM_LEN} characters"
            ));
        }
    }
}

/// Escape blurs the search box if it is focused, otherwise dismisses the
/// detail panel
fn handle_escape(
    keys: Res<ButtonInput<KeyCode>>,
    mut search_box: ResMut<SearchBox>,
    mut details: ResMut<CurrentDetails>,
) {
    if !keys.just_pressed(KeyCode::Escape) {
        return;
    }
    if search_box.focused {
        search_box.focused = false;
        search_box.buffer.clear();
    } else if details.is_visible() {
        details.dismiss();
    }
}

/// Expires the notice after its fixed duration
fn tick_notice(time: Res<Time>, mut notice: ResMut<SearchNotice>) {
    if let Some((_, timer)) = &mut notice.entry {
        if timer.tick(time.delta()).finished() {
            notice.entry = None;
        }
    }
}

/// Mirrors the buffer and notice into the widget's text
fn update_search_display(
    search_box: Res<SearchBox>,
    notice: Res<SearchNotice>,
    mut input_query: Query<
        (&mut Text, &mut TextColor),
        (With<SearchInputText>, Without<SearchNoticeText>),
    >,
    mut notice_query: Query<
        &mut Text,
        (With<SearchNoticeText>, Without<SearchInputText>),
    >,
) {
    if search_box.is_changed() {
        for (mut text, mut color) in &mut input_query {
            if search_box.focused {
                *text = Text::new(format!("{}_", search_box.buffer));
                *color = TextColor(WIDGET_VALUE_COLOR);
            } else if search_box.buffer.is_empty() {
                *text = Text::new("Search the atlas (/)");
                *color = TextColor(WIDGET_LABEL_COLOR);
            } else {
                *text = Text::new(search_box.buffer.clone());
                *color = TextColor(WIDGET_LABEL_COLOR);
            }
        }
    }
    if notice.is_changed() {
        for mut text in &mut notice_query {
            *text = Text::new(notice.text().unwrap_or("").to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn a_new_notice_replaces_the_old_timer() {
        let mut notice = SearchNotice::default();
        notice.show("first");
        if let Some((_, timer)) = &mut notice.entry {
            timer.tick(Duration::from_secs_f32(2.5));
        }

        notice.show("second");
        assert_eq!(notice.text(), Some("second"));

        // The replacement runs on a fresh clock
        if let Some((_, timer)) = &mut notice.entry {
            timer.tick(Duration::from_secs_f32(1.0));
            assert!(!timer.finished());
        }
    }
}
