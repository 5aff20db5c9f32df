//! The select-location operation and highlight state
//!
//! Marker clicks, successful searches, and related-location links all end
//! up here as a `SelectLocation` event. One system turns that event into
//! the three effects that always travel together: present the record in
//! the detail panel, ask the camera to pan to its coordinates, and
//! highlight its marker. Keeping a single entry point guarantees the three
//! can never drift apart across the different ways of selecting a location.

use crate::core::settings::HIGHLIGHT_DURATION_SECS;
use crate::data::LocationStore;
use crate::rendering::cameras::PanToLocation;
use crate::ui::panes::detail_pane::{CurrentDetails, PresentedLocation};
use bevy::prelude::*;
use std::time::Duration;

/// Request to select the location with the given id.
#[derive(Event, Debug, Clone)]
pub struct SelectLocation {
    pub id: String,
}

/// The at-most-one currently highlighted marker.
///
/// Highlighting is transient: it expires on its own after
/// `HIGHLIGHT_DURATION_SECS`, and beginning a new highlight replaces the
/// previous one outright (the old timer is dropped, not left running).
#[derive(Resource, Default)]
pub struct ActiveHighlight {
    entry: Option<HighlightEntry>,
}

struct HighlightEntry {
    id: String,
    timer: Timer,
}

impl ActiveHighlight {
    /// Highlight the marker for `id`, replacing any current highlight.
    pub fn begin(&mut self, id: &str) {
        self.entry = Some(HighlightEntry {
            id: id.to_string(),
            timer: Timer::from_seconds(
                HIGHLIGHT_DURATION_SECS,
                TimerMode::Once,
            ),
        });
    }

    /// Advance the expiry timer, clearing the highlight once it fires.
    pub fn tick(&mut self, delta: Duration) {
        if let Some(entry) = &mut self.entry {
            if entry.timer.tick(delta).finished() {
                self.entry = None;
            }
        }
    }

    /// Id of the currently highlighted marker, if any.
    pub fn current_id(&self) -> Option<&str> {
        self.entry.as_ref().map(|entry| entry.id.as_str())
    }

    pub fn is_highlighted(&self, id: &str) -> bool {
        self.current_id() == Some(id)
    }
}

/// Plugin wiring the select-location flow and highlight expiry
pub struct SelectionPlugin;

impl Plugin for SelectionPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<SelectLocation>()
            .init_resource::<ActiveHighlight>()
            .add_systems(
                Update,
                (handle_select_requests, tick_highlight),
            );
    }
}

/// Resolve selection requests into panel + pan + highlight, as one unit
pub fn handle_select_requests(
    mut requests: EventReader<SelectLocation>,
    store: Res<LocationStore>,
    mut details: ResMut<CurrentDetails>,
    mut highlight: ResMut<ActiveHighlight>,
    mut pan_requests: EventWriter<PanToLocation>,
) {
    for request in requests.read() {
        let Some(record) = store.find_by_id(&request.id) else {
            warn!(
                "Ignoring selection of unknown location id '{}'",
                request.id
            );
            continue;
        };
        details.present(PresentedLocation::from_record(&store, record));
        pan_requests.write(PanToLocation {
            target: record.coordinates,
        });
        highlight.begin(&record.id);
    }
}

/// Expire the highlight after its fixed duration
fn tick_highlight(time: Res<Time>, mut highlight: ResMut<ActiveHighlight>) {
    highlight.tick(time.delta());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(value: f32) -> Duration {
        Duration::from_secs_f32(value)
    }

    #[test]
    fn highlight_expires_after_the_fixed_duration() {
        let mut highlight = ActiveHighlight::default();
        highlight.begin("highcrown");
        assert!(highlight.is_highlighted("highcrown"));

        highlight.tick(secs(1.0));
        assert!(highlight.is_highlighted("highcrown"));

        highlight.tick(secs(1.1));
        assert_eq!(highlight.current_id(), None);
    }

    #[test]
    fn a_new_highlight_replaces_the_old_one_and_its_timer() {
        let mut highlight = ActiveHighlight::default();
        highlight.begin("highcrown");
        highlight.tick(secs(1.5));

        // Re-highlighting within the window restarts the clock for the new
        // marker only; the old timer must not fire half a second later.
        highlight.begin("falkrest");
        assert!(highlight.is_highlighted("falkrest"));
        assert!(!highlight.is_highlighted("highcrown"));

        highlight.tick(secs(1.0));
        assert!(highlight.is_highlighted("falkrest"));

        highlight.tick(secs(1.1));
        assert_eq!(highlight.current_id(), None);
    }

    #[test]
    fn selecting_a_location_presents_pans_and_highlights_together() {
        let mut app = App::new();
        app.add_event::<SelectLocation>()
            .add_event::<PanToLocation>()
            .insert_resource(LocationStore::fallback())
            .init_resource::<CurrentDetails>()
            .init_resource::<ActiveHighlight>()
            .add_systems(Update, handle_select_requests);

        app.world_mut().send_event(SelectLocation {
            id: "highcrown".to_string(),
        });
        app.update();

        let details = app.world().resource::<CurrentDetails>();
        let presented = details.record().expect("panel should show a record");
        assert_eq!(presented.name, "Highcrown");
        assert!(details.is_visible());
        assert!(presented.attributes.iter().any(|(label, value)| {
            label == "Population" && value == "100,000"
        }));
        assert!(presented
            .related
            .iter()
            .any(|link| link.name == "Kingdom of Falkrest"));

        let highlight = app.world().resource::<ActiveHighlight>();
        assert_eq!(highlight.current_id(), Some("highcrown"));

        let pan_events = app.world().resource::<Events<PanToLocation>>();
        let mut cursor = pan_events.get_cursor();
        let targets: Vec<_> = cursor.read(pan_events).collect();
        assert_eq!(targets.len(), 1);
        assert_eq!(targets[0].target.x, 980.0);
        assert_eq!(targets[0].target.y, 540.0);
    }

    #[test]
    fn selecting_an_unknown_id_changes_nothing() {
        let mut app = App::new();
        app.add_event::<SelectLocation>()
            .add_event::<PanToLocation>()
            .insert_resource(LocationStore::fallback())
            .init_resource::<CurrentDetails>()
            .init_resource::<ActiveHighlight>()
            .add_systems(Update, handle_select_requests);

        app.world_mut().send_event(SelectLocation {
            id: "sunken-isles".to_string(),
        });
        app.update();

        assert!(app.world().resource::<CurrentDetails>().record().is_none());
        assert_eq!(
            app.world().resource::<ActiveHighlight>().current_id(),
            None
        );
    }
}
