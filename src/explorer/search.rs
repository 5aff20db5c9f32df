//! Name search over the visible locations
//!
//! Search is a pure lookup: it reads the store and the current filter state
//! and reports an outcome to the caller. It never pans the camera, never
//! touches the panel, and never mutates filter state. The caller decides
//! what a match means (the HUD turns a `Match` into a select-location
//! request and a `NoMatch` into a transient notice).

use crate::core::settings::MIN_SEARCH_TERM_LEN;
use crate::data::{LocationRecord, LocationStore};
use crate::explorer::filters::FilterState;

/// What a search attempt produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchOutcome<'a> {
    /// First record in load order whose name contains the term
    Match(&'a LocationRecord),
    /// No visible location name contains the term
    NoMatch,
    /// Term under the minimum length; no lookup was performed
    TermTooShort,
}

/// Case-insensitive substring match on location names, restricted to
/// records whose category is currently active. Ties are broken only by
/// load order: the first matching record wins.
pub fn search<'a>(
    store: &'a LocationStore,
    filters: &FilterState,
    term: &str,
) -> SearchOutcome<'a> {
    let term = term.trim();
    if term.chars().count() < MIN_SEARCH_TERM_LEN {
        return SearchOutcome::TermTooShort;
    }

    let needle = term.to_lowercase();
    store
        .iter()
        .filter(|record| filters.is_active(record.category))
        .find(|record| record.name.to_lowercase().contains(&needle))
        .map_or(SearchOutcome::NoMatch, SearchOutcome::Match)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Category;

    #[test]
    fn short_terms_perform_no_lookup() {
        let store = LocationStore::fallback();
        let filters = FilterState::default();
        assert_eq!(
            search(&store, &filters, "h"),
            SearchOutcome::TermTooShort
        );
        assert_eq!(search(&store, &filters, ""), SearchOutcome::TermTooShort);
        assert_eq!(
            search(&store, &filters, "  h  "),
            SearchOutcome::TermTooShort
        );
    }

    #[test]
    fn unmatched_terms_report_no_match_without_touching_filters() {
        let store = LocationStore::fallback();
        let filters = FilterState::default();
        assert_eq!(search(&store, &filters, "xy"), SearchOutcome::NoMatch);
        // The filter set is exactly as it was
        assert!(filters.is_all_active());
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        let store = LocationStore::fallback();
        let filters = FilterState::default();
        match search(&store, &filters, "hIgHcRoWn") {
            SearchOutcome::Match(record) => {
                assert_eq!(record.id, "highcrown");
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn the_first_record_in_load_order_wins() {
        // "Falkrest" appears in both the nation's and the palace's related
        // names, but as a *name* substring it hits the nation first.
        let store = LocationStore::fallback();
        let filters = FilterState::default();
        match search(&store, &filters, "al") {
            SearchOutcome::Match(record) => {
                // "Kingdom of Falkrest" is loaded before "Royal Palace"
                assert_eq!(record.id, "falkrest");
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }

    #[test]
    fn filtered_out_categories_are_invisible_to_search() {
        let store = LocationStore::fallback();
        let mut filters = FilterState::default();
        filters.set_category(Category::Landmark, false);

        // "Royal Palace" is a landmark; with the layer off the name match
        // must not surface.
        assert_eq!(
            search(&store, &filters, "Royal Palace"),
            SearchOutcome::NoMatch
        );

        filters.set_category(Category::Landmark, true);
        match search(&store, &filters, "Royal Palace") {
            SearchOutcome::Match(record) => {
                assert_eq!(record.id, "royal-palace");
            }
            other => panic!("expected a match, got {other:?}"),
        }
    }
}
