//! Category filter state
//!
//! Tracks which marker layers are currently visible. The state is a plain
//! set of active categories owned by the `CategoryFilters` resource; the
//! "All" toggle in the toolbar is a pure function of that set
//! (`is_all_active`), deliberately never stored on its own so it cannot
//! drift out of sync when a single category is toggled directly.
//!
//! `Unknown`-category markers belong to no layer and are untouched by every
//! operation here, including "All". That mirrors the source material and is
//! pinned by a test rather than silently corrected.

use crate::data::{Category, KNOWN_CATEGORIES};
use bevy::prelude::*;
use std::collections::HashSet;

/// The set of currently active (visible) marker categories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active: HashSet<Category>,
}

impl Default for FilterState {
    /// All four known categories start visible.
    fn default() -> Self {
        FilterState {
            active: KNOWN_CATEGORIES.into_iter().collect(),
        }
    }
}

impl FilterState {
    /// Show or hide a single category's layer. No-op for `Unknown`.
    pub fn set_category(&mut self, category: Category, visible: bool) {
        if !category.is_known() {
            return;
        }
        if visible {
            self.active.insert(category);
        } else {
            self.active.remove(&category);
        }
    }

    /// Show or hide all four known layers in one operation.
    pub fn set_all(&mut self, visible: bool) {
        for category in KNOWN_CATEGORIES {
            self.set_category(category, visible);
        }
    }

    /// Whether a category's layer is currently visible.
    /// Always false for `Unknown`.
    pub fn is_active(&self, category: Category) -> bool {
        self.active.contains(&category)
    }

    /// Recomputed on every call so the "All" toggle can never show a stale
    /// state after an individual category changes.
    pub fn is_all_active(&self) -> bool {
        KNOWN_CATEGORIES
            .into_iter()
            .all(|category| self.active.contains(&category))
    }
}

/// Resource wrapper around the active filter set
#[derive(Resource, Default)]
pub struct CategoryFilters(pub FilterState);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_categories_start_active() {
        let filters = FilterState::default();
        assert!(filters.is_all_active());
        for category in KNOWN_CATEGORIES {
            assert!(filters.is_active(category));
        }
    }

    #[test]
    fn is_all_active_tracks_the_set_exactly() {
        let mut filters = FilterState::default();

        filters.set_category(Category::Landmark, false);
        assert!(!filters.is_all_active());

        filters.set_category(Category::Landmark, true);
        assert!(filters.is_all_active());

        filters.set_all(false);
        assert!(!filters.is_all_active());
        for category in KNOWN_CATEGORIES {
            assert!(!filters.is_active(category));
        }

        // Re-enabling every category one by one flips "all" back on only
        // at the last step.
        for (index, category) in KNOWN_CATEGORIES.into_iter().enumerate() {
            filters.set_category(category, true);
            assert_eq!(
                filters.is_all_active(),
                index == KNOWN_CATEGORIES.len() - 1
            );
        }
    }

    #[test]
    fn toggling_is_idempotent() {
        let mut filters = FilterState::default();
        filters.set_category(Category::City, false);
        filters.set_category(Category::City, false);
        assert!(!filters.is_active(Category::City));
        filters.set_category(Category::City, true);
        filters.set_category(Category::City, true);
        assert!(filters.is_active(Category::City));
    }

    #[test]
    fn unknown_is_never_affected_by_any_filter_operation() {
        let mut filters = FilterState::default();
        assert!(!filters.is_active(Category::Unknown));

        filters.set_category(Category::Unknown, true);
        assert!(!filters.is_active(Category::Unknown));

        filters.set_all(true);
        assert!(!filters.is_active(Category::Unknown));
        // "All" is about the four known categories only
        assert!(filters.is_all_active());
    }
}
