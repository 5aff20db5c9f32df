//! Location records and the map coordinate space
//!
//! This module provides the core data types for the atlas: one
//! `LocationRecord` per point of interest, the fixed category enumeration,
//! and the `MapPoint` coordinate type. Map space is the coordinate system of
//! the world-map image itself: the origin (0,0) is at the top-left corner of
//! the image, x grows to the right and y grows downward, in image pixels.
//! When placing entities in the engine's world space (y-up, centered) we
//! translate through `MapPoint::to_world`.

use crate::core::settings::{MAP_PLANE_HEIGHT, MAP_PLANE_WIDTH};
use bevy::math::Vec2;
use serde::Deserialize;
use std::fmt;

/// The fixed set of location categories.
///
/// Each known category is one marker layer that can be shown or hidden as a
/// unit. Payload values outside the four known names deserialize to
/// `Unknown`, which gets a generic marker glyph and belongs to no filterable
/// layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Nation,
    City,
    Region,
    Landmark,
    #[serde(other)]
    Unknown,
}

/// The four known categories, in display order.
pub const KNOWN_CATEGORIES: [Category; 4] = [
    Category::Nation,
    Category::City,
    Category::Region,
    Category::Landmark,
];

impl Category {
    /// Singular label for the detail panel
    pub fn label(self) -> &'static str {
        match self {
            Category::Nation => "Nation",
            Category::City => "City",
            Category::Region => "Region",
            Category::Landmark => "Landmark",
            Category::Unknown => "Uncharted",
        }
    }

    /// Plural label for filter toolbar buttons
    pub fn plural_label(self) -> &'static str {
        match self {
            Category::Nation => "Nations",
            Category::City => "Cities",
            Category::Region => "Regions",
            Category::Landmark => "Landmarks",
            Category::Unknown => "Uncharted",
        }
    }

    /// True for the four filterable categories, false for `Unknown`
    pub fn is_known(self) -> bool {
        !matches!(self, Category::Unknown)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A point in map space.
///
/// Coordinates are in the world-map image's own pixel units, top-left
/// origin, y-down. This is the coordinate system location data is authored
/// in; it never changes with pan or zoom.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct MapPoint {
    pub x: f32,
    pub y: f32,
}

impl MapPoint {
    pub const fn new(x: f32, y: f32) -> MapPoint {
        MapPoint { x, y }
    }

    /// The center of the map plane, where the camera starts.
    pub fn plane_center() -> MapPoint {
        MapPoint::new(MAP_PLANE_WIDTH / 2.0, MAP_PLANE_HEIGHT / 2.0)
    }

    /// Convert to engine world space (y-up, origin at the plane center).
    pub fn to_world(self) -> Vec2 {
        Vec2::new(
            self.x - MAP_PLANE_WIDTH / 2.0,
            MAP_PLANE_HEIGHT / 2.0 - self.y,
        )
    }

    /// Convert an engine world-space position back into map space.
    pub fn from_world(world: Vec2) -> MapPoint {
        MapPoint::new(
            world.x + MAP_PLANE_WIDTH / 2.0,
            MAP_PLANE_HEIGHT / 2.0 - world.y,
        )
    }
}

/// One labeled attribute row in a location's detail panel.
///
/// Attributes are an ordered list rather than a map because display order is
/// part of the data contract and JSON object key order is not.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Attribute {
    pub label: String,
    pub value: String,
}

/// One point of interest on the campaign map.
///
/// Records are loaded once at startup and immutable for the session; the
/// `id` is the stable handle used for cross-links and marker highlighting.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LocationRecord {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub coordinates: MapPoint,
    /// Asset path of the location's illustration; the detail panel shows a
    /// placeholder when this is absent or fails to load.
    #[serde(default)]
    pub image: Option<String>,
    pub description: String,
    #[serde(default)]
    pub attributes: Vec<Attribute>,
    /// Ids of related locations, in display order. Entries that do not
    /// resolve against the loaded set are skipped at render time.
    #[serde(default)]
    pub related: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_category_string_deserializes_to_unknown() {
        let category: Category =
            serde_json::from_str("\"floating-isle\"").unwrap();
        assert_eq!(category, Category::Unknown);
        assert!(!category.is_known());
    }

    #[test]
    fn known_categories_deserialize_lowercase() {
        for (raw, expected) in [
            ("\"nation\"", Category::Nation),
            ("\"city\"", Category::City),
            ("\"region\"", Category::Region),
            ("\"landmark\"", Category::Landmark),
        ] {
            let category: Category = serde_json::from_str(raw).unwrap();
            assert_eq!(category, expected);
        }
    }

    #[test]
    fn map_point_world_round_trip() {
        let point = MapPoint::new(980.0, 540.0);
        let world = point.to_world();
        assert_eq!(MapPoint::from_world(world), point);
    }

    #[test]
    fn plane_center_maps_to_world_origin() {
        assert_eq!(MapPoint::plane_center().to_world(), Vec2::ZERO);
    }
}
