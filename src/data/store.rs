//! The location store
//!
//! Owns the authoritative, immutable list of locations for the session. The
//! store is filled exactly once at startup: from a local JSON file or a
//! remote URL when one loads cleanly, otherwise from the embedded fallback
//! dataset. Loading never fails from the caller's point of view: every
//! failure path degrades to the fallback with a console warning.

use crate::core::errors::{DataContext, Result};
use crate::data::location::LocationRecord;
use bevy::prelude::*;
use log::{info, warn};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// The dataset compiled into the binary, used whenever the configured
/// source is unreachable or malformed.
pub const FALLBACK_DATASET: &str =
    include_str!("../../assets/data/locations.json");

/// How long to wait on the remote dataset before giving up on it
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Where to load the location dataset from.
#[derive(Debug, Clone)]
pub enum DataSource {
    Remote(String),
    File(PathBuf),
}

impl DataSource {
    fn describe(&self) -> String {
        match self {
            DataSource::Remote(url) => format!("remote source {url}"),
            DataSource::File(path) => format!("file {}", path.display()),
        }
    }
}

/// All loaded locations, indexed by id, iterable in load order.
#[derive(Resource)]
pub struct LocationStore {
    records: Vec<LocationRecord>,
    by_id: HashMap<String, usize>,
}

impl LocationStore {
    /// Build a store from already-deserialized records.
    ///
    /// Enforces the id-uniqueness invariant at the only mutation point:
    /// the first record with a given id wins, later duplicates are dropped
    /// with a warning.
    pub fn from_records(records: Vec<LocationRecord>) -> LocationStore {
        let mut store = LocationStore {
            records: Vec::with_capacity(records.len()),
            by_id: HashMap::with_capacity(records.len()),
        };
        for record in records {
            if store.by_id.contains_key(&record.id) {
                warn!(
                    "Dropping location with duplicate id '{}' ('{}')",
                    record.id, record.name
                );
                continue;
            }
            store.by_id.insert(record.id.clone(), store.records.len());
            store.records.push(record);
        }
        store
    }

    /// Parse a JSON payload into a store.
    pub fn parse(json: &str) -> Result<LocationStore> {
        let records: Vec<LocationRecord> = serde_json::from_str(json)
            .with_data_context("parse location dataset")?;
        Ok(LocationStore::from_records(records))
    }

    /// Load the dataset from the configured source, falling back to the
    /// embedded dataset on any failure. Never returns an error.
    pub fn load(source: &DataSource) -> LocationStore {
        match Self::try_load(source) {
            Ok(store) => {
                info!(
                    "Loaded {} locations from {}",
                    store.len(),
                    source.describe()
                );
                store
            }
            Err(err) => {
                warn!(
                    "Could not load locations from {}: {:#}. \
                     Using the embedded fallback dataset.",
                    source.describe(),
                    err
                );
                Self::fallback()
            }
        }
    }

    /// The embedded four-location dataset.
    pub fn fallback() -> LocationStore {
        // Compiled-in data, pinned by tests
        Self::parse(FALLBACK_DATASET)
            .expect("embedded fallback dataset must parse")
    }

    fn try_load(source: &DataSource) -> Result<LocationStore> {
        let payload = match source {
            DataSource::Remote(url) => fetch_dataset(url)?,
            DataSource::File(path) => std::fs::read_to_string(path)
                .with_data_context("read location dataset file")?,
        };
        Self::parse(&payload)
    }

    /// Look up a location by its stable id.
    pub fn find_by_id(&self, id: &str) -> Option<&LocationRecord> {
        self.by_id.get(id).map(|&index| &self.records[index])
    }

    /// All locations in load order.
    pub fn iter(&self) -> impl Iterator<Item = &LocationRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// GET the dataset over HTTP, treating non-success statuses as errors so
/// they take the fallback path like network failures do.
fn fetch_dataset(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .with_data_context("build HTTP client")?;
    let response = client
        .get(url)
        .send()
        .with_data_context("fetch location dataset")?
        .error_for_status()
        .with_data_context("fetch location dataset")?;
    response.text().with_data_context("read location dataset body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::location::Category;

    #[test]
    fn fallback_dataset_parses_with_four_records() {
        let store = LocationStore::fallback();
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn find_by_id_resolves_every_loaded_id() {
        let store = LocationStore::fallback();
        let ids: Vec<String> =
            store.iter().map(|record| record.id.clone()).collect();
        for id in &ids {
            let record = store.find_by_id(id);
            assert_eq!(record.map(|r| r.id.as_str()), Some(id.as_str()));
        }
    }

    #[test]
    fn find_by_id_returns_none_for_absent_ids() {
        let store = LocationStore::fallback();
        assert!(store.find_by_id("sunken-isles").is_none());
        assert!(store.find_by_id("").is_none());
    }

    #[test]
    fn iteration_preserves_load_order() {
        let store = LocationStore::fallback();
        let ids: Vec<&str> =
            store.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(
            ids,
            ["falkrest", "highcrown", "emberwood", "royal-palace"]
        );
    }

    #[test]
    fn duplicate_ids_keep_the_first_record() {
        let json = r#"[
            {"id": "twin", "name": "First", "category": "city",
             "coordinates": {"x": 1.0, "y": 2.0}, "description": ""},
            {"id": "twin", "name": "Second", "category": "region",
             "coordinates": {"x": 3.0, "y": 4.0}, "description": ""}
        ]"#;
        let store = LocationStore::parse(json).unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.find_by_id("twin").unwrap().name, "First");
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        assert!(LocationStore::parse("{not json").is_err());
        assert!(LocationStore::parse("{\"id\": \"lonely\"}").is_err());
    }

    #[test]
    fn unknown_category_records_are_kept() {
        let json = r#"[
            {"id": "rift", "name": "The Rift", "category": "anomaly",
             "coordinates": {"x": 10.0, "y": 10.0}, "description": "?"}
        ]"#;
        let store = LocationStore::parse(json).unwrap();
        let record = store.find_by_id("rift").unwrap();
        assert_eq!(record.category, Category::Unknown);
    }

    #[test]
    fn fallback_highcrown_record_matches_the_campaign_data() {
        let store = LocationStore::fallback();
        let highcrown = store.find_by_id("highcrown").unwrap();
        assert_eq!(highcrown.name, "Highcrown");
        assert_eq!(highcrown.category, Category::City);
        assert!(highcrown.attributes.iter().any(|attribute| {
            attribute.label == "Population" && attribute.value == "100,000"
        }));
        assert!(highcrown.related.contains(&"falkrest".to_string()));
    }
}
