//! Command line arguments for the application

use crate::core::errors::{validate_dataset_path, Result};
use crate::data::DataSource;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Default remote source for the location dataset
const DEFAULT_LOCATIONS_URL: &str =
    "https://falkrest-atlas.net/data/locations.json";

/// command line arguments for dataset selection and logging
#[derive(Parser, Debug, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// URL of the location dataset to fetch at startup
    #[arg(long = "locations-url", default_value = DEFAULT_LOCATIONS_URL)]
    pub locations_url: String,

    /// path to a local location dataset, overriding the URL
    #[arg(long = "locations-file")]
    pub locations_file: Option<PathBuf>,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Reject obviously unusable arguments before the window opens
    pub fn validate(&self) -> Result<()> {
        if let Some(path) = &self.locations_file {
            validate_dataset_path(path)?;
        }
        Ok(())
    }

    /// The dataset source these arguments select
    pub fn data_source(&self) -> DataSource {
        match &self.locations_file {
            Some(path) => DataSource::File(path.clone()),
            None => DataSource::Remote(self.locations_url.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_local_file_overrides_the_url() {
        let args = CliArgs::parse_from([
            "loremap",
            "--locations-file",
            "/tmp/locations.json",
        ]);
        assert!(matches!(args.data_source(), DataSource::File(_)));
    }

    #[test]
    fn the_default_source_is_remote() {
        let args = CliArgs::parse_from(["loremap"]);
        match args.data_source() {
            DataSource::Remote(url) => {
                assert_eq!(url, DEFAULT_LOCATIONS_URL);
            }
            DataSource::File(_) => panic!("expected the remote default"),
        }
    }
}
