//!    Error handling
//!
//! This module provides error handling using anyhow.
//! As an application (not a library), we prioritize ease of use over
//! complex error type hierarchies; nothing outside dataset loading can
//! fail in a way worth modelling with dedicated error types.

#[allow(unused_imports)]
pub use anyhow::{anyhow, bail, ensure, Error};
use anyhow::Context;

/// Result type alias for convenience throughout the application
pub type Result<T> = anyhow::Result<T>;

/// Helper for attaching dataset-operation context to an error
pub trait DataContext<T> {
    /// Describe which dataset operation failed
    fn with_data_context(self, operation: &str) -> Result<T>;
}

impl<T, E> DataContext<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn with_data_context(self, operation: &str) -> Result<T> {
        self.with_context(|| format!("Failed to {operation}"))
    }
}

/// Validation for a CLI-supplied dataset file path
pub fn validate_dataset_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<()> {
    let path = path.as_ref();

    ensure!(
        path.exists(),
        "Location dataset does not exist: {}",
        path.display()
    );
    ensure!(
        path.is_file(),
        "Location dataset must be a file: {}",
        path.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_context_wraps_the_operation_name() {
        let result: std::result::Result<(), std::io::Error> =
            Err(std::io::Error::other("boom"));
        let err = result.with_data_context("read location dataset file");
        assert!(err
            .unwrap_err()
            .to_string()
            .contains("read location dataset file"));
    }

    #[test]
    fn missing_dataset_path_is_rejected() {
        assert!(validate_dataset_path("/no/such/locations.json").is_err());
    }
}
