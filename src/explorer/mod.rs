//! Explorer state: filters, search, and the select-location flow
//!
//! These modules own the interactive state of the atlas. They are kept as
//! plain types with accessor methods (wrapped in resources) so the state
//! machines can be unit tested without a running app.

pub mod filters;
pub mod search;
pub mod selection;

pub use filters::{CategoryFilters, FilterState};
pub use search::{search, SearchOutcome};
pub use selection::{ActiveHighlight, SelectLocation, SelectionPlugin};
