//! Location data: records, categories, and the session store

pub mod location;
pub mod store;

pub use location::{
    Attribute, Category, LocationRecord, MapPoint, KNOWN_CATEGORIES,
};
pub use store::{DataSource, LocationStore};
