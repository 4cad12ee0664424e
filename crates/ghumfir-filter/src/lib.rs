//! Ghumfir Filter - The filter-and-lookup layer over the catalog
//!
//! Given the immutable catalog and the user's current criteria, this crate
//! produces the place subset to display, resolves itinerary stops to place
//! records, and derives the distinct district/category values that populate
//! the filter dropdowns.

pub mod engine;
pub mod models;

pub use engine::{distinct_categories, distinct_districts, filter_places, resolve_stops};
pub use models::{FilterCriteria, Selection, ALL_SENTINEL};
