//! Catalog loading.
//!
//! The catalog source is a JSON payload shaped as
//! `{"places": [...], "itineraries": [...]}`. A missing or malformed
//! source always recovers to the empty catalog; the caller never sees an
//! error from this layer. Input order is preserved and values are taken
//! literally: no deduplication, no coordinate validation, no casing
//! normalization of district or category labels.

use ghumfir_core::models::Catalog;
use std::fs;
use std::path::Path;

/// Loader for the session catalog
pub struct CatalogStore;

impl CatalogStore {
    /// Load a catalog from a JSON file, empty on any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Catalog {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => {
                let catalog = Self::from_json_str(&content);
                tracing::info!(
                    path = %path.display(),
                    places = catalog.places.len(),
                    itineraries = catalog.itineraries.len(),
                    "Loaded catalog"
                );
                catalog
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Catalog source unavailable, starting with an empty catalog"
                );
                Catalog::default()
            }
        }
    }

    /// Parse a catalog from a JSON string, empty on failure.
    pub fn from_json_str(content: &str) -> Catalog {
        match serde_json::from_str(content) {
            Ok(catalog) => catalog,
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Malformed catalog source, starting with an empty catalog"
                );
                Catalog::default()
            }
        }
    }
}
