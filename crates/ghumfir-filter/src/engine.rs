//! Filtering and lookup over the catalog.
//!
//! Everything here is a pure function over slices: no caching, no
//! indexing. The dataset is small and session-scoped, so filters are
//! re-evaluated from scratch on every criteria change.

use ghumfir_core::models::{Place, PlaceId};
use std::collections::BTreeSet;

use crate::models::FilterCriteria;

/// Whether one place passes the three-part criteria predicate.
///
/// The free-text surface is exactly `"<name> <tips>"`, case-folded;
/// description is deliberately not searched.
fn matches(place: &Place, criteria: &FilterCriteria) -> bool {
    if !criteria.district.matches(&place.district) {
        return false;
    }

    if !criteria.category.matches(&place.category) {
        return false;
    }

    if !criteria.query.is_empty() {
        let haystack = format!(
            "{} {}",
            place.name,
            place.tips.as_deref().unwrap_or_default()
        )
        .to_lowercase();
        if !haystack.contains(&criteria.query.to_lowercase()) {
            return false;
        }
    }

    true
}

/// Filter places by the current criteria.
///
/// Returns an order-preserving subsequence of the input: every returned
/// place satisfies all three criteria, and nothing is resorted.
pub fn filter_places(places: &[Place], criteria: &FilterCriteria) -> Vec<Place> {
    places.iter().filter(|place| matches(place, criteria)).cloned().collect()
}

/// Resolve itinerary stop ids to place records, in stored stop order.
///
/// A stop id with no matching place is dropped silently; a duplicated
/// stop id yields one output entry per occurrence.
pub fn resolve_stops(stops: &[PlaceId], places: &[Place]) -> Vec<Place> {
    stops
        .iter()
        .filter_map(|stop| places.iter().find(|place| place.id == *stop))
        .cloned()
        .collect()
}

/// Distinct district values observed in the catalog, sorted.
///
/// Values are literal: no casing or whitespace normalization. The caller
/// prepends the `all` sentinel when building dropdown choices.
pub fn distinct_districts(places: &[Place]) -> Vec<String> {
    let set: BTreeSet<&str> = places.iter().map(|place| place.district.as_str()).collect();
    set.into_iter().map(String::from).collect()
}

/// Distinct category values observed in the catalog, sorted.
pub fn distinct_categories(places: &[Place]) -> Vec<String> {
    let set: BTreeSet<&str> = places.iter().map(|place| place.category.as_str()).collect();
    set.into_iter().map(String::from).collect()
}
