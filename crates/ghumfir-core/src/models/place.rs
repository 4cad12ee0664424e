use serde::{Deserialize, Serialize};

/// Unique identifier for a place
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlaceId(pub u64);

/// Geographic position of a place
///
/// Kept in the flat `lat`/`lng` wire shape the catalog files use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees
    pub lat: f64,

    /// Longitude in degrees
    pub lng: f64,
}

impl Coordinates {
    /// Whether the position lies within valid latitude/longitude ranges.
    ///
    /// The catalog loader does not enforce this; rendering layers that
    /// place markers should check it themselves.
    pub fn in_range(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

/// A visitable place in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Unique identifier
    pub id: PlaceId,

    /// Display name
    pub name: String,

    /// Administrative district, as written in the source data
    pub district: String,

    /// Category label, as written in the source data
    pub category: String,

    /// Long-form description
    pub description: String,

    /// Opening hours text
    pub hours: String,

    /// Entry fee text
    pub fees: String,

    /// Optional visitor tips; part of the free-text search surface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tips: Option<String>,

    /// Geographic position
    #[serde(flatten)]
    pub coordinates: Coordinates,

    /// Image references
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<String>,
}

/// The full in-memory dataset for a session: places and itineraries,
/// in source order, never mutated after load.
///
/// District and category values are NOT normalized; two entries differing
/// only in casing are distinct values throughout the system.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub places: Vec<Place>,

    #[serde(default)]
    pub itineraries: Vec<super::Itinerary>,
}

impl Catalog {
    /// Whether the catalog holds no data at all
    pub fn is_empty(&self) -> bool {
        self.places.is_empty() && self.itineraries.is_empty()
    }
}
