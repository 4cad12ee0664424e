pub mod identity;
pub mod itinerary;
pub mod place;

pub use identity::{AuthProvider, Identity};
pub use itinerary::Itinerary;
pub use place::{Catalog, Coordinates, Place, PlaceId};
