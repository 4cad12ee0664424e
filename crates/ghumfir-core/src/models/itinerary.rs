use serde::{Deserialize, Serialize};

use super::PlaceId;

/// A suggested multi-day route through catalog places
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Itinerary {
    /// Display name, unique in practice but not enforced
    pub name: String,

    /// Suggested duration in days
    pub days: u32,

    /// Place ids in visit order. Ids are not required to resolve; a
    /// dangling reference is skipped when stops are resolved for display.
    pub stops: Vec<PlaceId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_itinerary_wire_shape() {
        let json = r#"{"name": "Valley Highlights", "days": 3, "stops": [1, 2, 5]}"#;
        let itinerary: Itinerary = serde_json::from_str(json).unwrap();
        assert_eq!(itinerary.name, "Valley Highlights");
        assert_eq!(itinerary.days, 3);
        assert_eq!(itinerary.stops, vec![PlaceId(1), PlaceId(2), PlaceId(5)]);
    }
}
