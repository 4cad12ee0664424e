use serde::{Deserialize, Serialize};

/// Keyword that selects every value of a dropdown filter
pub const ALL_SENTINEL: &str = "all";

/// One dropdown selection: everything, or one exact value.
///
/// Matching against `Only` is exact and case-sensitive; district and
/// category values are literal strings from the data, so "Kathmandu" and
/// "kathmandu" are different selections. On the wire a selection is a
/// plain string, with the `all` keyword standing for [`Selection::All`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The "all" sentinel
    All,
    /// An exact value
    Only(String),
}

impl Serialize for Selection {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Selection::All => serializer.serialize_str(ALL_SENTINEL),
            Selection::Only(value) => serializer.serialize_str(value),
        }
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Selection::from_param(Some(&value)))
    }
}

impl Selection {
    /// Parse a selection from a request parameter. The `all` keyword
    /// (any casing) and the absent parameter both mean no restriction.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            None => Selection::All,
            Some(value) if value.eq_ignore_ascii_case(ALL_SENTINEL) => Selection::All,
            Some(value) => Selection::Only(value.to_string()),
        }
    }

    /// Whether a candidate value passes this selection
    pub fn matches(&self, candidate: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(value) => value == candidate,
        }
    }
}

impl Default for Selection {
    fn default() -> Self {
        Selection::All
    }
}

/// The user's current filter input. Pure transient state: recomputed from
/// the request on every change, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// District dropdown selection
    #[serde(default)]
    pub district: Selection,

    /// Category dropdown selection
    #[serde(default)]
    pub category: Selection,

    /// Free-text query over name and tips; empty matches everything
    #[serde(default)]
    pub query: String,
}

impl FilterCriteria {
    /// Criteria with no restrictions
    pub fn unrestricted() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_param() {
        assert_eq!(Selection::from_param(None), Selection::All);
        assert_eq!(Selection::from_param(Some("all")), Selection::All);
        assert_eq!(Selection::from_param(Some("All")), Selection::All);
        assert_eq!(
            Selection::from_param(Some("Kathmandu")),
            Selection::Only("Kathmandu".to_string())
        );
    }

    #[test]
    fn test_only_matches_exact_case() {
        let selection = Selection::Only("Kathmandu".to_string());
        assert!(selection.matches("Kathmandu"));
        assert!(!selection.matches("kathmandu"));
        assert!(!selection.matches("Kathmandu "));
    }

    #[test]
    fn test_all_matches_everything() {
        assert!(Selection::All.matches(""));
        assert!(Selection::All.matches("anything"));
    }

    #[test]
    fn test_selection_wire_mapping() {
        let all: Selection = serde_json::from_str("\"all\"").unwrap();
        assert_eq!(all, Selection::All);
        assert_eq!(serde_json::to_string(&all).unwrap(), "\"all\"");

        let only: Selection = serde_json::from_str("\"Kaski\"").unwrap();
        assert_eq!(only, Selection::Only("Kaski".to_string()));
        assert_eq!(serde_json::to_string(&only).unwrap(), "\"Kaski\"");
    }

    #[test]
    fn test_default_criteria_is_unrestricted() {
        let criteria = FilterCriteria::default();
        assert_eq!(criteria.district, Selection::All);
        assert_eq!(criteria.category, Selection::All);
        assert!(criteria.query.is_empty());
    }
}
