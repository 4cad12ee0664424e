//! UI label translations.
//!
//! A translation table maps a language name to a map of literal labels to
//! localized labels. Lookups that miss at any level fall back to the
//! literal key unchanged, so an incomplete table degrades to English
//! labels rather than failing.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Language-keyed label translation table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    tables: HashMap<String, HashMap<String, String>>,
}

impl Translations {
    /// Load a translation table from a JSON file.
    ///
    /// A missing or malformed file yields an empty table; every lookup
    /// then resolves to its key.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => Self::from_json_str(&content),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Translation file unavailable, using identity translations"
                );
                Self::default()
            }
        }
    }

    /// Parse a translation table from a JSON string, empty on failure.
    pub fn from_json_str(content: &str) -> Self {
        match serde_json::from_str(content) {
            Ok(tables) => Self { tables },
            Err(e) => {
                tracing::warn!(
                    error = %e,
                    "Malformed translation data, using identity translations"
                );
                Self::default()
            }
        }
    }

    /// Localize a label for a language, falling back to the label itself.
    pub fn translate<'a>(&'a self, lang: &str, key: &'a str) -> &'a str {
        self.tables
            .get(lang)
            .and_then(|table| table.get(key))
            .map(String::as_str)
            .unwrap_or(key)
    }

    /// The full label table for one language, empty if the language is
    /// unknown. Consumers apply the identity fallback on their side.
    pub fn table_for(&self, lang: &str) -> HashMap<String, String> {
        self.tables.get(lang).cloned().unwrap_or_default()
    }

    /// Languages with at least one translated label
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.tables.keys().cloned().collect();
        languages.sort();
        languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Translations {
        Translations::from_json_str(
            r#"{
                "Nepali": {"District": "जिल्ला", "Places": "ठाउँहरू"},
                "English": {}
            }"#,
        )
    }

    #[test]
    fn test_translate_hit() {
        let translations = sample();
        assert_eq!(translations.translate("Nepali", "District"), "जिल्ला");
    }

    #[test]
    fn test_translate_miss_falls_back_to_key() {
        let translations = sample();
        // Known language, unknown key
        assert_eq!(translations.translate("Nepali", "Fees"), "Fees");
        // Unknown language entirely
        assert_eq!(translations.translate("French", "District"), "District");
    }

    #[test]
    fn test_malformed_data_yields_identity_table() {
        let translations = Translations::from_json_str("not json at all {");
        assert_eq!(translations.translate("Nepali", "District"), "District");
        assert!(translations.languages().is_empty());
    }

    #[test]
    fn test_missing_file_yields_identity_table() {
        let translations = Translations::load("/nonexistent/translations.json");
        assert_eq!(translations.translate("Nepali", "Hours"), "Hours");
    }

    #[test]
    fn test_languages_sorted() {
        let translations = sample();
        assert_eq!(translations.languages(), vec!["English", "Nepali"]);
    }
}
