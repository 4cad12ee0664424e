//! In-memory credential storage.
//!
//! This implementation uses `RwLock::unwrap()` intentionally. Lock
//! poisoning only occurs when another thread panicked while holding the
//! lock, which is an unrecoverable state for session-scoped data.

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, RwLock};

use crate::ports::CredentialStore;

/// In-memory implementation of CredentialStore
#[derive(Debug, Clone, Default)]
pub struct MemoryCredentialStore {
    credentials: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryCredentialStore {
    /// Create a new empty credential store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded from a JSON object of username/password
    /// pairs. A missing or malformed file yields an empty store; local
    /// login is then only possible after self-registration.
    pub fn seed_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let seed: HashMap<String, String> = match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(seed) => seed,
                Err(e) => {
                    tracing::warn!(
                        path = %path.display(),
                        error = %e,
                        "Malformed user seed, starting with no local credentials"
                    );
                    HashMap::new()
                }
            },
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "User seed unavailable, starting with no local credentials"
                );
                HashMap::new()
            }
        };

        tracing::info!(users = seed.len(), "Seeded credential store");

        Self {
            credentials: Arc::new(RwLock::new(seed)),
        }
    }

    /// Create a store from explicit pairs, for tests and fixtures
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = pairs.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self {
            credentials: Arc::new(RwLock::new(map)),
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn verify(&self, username: &str, password: &str) -> bool {
        let credentials = self.credentials.read().unwrap();
        credentials.get(username).map(|stored| stored == password).unwrap_or(false)
    }

    fn contains(&self, username: &str) -> bool {
        let credentials = self.credentials.read().unwrap();
        credentials.contains_key(username)
    }

    fn insert(&self, username: &str, password: &str) {
        let mut credentials = self.credentials.write().unwrap();
        credentials.insert(username.to_string(), password.to_string());
    }

    fn count(&self) -> usize {
        let credentials = self.credentials.read().unwrap();
        credentials.len()
    }

    fn snapshot(&self) -> HashMap<String, String> {
        self.credentials.read().unwrap().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_verify_exact_pair() {
        let store = MemoryCredentialStore::from_pairs([("asha", "trek2024")]);
        assert!(store.verify("asha", "trek2024"));
        assert!(!store.verify("asha", "trek2025"));
        assert!(!store.verify("bina", "trek2024"));
    }

    #[test]
    fn test_insert_and_contains() {
        let store = MemoryCredentialStore::new();
        assert!(!store.contains("asha"));

        store.insert("asha", "trek2024");
        assert!(store.contains("asha"));
        assert_eq!(store.count(), 1);
        assert!(store.verify("asha", "trek2024"));
    }

    #[test]
    fn test_seed_from_json_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"asha": "trek2024", "bina": "hima1aya"}}"#).unwrap();

        let store = MemoryCredentialStore::seed_from_path(file.path());
        assert_eq!(store.count(), 2);
        assert!(store.verify("bina", "hima1aya"));
    }

    #[test]
    fn test_seed_from_missing_file_is_empty() {
        let store = MemoryCredentialStore::seed_from_path("/nonexistent/users.json");
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_seed_from_malformed_file_is_empty() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2, 3]").unwrap();

        let store = MemoryCredentialStore::seed_from_path(file.path());
        assert_eq!(store.count(), 0);
    }

    #[test]
    fn test_clones_share_state() {
        let store = MemoryCredentialStore::new();
        let other = store.clone();

        store.insert("asha", "trek2024");
        assert!(other.verify("asha", "trek2024"));
    }
}
