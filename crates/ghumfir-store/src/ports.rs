use std::collections::HashMap;

/// Port for local credential storage.
///
/// Every operation is an in-memory map probe, so the port is synchronous;
/// callers treat it as session-scoped state with no durability guarantee.
/// Passwords are compared verbatim, matching the `users.json` seed format.
pub trait CredentialStore: Send + Sync {
    /// Whether the exact username/password pair is stored
    fn verify(&self, username: &str, password: &str) -> bool;

    /// Whether a username is registered
    fn contains(&self, username: &str) -> bool;

    /// Add or replace a credential pair
    fn insert(&self, username: &str, password: &str);

    /// Number of registered usernames
    fn count(&self) -> usize;

    /// Snapshot of all stored pairs, for inspection in tests
    fn snapshot(&self) -> HashMap<String, String>;
}
