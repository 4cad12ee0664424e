//! Ghumfir Store - Catalog loading and credential storage
//!
//! The catalog side turns external JSON sources into an immutable
//! [`ghumfir_core::models::Catalog`], recovering to the empty catalog on
//! any failure. The credential side defines the storage port the session
//! authenticator checks logins against, with an in-memory implementation.

pub mod catalog;
pub mod memory;
pub mod ports;

pub use catalog::CatalogStore;
pub use memory::MemoryCredentialStore;
pub use ports::CredentialStore;
