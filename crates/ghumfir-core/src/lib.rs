//! Ghumfir Core - Domain models, configuration, and translations
//!
//! This crate contains the core domain types and error taxonomy for the
//! Ghumfir tourist-guide system.

pub mod config;
pub mod error;
pub mod i18n;
pub mod models;

pub use error::{GhumfirError, Result};
