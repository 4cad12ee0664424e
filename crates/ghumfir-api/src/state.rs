use std::sync::Arc;

use ghumfir_auth::Authenticator;
use ghumfir_core::i18n::Translations;
use ghumfir_core::models::Catalog;
use ghumfir_store::memory::MemoryCredentialStore;
use tokio::sync::RwLock;

/// Shared application state.
///
/// The catalog is immutable for the lifetime of the process; only the
/// authenticator holds mutable session state, behind an async lock
/// because completing an external login awaits the provider.
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub translations: Translations,
    pub authenticator: RwLock<Authenticator<MemoryCredentialStore>>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        translations: Translations,
        authenticator: Authenticator<MemoryCredentialStore>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            translations,
            authenticator: RwLock::new(authenticator),
        }
    }
}
