use std::sync::Arc;

use axum::http::{header, HeaderValue, Method};
use ghumfir_auth::{Authenticator, OauthClient, OauthConfig};
use ghumfir_core::config::LayeredConfig;
use ghumfir_core::i18n::Translations;
use ghumfir_store::catalog::CatalogStore;
use ghumfir_store::memory::MemoryCredentialStore;
use tower_http::cors::CorsLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use ghumfir_api::config::ApiConfig;
use ghumfir_api::router::create_router;
use ghumfir_api::state::AppState;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ghumfir_api=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let api_config = ApiConfig::from_env();

    let mut config = LayeredConfig::with_defaults();
    if let Some(path) = &api_config.config_file {
        match config.clone().load_from_file(path) {
            Ok(loaded) => config = loaded,
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to load config file");
                std::process::exit(1);
            }
        }
    }
    let config = config.load_from_env();

    tracing::info!(
        port = api_config.port,
        places = %config.places_path.value.display(),
        "Starting Ghumfir API server"
    );

    let catalog = CatalogStore::load(&config.places_path.value);
    let translations = Translations::load(&config.translations_path.value);
    let credentials = MemoryCredentialStore::seed_from_path(&config.users_path.value);

    let oauth = OauthClient::new(OauthConfig::from_provider(&config.provider));
    if config.login_methods.value.google && !oauth.is_configured() {
        tracing::warn!(
            "Google login is enabled but the provider is not fully configured; \
             set GHUMFIR_GOOGLE_CLIENT_ID and GHUMFIR_GOOGLE_REDIRECT_URL"
        );
    }

    let authenticator = Authenticator::new(credentials, config.login_methods.value, oauth);

    let state = Arc::new(AppState::new(catalog, translations, authenticator));

    let cors = CorsLayer::new()
        .allow_origin(api_config.cors_origin.parse::<HeaderValue>().unwrap())
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let app = create_router(state).layer(cors);

    let addr = api_config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();

    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await.unwrap();
}
