use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers;
use crate::state::AppState;

/// Create the API router with all routes
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health
        .route("/health", get(handlers::health_check))

        // Catalog (gated)
        .route("/api/v1/places", get(handlers::list_places))
        .route("/api/v1/filters", get(handlers::filter_options))
        .route("/api/v1/itineraries", get(handlers::list_itineraries))

        // Translations
        .route("/api/v1/translations/{lang}", get(handlers::get_translations))

        // Session
        .route("/api/v1/auth/login", post(handlers::login))
        .route("/api/v1/auth/register", post(handlers::register))
        .route("/api/v1/auth/google", post(handlers::google_begin))
        .route("/api/v1/auth/callback", get(handlers::google_callback))
        .route("/api/v1/auth/logout", post(handlers::logout))
        .route("/api/v1/auth/session", get(handlers::get_session))

        .with_state(state)
}
