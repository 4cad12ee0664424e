mod auth;
mod health;
mod itineraries;
mod places;
mod translations;

pub use auth::{get_session, google_begin, google_callback, login, logout, register};
pub use health::health_check;
pub use itineraries::list_itineraries;
pub use places::{filter_options, list_places};
pub use translations::get_translations;

use std::sync::Arc;

use crate::error::ApiError;
use crate::state::AppState;

/// Reject the request unless the session is authenticated
pub(crate) async fn require_auth(state: &Arc<AppState>) -> Result<(), ApiError> {
    let authenticator = state.authenticator.read().await;
    if authenticator.is_authenticated() {
        Ok(())
    } else {
        Err(ApiError::unauthorized("Login required"))
    }
}
