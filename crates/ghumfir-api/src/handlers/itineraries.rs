use std::sync::Arc;

use axum::{extract::State, Json};
use ghumfir_filter::resolve_stops;

use crate::dto::ItineraryResponse;
use crate::error::ApiError;
use crate::handlers::require_auth;
use crate::state::AppState;

pub async fn list_itineraries(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ItineraryResponse>>, ApiError> {
    require_auth(&state).await?;

    let itineraries = state
        .catalog
        .itineraries
        .iter()
        .map(|itinerary| ItineraryResponse {
            name: itinerary.name.clone(),
            days: itinerary.days,
            stops: resolve_stops(&itinerary.stops, &state.catalog.places),
        })
        .collect();

    Ok(Json(itineraries))
}
