use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};
use ghumfir_filter::{
    distinct_categories, distinct_districts, filter_places, FilterCriteria, Selection,
    ALL_SENTINEL,
};

use crate::dto::{FilterOptionsResponse, PlacesQuery, PlacesResponse};
use crate::error::ApiError;
use crate::handlers::require_auth;
use crate::state::AppState;

pub async fn list_places(
    State(state): State<Arc<AppState>>,
    Query(query): Query<PlacesQuery>,
) -> Result<Json<PlacesResponse>, ApiError> {
    require_auth(&state).await?;

    let criteria = FilterCriteria {
        district: Selection::from_param(query.district.as_deref()),
        category: Selection::from_param(query.category.as_deref()),
        query: query.q.unwrap_or_default(),
    };

    let places = filter_places(&state.catalog.places, &criteria);

    tracing::debug!(
        total = state.catalog.places.len(),
        matched = places.len(),
        "Filtered places"
    );

    Ok(Json(PlacesResponse {
        count: places.len(),
        places,
    }))
}

pub async fn filter_options(
    State(state): State<Arc<AppState>>,
) -> Result<Json<FilterOptionsResponse>, ApiError> {
    require_auth(&state).await?;

    let mut districts = vec![ALL_SENTINEL.to_string()];
    districts.extend(distinct_districts(&state.catalog.places));

    let mut categories = vec![ALL_SENTINEL.to_string()];
    categories.extend(distinct_categories(&state.catalog.places));

    Ok(Json(FilterOptionsResponse {
        districts,
        categories,
    }))
}
