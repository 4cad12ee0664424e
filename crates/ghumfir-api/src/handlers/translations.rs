use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::state::AppState;

/// Label table for one language. An unknown language yields an empty
/// table; clients fall back to the literal label for any missing key.
pub async fn get_translations(
    State(state): State<Arc<AppState>>,
    Path(lang): Path<String>,
) -> Json<HashMap<String, String>> {
    Json(state.translations.table_for(&lang))
}
