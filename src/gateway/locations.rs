//! `/locations` handlers: the two autocomplete proxy routes plus `/health`.
//!
//! Both proxy routes run the same fetch/filter sequence; the only
//! differences are the query string and whether school names are hidden.
//! The school exclusion is deliberately tied to the bare route only,
//! matching the upstream service's long-standing behavior.

use super::AppState;
use crate::error::UpstreamError;
use crate::upstream::{cities_from_results, City};
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::json;

/// GET /locations — every city suggestion for an empty query, with names
/// containing "School" hidden.
pub async fn browse(State(state): State<AppState>) -> Result<Json<Vec<City>>, UpstreamError> {
    let results = state.autocomplete.suggestions("").await?;
    let cities = cities_from_results(&results, true);
    tracing::debug!(count = cities.len(), "served browse suggestions");
    Ok(Json(cities))
}

/// GET /locations/{search_string} — city suggestions for the given query.
/// Unlike the browse route, school names are included here.
pub async fn search(
    State(state): State<AppState>,
    Path(search_string): Path<String>,
) -> Result<Json<Vec<City>>, UpstreamError> {
    let results = state.autocomplete.suggestions(&search_string).await?;
    let cities = cities_from_results(&results, false);
    tracing::debug!(query = %search_string, count = cities.len(), "served search suggestions");
    Ok(Json(cities))
}

/// GET /health — liveness probe, no upstream call.
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
