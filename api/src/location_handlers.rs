//! Geocoding relay handler

use crate::{ApiError, ApiResult, ApiState};
use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub query: Option<String>,
}

/// Forward a free-text place query to the geocoding provider and relay
/// its payload verbatim.
pub async fn lookup_locations(
    State(state): State<ApiState>,
    Query(params): Query<LocationQuery>,
) -> ApiResult<Json<serde_json::Value>> {
    let query = params
        .query
        .filter(|q| !q.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Query parameter is required".to_string()))?;

    let matches = state.geo.search(&query).await.map_err(|e| {
        tracing::error!(error = %e, "Error retrieving location data");
        ApiError::Upstream("Failed to retrieve location data".to_string())
    })?;

    Ok(Json(matches))
}
