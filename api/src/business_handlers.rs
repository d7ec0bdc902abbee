//! Business registry handlers

use crate::{ApiError, ApiResult, ApiState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use buyhere_core::{Business, BusinessUpdate, NewBusiness};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct BusinessEnvelope {
    pub message: String,
    pub business: Business,
}

/// List every registered business.
pub async fn list_businesses(State(state): State<ApiState>) -> Json<Vec<Business>> {
    let registry = state.registry.read().await;
    Json(registry.list().to_vec())
}

/// Fetch a single business by id.
pub async fn get_business(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResult<Json<Business>> {
    let id = parse_business_id(&id)?;
    let registry = state.registry.read().await;

    registry
        .get(id)
        .cloned()
        .map(Json)
        .ok_or_else(business_not_found)
}

/// Register a new business.
pub async fn create_business(
    State(state): State<ApiState>,
    Json(input): Json<NewBusiness>,
) -> ApiResult<(StatusCode, Json<BusinessEnvelope>)> {
    let mut registry = state.registry.write().await;
    let business = registry.create(input)?;

    tracing::info!(id = business.id, name = %business.name, "business registered");

    Ok((
        StatusCode::CREATED,
        Json(BusinessEnvelope {
            message: "Business added successfully".to_string(),
            business,
        }),
    ))
}

/// Overwrite fields of an existing business.
pub async fn update_business(
    State(state): State<ApiState>,
    Path(id): Path<String>,
    Json(update): Json<BusinessUpdate>,
) -> ApiResult<Json<BusinessEnvelope>> {
    let id = parse_business_id(&id)?;
    let mut registry = state.registry.write().await;
    let business = registry.update(id, update)?;

    Ok(Json(BusinessEnvelope {
        message: "Business updated successfully".to_string(),
        business,
    }))
}

// A non-numeric path id cannot match any record, so it reads as
// not-found rather than as a syntax error.
fn parse_business_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| business_not_found())
}

fn business_not_found() -> ApiError {
    ApiError::NotFound("Business not found".to_string())
}
