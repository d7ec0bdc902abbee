//! API routes

use crate::business_handlers::{
    create_business, get_business, list_businesses, update_business,
};
use crate::location_handlers::lookup_locations;
use crate::solana_handlers::{get_account, send_sol};
use crate::ApiState;
use axum::{
    routing::{get, post},
    Json, Router,
};

/// Create the router with all service endpoints
pub fn create_routes() -> Router<ApiState> {
    Router::new()
        // Core application routes
        .route("/", get(root))
        .route("/health", get(health_check))
        // Geocoding relay
        .route("/locations", get(lookup_locations))
        // Business registry
        .route("/businesses", get(list_businesses).post(create_business))
        .route("/businesses/{id}", get(get_business).put(update_business))
        // Solana passthrough
        .route("/solana/account/{public_key}", get(get_account))
        .route("/solana/send", post(send_sol))
}

async fn root() -> &'static str {
    "BuyHere API"
}

#[derive(serde::Serialize)]
struct HealthResponse {
    status: String,
}

async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
