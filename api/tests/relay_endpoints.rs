//! Tests for the geocoding and Solana passthrough endpoints
//!
//! These cover the request-validation paths, which must reject bad
//! input before any outbound provider call is attempted. The outbound
//! clients here point at a closed local port, so a test that reached
//! the provider would fail with a provider error instead of the
//! asserted validation error.

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use buyhere_api::{create_routes, ApiState};
use buyhere_chain::ChainClient;
use buyhere_core::Registry;
use buyhere_geo::GeoClient;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    let state = ApiState::new(
        Registry::with_seed_data(),
        GeoClient::new("http://127.0.0.1:9/search"),
        ChainClient::new("http://127.0.0.1:9", None),
    );
    create_routes().with_state(state)
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request")
}

#[tokio::test]
async fn locations_without_query_is_a_client_error() {
    let request = Request::builder()
        .uri("/locations")
        .body(Body::empty())
        .expect("request");
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"error": "Query parameter is required"}));
}

#[tokio::test]
async fn locations_with_empty_query_is_a_client_error() {
    let request = Request::builder()
        .uri("/locations?query=")
        .body(Body::empty())
        .expect("request");
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn send_without_amount_fails_before_any_provider_call() {
    let request = post_json(
        "/solana/send",
        json!({"recipientPublicKey": "5ZCKaDMLvcFoeS1f4sfoXHK7sDagW3T3BMmuS9CBF5P8"}),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Recipient public key and amount are required"})
    );
}

#[tokio::test]
async fn send_without_recipient_fails_before_any_provider_call() {
    let request = post_json("/solana/send", json!({"amount": 1.5}));
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({"error": "Recipient public key and amount are required"})
    );
}

#[tokio::test]
async fn send_with_zero_amount_is_rejected() {
    let request = post_json(
        "/solana/send",
        json!({
            "recipientPublicKey": "5ZCKaDMLvcFoeS1f4sfoXHK7sDagW3T3BMmuS9CBF5P8",
            "amount": 0.0
        }),
    );
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn root_names_the_service() {
    let request = Request::builder()
        .uri("/")
        .body(Body::empty())
        .expect("request");
    let response = app().oneshot(request).await.expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    assert_eq!(&bytes[..], b"BuyHere API");
}
