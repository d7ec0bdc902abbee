//! Geocoding lookups via the OpenStreetMap Nominatim search endpoint
//!
//! The provider's JSON payload is relayed to callers unmodified.

use std::time::Duration;
use thiserror::Error;

/// Public Nominatim search endpoint.
pub const DEFAULT_SEARCH_URL: &str = "https://nominatim.openstreetmap.org/search";

/// Maximum place matches requested per search.
const RESULT_LIMIT: &str = "5";

#[derive(Debug, Error)]
pub enum GeoError {
    #[error("Geocoding request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Geocoding provider returned HTTP {0}")]
    Provider(reqwest::StatusCode),
}

/// HTTP client for the geocoding search endpoint.
pub struct GeoClient {
    base_url: String,
    client: reqwest::Client,
}

impl GeoClient {
    /// Create a client for the given search endpoint.
    ///
    /// Nominatim's usage policy requires an identifying user agent.
    pub fn new(base_url: impl Into<String>) -> Self {
        GeoClient {
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .user_agent(concat!("buyhere/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(10))
                .build()
                .expect("default TLS backend available"),
        }
    }

    /// Search for places matching a free-text query.
    ///
    /// Returns the provider's payload verbatim: an array of place
    /// matches with address details, at most five entries.
    /// A single attempt is made; failures are not retried.
    pub async fn search(&self, query: &str) -> Result<serde_json::Value, GeoError> {
        tracing::debug!(%query, "forwarding geocoding search");

        let response = self
            .client
            .get(&self.base_url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("addressdetails", "1"),
                ("limit", RESULT_LIMIT),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GeoError::Provider(response.status()));
        }

        Ok(response.json().await?)
    }
}
