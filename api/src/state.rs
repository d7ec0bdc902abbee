//! API State Management

use buyhere_chain::ChainClient;
use buyhere_core::Registry;
use buyhere_geo::GeoClient;
use std::sync::Arc;
use tokio::sync::RwLock;

/// State shared by all request handlers.
///
/// The registry is the only mutable piece; the lock serializes store
/// mutations against concurrently running readers. The outbound
/// clients are reused across requests so the transports can keep
/// their connections.
#[derive(Clone)]
pub struct ApiState {
    pub registry: Arc<RwLock<Registry>>,
    pub geo: Arc<GeoClient>,
    pub chain: Arc<ChainClient>,
}

impl ApiState {
    pub fn new(registry: Registry, geo: GeoClient, chain: ChainClient) -> Self {
        Self {
            registry: Arc::new(RwLock::new(registry)),
            geo: Arc::new(geo),
            chain: Arc::new(chain),
        }
    }
}
