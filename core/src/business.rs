//! Business record structures and types

use serde::{Deserialize, Serialize};

/// A registered local business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub id: u64,
    pub name: String,
    pub location: String,
    pub contact: String,
    pub products: Vec<String>,
    pub services: Vec<String>,
}

/// Input for registering a business.
///
/// Name, location and contact are required; products and services
/// default to empty lists when omitted.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewBusiness {
    pub name: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub products: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
}

/// Partial update for an existing business.
///
/// A field that is omitted, or supplied as an empty string or empty
/// list, keeps its current value. This means a field cannot be cleared
/// back to empty through an update; callers wanting a different value
/// must supply a non-empty one.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BusinessUpdate {
    pub name: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub products: Option<Vec<String>>,
    pub services: Option<Vec<String>>,
}
