//! API Error Handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use buyhere_core::RegistryError;
use serde_json::json;
use thiserror::Error;

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Missing or unusable client input.
    #[error("{0}")]
    BadRequest(String),

    /// No matching record or chain account.
    #[error("{0}")]
    NotFound(String),

    /// An outbound provider call failed. The message stays generic;
    /// the underlying cause is only logged.
    #[error("{0}")]
    Upstream(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

impl From<RegistryError> for ApiError {
    fn from(err: RegistryError) -> Self {
        match err {
            RegistryError::MissingRequiredField => ApiError::BadRequest(err.to_string()),
            RegistryError::NotFound(_) => ApiError::NotFound("Business not found".to_string()),
        }
    }
}
