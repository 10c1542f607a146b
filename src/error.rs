//! Error types for the catalog service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Service Error Enum ==
/// Unified error type for the catalog service.
#[derive(Error, Debug)]
pub enum Error {
    /// Upstream resource does not exist (non-2xx from the API)
    #[error("{resource} not found: {identifier}")]
    NotFound {
        resource: &'static str,
        identifier: String,
    },

    /// Network or decode failure while talking to the upstream API
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// Cache store connectivity or protocol failure
    #[error("Cache store error: {0}")]
    Store(#[from] redis::RedisError),

    /// Upstream payload decoded but missing required data
    #[error("Malformed upstream data: {0}")]
    Malformed(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl Error {
    /// Builds a NotFound error for the given resource kind and identifier.
    pub fn not_found(resource: &'static str, identifier: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            identifier: identifier.into(),
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = match &self {
            Error::NotFound { .. } => StatusCode::NOT_FOUND,
            Error::Upstream(_) => StatusCode::BAD_GATEWAY,
            Error::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::Malformed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Error::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the catalog service.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = Error::not_found("pokemon", "999999");
        assert_eq!(err.to_string(), "pokemon not found: 999999");
    }

    #[test]
    fn test_error_status_codes() {
        let cases = vec![
            (Error::not_found("pokemon", "missingno"), StatusCode::NOT_FOUND),
            (
                Error::Malformed("species has no evolution chain".to_string()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                Error::InvalidRequest("empty name".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_error_body_has_error_field() {
        let response = Error::not_found("characteristic", "42").into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["error"].as_str().unwrap(),
            "characteristic not found: 42"
        );
    }
}
