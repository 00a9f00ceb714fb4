//! API error types and conversions

use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use redfish_core::{CatalogError, RedfishError};

use crate::response::RedfishJson;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 401 Unauthorized, with a Basic challenge for `realm`
    Unauthorized { realm: String },
    /// 404 Not Found
    NotFound(String),
    /// 500 Internal Server Error
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, challenge) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, None),
            ApiError::Unauthorized { realm } => (
                StatusCode::UNAUTHORIZED,
                "Unauthorized".to_string(),
                Some(format!("Basic realm=\"{}\"", realm)),
            ),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, None),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg, None),
        };

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), %message, "API error");
        } else {
            tracing::debug!(status = status.as_u16(), %message, "API client error");
        }

        let mut response = (status, RedfishJson(RedfishError::general(message))).into_response();
        if let Some(challenge) = challenge {
            let value = HeaderValue::from_str(&challenge)
                .unwrap_or_else(|_| HeaderValue::from_static("Basic realm=\"Redfish\""));
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, value);
        }
        response
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        tracing::debug!(id = err.id(), "Catalog lookup failed");
        match err.status_code() {
            404 => ApiError::NotFound(err.to_string()),
            400 => ApiError::BadRequest(err.to_string()),
            _ => ApiError::Internal(err.to_string()),
        }
    }
}
