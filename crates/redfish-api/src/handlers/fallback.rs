//! Handler for requests that match no route
//!
//! A path with a trailing slash is redirected (301) to its slash-stripped
//! form. Anything else is 404.

use axum::http::{header, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use redfish_core::paths;

use crate::error::ApiError;

pub async fn not_found_or_redirect(uri: Uri) -> Response {
    match paths::strip_trailing_slash(uri.path()) {
        Some(stripped) => {
            let location = match uri.query() {
                Some(query) => format!("{}?{}", stripped, query),
                None => stripped.to_string(),
            };
            tracing::debug!(from = %uri.path(), to = %location, "Redirecting trailing slash");
            (
                StatusCode::MOVED_PERMANENTLY,
                [(header::LOCATION, location)],
            )
                .into_response()
        }
        None => ApiError::NotFound(format!("Resource not found: {}", uri.path())).into_response(),
    }
}
