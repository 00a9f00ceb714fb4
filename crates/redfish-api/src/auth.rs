//! HTTP Basic authentication middleware
//!
//! Validates `Authorization: Basic <base64(user:password)>` against the single
//! credential pair in [`AppState`]. Applied with `route_layer`, so it only runs
//! for requests that matched a protected route.

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::headers::authorization::Basic;
use axum_extra::headers::{Authorization, HeaderMapExt};

use crate::error::ApiError;
use crate::state::AppState;

/// Axum middleware function that checks basic authentication.
///
/// Returns 401 with a `WWW-Authenticate` challenge if credentials are
/// missing, malformed, or wrong. The downstream handler is not invoked.
pub async fn basic_auth_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let unauthorized = || ApiError::Unauthorized {
        realm: state.realm().to_string(),
    };

    let provided = request.headers().typed_get::<Authorization<Basic>>();
    match provided {
        Some(Authorization(basic)) => {
            if state.credentials().matches(basic.username(), basic.password()) {
                Ok(next.run(request).await)
            } else {
                tracing::warn!(
                    path = %request.uri().path(),
                    username = %basic.username(),
                    "Invalid basic credentials"
                );
                Err(unauthorized())
            }
        }
        None => {
            tracing::warn!(
                path = %request.uri().path(),
                "Missing or malformed Authorization header"
            );
            Err(unauthorized())
        }
    }
}
