//! Redfish response envelope

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

pub const ODATA_VERSION: HeaderName = HeaderName::from_static("odata-version");
pub const ODATA_VERSION_VALUE: &str = "4.0";

/// JSON body with the Redfish envelope headers:
/// `Content-Type: application/json` and `OData-Version: 4.0`
#[derive(Debug, Clone)]
pub struct RedfishJson<T>(pub T);

impl<T: Serialize> IntoResponse for RedfishJson<T> {
    fn into_response(self) -> Response {
        let mut response = Json(self.0).into_response();
        response.headers_mut().insert(
            ODATA_VERSION,
            HeaderValue::from_static(ODATA_VERSION_VALUE),
        );
        response
    }
}
