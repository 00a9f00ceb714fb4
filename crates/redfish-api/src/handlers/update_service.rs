//! Update service handlers
//!
//! `SimpleUpdate` is an acknowledgement stub: it validates the request and
//! answers 202 with a task `Location`, but never starts an update and never
//! creates the task resource.

use axum::body::Bytes;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use redfish_core::{
    catalog, paths, Collection, SimpleUpdateRequest, SoftwareInventory, UpdateService,
};
use validator::Validate;

use crate::error::ApiError;
use crate::extract::ResourceId;
use crate::response::RedfishJson;

/// GET /redfish/v1/UpdateService
pub async fn get_update_service() -> RedfishJson<UpdateService> {
    RedfishJson(catalog::update_service())
}

/// GET /redfish/v1/UpdateService/FirmwareInventory
pub async fn list_firmware_inventory() -> RedfishJson<Collection> {
    RedfishJson(catalog::firmware_inventory_collection())
}

/// GET /redfish/v1/UpdateService/FirmwareInventory/{item_id}
pub async fn get_firmware_inventory(
    ResourceId(item_id): ResourceId,
) -> Result<RedfishJson<SoftwareInventory>, ApiError> {
    Ok(RedfishJson(catalog::firmware_inventory(&item_id)?))
}

/// POST /redfish/v1/UpdateService/Actions/UpdateService.SimpleUpdate
///
/// The body is decoded regardless of `Content-Type`.
pub async fn simple_update(body: Bytes) -> Result<impl IntoResponse, ApiError> {
    let request: SimpleUpdateRequest = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Rejecting SimpleUpdate body");
        ApiError::BadRequest("Invalid JSON".to_string())
    })?;

    request
        .validate()
        .map_err(|_| ApiError::BadRequest("ImageURI is required".to_string()))?;

    tracing::info!(
        image_uri = %request.image_uri,
        targets = ?request.targets,
        transfer_protocol = ?request.transfer_protocol,
        force_update = request.force_update.unwrap_or(false),
        task = paths::UPDATE_TASK,
        "SimpleUpdate accepted"
    );

    Ok((
        StatusCode::ACCEPTED,
        [(header::LOCATION, paths::UPDATE_TASK)],
        RedfishJson(catalog::update_accepted()),
    ))
}
