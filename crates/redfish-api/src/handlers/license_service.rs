//! License service handlers

use redfish_core::{catalog, Collection, License, LicenseService};

use crate::error::ApiError;
use crate::extract::ResourceId;
use crate::response::RedfishJson;

/// GET /redfish/v1/LicenseService
pub async fn get_license_service() -> RedfishJson<LicenseService> {
    RedfishJson(catalog::license_service())
}

/// GET /redfish/v1/LicenseService/Licenses
pub async fn list_licenses() -> RedfishJson<Collection> {
    RedfishJson(catalog::licenses_collection())
}

/// GET /redfish/v1/LicenseService/Licenses/{license_id}
pub async fn get_license(
    ResourceId(license_id): ResourceId,
) -> Result<RedfishJson<License>, ApiError> {
    Ok(RedfishJson(catalog::license(&license_id)?))
}
