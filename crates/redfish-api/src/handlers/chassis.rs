//! Chassis handlers

use redfish_core::{catalog, Chassis, Collection};

use crate::extract::ResourceId;
use crate::response::RedfishJson;

/// GET /redfish/v1/Chassis
pub async fn list_chassis() -> RedfishJson<Collection> {
    RedfishJson(catalog::chassis_collection())
}

/// GET /redfish/v1/Chassis/{chassis_id}
pub async fn get_chassis(ResourceId(chassis_id): ResourceId) -> RedfishJson<Chassis> {
    RedfishJson(catalog::chassis(&chassis_id))
}
