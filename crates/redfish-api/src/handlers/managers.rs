//! Manager (BMC) handlers

use redfish_core::{catalog, Collection, Manager};

use crate::extract::ResourceId;
use crate::response::RedfishJson;

/// GET /redfish/v1/Managers
pub async fn list_managers() -> RedfishJson<Collection> {
    RedfishJson(catalog::managers_collection())
}

/// GET /redfish/v1/Managers/{manager_id}
pub async fn get_manager(ResourceId(manager_id): ResourceId) -> RedfishJson<Manager> {
    RedfishJson(catalog::manager(&manager_id))
}
