//! Computer system handlers

use redfish_core::{catalog, Collection, ComputerSystem};

use crate::extract::ResourceId;
use crate::response::RedfishJson;

/// GET /redfish/v1/Systems
pub async fn list_systems() -> RedfishJson<Collection> {
    RedfishJson(catalog::systems_collection())
}

/// GET /redfish/v1/Systems/{system_id}
///
/// Any id is accepted and echoed into `Id` and `@odata.id`.
pub async fn get_system(ResourceId(system_id): ResourceId) -> RedfishJson<ComputerSystem> {
    RedfishJson(catalog::computer_system(&system_id))
}
