//! Service root handler

use redfish_core::{catalog, ServiceRoot};

use crate::response::RedfishJson;

/// GET /redfish/v1
pub async fn get_service_root() -> RedfishJson<ServiceRoot> {
    RedfishJson(catalog::service_root())
}
