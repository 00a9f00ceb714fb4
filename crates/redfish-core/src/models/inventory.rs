//! Firmware inventory records

use serde::{Deserialize, Serialize};

use super::{Resource, Status};

/// One firmware component record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoftwareInventory {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "Updateable")]
    pub updateable: bool,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "SoftwareId")]
    pub software_id: String,
}
