//! Service root document

use serde::{Deserialize, Serialize};

use super::{Link, Resource};

/// API root and discovery document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRoot {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "RedfishVersion")]
    pub redfish_version: String,
    #[serde(rename = "UUID")]
    pub uuid: String,
    #[serde(rename = "Product")]
    pub product: String,
    #[serde(rename = "Vendor")]
    pub vendor: String,
    #[serde(rename = "Oem")]
    pub oem: ServiceRootOem,
    #[serde(rename = "Systems")]
    pub systems: Link,
    #[serde(rename = "Chassis")]
    pub chassis: Link,
    #[serde(rename = "Managers")]
    pub managers: Link,
    #[serde(rename = "SessionService")]
    pub session_service: Link,
    #[serde(rename = "UpdateService")]
    pub update_service: Link,
    #[serde(rename = "LicenseService")]
    pub license_service: Link,
}

/// Vendor extension block of the service root
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceRootOem {
    #[serde(rename = "Vendor")]
    pub vendor: VendorExtensions,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorExtensions {
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    #[serde(rename = "ServerModel")]
    pub server_model: String,
    #[serde(rename = "HardwareVersion")]
    pub hardware_version: String,
    #[serde(rename = "ManagementVersion")]
    pub management_version: String,
    #[serde(rename = "SupportContact")]
    pub support_contact: String,
    #[serde(rename = "WarrantyStatus")]
    pub warranty_status: String,
    #[serde(rename = "WarrantyExpiration")]
    pub warranty_expiration: String,
}
