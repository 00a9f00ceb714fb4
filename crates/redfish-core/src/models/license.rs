//! License service and license records

use serde::{Deserialize, Serialize};

use super::{Link, Resource, Status};

/// License management entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseService {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "Licenses")]
    pub licenses: Link,
    #[serde(rename = "Status")]
    pub status: Status,
}

/// One installed license
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct License {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "LicenseType")]
    pub license_type: LicenseType,
    #[serde(rename = "LicenseOrigin")]
    pub license_origin: LicenseOrigin,
    #[serde(
        rename = "ExpirationDate",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub expiration_date: Option<String>,
    #[serde(rename = "InstallDate")]
    pub install_date: String,
    #[serde(
        rename = "MaxAuthorizedCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub max_authorized_count: Option<u32>,
    #[serde(
        rename = "RemainingUseCount",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub remaining_use_count: Option<u32>,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "PartNumber", default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<String>,
    #[serde(
        rename = "SerialNumber",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub serial_number: Option<String>,
    #[serde(rename = "SKU", default, skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    /// Always serialized as `{}`
    #[serde(rename = "Links", default)]
    pub links: LicenseLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseType {
    Production,
    Prototype,
    Trial,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LicenseOrigin {
    BuiltIn,
    Installed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseLinks {}
