//! Update service and the SimpleUpdate action

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::{Link, Resource, Status};

/// Firmware-update entry point
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateService {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "ServiceEnabled")]
    pub service_enabled: bool,
    #[serde(rename = "HttpPushUri")]
    pub http_push_uri: String,
    #[serde(rename = "FirmwareInventory")]
    pub firmware_inventory: Link,
    #[serde(rename = "Actions")]
    pub actions: UpdateServiceActions,
    #[serde(rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateServiceActions {
    #[serde(rename = "#UpdateService.SimpleUpdate")]
    pub simple_update: ActionTarget,
}

/// Action descriptor, `{"target": "<uri>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionTarget {
    pub target: String,
}

/// Body of `POST .../UpdateService.SimpleUpdate`
///
/// Only `ImageURI` is mandatory. A missing `ImageURI` deserializes to an
/// empty string and is rejected by validation, so `{}` and
/// `{"ImageURI": ""}` fail the same way. Optional fields accept `null`.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct SimpleUpdateRequest {
    #[serde(rename = "ImageURI", default)]
    #[validate(length(min = 1, message = "ImageURI is required"))]
    pub image_uri: String,
    #[serde(rename = "Targets", default, skip_serializing_if = "Option::is_none")]
    pub targets: Option<Vec<String>>,
    #[serde(
        rename = "TransferProtocol",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub transfer_protocol: Option<String>,
    #[serde(rename = "Username", default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(rename = "Password", default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(rename = "ForceUpdate", default, skip_serializing_if = "Option::is_none")]
    pub force_update: Option<bool>,
}

// Keeps the image server password out of logs.
impl fmt::Debug for SimpleUpdateRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleUpdateRequest")
            .field("image_uri", &self.image_uri)
            .field("targets", &self.targets)
            .field("transfer_protocol", &self.transfer_protocol)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("force_update", &self.force_update)
            .finish()
    }
}
