//! Redfish message registry payloads: action acknowledgements and errors

use serde::{Deserialize, Serialize};

/// One entry of `@Message.ExtendedInfo`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(rename = "MessageId")]
    pub message_id: String,
    #[serde(rename = "Message")]
    pub message: String,
    #[serde(rename = "Severity")]
    pub severity: String,
}

/// Body of an accepted action
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedInfo {
    #[serde(rename = "@Message.ExtendedInfo")]
    pub extended_info: Vec<Message>,
}

/// Redfish error envelope, `{"error": {...}}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedfishError {
    pub error: RedfishErrorBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedfishErrorBody {
    pub code: String,
    pub message: String,
    #[serde(rename = "@Message.ExtendedInfo", default)]
    pub extended_info: Vec<Message>,
}

impl RedfishError {
    /// Generic error carrying a human-readable message
    pub fn general(message: impl Into<String>) -> Self {
        Self {
            error: RedfishErrorBody {
                code: "Base.1.0.GeneralError".to_string(),
                message: message.into(),
                extended_info: Vec::new(),
            },
        }
    }
}
