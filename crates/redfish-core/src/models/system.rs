//! Computer systems, chassis and managers

use serde::{Deserialize, Serialize};

use super::{Resource, Status};

/// One managed server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComputerSystem {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "SystemType")]
    pub system_type: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "PowerState")]
    pub power_state: PowerState,
    #[serde(rename = "BiosVersion")]
    pub bios_version: String,
    #[serde(rename = "ProcessorSummary")]
    pub processor_summary: ProcessorSummary,
    #[serde(rename = "MemorySummary")]
    pub memory_summary: MemorySummary,
    #[serde(rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    #[default]
    On,
    Off,
    PoweringOn,
    PoweringOff,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessorSummary {
    #[serde(rename = "Count")]
    pub count: u32,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySummary {
    #[serde(rename = "TotalSystemMemoryGiB")]
    pub total_system_memory_gib: u32,
    #[serde(rename = "Status")]
    pub status: Status,
}

/// One physical enclosure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chassis {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "ChassisType")]
    pub chassis_type: String,
    #[serde(rename = "Manufacturer")]
    pub manufacturer: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "SerialNumber")]
    pub serial_number: String,
    #[serde(rename = "PartNumber")]
    pub part_number: String,
    #[serde(rename = "Status")]
    pub status: Status,
}

/// One BMC-like controller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Manager {
    #[serde(flatten)]
    pub resource: Resource,
    #[serde(rename = "ManagerType")]
    pub manager_type: String,
    #[serde(rename = "FirmwareVersion")]
    pub firmware_version: String,
    #[serde(rename = "Status")]
    pub status: Status,
}
