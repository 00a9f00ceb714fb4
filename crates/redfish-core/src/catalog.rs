//! The fixed resource catalog
//!
//! Every document is built fresh from constants on each call. Per-item
//! resources take the identifier from the request path and echo it into
//! `Id`/`@odata.id`; everything else is fixed. Firmware inventory and
//! licenses are closed sets looked up by exact, case-sensitive match.

use crate::error::{CatalogError, CatalogResult};
use crate::models::*;
use crate::paths;

pub const SERVICE_ROOT_UUID: &str = "92384634-2938-2342-8820-489239905423";
pub const REDFISH_VERSION: &str = "1.18.0";
pub const VENDOR: &str = "Mock Vendor Corporation";

/// Member id of the single system, chassis and manager
pub const DEFAULT_MEMBER_ID: &str = "1";

/// Firmware inventory ids, in collection order
pub const FIRMWARE_IDS: [&str; 3] = ["BIOS", "BMC", "NIC"];

/// License ids, in collection order
pub const LICENSE_IDS: [&str; 2] = ["BMC-License", "BIOS-License"];

const LICENSE_INSTALL_DATE: &str = "2024-01-15T08:00:00Z";

pub fn service_root() -> ServiceRoot {
    ServiceRoot {
        resource: Resource::new(
            "ServiceRoot",
            "v1_15_0",
            format!("{}/", paths::SERVICE_ROOT),
            "RootService",
            "Root Service",
        ),
        redfish_version: REDFISH_VERSION.to_string(),
        uuid: SERVICE_ROOT_UUID.to_string(),
        product: "Mock RedFish Server v1.0".to_string(),
        vendor: VENDOR.to_string(),
        oem: ServiceRootOem {
            vendor: VendorExtensions {
                odata_type: "#MockVendorExtensions.v1_0_0.ServiceRoot".to_string(),
                server_model: "Mock Enterprise Server X1000".to_string(),
                hardware_version: "Rev 2.1".to_string(),
                management_version: "BMC 3.2.1".to_string(),
                support_contact: "support@mockvendor.com".to_string(),
                warranty_status: "Active".to_string(),
                warranty_expiration: "2026-12-31".to_string(),
            },
        },
        systems: Link::new(paths::SYSTEMS),
        chassis: Link::new(paths::CHASSIS),
        managers: Link::new(paths::MANAGERS),
        session_service: Link::new(paths::SESSION_SERVICE),
        update_service: Link::new(paths::UPDATE_SERVICE),
        license_service: Link::new(paths::LICENSE_SERVICE),
    }
}

fn members(collection: &str, ids: &[&str]) -> Vec<Link> {
    ids.iter()
        .map(|id| Link::new(paths::member(collection, id)))
        .collect()
}

pub fn systems_collection() -> Collection {
    Collection::new(
        "ComputerSystemCollection",
        paths::SYSTEMS,
        "Computer System Collection",
        members(paths::SYSTEMS, &[DEFAULT_MEMBER_ID]),
    )
}

pub fn computer_system(id: &str) -> ComputerSystem {
    ComputerSystem {
        resource: Resource::new(
            "ComputerSystem",
            "v1_22_0",
            paths::member(paths::SYSTEMS, id),
            id,
            "System",
        ),
        system_type: "Physical".to_string(),
        manufacturer: "MetifyIO".to_string(),
        model: "Mock Server X1000".to_string(),
        serial_number: "MOCK123456789".to_string(),
        part_number: "MOCK-SRV-001".to_string(),
        power_state: PowerState::On,
        bios_version: "1.0.0".to_string(),
        processor_summary: ProcessorSummary {
            count: 2,
            model: "Mock CPU X5000".to_string(),
            status: Status::ok(),
        },
        memory_summary: MemorySummary {
            total_system_memory_gib: 64,
            status: Status::ok(),
        },
        status: Status::ok(),
    }
}

pub fn chassis_collection() -> Collection {
    Collection::new(
        "ChassisCollection",
        paths::CHASSIS,
        "Chassis Collection",
        members(paths::CHASSIS, &[DEFAULT_MEMBER_ID]),
    )
}

pub fn chassis(id: &str) -> Chassis {
    Chassis {
        resource: Resource::new(
            "Chassis",
            "v1_25_0",
            paths::member(paths::CHASSIS, id),
            id,
            "Chassis",
        ),
        chassis_type: "RackMount".to_string(),
        manufacturer: "Vendor".to_string(),
        model: "Mock Chassis 1U".to_string(),
        serial_number: "MOCK-CHASSIS-123".to_string(),
        part_number: "MOCK-CHS-001".to_string(),
        status: Status::ok(),
    }
}

pub fn managers_collection() -> Collection {
    Collection::new(
        "ManagerCollection",
        paths::MANAGERS,
        "Manager Collection",
        members(paths::MANAGERS, &[DEFAULT_MEMBER_ID]),
    )
}

pub fn manager(id: &str) -> Manager {
    Manager {
        resource: Resource::new(
            "Manager",
            "v1_19_0",
            paths::member(paths::MANAGERS, id),
            id,
            "Manager",
        ),
        manager_type: "BMC".to_string(),
        firmware_version: "1.0.0".to_string(),
        status: Status::ok(),
    }
}

pub fn update_service() -> UpdateService {
    UpdateService {
        resource: Resource::new(
            "UpdateService",
            "v1_12_0",
            paths::UPDATE_SERVICE,
            "UpdateService",
            "Update Service",
        ),
        service_enabled: true,
        http_push_uri: paths::SIMPLE_UPDATE.to_string(),
        firmware_inventory: Link::new(paths::FIRMWARE_INVENTORY),
        actions: UpdateServiceActions {
            simple_update: ActionTarget {
                target: paths::SIMPLE_UPDATE.to_string(),
            },
        },
        status: Status::ok(),
    }
}

pub fn firmware_inventory_collection() -> Collection {
    Collection::new(
        "SoftwareInventoryCollection",
        paths::FIRMWARE_INVENTORY,
        "Firmware Inventory Collection",
        members(paths::FIRMWARE_INVENTORY, &FIRMWARE_IDS),
    )
}

pub fn firmware_inventory(id: &str) -> CatalogResult<SoftwareInventory> {
    let (name, version) = match id {
        "BIOS" => ("System BIOS", "1.0.0"),
        "BMC" => ("Baseboard Management Controller", "2.1.0"),
        "NIC" => ("Network Interface Controller", "3.2.1"),
        _ => return Err(CatalogError::UnknownFirmware(id.to_string())),
    };

    Ok(SoftwareInventory {
        resource: Resource::new(
            "SoftwareInventory",
            "v1_10_0",
            paths::member(paths::FIRMWARE_INVENTORY, id),
            id,
            name,
        ),
        version: version.to_string(),
        updateable: true,
        status: Status::ok(),
        software_id: format!("{}-{}", id, version),
    })
}

pub fn license_service() -> LicenseService {
    LicenseService {
        resource: Resource::new(
            "LicenseService",
            "v1_1_0",
            paths::LICENSE_SERVICE,
            "LicenseService",
            "License Service",
        ),
        licenses: Link::new(paths::LICENSES),
        status: Status::ok(),
    }
}

pub fn licenses_collection() -> Collection {
    Collection::new(
        "LicenseCollection",
        paths::LICENSES,
        "License Collection",
        members(paths::LICENSES, &LICENSE_IDS),
    )
}

pub fn license(id: &str) -> CatalogResult<License> {
    let resource = |name: &str| {
        Resource::new(
            "License",
            "v1_1_0",
            paths::member(paths::LICENSES, id),
            id,
            name,
        )
    };

    match id {
        "BMC-License" => Ok(License {
            resource: resource("BMC Management License"),
            license_type: LicenseType::Production,
            license_origin: LicenseOrigin::BuiltIn,
            expiration_date: Some("2026-01-15T08:00:00Z".to_string()),
            install_date: LICENSE_INSTALL_DATE.to_string(),
            max_authorized_count: Some(1),
            remaining_use_count: Some(1),
            status: Status::ok(),
            manufacturer: VENDOR.to_string(),
            part_number: Some("BMC-LIC-001".to_string()),
            serial_number: Some("BMC123456789".to_string()),
            sku: Some("BMC-PROD-LIC".to_string()),
            links: LicenseLinks::default(),
        }),
        "BIOS-License" => Ok(License {
            resource: resource("BIOS Feature License"),
            license_type: LicenseType::Production,
            license_origin: LicenseOrigin::BuiltIn,
            expiration_date: None,
            install_date: LICENSE_INSTALL_DATE.to_string(),
            max_authorized_count: None,
            remaining_use_count: None,
            status: Status::ok(),
            manufacturer: VENDOR.to_string(),
            part_number: Some("BIOS-LIC-001".to_string()),
            serial_number: Some("BIOS123456789".to_string()),
            sku: Some("BIOS-PROD-LIC".to_string()),
            links: LicenseLinks::default(),
        }),
        _ => Err(CatalogError::UnknownLicense(id.to_string())),
    }
}

/// Acknowledgement returned by the SimpleUpdate action
pub fn update_accepted() -> ExtendedInfo {
    ExtendedInfo {
        extended_info: vec![Message {
            message_id: "Update.1.0.0.UpdateInProgress".to_string(),
            message: "The update operation has been started and is in progress.".to_string(),
            severity: "OK".to_string(),
        }],
    }
}
