//! Resource paths and path helpers.
//!
//! Every `@odata.id` the mock emits is built here, so self-links always
//! agree with the routes that serve them.

/// Redfish service root. The service root self-link carries the trailing slash.
pub const SERVICE_ROOT: &str = "/redfish/v1";
pub const SYSTEMS: &str = "/redfish/v1/Systems";
pub const CHASSIS: &str = "/redfish/v1/Chassis";
pub const MANAGERS: &str = "/redfish/v1/Managers";
pub const SESSION_SERVICE: &str = "/redfish/v1/SessionService";
pub const UPDATE_SERVICE: &str = "/redfish/v1/UpdateService";
pub const FIRMWARE_INVENTORY: &str = "/redfish/v1/UpdateService/FirmwareInventory";
pub const SIMPLE_UPDATE: &str = "/redfish/v1/UpdateService/Actions/UpdateService.SimpleUpdate";
pub const LICENSE_SERVICE: &str = "/redfish/v1/LicenseService";
pub const LICENSES: &str = "/redfish/v1/LicenseService/Licenses";

/// Task URI returned by the update action. No resource backs it.
pub const UPDATE_TASK: &str = "/redfish/v1/TaskService/Tasks/1";

/// Build the `@odata.id` of a collection member.
///
/// ```
/// # use redfish_core::paths::{member, SYSTEMS};
/// assert_eq!(member(SYSTEMS, "1"), "/redfish/v1/Systems/1");
/// ```
pub fn member(collection: &str, id: &str) -> String {
    format!("{}/{}", collection, id)
}

/// `@odata.context` for a Redfish type, e.g. `ComputerSystem`.
///
/// ```
/// # use redfish_core::paths::metadata_context;
/// assert_eq!(
///     metadata_context("Chassis"),
///     "/redfish/v1/$metadata#Chassis.Chassis"
/// );
/// ```
pub fn metadata_context(type_name: &str) -> String {
    format!("{}/$metadata#{}.{}", SERVICE_ROOT, type_name, type_name)
}

/// Strip one trailing `/` from a path. Returns `None` for `/` itself and for
/// paths without a trailing slash.
///
/// Used by the router fallback to build the redirect target.
///
/// ```
/// # use redfish_core::paths::strip_trailing_slash;
/// assert_eq!(strip_trailing_slash("/redfish/v1/Systems/1/"), Some("/redfish/v1/Systems/1"));
/// assert_eq!(strip_trailing_slash("/"), None);
/// assert_eq!(strip_trailing_slash("/redfish/v1/Systems"), None);
/// ```
pub fn strip_trailing_slash(path: &str) -> Option<&str> {
    if path == "/" {
        return None;
    }
    path.strip_suffix('/')
}

/// Both routable forms of a literal path: without and with a trailing slash.
pub fn with_and_without_slash(path: &str) -> [String; 2] {
    [path.to_string(), format!("{}/", path)]
}
