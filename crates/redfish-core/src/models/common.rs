//! Shared building blocks: links, status, collections

use serde::{Deserialize, Serialize};

/// Navigation link to another resource
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

impl Link {
    pub fn new(odata_id: impl Into<String>) -> Self {
        Self {
            odata_id: odata_id.into(),
        }
    }
}

/// Identity fields every singular resource starts with
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "@odata.context")]
    pub odata_context: String,
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Name")]
    pub name: String,
}

impl Resource {
    /// `type_name` and `version` form the `@odata.type`, e.g.
    /// `("Chassis", "v1_25_0")` gives `#Chassis.v1_25_0.Chassis`.
    pub fn new(
        type_name: &str,
        version: &str,
        odata_id: impl Into<String>,
        id: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            odata_context: crate::paths::metadata_context(type_name),
            odata_type: format!("#{}.{}.{}", type_name, version, type_name),
            odata_id: odata_id.into(),
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Resource state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum State {
    #[default]
    Enabled,
    Disabled,
    StandbyOffline,
    Absent,
}

/// Resource health
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Health {
    #[default]
    #[serde(rename = "OK")]
    Ok,
    Warning,
    Critical,
}

/// Health/state pair embedded in most resources
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    #[serde(rename = "State")]
    pub state: State,
    #[serde(rename = "Health")]
    pub health: Health,
}

impl Status {
    /// `{"State": "Enabled", "Health": "OK"}`, the only status the mock reports
    pub fn ok() -> Self {
        Self {
            state: State::Enabled,
            health: Health::Ok,
        }
    }
}

/// Listing of one resource type's members
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(rename = "@odata.context")]
    pub odata_context: String,
    #[serde(rename = "@odata.type")]
    pub odata_type: String,
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Members@odata.count")]
    pub members_count: usize,
    #[serde(rename = "Members")]
    pub members: Vec<Link>,
}

impl Collection {
    /// Build a collection of `type_name` (e.g. `ChassisCollection`) rooted at
    /// `odata_id`. The member count is always derived from `members`.
    pub fn new(
        type_name: &str,
        odata_id: impl Into<String>,
        name: impl Into<String>,
        members: Vec<Link>,
    ) -> Self {
        Self {
            odata_context: crate::paths::metadata_context(type_name),
            odata_type: format!("#{}.{}", type_name, type_name),
            odata_id: odata_id.into(),
            name: name.into(),
            members_count: members.len(),
            members,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_wire_format() {
        let value = serde_json::to_value(Status::ok()).unwrap();
        assert_eq!(value, json!({"State": "Enabled", "Health": "OK"}));
    }

    #[test]
    fn test_link_wire_format() {
        let value = serde_json::to_value(Link::new("/redfish/v1/Systems")).unwrap();
        assert_eq!(value, json!({"@odata.id": "/redfish/v1/Systems"}));
    }

    #[test]
    fn test_resource_identity() {
        let resource = Resource::new(
            "Manager",
            "v1_19_0",
            "/redfish/v1/Managers/bmc",
            "bmc",
            "Manager",
        );
        let value = serde_json::to_value(&resource).unwrap();
        assert_eq!(value["@odata.type"], "#Manager.v1_19_0.Manager");
        assert_eq!(value["@odata.context"], "/redfish/v1/$metadata#Manager.Manager");
        assert_eq!(value["Id"], "bmc");
    }

    #[test]
    fn test_collection_counts_members() {
        let collection = Collection::new(
            "ManagerCollection",
            "/redfish/v1/Managers",
            "Manager Collection",
            vec![Link::new("/redfish/v1/Managers/1")],
        );
        let value = serde_json::to_value(&collection).unwrap();
        assert_eq!(value["Members@odata.count"], 1);
        assert_eq!(
            value["@odata.context"],
            "/redfish/v1/$metadata#ManagerCollection.ManagerCollection"
        );
        assert_eq!(value["@odata.type"], "#ManagerCollection.ManagerCollection");
    }
}
