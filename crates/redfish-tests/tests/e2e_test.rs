//! End-to-end tests for the Redfish mock server
//!
//! Each test starts its own server on an ephemeral port.

use pretty_assertions::assert_eq;
use redfish_api::{AppState, AuthPolicy, Credentials};
use redfish_core::{catalog, paths, Collection, ComputerSystem, License, SoftwareInventory};
use redfish_tests::TestServer;
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};

/// Every GET route with the path that produced its `@odata.id`
const PROTECTED_GETS: &[&str] = &[
    "/redfish/v1/Systems",
    "/redfish/v1/Systems/1",
    "/redfish/v1/Chassis",
    "/redfish/v1/Chassis/1",
    "/redfish/v1/Managers/1",
    "/redfish/v1/UpdateService",
    "/redfish/v1/UpdateService/FirmwareInventory",
    "/redfish/v1/UpdateService/FirmwareInventory/BIOS",
    "/redfish/v1/LicenseService",
    "/redfish/v1/LicenseService/Licenses",
    "/redfish/v1/LicenseService/Licenses/BMC-License",
];

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_protected_paths_require_credentials() {
    let server = TestServer::start().await.unwrap();

    for path in PROTECTED_GETS {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
        assert_eq!(
            response.headers()["www-authenticate"],
            "Basic realm=\"Redfish\"",
            "{path}"
        );

        let response = server.get_authed(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_wrong_credentials_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .request(Method::GET, "/redfish/v1/Systems")
        .basic_auth("admin", Some("wrong"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = server
        .request(Method::GET, "/redfish/v1/Systems")
        .basic_auth("admin", None::<&str>)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = server
        .request(Method::GET, "/redfish/v1/Systems")
        .bearer_auth("password")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_discovery_paths_are_public() {
    let server = TestServer::start().await.unwrap();

    for path in [
        "/redfish/v1",
        "/redfish/v1/",
        "/redfish/v1/Managers",
        "/redfish/v1/Managers/",
    ] {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_require_all_policy() {
    let server = TestServer::with_state(AppState::new(
        Credentials::default(),
        AuthPolicy::RequireAll,
    ))
    .await
    .unwrap();

    for path in ["/redfish/v1", "/redfish/v1/Managers"] {
        let response = server.get(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{path}");
        let response = server.get_authed(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{path}");
    }
}

#[tokio::test]
async fn test_custom_credentials() {
    let server = TestServer::with_state(AppState::new(
        Credentials::new("root", "calvin"),
        AuthPolicy::DiscoveryExempt,
    ))
    .await
    .unwrap();

    let response = server.get_authed("/redfish/v1/Systems").await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = server
        .request(Method::GET, "/redfish/v1/Systems")
        .basic_auth("root", Some("calvin"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}

// =============================================================================
// Resource documents
// =============================================================================

#[tokio::test]
async fn test_success_envelope_headers() {
    let server = TestServer::start().await.unwrap();

    for path in PROTECTED_GETS {
        let response = server.get_authed(path).await.unwrap();
        let headers = response.headers();
        assert_eq!(headers["content-type"], "application/json", "{path}");
        assert_eq!(headers["odata-version"], "4.0", "{path}");
    }
}

#[tokio::test]
async fn test_self_links_match_request_path() {
    let server = TestServer::start().await.unwrap();

    for path in PROTECTED_GETS {
        let body: Value = server.get_authed(path).await.unwrap().json().await.unwrap();
        assert_eq!(body["@odata.id"], *path);
    }
}

#[tokio::test]
async fn test_service_root() {
    let server = TestServer::start().await.unwrap();

    let body: Value = server.get("/redfish/v1/").await.unwrap().json().await.unwrap();
    assert_eq!(body, serde_json::to_value(catalog::service_root()).unwrap());
    assert_eq!(body["@odata.id"], "/redfish/v1/");
    assert_eq!(body["Systems"], json!({"@odata.id": "/redfish/v1/Systems"}));
    assert_eq!(body["Product"], "Mock RedFish Server v1.0");
    assert_eq!(
        body["Oem"]["Vendor"]["@odata.type"],
        "#MockVendorExtensions.v1_0_0.ServiceRoot"
    );
}

#[tokio::test]
async fn test_system_identity_echoes_path() {
    let server = TestServer::start().await.unwrap();

    for id in ["1", "System.Embedded.1", "a-b_c"] {
        let path = paths::member(paths::SYSTEMS, id);
        let system: ComputerSystem = server
            .get_authed(&path)
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(system.resource.id, id);
        assert_eq!(system.resource.odata_id, path);
        assert_eq!(system, catalog::computer_system(id));
    }
}

#[tokio::test]
async fn test_chassis_and_manager_documents() {
    let server = TestServer::start().await.unwrap();

    let body: Value = server
        .get_authed("/redfish/v1/Chassis/Enclosure")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["Id"], "Enclosure");
    assert_eq!(body["ChassisType"], "RackMount");
    assert_eq!(body["Status"], json!({"State": "Enabled", "Health": "OK"}));

    let body: Value = server
        .get_authed("/redfish/v1/Managers/bmc")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["@odata.id"], "/redfish/v1/Managers/bmc");
    assert_eq!(body["ManagerType"], "BMC");
    assert_eq!(body["FirmwareVersion"], "1.0.0");
}

#[tokio::test]
async fn test_collection_slash_equivalence() {
    let server = TestServer::start().await.unwrap();

    for path in [
        paths::SYSTEMS,
        paths::CHASSIS,
        paths::MANAGERS,
        paths::UPDATE_SERVICE,
        paths::FIRMWARE_INVENTORY,
        paths::LICENSE_SERVICE,
        paths::LICENSES,
    ] {
        let without: Value = server.get_authed(path).await.unwrap().json().await.unwrap();
        let with: Value = server
            .get_authed(&format!("{}/", path))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(without, with, "{path}");
    }
}

#[tokio::test]
async fn test_collection_counts() {
    let server = TestServer::start().await.unwrap();

    for (path, expected) in [
        (paths::SYSTEMS, 1),
        (paths::CHASSIS, 1),
        (paths::MANAGERS, 1),
        (paths::FIRMWARE_INVENTORY, 3),
        (paths::LICENSES, 2),
    ] {
        let collection: Collection = server
            .get_authed(path)
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(collection.members_count, expected, "{path}");
        assert_eq!(collection.members.len(), expected, "{path}");
    }
}

#[tokio::test]
async fn test_firmware_inventory_items() {
    let server = TestServer::start().await.unwrap();

    let mut versions = Vec::new();
    for id in ["BIOS", "BMC", "NIC"] {
        let item: SoftwareInventory = server
            .get_authed(&paths::member(paths::FIRMWARE_INVENTORY, id))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(item.resource.id, id);
        assert!(item.updateable);
        versions.push(item.version);
    }
    assert_eq!(versions, vec!["1.0.0", "2.1.0", "3.2.1"]);

    for id in ["GPU", "bios", "BIOS-1.0.0"] {
        let response = server
            .get_authed(&paths::member(paths::FIRMWARE_INVENTORY, id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{id}");
    }
}

#[tokio::test]
async fn test_license_items() {
    let server = TestServer::start().await.unwrap();

    let bmc: License = server
        .get_authed("/redfish/v1/LicenseService/Licenses/BMC-License")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let bios: License = server
        .get_authed("/redfish/v1/LicenseService/Licenses/BIOS-License")
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_ne!(bmc, bios);
    assert_eq!(bmc.max_authorized_count, Some(1));
    assert_eq!(bios.expiration_date, None);

    let response = server
        .get_authed("/redfish/v1/LicenseService/Licenses/OS-License")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// =============================================================================
// SimpleUpdate action
// =============================================================================

#[tokio::test]
async fn test_simple_update_accepted() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_authed(paths::SIMPLE_UPDATE, r#"{"ImageURI":"http://x/fw.bin"}"#)
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
    assert_eq!(
        response.headers()["location"],
        "/redfish/v1/TaskService/Tasks/1"
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(
        body,
        json!({
            "@Message.ExtendedInfo": [{
                "MessageId": "Update.1.0.0.UpdateInProgress",
                "Message": "The update operation has been started and is in progress.",
                "Severity": "OK"
            }]
        })
    );

    // Nothing backs the task URI
    let response = server.get_authed(paths::UPDATE_TASK).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_simple_update_with_all_fields() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .request(Method::POST, paths::SIMPLE_UPDATE)
        .basic_auth("admin", Some("password"))
        .json(&json!({
            "ImageURI": "tftp://10.0.0.1/bmc.img",
            "Targets": ["/redfish/v1/UpdateService/FirmwareInventory/BMC"],
            "TransferProtocol": "TFTP",
            "Username": "ops",
            "Password": "secret",
            "ForceUpdate": true
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::ACCEPTED);
}

#[tokio::test]
async fn test_simple_update_rejects_invalid_bodies() {
    let server = TestServer::start().await.unwrap();

    for body in ["{}", r#"{"ImageURI":""}"#, "{not json", ""] {
        let response = server.post_authed(paths::SIMPLE_UPDATE, body).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{body:?}");
    }
}

#[tokio::test]
async fn test_simple_update_method_not_allowed() {
    let server = TestServer::start().await.unwrap();

    let response = server.get_authed(paths::SIMPLE_UPDATE).await.unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// =============================================================================
// Routing edge cases
// =============================================================================

#[tokio::test]
async fn test_trailing_slash_redirect() {
    let server = TestServer::start().await.unwrap();

    let response = server.get("/redfish/v1/Chassis/1/").await.unwrap();
    assert_eq!(response.status(), StatusCode::MOVED_PERMANENTLY);
    assert_eq!(response.headers()["location"], "/redfish/v1/Chassis/1");
}

#[tokio::test]
async fn test_unknown_paths_are_404() {
    let server = TestServer::start().await.unwrap();

    for path in ["/", "/redfish", "/redfish/v1/Fabrics", "/redfish/v1/Systems/1/Bios"] {
        let response = server.get_authed(path).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{path}");
    }
}

#[tokio::test]
async fn test_post_to_resource_is_405() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_authed("/redfish/v1/Systems/1", "{}")
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_graceful_shutdown() {
    let server = TestServer::start().await.unwrap();
    let url = server.url("/redfish/v1");
    server.shutdown().await;

    assert!(reqwest::get(url).await.is_err());
}
