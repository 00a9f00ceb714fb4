//! redfish-api - Redfish REST API layer for the mock server
//!
//! This crate provides the HTTP surface: the route table, the basic-auth
//! gate, the Redfish response envelope and the trailing-slash fallback.
//! Documents come from `redfish_core::catalog`.
//!
//! # Usage
//!
//! ```ignore
//! use redfish_api::{create_router, AppState, AuthPolicy, Credentials};
//!
//! let state = AppState::new(Credentials::default(), AuthPolicy::DiscoveryExempt);
//! let router = create_router(state);
//! ```

pub mod auth;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod response;
pub mod state;

pub use error::ApiError;
pub use response::RedfishJson;
pub use state::{AppState, AuthPolicy, Credentials};

use axum::handler::Handler;
use axum::http::{header, StatusCode};
use axum::middleware;
use axum::response::IntoResponse;
use axum::routing::{get, post, MethodRouter};
use axum::Router;
use redfish_core::paths;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// GET route that refuses HEAD instead of answering it as a bodiless GET
fn get_only<H, T>(handler: H) -> MethodRouter<AppState>
where
    H: Handler<T, AppState>,
    T: 'static,
{
    get(handler).head(head_not_allowed)
}

async fn head_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, [(header::ALLOW, "GET")])
}

/// Register `method_router` under both `path` and `path/`
fn route_both(
    router: Router<AppState>,
    path: &str,
    method_router: MethodRouter<AppState>,
) -> Router<AppState> {
    paths::with_and_without_slash(path)
        .into_iter()
        .fold(router, |router, path| {
            router.route(&path, method_router.clone())
        })
}

/// Routes that the discovery-exempt policy leaves public
fn discovery_routes() -> Router<AppState> {
    let router = route_both(
        Router::new(),
        paths::SERVICE_ROOT,
        get_only(handlers::service_root::get_service_root),
    );
    route_both(
        router,
        paths::MANAGERS,
        get_only(handlers::managers::list_managers),
    )
}

/// Routes that always require credentials
fn resource_routes() -> Router<AppState> {
    use handlers::{chassis, license_service, managers, systems, update_service};

    let mut router = Router::new()
        .route(
            &format!("{}/{{system_id}}", paths::SYSTEMS),
            get_only(systems::get_system),
        )
        .route(
            &format!("{}/{{chassis_id}}", paths::CHASSIS),
            get_only(chassis::get_chassis),
        )
        .route(
            &format!("{}/{{manager_id}}", paths::MANAGERS),
            get_only(managers::get_manager),
        )
        .route(
            &format!("{}/{{item_id}}", paths::FIRMWARE_INVENTORY),
            get_only(update_service::get_firmware_inventory),
        )
        .route(paths::SIMPLE_UPDATE, post(update_service::simple_update))
        .route(
            &format!("{}/{{license_id}}", paths::LICENSES),
            get_only(license_service::get_license),
        );

    let collections: [(&str, MethodRouter<AppState>); 6] = [
        (paths::SYSTEMS, get_only(systems::list_systems)),
        (paths::CHASSIS, get_only(chassis::list_chassis)),
        (
            paths::UPDATE_SERVICE,
            get_only(update_service::get_update_service),
        ),
        (
            paths::FIRMWARE_INVENTORY,
            get_only(update_service::list_firmware_inventory),
        ),
        (
            paths::LICENSE_SERVICE,
            get_only(license_service::get_license_service),
        ),
        (paths::LICENSES, get_only(license_service::list_licenses)),
    ];
    for (path, method_router) in collections {
        router = route_both(router, path, method_router);
    }

    router
}

/// Create the Redfish REST API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let auth = || middleware::from_fn_with_state(state.clone(), auth::basic_auth_middleware);

    let discovery = match state.policy() {
        AuthPolicy::DiscoveryExempt => discovery_routes(),
        AuthPolicy::RequireAll => discovery_routes().route_layer(auth()),
    };
    let protected = resource_routes().route_layer(auth());

    Router::new()
        .merge(discovery)
        .merge(protected)
        .fallback(handlers::fallback::not_found_or_redirect)
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
