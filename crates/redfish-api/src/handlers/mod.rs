//! HTTP request handlers for the Redfish API
//!
//! Every handler renders a catalog document; only the update action reads
//! the request body.

pub mod chassis;
pub mod fallback;
pub mod license_service;
pub mod managers;
pub mod service_root;
pub mod systems;
pub mod update_service;
