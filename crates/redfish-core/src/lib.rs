//! redfish-core - Wire models and the fixed resource catalog for the Redfish mock
//!
//! This crate holds everything the mock serves, without any HTTP types:
//! the Redfish/OData document models, the constant catalog that builds them,
//! and the lookup errors for the closed identifier sets.

pub mod catalog;
pub mod error;
pub mod models;
pub mod paths;

pub use error::{CatalogError, CatalogResult};
pub use models::*;
