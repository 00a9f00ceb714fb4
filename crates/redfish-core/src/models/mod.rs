//! Redfish document models
//!
//! Field names are part of the wire contract and are pinned with
//! `#[serde(rename)]`; struct fields use Rust naming.

mod common;
mod inventory;
mod license;
mod message;
mod service_root;
mod system;
mod update;

pub use common::*;
pub use inventory::*;
pub use license::*;
pub use message::*;
pub use service_root::*;
pub use system::*;
pub use update::*;
