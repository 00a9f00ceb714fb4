//! Catalog lookup errors

use thiserror::Error;

/// Result type for catalog lookups
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors returned when a path identifier is outside a closed catalog set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Firmware inventory item is not one of BIOS, BMC, NIC
    #[error("Firmware inventory item not found: {0}")]
    UnknownFirmware(String),

    /// License is not one of the installed licenses
    #[error("License not found: {0}")]
    UnknownLicense(String),
}

impl CatalogError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            CatalogError::UnknownFirmware(_) => 404,
            CatalogError::UnknownLicense(_) => 404,
        }
    }

    /// The identifier that failed to resolve
    pub fn id(&self) -> &str {
        match self {
            CatalogError::UnknownFirmware(id) | CatalogError::UnknownLicense(id) => id,
        }
    }
}
