//! Configuration file handling for redfishd
//!
//! Every setting is optional. Resolution order is CLI flag, then config
//! file, then built-in default.

use std::path::Path;

use anyhow::{Context, Result};
use redfish_api::state::{DEFAULT_PASSWORD, DEFAULT_REALM, DEFAULT_USERNAME};
use redfish_api::{AppState, AuthPolicy, Credentials};
use serde::Deserialize;

use crate::cli::Cli;

pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8080;

/// Top-level redfishd configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    pub username: Option<String>,
    pub password: Option<String>,
    pub realm: Option<String>,
    pub policy: Option<AuthPolicy>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Merge CLI arguments over config file values
    pub fn merge_with_args(&self, cli: &Cli) -> Settings {
        let auth = &self.auth;
        Settings {
            host: cli
                .host
                .clone()
                .or_else(|| self.server.host.clone())
                .unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: cli.port.or(self.server.port).unwrap_or(DEFAULT_PORT),
            credentials: Credentials::new(
                auth.username.as_deref().unwrap_or(DEFAULT_USERNAME),
                auth.password.as_deref().unwrap_or(DEFAULT_PASSWORD),
            ),
            realm: auth
                .realm
                .clone()
                .unwrap_or_else(|| DEFAULT_REALM.to_string()),
            policy: cli
                .auth_policy
                .map(AuthPolicy::from)
                .or(auth.policy)
                .unwrap_or_default(),
        }
    }
}

/// Fully resolved settings after merging CLI args
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub credentials: Credentials,
    pub realm: String,
    pub policy: AuthPolicy,
}

impl Settings {
    pub fn app_state(&self) -> AppState {
        AppState::with_realm(self.credentials.clone(), self.policy, self.realm.clone())
    }
}
