//! Application state for the Redfish API

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Default credential pair accepted by the auth gate
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "password";
/// Realm named in the `WWW-Authenticate` challenge
pub const DEFAULT_REALM: &str = "Redfish";

/// Which routes the auth gate covers
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthPolicy {
    /// Service root and the manager collection are public, everything else
    /// requires credentials
    #[default]
    DiscoveryExempt,
    /// Every route requires credentials
    RequireAll,
}

/// The single static credential pair
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Check a decoded Basic credential pair
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

impl Default for Credentials {
    fn default() -> Self {
        Self::new(DEFAULT_USERNAME, DEFAULT_PASSWORD)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Debug)]
struct Inner {
    credentials: Credentials,
    realm: String,
    policy: AuthPolicy,
}

/// Application state shared across all handlers. Immutable for the life of
/// the process.
#[derive(Debug, Clone)]
pub struct AppState {
    inner: Arc<Inner>,
}

impl AppState {
    /// Create a new AppState with the given credentials and auth policy
    pub fn new(credentials: Credentials, policy: AuthPolicy) -> Self {
        Self::with_realm(credentials, policy, DEFAULT_REALM)
    }

    /// Create a new AppState with a custom challenge realm
    pub fn with_realm(
        credentials: Credentials,
        policy: AuthPolicy,
        realm: impl Into<String>,
    ) -> Self {
        Self {
            inner: Arc::new(Inner {
                credentials,
                realm: realm.into(),
                policy,
            }),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.inner.credentials
    }

    pub fn realm(&self) -> &str {
        &self.inner.realm
    }

    pub fn policy(&self) -> AuthPolicy {
        self.inner.policy
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Credentials::default(), AuthPolicy::default())
    }
}
