use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

/// Client configuration for backend and auth endpoints
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Backend base URL; empty is accepted and fails at call time
    #[serde(default)]
    pub backend_url: String,
    /// Default per-call timeout in seconds
    pub timeout_seconds: Option<u64>,
    /// Headers applied to every backend request
    pub headers: Option<HashMap<String, String>>,
    /// Authentication service settings
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Authentication service settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AuthConfig {
    /// Auth service URL, with or without a scheme
    #[serde(default)]
    pub url: String,
    /// Public (anonymous) key sent with every auth request
    #[serde(default)]
    pub public_key: String,
}

impl ClientConfig {
    /// Default call timeout, if configured
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_seconds.map(Duration::from_secs)
    }
}

impl AuthConfig {
    pub fn new<U: Into<String>, K: Into<String>>(url: U, public_key: K) -> Self {
        Self {
            url: url.into(),
            public_key: public_key.into(),
        }
    }
}
