//! Authentication service client factory
//!
//! Only construction lives here: sign-in, sessions and token refresh are
//! handled by the auth service itself.

use crate::config::{AuthConfig, ClientConfig};
use crate::error::{ApiClientError, Result};
use crate::http::join_url;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;

/// Scheme prefixed to auth URLs given without one
pub const DEFAULT_SCHEME: &str = "http://";

/// HTTP client preconfigured for the authentication service
#[derive(Debug, Clone)]
pub struct AuthClient {
    url: String,
    public_key: String,
    http: Client,
}

impl AuthClient {
    /// Build a client from explicit settings
    ///
    /// The URL gets `http://` prefixed when it carries no scheme; nothing
    /// else is validated, so bad settings surface as connection failures.
    pub fn new(config: &AuthConfig) -> Result<Self> {
        let url = normalize_url(&config.url);

        let mut headers = HeaderMap::new();
        let key = HeaderValue::from_str(&config.public_key).map_err(|e| {
            ApiClientError::invalid_config(format!("auth public key is not a valid header value: {}", e))
        })?;
        let bearer = HeaderValue::from_str(&format!("Bearer {}", config.public_key)).map_err(|e| {
            ApiClientError::invalid_config(format!("auth public key is not a valid header value: {}", e))
        })?;
        headers.insert("apikey", key);
        headers.insert(AUTHORIZATION, bearer);

        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            url,
            public_key: config.public_key.clone(),
            http,
        })
    }

    /// The normalized service URL
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Underlying HTTP client carrying the key headers
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Absolute URL for a path on the auth service
    pub fn endpoint(&self, path: &str) -> String {
        join_url(&self.url, path)
    }
}

/// Create an auth client from `AUTH_URL` and `AUTH_PUBLIC_KEY`
///
/// Missing variables become empty strings.
pub fn create_auth_client_from_env() -> Result<AuthClient> {
    create_auth_client_with(|name| std::env::var(name).ok())
}

/// Create an auth client from variables resolved through `lookup`
pub fn create_auth_client_with<F>(lookup: F) -> Result<AuthClient>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ClientConfig::default();
    config.apply_env_with(lookup)?;
    AuthClient::new(&config.auth)
}

/// Prefix `http://` when the URL has no scheme
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.is_empty() || trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    }
}
