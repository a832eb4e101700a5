use crate::config::types::ClientConfig;
use crate::error::{ApiClientError, Result};
use std::path::Path;

/// Environment variable holding the backend base URL
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";
/// Environment variable holding the auth service URL
pub const AUTH_URL_VAR: &str = "AUTH_URL";
/// Environment variable holding the auth public key
pub const AUTH_PUBLIC_KEY_VAR: &str = "AUTH_PUBLIC_KEY";
/// Environment variable holding the default timeout in seconds
pub const TIMEOUT_VAR: &str = "API_TIMEOUT_SECONDS";

/// Default configuration file name
pub const DEFAULT_CONFIG_FILE: &str = "api-client.toml";

/// Configuration loader trait
pub trait ConfigLoader {
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig>;
    fn load_from_env() -> Result<ClientConfig>;
}

/// Default configuration loader implementation
pub struct DefaultConfigLoader;

impl ConfigLoader for DefaultConfigLoader {
    /// Load configuration from a TOML file
    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ClientConfig> {
        let path_ref = path.as_ref();

        if !path_ref.exists() {
            return Err(ApiClientError::ConfigNotFound {
                path: path_ref.to_path_buf(),
            });
        }

        let content = std::fs::read_to_string(path_ref)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from process environment variables only
    fn load_from_env() -> Result<ClientConfig> {
        let mut config = ClientConfig::default();
        config.apply_env_with(|name| std::env::var(name).ok())?;
        Ok(config)
    }
}

impl ClientConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        DefaultConfigLoader::load_from_file(path)
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        DefaultConfigLoader::load_from_env()
    }

    /// Load the file if it exists, then let environment variables override it
    pub fn load<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)?
            }
            None => Self::default(),
        };
        config.apply_env_with(|name| std::env::var(name).ok())?;
        Ok(config)
    }

    /// Override fields from variables resolved through `lookup`
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(BACKEND_URL_VAR) {
            self.backend_url = url;
        }
        if let Some(url) = lookup(AUTH_URL_VAR) {
            self.auth.url = url;
        }
        if let Some(key) = lookup(AUTH_PUBLIC_KEY_VAR) {
            self.auth.public_key = key;
        }
        if let Some(raw) = lookup(TIMEOUT_VAR) {
            let seconds = raw.trim().parse::<u64>().map_err(|_| {
                ApiClientError::invalid_config(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_VAR, raw
                ))
            })?;
            self.timeout_seconds = Some(seconds);
        }
        Ok(())
    }
}
