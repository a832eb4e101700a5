pub mod types;
pub mod loader;

pub use types::{AuthConfig, ClientConfig};
pub use loader::{
    ConfigLoader, DefaultConfigLoader, AUTH_PUBLIC_KEY_VAR, AUTH_URL_VAR, BACKEND_URL_VAR,
    DEFAULT_CONFIG_FILE, TIMEOUT_VAR,
};
