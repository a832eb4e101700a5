//! API Client - backend invocation with uniform error normalization
//!
//! This crate issues calls against the application backend, maps every
//! failure shape (billing rejections, error statuses, unreachable servers,
//! unreadable payloads) into one user-presentable message and hands that
//! message to an injected notifier.

// Core modules
pub mod config;
pub mod error;
pub mod types;
pub mod traits;

// Main functionality modules
pub mod auth;
pub mod billing;
pub mod classification;
pub mod http;
pub mod invoke;
pub mod notify;

mod testing;

// Re-export main types for convenience
pub use auth::{create_auth_client_from_env, create_auth_client_with, AuthClient};
pub use billing::BillingError;
pub use classification::{classify, determine_severity, status_message, ErrorValue};
pub use config::{AuthConfig, ClientConfig};
pub use error::{ApiClientError, Result};
pub use http::ReqwestTransport;
pub use invoke::ApiClient;
pub use notify::{MemoryNotifier, NoopNotifier, TracingNotifier};
pub use traits::{HttpTransport, Notification, Notifier};
pub use reqwest::Method;
pub use types::{
    ApiError, ApiRequest, ApiResponse, ErrorContext, ErrorKind, ErrorSeverity, HttpResponse,
    InvokeOptions,
};

/// Build a client from `api-client.toml` (if present) and environment variables
pub fn client_from_env() -> Result<ApiClient<ReqwestTransport, TracingNotifier>> {
    let config = ClientConfig::load(None::<&str>)?;
    ApiClient::from_config(&config)
}
