use thiserror::Error;
use std::path::PathBuf;
use std::time::Duration;

/// Result type alias for api-client operations
pub type Result<T> = std::result::Result<T, ApiClientError>;

/// Errors raised outside the invocation boundary: configuration, client
/// construction and the transport itself
#[derive(Debug, Error)]
pub enum ApiClientError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Request timed out{}", describe_limit(.limit))]
    Timeout { limit: Option<Duration> },

    #[error("Unable to connect: {message}")]
    Connect { message: String },
}

impl ApiClientError {
    /// Create a new invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a new connection error
    pub fn connect<S: Into<String>>(message: S) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Translate a reqwest failure into the transport taxonomy
    ///
    /// Headers are validated before reqwest sees them, so builder errors
    /// here are URL problems and are reported as connection failures.
    pub fn from_transport(error: reqwest::Error, timeout: Option<Duration>) -> Self {
        if error.is_timeout() {
            Self::Timeout { limit: timeout }
        } else if error.is_connect() || error.is_builder() {
            Self::connect(error.to_string())
        } else {
            Self::Http(error)
        }
    }

    /// Whether the failure happened before any response was received
    pub fn is_network(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connect { .. } | Self::UrlParse(_) => true,
            Self::Http(err) => !err.is_status() && !err.is_decode(),
            _ => false,
        }
    }

    /// Whether the failure was a timeout
    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Timeout { .. } => true,
            Self::Http(err) => err.is_timeout(),
            _ => false,
        }
    }
}

/// Sub-second limits are shown in milliseconds, rounded up
fn describe_limit(limit: &Option<Duration>) -> String {
    match limit {
        None => String::new(),
        Some(limit) if limit.as_secs() == 0 => {
            format!(" after {}ms", limit.as_micros().div_ceil(1000))
        }
        Some(limit) if limit.subsec_millis() == 0 => format!(" after {}s", limit.as_secs()),
        Some(limit) => format!(" after {:.1}s", limit.as_secs_f64()),
    }
}
