use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("API client error: {0}")]
    Client(#[from] api_client::ApiClientError),

    #[error("Failed to parse JSON: {0}")]
    JsonParseError(#[from] serde_json::Error),

    #[error("Logger error: {0}")]
    Logger(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("{0}")]
    Other(String),
}

impl CliError {
    pub fn user_message(&self) -> String {
        match self {
            Self::Io(err) => format!("I/O operation failed: {err}"),
            Self::Client(err) => format!("Client setup failed: {err}"),
            Self::JsonParseError(err) => format!("Failed to parse JSON: {err}"),
            Self::Logger(msg) => format!("Logging could not be initialised: {msg}"),
            Self::InvalidArgument(msg) => format!("Invalid argument: {msg}"),
            Self::Other(msg) => msg.clone(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages() {
        let err = CliError::InvalidArgument("query must be key=value".into());
        assert_eq!(err.user_message(), "Invalid argument: query must be key=value");

        let err = CliError::from(api_client::ApiClientError::invalid_config("bad timeout"));
        assert!(err.user_message().contains("bad timeout"));
    }
}
