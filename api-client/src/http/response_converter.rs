use crate::error::{ApiClientError, Result};
use crate::traits::ResponseConverter;
use crate::types::HttpResponse;
use reqwest::Response;
use std::collections::HashMap;
use std::time::Duration;

/// Implementation of ResponseConverter trait
#[derive(Clone, Default)]
pub struct ResponseConverterImpl {
    timeout: Option<Duration>,
}

impl ResponseConverterImpl {
    /// Create a new response converter
    pub fn new() -> Self {
        Self::default()
    }

    /// Client-level timeout reported when reading the body times out
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

impl ResponseConverter for ResponseConverterImpl {
    async fn convert_response(&self, response: Response) -> Result<HttpResponse> {
        let status = response.status().as_u16();
        let url = response.url().to_string();

        let mut headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(value_str) = value.to_str() {
                headers.insert(name.to_string(), value_str.to_string());
            }
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiClientError::from_transport(e, self.timeout))?;

        Ok(HttpResponse {
            status,
            headers,
            body,
            url,
        })
    }
}
