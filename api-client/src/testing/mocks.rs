use crate::error::{ApiClientError, Result};
use crate::traits::HttpTransport;
use crate::types::{ApiRequest, HttpResponse};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock transport for testing
#[derive(Clone)]
pub struct MockTransport {
    pub response: Option<HttpResponse>,
    pub delay: Option<Duration>,
    pub should_fail: bool,
    pub failure_message: String,
    pub requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            response: None,
            delay: None,
            should_fail: false,
            failure_message: "Mock failure".to_string(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_response(mut self, status: u16, body: &str) -> Self {
        self.response = Some(HttpResponse::new(
            status,
            HashMap::new(),
            body.to_string(),
            "http://mock.local".to_string(),
        ));
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_failure<S: Into<String>>(mut self, message: S) -> Self {
        self.should_fail = true;
        self.failure_message = message.into();
        self
    }

    pub fn recorded_requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().map(|r| r.clone()).unwrap_or_default()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpTransport for MockTransport {
    async fn execute(&self, request: &ApiRequest) -> Result<HttpResponse> {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if self.should_fail {
            return Err(ApiClientError::connect(self.failure_message.clone()));
        }

        self.response
            .clone()
            .ok_or_else(|| ApiClientError::connect("Mock response not configured"))
    }
}
