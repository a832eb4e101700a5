//! Invocation wrapper: issue a call, normalize every failure, notify

use crate::billing::{BillingError, BILLING_STATUS};
use crate::classification::{classify, determine_severity, ErrorValue};
use crate::config::ClientConfig;
use crate::error::{ApiClientError, Result};
use crate::http::ReqwestTransport;
use crate::notify::TracingNotifier;
use crate::traits::{HttpTransport, Notification, Notifier};
use crate::types::{ApiError, ApiRequest, ApiResponse, ErrorKind, HttpResponse, InvokeOptions};
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

pub const CONNECTION_ERROR_MESSAGE: &str =
    "Unable to reach the server. Please check your internet connection and try again.";

/// Backend client that never fails outward: every call yields an `ApiResponse`
#[derive(Clone)]
pub struct ApiClient<T, N> {
    transport: T,
    notifier: N,
    default_timeout: Option<Duration>,
}

impl ApiClient<ReqwestTransport, TracingNotifier> {
    /// Build a reqwest-backed client that reports failures through tracing
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(config)?;
        Ok(Self::new(transport, TracingNotifier).with_default_timeout(config.timeout()))
    }
}

impl<T: HttpTransport, N: Notifier> ApiClient<T, N> {
    pub fn new(transport: T, notifier: N) -> Self {
        Self {
            transport,
            notifier,
            default_timeout: None,
        }
    }

    pub fn with_default_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.default_timeout = timeout;
        self
    }

    /// Replace the notifier, keeping transport and timeout
    pub fn with_notifier<M: Notifier>(self, notifier: M) -> ApiClient<T, M> {
        ApiClient {
            transport: self.transport,
            notifier,
            default_timeout: self.default_timeout,
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Issue `request` and decode a successful body into `D`
    ///
    /// Failures are normalized into `ApiResponse::Failure` and, unless the
    /// options suppress it, surfaced through the notifier.
    pub async fn invoke<D: DeserializeOwned>(
        &self,
        request: ApiRequest,
        options: &InvokeOptions,
    ) -> ApiResponse<D> {
        let timeout = options.timeout.or(self.default_timeout);

        let outcome = match timeout {
            Some(limit) => match tokio::time::timeout(limit, self.transport.execute(&request)).await {
                Ok(result) => result,
                Err(_) => Err(ApiClientError::Timeout { limit: Some(limit) }),
            },
            None => self.transport.execute(&request).await,
        };

        let result = match outcome {
            Ok(response) if response.is_success() => decode_body(&response),
            Ok(response) => Err(response_error(response)),
            Err(error) => Err(transport_error(error)),
        };

        match result {
            Ok(data) => {
                debug!(method = %request.method, path = %request.path, "request succeeded");
                ApiResponse::Success { data }
            }
            Err(error) => {
                warn!(
                    method = %request.method,
                    path = %request.path,
                    kind = %error.kind,
                    status = ?error.status,
                    "request failed: {}",
                    error.message
                );
                if options.should_notify() {
                    self.raise(&error, options);
                }
                ApiResponse::Failure { error }
            }
        }
    }

    fn raise(&self, error: &ApiError, options: &InvokeOptions) {
        let message = classify(&ErrorValue::from(error));
        let message = match &options.error_context {
            Some(context) => context.describe(&message),
            None => message,
        };

        self.notifier.notify(&Notification {
            severity: determine_severity(error),
            message,
        });
    }
}

fn decode_body<D: DeserializeOwned>(response: &HttpResponse) -> std::result::Result<D, ApiError> {
    let body = if response.body.trim().is_empty() {
        "null"
    } else {
        response.body.as_str()
    };

    serde_json::from_str(body).map_err(|e| {
        let message = classify(&ErrorValue::from_error(&e));
        ApiError::malformed(format!("Unexpected response format: {}", message))
            .with_status(response.status)
            .with_response(response.clone())
    })
}

fn response_error(response: HttpResponse) -> ApiError {
    let body = response.json_body();

    if response.status == BILLING_STATUS {
        let billing = BillingError::from_response(&response);
        let message = classify(&ErrorValue::Domain(billing.clone()));
        return ApiError::new(ErrorKind::Domain, message)
            .with_status(response.status)
            .with_details(Value::Object(billing.detail))
            .with_response(response);
    }

    let message = classify(&ErrorValue::Response(response.clone()));
    let mut error = ApiError::new(ErrorKind::Response, message).with_status(response.status);

    if let Some(body) = body {
        if let Some(code) = machine_code(&body) {
            error = error.with_code(code);
        }
        error = error.with_details(body);
    }

    error.with_response(response)
}

fn transport_error(error: ApiClientError) -> ApiError {
    if error.is_network() {
        let message = if error.is_timeout() {
            format!("{}. Please check your connection and try again.", error)
        } else {
            CONNECTION_ERROR_MESSAGE.to_string()
        };
        let code = if error.is_timeout() { "timeout" } else { "connection" };
        return ApiError::network(message).with_code(code);
    }

    ApiError::malformed(classify(&ErrorValue::from_error(&error)))
}

fn machine_code(body: &Value) -> Option<String> {
    ["code", "error"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notify::MemoryNotifier;
    use crate::testing::MockTransport;
    use crate::types::{ErrorContext, ErrorSeverity};
    use serde_json::json;

    fn client(transport: MockTransport) -> (ApiClient<MockTransport, MemoryNotifier>, MemoryNotifier) {
        let notifier = MemoryNotifier::new();
        (ApiClient::new(transport, notifier.clone()), notifier)
    }

    #[tokio::test]
    async fn test_success_decodes_body() {
        let (client, notifier) = client(MockTransport::new().with_response(200, r#"{"id": 7}"#));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/projects/7"), &InvokeOptions::default()).await;

        assert_eq!(response.data(), Some(&json!({"id": 7})));
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_request_reaches_transport_unchanged() {
        let transport = MockTransport::new().with_response(201, r#"{"ok": true}"#);
        let (client, _) = client(transport.clone());

        let request = ApiRequest::post("/projects").json(json!({"name": "demo"}));
        let _: ApiResponse<Value> = client.invoke(request.clone(), &InvokeOptions::default()).await;

        assert_eq!(transport.recorded_requests(), vec![request]);
    }

    #[tokio::test]
    async fn test_empty_success_body_decodes_as_unit() {
        let (client, _) = client(MockTransport::new().with_response(204, ""));

        let response: ApiResponse<()> = client.invoke(ApiRequest::delete("/projects/7"), &InvokeOptions::default()).await;

        assert!(response.is_success());
    }

    #[tokio::test]
    async fn test_status_error_uses_classifier() {
        let (client, notifier) = client(
            MockTransport::new().with_response(404, r#"{"detail": "Thread not found", "code": "thread_missing"}"#),
        );

        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/threads/1"), &InvokeOptions::default()).await;
        let error = response.error().unwrap();

        assert_eq!(error.kind, ErrorKind::Response);
        assert_eq!(error.status, Some(404));
        assert_eq!(error.message, "The requested resource was not found.");
        assert_eq!(error.code.as_deref(), Some("thread_missing"));
        assert_eq!(error.details, Some(json!({"detail": "Thread not found", "code": "thread_missing"})));
        assert!(error.response.is_some());
        assert_eq!(notifier.messages(), vec!["The requested resource was not found."]);
    }

    #[tokio::test]
    async fn test_billing_status_becomes_domain_error() {
        let (client, notifier) = client(MockTransport::new().with_response(
            402,
            r#"{"detail": {"message": "Monthly limit reached", "subscription": {"plan": "free"}}}"#,
        ));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::post("/agent/start"), &InvokeOptions::default()).await;
        let error = response.error().unwrap();

        assert_eq!(error.kind, ErrorKind::Domain);
        assert_eq!(error.message, "Monthly limit reached");
        assert_eq!(
            error.details,
            Some(json!({"message": "Monthly limit reached", "subscription": {"plan": "free"}}))
        );
        assert_eq!(notifier.messages(), vec!["Monthly limit reached"]);
    }

    #[tokio::test]
    async fn test_billing_without_detail_uses_fallback() {
        let (client, _) = client(MockTransport::new().with_response(402, ""));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::post("/agent/start"), &InvokeOptions::default()).await;

        assert_eq!(response.error().unwrap().message, "Billing issue detected");
    }

    #[tokio::test]
    async fn test_transport_failure_is_network_error() {
        let (client, notifier) = client(MockTransport::new().with_failure("refused"));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/health"), &InvokeOptions::default()).await;
        let error = response.error().unwrap();

        assert_eq!(error.kind, ErrorKind::Network);
        assert_eq!(error.message, CONNECTION_ERROR_MESSAGE);
        assert_eq!(error.code.as_deref(), Some("connection"));
        assert_eq!(notifier.notifications()[0].severity, ErrorSeverity::Dependency);
    }

    #[tokio::test]
    async fn test_timeout_wins_over_status() {
        let transport = MockTransport::new()
            .with_response(500, r#"{"detail": "boom"}"#)
            .with_delay(Duration::from_millis(200));
        let (client, _) = client(transport);

        let options = InvokeOptions::new().timeout(Duration::from_millis(20));
        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/slow"), &options).await;
        let error = response.error().unwrap();

        assert_eq!(error.kind, ErrorKind::Network);
        assert_eq!(error.status, None);
        assert_eq!(error.code.as_deref(), Some("timeout"));
        assert_eq!(
            error.message,
            "Request timed out after 20ms. Please check your connection and try again."
        );
    }

    #[tokio::test]
    async fn test_default_timeout_applies() {
        let transport = MockTransport::new()
            .with_response(200, "{}")
            .with_delay(Duration::from_millis(200));
        let (client, _) = client(transport);
        let client = client.with_default_timeout(Some(Duration::from_millis(20)));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/slow"), &InvokeOptions::default()).await;

        assert!(response.error().unwrap().is_network());
    }

    #[tokio::test]
    async fn test_undecodable_success_is_malformed() {
        let (client, _) = client(MockTransport::new().with_response(200, "<html>ok</html>"));

        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/page"), &InvokeOptions::default()).await;
        let error = response.error().unwrap();

        assert_eq!(error.kind, ErrorKind::Malformed);
        assert!(error.message.starts_with("Unexpected response format: "));
        assert_eq!(error.status, Some(200));
    }

    #[tokio::test]
    async fn test_show_errors_false_suppresses_notification() {
        let (client, notifier) = client(MockTransport::new().with_response(500, ""));

        let options = InvokeOptions::new().show_errors(false);
        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/x"), &options).await;

        assert_eq!(response.error().unwrap().message, "Server error. Our team has been notified.");
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_silent_context_suppresses_notification() {
        let (client, notifier) = client(MockTransport::new().with_response(401, ""));

        let options = InvokeOptions::new().error_context(ErrorContext::new().operation("load").silent());
        let response: ApiResponse<Value> = client.invoke(ApiRequest::get("/x"), &options).await;

        assert_eq!(response.error().unwrap().status, Some(401));
        assert!(notifier.is_empty());
    }

    #[tokio::test]
    async fn test_context_labels_notification() {
        let (client, notifier) = client(MockTransport::new().with_response(503, ""));

        let options = InvokeOptions::new().error_context(ErrorContext::new().operation("load").resource("projects"));
        let _: ApiResponse<Value> = client.invoke(ApiRequest::get("/projects"), &options).await;

        assert_eq!(
            notifier.messages(),
            vec!["Failed to load projects: Service maintenance in progress. Please try again later."]
        );
    }
}
