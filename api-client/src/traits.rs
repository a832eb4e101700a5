use crate::error::Result;
use crate::types::{ApiRequest, ErrorSeverity, HttpResponse};
use std::future::Future;
use std::sync::Arc;

/// Trait for transports able to carry an `ApiRequest` to the backend
pub trait HttpTransport: Send + Sync + Clone {
    /// Execute the request and return whatever response the server sent,
    /// successful or not. `Err` means no response was received.
    fn execute(&self, request: &ApiRequest) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// Trait for turning an `ApiRequest` into a transport request
pub trait RequestBuilder: Send + Sync {
    fn build_request(&self, request: &ApiRequest) -> Result<reqwest::Request>;
}

/// Trait for converting a transport response into an `HttpResponse`
pub trait ResponseConverter: Send + Sync {
    fn convert_response(
        &self,
        response: reqwest::Response,
    ) -> impl Future<Output = Result<HttpResponse>> + Send;
}

/// A user-visible message raised when a call fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: ErrorSeverity,
    pub message: String,
}

/// Channel for transient user-facing notifications (toasts, alerts)
///
/// Fire-and-forget: implementations must not block the caller.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification);
}

impl<N: Notifier + ?Sized> Notifier for Arc<N> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}

impl<N: Notifier + ?Sized> Notifier for Box<N> {
    fn notify(&self, notification: &Notification) {
        (**self).notify(notification)
    }
}
