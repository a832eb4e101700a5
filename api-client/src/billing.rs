//! Billing rejections raised by the backend
//!
//! The backend answers `402 Payment Required` when a plan limit blocks the
//! request. The body carries a `detail` object with a human-readable
//! `message` plus arbitrary plan data (e.g. `subscription`).

use crate::types::HttpResponse;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Status code the backend uses for billing rejections
pub const BILLING_STATUS: u16 = 402;

/// Structured business-rule failure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{message}")]
pub struct BillingError {
    pub status: u16,
    /// `message` plus any extra fields sent by the backend
    pub detail: Map<String, Value>,
    pub message: String,
}

impl BillingError {
    pub fn new<S: Into<String>>(status: u16, detail: Map<String, Value>, message: S) -> Self {
        Self {
            status,
            detail,
            message: message.into(),
        }
    }

    /// Build from a billing response body
    ///
    /// Accepts `{"detail": {...}}`, `{"detail": "text"}` or a bare object;
    /// anything else yields an empty detail.
    pub fn from_response(response: &HttpResponse) -> Self {
        let detail = match response.json_body() {
            Some(Value::Object(mut body)) => match body.remove("detail") {
                Some(Value::Object(detail)) => detail,
                Some(Value::String(text)) => {
                    let mut detail = Map::new();
                    detail.insert("message".to_string(), Value::String(text));
                    detail
                }
                Some(_) | None => body,
            },
            _ => Map::new(),
        };

        let message = detail
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        Self::new(response.status, detail, message)
    }

    /// The `message` entry of the detail payload, if it is a string
    pub fn detail_message(&self) -> Option<&str> {
        self.detail.get("message").and_then(Value::as_str)
    }
}
