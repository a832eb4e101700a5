//! Pure mapping from error-like values to user-presentable messages

use super::value::ErrorValue;
use crate::billing::BillingError;
use crate::types::{ApiError, ErrorKind, ErrorSeverity};
use serde_json::{Map, Value};

pub const BILLING_FALLBACK_MESSAGE: &str = "Billing issue detected";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Unknown error";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";
pub const UNKNOWN_STATUS_MESSAGE: &str = "An unexpected error occurred. Please try again.";

/// Resolve a display message for any error-like value
///
/// First matching rule wins: domain detail, error message, embedded
/// response status, bare status, plain text, `message` field, `error`
/// field. Never returns an empty string.
pub fn classify(value: &ErrorValue) -> String {
    let message = match value {
        ErrorValue::Domain(error) => Some(billing_message(error).to_string()),
        ErrorValue::Error(message) | ErrorValue::Text(message) => Some(message.clone()),
        ErrorValue::Response(response) => Some(status_message(response.status).to_string()),
        ErrorValue::Status(status) => Some(status_message(*status).to_string()),
        ErrorValue::Object(map) => classify_object(map),
        ErrorValue::Empty => None,
    };

    message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string())
}

/// User-facing message for an HTTP status code
pub fn status_message(status: u16) -> &'static str {
    match status {
        400 => "Invalid request. Please check your input and try again.",
        401 => "Authentication required. Please sign in again.",
        403 => "Access denied. You don't have permission to perform this action.",
        404 => "The requested resource was not found.",
        408 => "Request timeout. Please try again.",
        409 => "Conflict detected. The resource may have been modified by another user.",
        422 => "Invalid data provided. Please check your input.",
        429 => "Too many requests. Please wait a moment and try again.",
        500 => "Server error. Our team has been notified.",
        502 => "Service temporarily unavailable. Please try again in a moment.",
        503 => "Service maintenance in progress. Please try again later.",
        504 => "Request timeout. The server took too long to respond.",
        _ => UNKNOWN_STATUS_MESSAGE,
    }
}

/// Severity context for a normalized failure
pub fn determine_severity(error: &ApiError) -> ErrorSeverity {
    match (error.kind, error.status) {
        (ErrorKind::Network, _) => ErrorSeverity::Dependency,
        (_, Some(424 | 502 | 503)) => ErrorSeverity::Dependency,
        (_, Some(status)) if status >= 500 => ErrorSeverity::Critical,
        _ => ErrorSeverity::Client,
    }
}

fn billing_message(error: &BillingError) -> &str {
    error
        .detail_message()
        .filter(|m| !m.is_empty())
        .or_else(|| Some(error.message.as_str()).filter(|m| !m.is_empty()))
        .unwrap_or(BILLING_FALLBACK_MESSAGE)
}

fn classify_object(map: &Map<String, Value>) -> Option<String> {
    let embedded_status = map
        .get("response")
        .and_then(Value::as_object)
        .and_then(|response| status_field(response.get("status")));
    if let Some(status) = embedded_status {
        return Some(status_message(status).to_string());
    }

    if let Some(status) = status_field(map.get("status")) {
        return Some(status_message(status).to_string());
    }

    match map.get("message") {
        Some(Value::String(message)) => return Some(message.clone()),
        Some(Value::Null) | None => {}
        Some(other) => return Some(other.to_string()),
    }

    map.get("error").map(|error| match error {
        Value::String(text) => text.clone(),
        Value::Object(inner) => inner
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_ERROR_MESSAGE)
            .to_string(),
        _ => UNKNOWN_ERROR_MESSAGE.to_string(),
    })
}

/// Whole-number statuses count even when encoded as floats (`404.0`)
fn status_field(value: Option<&Value>) -> Option<u16> {
    let value = value?;
    let status = match value.as_u64() {
        Some(status) => status,
        None => {
            let float = value.as_f64()?;
            if float.fract() != 0.0 || float < 0.0 {
                return None;
            }
            float as u64
        }
    };
    u16::try_from(status).ok()
}
