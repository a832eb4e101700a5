use crate::billing::BillingError;
use crate::types::{ApiError, HttpResponse};
use serde_json::{Map, Value};

/// Any error-like value handed to the classifier
///
/// Variants are listed in the order the classifier inspects them.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorValue {
    /// Business-rule failure with structured detail
    Domain(BillingError),
    /// Anything exposing an error message
    Error(String),
    /// A value carrying the transport response it failed with
    Response(HttpResponse),
    /// A bare status code
    Status(u16),
    /// Plain text
    Text(String),
    /// Arbitrary structured value
    Object(Map<String, Value>),
    /// Null or missing
    Empty,
}

impl ErrorValue {
    /// Wrap any `std::error::Error` by its message
    pub fn from_error(error: &(dyn std::error::Error + '_)) -> Self {
        ErrorValue::Error(error.to_string())
    }
}

impl From<BillingError> for ErrorValue {
    fn from(error: BillingError) -> Self {
        ErrorValue::Domain(error)
    }
}

impl From<&ApiError> for ErrorValue {
    fn from(error: &ApiError) -> Self {
        ErrorValue::Error(error.message.clone())
    }
}

impl From<HttpResponse> for ErrorValue {
    fn from(response: HttpResponse) -> Self {
        ErrorValue::Response(response)
    }
}

impl From<&str> for ErrorValue {
    fn from(text: &str) -> Self {
        ErrorValue::Text(text.to_string())
    }
}

impl From<String> for ErrorValue {
    fn from(text: String) -> Self {
        ErrorValue::Text(text)
    }
}

impl From<Value> for ErrorValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ErrorValue::Text(text),
            Value::Object(map) => ErrorValue::Object(map),
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::Array(_) => ErrorValue::Empty,
        }
    }
}

impl<T: Into<ErrorValue>> From<Option<T>> for ErrorValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(ErrorValue::Empty)
    }
}
