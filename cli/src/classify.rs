use crate::error::Result;
use api_client::{classify, ErrorValue};
use serde_json::Value;

/// Print the user-facing message for a JSON error value
pub fn execute(value: String) -> Result<()> {
    println!("{}", message_for(&value));
    Ok(())
}

/// Input that is not valid JSON is classified as plain text
fn message_for(raw: &str) -> String {
    let value = match serde_json::from_str::<Value>(raw) {
        Ok(value) => ErrorValue::from(value),
        Err(_) => ErrorValue::from(raw),
    };
    classify(&value)
}
