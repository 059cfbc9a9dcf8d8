//! Request Validation
//!
//! Extracts and normalizes the user message from a decoded request body.

use serde_json::Value;

use crate::domain::errors::ChatError;

/// Extract the trimmed user message from a decoded JSON body.
///
/// `body` is `None` when there was no body or it was not valid JSON.
/// The missing-field check runs before the empty check, so `{}`, a
/// non-object body, and `{"message": 42}` all report a missing message
/// rather than an empty one. No length limit or encoding check is
/// applied beyond trimming.
pub fn validate_message(body: Option<&Value>) -> Result<String, ChatError> {
    let message = body
        .and_then(|v| v.get("message"))
        .and_then(Value::as_str)
        .ok_or(ChatError::MissingMessage)?;

    let trimmed = message.trim();
    if trimmed.is_empty() {
        return Err(ChatError::EmptyMessage);
    }
    Ok(trimmed.to_string())
}
