//! Completion Provider Port
//!
//! Abstract interface for the external text-generation service.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::errors::ChatError;

/// Capability flags forwarded to the completion service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Tool {
    /// Permit the model to retrieve live information.
    WebSearch,
}

/// Completion service interface.
///
/// One call per chat turn: the user message, the process-wide instruction
/// string, and a capability list go out; a single text answer comes back.
/// Any failure (transport, auth, rate limit, empty answer) surfaces as
/// [`ChatError::Upstream`] and is not retried.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    async fn complete(
        &self,
        input: &str,
        instructions: &str,
        tools: &[Tool],
    ) -> Result<String, ChatError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_web_search_wire_form() {
        assert_eq!(
            serde_json::to_value(Tool::WebSearch).unwrap(),
            json!({"type": "web_search"})
        );
    }

    #[test]
    fn test_tool_list_serializes_as_array() {
        assert_eq!(
            serde_json::to_value([Tool::WebSearch]).unwrap(),
            json!([{"type": "web_search"}])
        );
    }
}
