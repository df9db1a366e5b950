//! Tool call result shape.
//!
//! Every invocation, successful or not, answers with a list of text items. Failures
//! set the error flag on the item and on the result.

use serde::{Deserialize, Serialize};

/// Message for failures detected after the request left the process.
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// One content item of a tool result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ToolContent {
    /// Plain text.
    Text {
        /// The text payload.
        text: String,
        /// Set when the item reports a failure.
        #[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
}

/// Result of a `tools/call`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Content items.
    pub content: Vec<ToolContent>,
    /// Set when the call failed.
    #[serde(rename = "isError", default, skip_serializing_if = "std::ops::Not::not")]
    pub is_error: bool,
}

impl ToolResult {
    /// A successful result carrying one text item.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: text.into(),
                is_error: None,
            }],
            is_error: false,
        }
    }

    /// A failed result carrying one flagged text item.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            content: vec![ToolContent::Text {
                text: text.into(),
                is_error: Some(true),
            }],
            is_error: true,
        }
    }

    /// Text of the first content item.
    pub fn first_text(&self) -> Option<&str> {
        self.content.first().map(|ToolContent::Text { text, .. }| text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_serialization() {
        let value = serde_json::to_value(ToolResult::text("{\"a\":1}")).unwrap();
        assert_eq!(value, json!({"content": [{"type": "text", "text": "{\"a\":1}"}]}));
    }

    #[test]
    fn test_error_serialization() {
        let value = serde_json::to_value(ToolResult::error(GENERIC_FAILURE)).unwrap();
        assert_eq!(
            value,
            json!({
                "content": [{"type": "text", "text": "Something went wrong", "isError": true}],
                "isError": true
            })
        );
    }
}
