//! Conversion utilities between tool arguments and wire text.
//!
//! Path placeholders and query strings carry plain text, so JSON argument values
//! are flattened here before they reach the URL.

use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};

/// Text form of a value substituted into a path placeholder.
///
/// Only scalars qualify; `null`, arrays and objects yield `None`.
pub fn path_segment(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        JsonValue::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Text form of a value placed in the query string.
///
/// Arrays are comma-joined and objects are sent as compact JSON. `null` is dropped.
pub fn query_value(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::Null => None,
        JsonValue::Array(items) => Some(
            items
                .iter()
                .filter_map(query_value)
                .collect::<Vec<_>>()
                .join(","),
        ),
        JsonValue::Object(_) => Some(value.to_string()),
        scalar => path_segment(scalar),
    }
}

/// Helper to get a required string argument from JSON arguments.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| McpError::MissingArg(name.to_string()))
}
