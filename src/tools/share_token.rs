//! Local share-token tools.
//!
//! Tools: save-share-token, get-share-token
//!
//! These never reach the network; they read and write the local cache file.

use serde_json::{Map, Value as JsonValue};

use crate::content::ToolResult;
use crate::convert::get_string_arg;
use crate::endpoint::{EndpointDescriptor, LocalOp};
use crate::params::Param;
use crate::session::McpSession;

/// Cache key holding the share token.
pub const SHARE_TOKEN_KEY: &str = "shareToken";

/// Get all share-token tool definitions.
pub fn endpoints() -> Vec<EndpointDescriptor> {
    vec![
        EndpointDescriptor::local(
            "save-share-token",
            "Saves the provided portfolio share token to a local cache for future use across sessions.",
            LocalOp::SaveShareToken,
            vec![Param::string("shareToken", "The portfolio share token to save locally.").required()],
        ),
        EndpointDescriptor::local(
            "get-share-token",
            "Retrieves the saved portfolio share token from local cache.",
            LocalOp::GetShareToken,
            vec![],
        ),
    ]
}

/// Dispatch a local tool call.
pub async fn dispatch(
    session: &McpSession,
    op: LocalOp,
    args: Map<String, JsonValue>,
) -> ToolResult {
    match op {
        LocalOp::SaveShareToken => {
            let token = match get_string_arg(&args, SHARE_TOKEN_KEY) {
                Ok(token) => token,
                Err(err) => return ToolResult::error(format!("Error: {}", err)),
            };
            match session
                .cache()
                .save(SHARE_TOKEN_KEY, JsonValue::String(token))
                .await
            {
                Ok(()) => ToolResult::text("Share token saved successfully"),
                Err(err) => {
                    tracing::warn!(error = %err, "failed to save share token");
                    ToolResult::error("Failed to save share token")
                }
            }
        }

        LocalOp::GetShareToken => match session.cache().get(SHARE_TOKEN_KEY).await {
            Some(JsonValue::String(token)) => ToolResult::text(token),
            Some(other) => ToolResult::text(other.to_string()),
            None => ToolResult::text("No share token found"),
        },
    }
}
