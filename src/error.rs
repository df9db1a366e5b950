//! Error types for the MCP server.
//!
//! Protocol-level failures (unknown tool, bad arguments) become JSON-RPC errors.
//! Everything a tool handler hits is rendered into a flagged tool result instead.

/// MCP server errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum McpError {
    /// Unknown tool requested.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArg(String),

    /// Invalid argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// A `{placeholder}` in an endpoint path had no value to substitute.
    #[error("Required path parameter '{0}' is missing")]
    MissingPathParameter(String),

    /// The resolved endpoint URL could not be parsed.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The offending URL text
        url: String,
        /// Parser message
        reason: String,
    },

    /// The remote API call failed (transport, status, or body decoding).
    #[error("remote call failed: {0}")]
    RemoteCall(String),

    /// The local cache file could not be written.
    #[error("local store error: {0}")]
    LocalStore(String),

    /// JSON-RPC protocol error.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        McpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::Protocol(format!("JSON error: {}", err))
    }
}

impl From<reqwest::Error> for McpError {
    fn from(err: reqwest::Error) -> Self {
        McpError::RemoteCall(err.to_string())
    }
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
}

impl McpError {
    /// Convert to JSON-RPC error code.
    pub fn rpc_code(&self) -> i32 {
        match self {
            McpError::UnknownTool(_) => rpc_codes::METHOD_NOT_FOUND,
            McpError::MissingArg(_) | McpError::InvalidArg { .. } => rpc_codes::INVALID_PARAMS,
            McpError::Protocol(_) => rpc_codes::INVALID_REQUEST,
            _ => rpc_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the failure was detected before any network attempt.
    ///
    /// Such failures carry a specific reason worth showing to the caller.
    pub fn is_translation_failure(&self) -> bool {
        matches!(
            self,
            McpError::MissingPathParameter(_) | McpError::InvalidUrl { .. }
        )
    }
}

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_path_parameter_names_the_parameter() {
        let err = McpError::MissingPathParameter("coinId".to_string());
        assert_eq!(err.to_string(), "Required path parameter 'coinId' is missing");
        assert!(err.is_translation_failure());
    }

    #[test]
    fn test_rpc_codes() {
        assert_eq!(
            McpError::UnknownTool("x".into()).rpc_code(),
            rpc_codes::METHOD_NOT_FOUND
        );
        assert_eq!(
            McpError::MissingArg("x".into()).rpc_code(),
            rpc_codes::INVALID_PARAMS
        );
        assert_eq!(
            McpError::RemoteCall("boom".into()).rpc_code(),
            rpc_codes::INTERNAL_ERROR
        );
        assert!(!McpError::RemoteCall("boom".into()).is_translation_failure());
    }
}
