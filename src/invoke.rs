//! Remote invocation.
//!
//! Sends a [`ResolvedRequest`] to the API with the configured key and turns the
//! outcome into a [`ToolResult`]. Any non-success status is treated the same as a
//! transport failure.

use reqwest::{header, Client};
use serde_json::Value as JsonValue;
use tracing::{debug, warn};

use crate::config::Config;
use crate::content::{ToolResult, GENERIC_FAILURE};
use crate::error::{McpError, Result};
use crate::translate::ResolvedRequest;

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// HTTP client for the remote API.
#[derive(Debug, Clone)]
pub struct RemoteInvoker {
    client: Client,
    verbose_errors: bool,
}

impl RemoteInvoker {
    /// Create an invoker from the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = header::HeaderMap::new();
        let mut key = header::HeaderValue::from_str(&config.api_key)
            .map_err(|_| McpError::Internal("Invalid API key format".to_string()))?;
        key.set_sensitive(true);
        headers.insert(header::HeaderName::from_static(API_KEY_HEADER), key);

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            verbose_errors: config.verbose_errors,
        })
    }

    /// Send the request and decode the JSON response.
    pub async fn fetch(&self, request: &ResolvedRequest) -> Result<JsonValue> {
        let url = request.url();
        debug!(method = %request.method, url = %url, "API request");

        let mut builder = self.client.request(request.method.into(), url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(McpError::RemoteCall(format!("HTTP error! status: {}", status)));
        }

        Ok(response.json::<JsonValue>().await?)
    }

    /// Send the request and render the outcome as a tool result.
    ///
    /// The response payload is passed through verbatim as JSON text.
    pub async fn invoke(&self, request: &ResolvedRequest) -> ToolResult {
        match self.fetch(request).await {
            Ok(data) => ToolResult::text(data.to_string()),
            Err(err) => self.failure(&err),
        }
    }

    /// Render a failed call as a flagged tool result.
    ///
    /// Translation failures always carry their reason. Failures after sending
    /// are reduced to a generic message unless verbose errors are enabled.
    pub fn failure(&self, err: &McpError) -> ToolResult {
        warn!(error = %err, "API request failed");
        if self.verbose_errors || err.is_translation_failure() {
            ToolResult::error(format!("Error: {}", err))
        } else {
            ToolResult::error(GENERIC_FAILURE)
        }
    }
}
