//! Tool registry and catalog.
//!
//! The catalog is a list of [`EndpointDescriptor`]s grouped by API area. The
//! registry advertises them in `tools/list` and routes `tools/call` to either the
//! request translator and invoker or the local share-token handlers.

pub mod coins;
pub mod exchange;
pub mod market;
pub mod news;
pub mod portfolio;
pub mod share_token;
pub mod tickers;
pub mod wallet;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tracing::warn;

use crate::content::ToolResult;
use crate::endpoint::{EndpointDescriptor, RemoteEndpoint, Route};
use crate::error::{McpError, Result};
use crate::params::{prepare_args, Param};
use crate::session::McpSession;
use crate::translate::translate;

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "get-coin-by-id")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl From<&EndpointDescriptor> for ToolDef {
    fn from(descriptor: &EndpointDescriptor) -> Self {
        Self {
            name: descriptor.name.to_string(),
            description: descriptor.description.to_string(),
            input_schema: descriptor.input_schema(),
        }
    }
}

/// `page` parameter shared by paginated endpoints.
pub(crate) fn page() -> Param {
    Param::number("page", "Page number").default(1)
}

/// `limit` parameter shared by paginated endpoints.
pub(crate) fn limit() -> Param {
    Param::number("limit", "Number of results per page").default(20)
}

/// Optional `currency` parameter defaulting to USD.
pub(crate) fn currency() -> Param {
    Param::string("currency", "Currency for price data").default("USD")
}

/// The full built-in catalog, in advertised order.
pub fn catalog() -> Vec<EndpointDescriptor> {
    let mut endpoints = Vec::new();

    endpoints.extend(coins::endpoints());
    endpoints.extend(tickers::endpoints());
    endpoints.extend(wallet::endpoints());
    endpoints.extend(exchange::endpoints());
    endpoints.extend(market::endpoints());
    endpoints.extend(news::endpoints());
    endpoints.extend(portfolio::endpoints());
    endpoints.extend(share_token::endpoints());

    endpoints
}

/// Registry of all available tools.
///
/// Built once at startup; tools are never added or removed afterwards.
pub struct ToolRegistry {
    endpoints: Vec<EndpointDescriptor>,
    tools: Vec<ToolDef>,
    by_name: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a new registry with the built-in catalog.
    pub fn new() -> Self {
        Self::from_catalog(catalog())
    }

    /// Create a registry from an explicit catalog.
    ///
    /// Names must be unique. A repeated name replaces the earlier entry.
    pub fn from_catalog(catalog: Vec<EndpointDescriptor>) -> Self {
        let mut registry = Self {
            endpoints: Vec::with_capacity(catalog.len()),
            tools: Vec::with_capacity(catalog.len()),
            by_name: HashMap::new(),
        };
        for descriptor in catalog {
            registry.register(descriptor);
        }
        registry
    }

    fn register(&mut self, descriptor: EndpointDescriptor) {
        let def = ToolDef::from(&descriptor);
        match self.by_name.get(descriptor.name) {
            Some(&index) => {
                warn!(tool = descriptor.name, "duplicate tool name, replacing earlier definition");
                self.tools[index] = def;
                self.endpoints[index] = descriptor;
            }
            None => {
                self.by_name.insert(descriptor.name, self.endpoints.len());
                self.tools.push(def);
                self.endpoints.push(descriptor);
            }
        }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Look up a descriptor by tool name.
    pub fn get(&self, name: &str) -> Option<&EndpointDescriptor> {
        self.by_name.get(name).map(|&index| &self.endpoints[index])
    }

    /// Dispatch a tool call.
    ///
    /// Unknown tools and arguments that do not fit the declared parameters are
    /// errors. Every failure past that point is reported inside the result.
    pub async fn dispatch(
        &self,
        session: &McpSession,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> Result<ToolResult> {
        let descriptor = self
            .get(name)
            .ok_or_else(|| McpError::UnknownTool(name.to_string()))?;
        let args = prepare_args(&descriptor.params, args)?;

        let result = match &descriptor.route {
            Route::Remote(remote) => call_remote(session, remote, args).await,
            Route::Local(op) => share_token::dispatch(session, *op, args).await,
        };
        Ok(result)
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Translate and send a remote call.
async fn call_remote(
    session: &McpSession,
    remote: &RemoteEndpoint,
    args: Map<String, JsonValue>,
) -> ToolResult {
    let invoker = session.invoker();
    let request = match translate(remote, session.base_url(), args) {
        Ok(request) => request,
        Err(err) => return invoker.failure(&err),
    };

    match remote.empty_message {
        None => invoker.invoke(&request).await,
        Some(message) => match invoker.fetch(&request).await {
            Ok(data) if has_empty_result(&data) => ToolResult::text(message),
            Ok(data) => ToolResult::text(data.to_string()),
            Err(err) => invoker.failure(&err),
        },
    }
}

fn has_empty_result(data: &JsonValue) -> bool {
    data.get("result")
        .and_then(|r| r.as_array())
        .is_some_and(|r| r.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::HttpMethod;
    use serde_json::json;

    #[test]
    fn test_has_empty_result() {
        assert!(has_empty_result(&json!({"result": [], "meta": {}})));
        assert!(!has_empty_result(&json!({"result": [1]})));
        assert!(!has_empty_result(&json!({"items": []})));
        assert!(!has_empty_result(&json!([])));
    }

    #[test]
    fn test_duplicate_name_last_wins() {
        let registry = ToolRegistry::from_catalog(vec![
            EndpointDescriptor::remote("dup", "first", "/a", vec![]),
            EndpointDescriptor::remote("other", "other", "/b", vec![]),
            EndpointDescriptor::remote("dup", "second", "/c", vec![Param::string("x", "x")])
                .method(HttpMethod::Post),
        ]);

        assert_eq!(registry.tools().len(), 2);
        assert_eq!(registry.tools()[0].description, "second");
        match &registry.get("dup").unwrap().route {
            Route::Remote(remote) => assert_eq!(remote.path, "/c"),
            Route::Local(_) => panic!("expected remote route"),
        }
    }

    #[test]
    fn test_catalog_placeholders_are_declared() {
        for descriptor in catalog() {
            if let Route::Remote(remote) = &descriptor.route {
                let mut rest = remote.path;
                while let Some(start) = rest.find('{') {
                    let end = rest[start..].find('}').unwrap() + start;
                    let name = &rest[start + 1..end];
                    assert!(
                        descriptor.params.iter().any(|p| p.name == name && p.required),
                        "{}: placeholder {{{}}} has no required parameter",
                        descriptor.name,
                        name
                    );
                    rest = &rest[end + 1..];
                }
            }
        }
    }
}
