//! Declarative endpoint descriptors.
//!
//! A descriptor is plain data: the tool name and description, its parameters, and
//! a [`Route`] saying whether calls go to the remote API or to the local cache.

use std::fmt;

use serde_json::Value as JsonValue;

use crate::params::{self, Param};

/// HTTP method of a remote endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HttpMethod {
    /// GET (the default)
    #[default]
    Get,
    /// POST
    Post,
    /// PUT
    Put,
    /// PATCH
    Patch,
    /// DELETE
    Delete,
}

impl HttpMethod {
    /// Whether parameters travel in a JSON body rather than the query string.
    pub fn carries_body(self) -> bool {
        !matches!(self, HttpMethod::Get)
    }

    /// Method name as sent on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<HttpMethod> for reqwest::Method {
    fn from(method: HttpMethod) -> Self {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

/// A call against the remote API.
#[derive(Debug, Clone)]
pub struct RemoteEndpoint {
    /// Path template, possibly containing `{param}` placeholders.
    pub path: &'static str,
    /// HTTP method.
    pub method: HttpMethod,
    /// Root URL override; the configured base URL is used when absent.
    pub base_url: Option<String>,
    /// Message returned instead of a payload whose `result` array is empty.
    pub empty_message: Option<&'static str>,
}

/// Operations served from the local cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalOp {
    /// Store the portfolio share token.
    SaveShareToken,
    /// Read back the stored share token.
    GetShareToken,
}

/// Where a tool's calls are dispatched.
#[derive(Debug, Clone)]
pub enum Route {
    /// Translate and send to the remote API.
    Remote(RemoteEndpoint),
    /// Handle against the local cache.
    Local(LocalOp),
}

/// Declarative description of one tool.
#[derive(Debug, Clone)]
pub struct EndpointDescriptor {
    /// Tool name, unique across the catalog.
    pub name: &'static str,
    /// Tool description shown to the agent.
    pub description: &'static str,
    /// Declared parameters.
    pub params: Vec<Param>,
    /// Dispatch target.
    pub route: Route,
}

impl EndpointDescriptor {
    /// Describe a GET endpoint against the configured base URL.
    pub fn remote(
        name: &'static str,
        description: &'static str,
        path: &'static str,
        params: Vec<Param>,
    ) -> Self {
        Self {
            name,
            description,
            params,
            route: Route::Remote(RemoteEndpoint {
                path,
                method: HttpMethod::Get,
                base_url: None,
                empty_message: None,
            }),
        }
    }

    /// Describe a local cache operation.
    pub fn local(
        name: &'static str,
        description: &'static str,
        op: LocalOp,
        params: Vec<Param>,
    ) -> Self {
        Self {
            name,
            description,
            params,
            route: Route::Local(op),
        }
    }

    /// Set the HTTP method of a remote endpoint.
    pub fn method(mut self, method: HttpMethod) -> Self {
        if let Route::Remote(remote) = &mut self.route {
            remote.method = method;
        }
        self
    }

    /// Point a remote endpoint at a different root URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        if let Route::Remote(remote) = &mut self.route {
            remote.base_url = Some(base_url.into());
        }
        self
    }

    /// Replace an empty `result` array with an informational message.
    pub fn empty_message(mut self, message: &'static str) -> Self {
        if let Route::Remote(remote) = &mut self.route {
            remote.empty_message = Some(message);
        }
        self
    }

    /// JSON Schema of the tool's input.
    pub fn input_schema(&self) -> JsonValue {
        params::input_schema(&self.params)
    }

    /// Whether the tool never touches the network.
    pub fn is_local(&self) -> bool {
        matches!(self.route, Route::Local(_))
    }
}
