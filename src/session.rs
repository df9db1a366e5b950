//! MCP session state.
//!
//! Bundles what every tool handler needs: the read-only configuration, the HTTP
//! invoker, and the local cache. Nothing here changes after startup.

use std::sync::Arc;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::error::Result;
use crate::invoke::RemoteInvoker;

/// Shared resources for tool handlers.
#[derive(Debug, Clone)]
pub struct McpSession {
    config: Arc<Config>,
    invoker: RemoteInvoker,
    cache: CacheStore,
}

impl McpSession {
    /// Create a session from the process configuration.
    pub fn new(config: Config) -> Result<Self> {
        let invoker = RemoteInvoker::new(&config)?;
        let cache = CacheStore::new(config.cache_path.clone());
        Ok(Self {
            config: Arc::new(config),
            invoker,
            cache,
        })
    }

    /// Process configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Base URL for endpoints that do not override it.
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// HTTP invoker for remote endpoints.
    pub fn invoker(&self) -> &RemoteInvoker {
        &self.invoker
    }

    /// Local cache backing the share-token tools.
    pub fn cache(&self) -> &CacheStore {
        &self.cache
    }
}
