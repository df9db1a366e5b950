//! Process-wide configuration.
//!
//! Built once at startup and shared read-only with every tool invocation.

use std::path::PathBuf;
use std::time::Duration;

/// Default root URL of the CoinStats public API.
pub const DEFAULT_BASE_URL: &str = "https://openapiv1.coinstats.app";

/// Default location of the share-token cache file.
pub const DEFAULT_CACHE_FILE: &str = "./coinstats-mcp-cache.json";

/// Default timeout for a single outbound API call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// API key sent as `X-API-KEY` on every remote call.
    pub api_key: String,
    /// Root URL that endpoint paths are appended to (no trailing slash).
    pub base_url: String,
    /// Timeout for a single outbound call.
    pub timeout: Duration,
    /// Path of the JSON cache file backing the local tools.
    pub cache_path: PathBuf,
    /// Surface remote failure details instead of the generic message.
    pub verbose_errors: bool,
}

impl Config {
    /// Create a configuration with the given API key and default settings.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            cache_path: PathBuf::from(DEFAULT_CACHE_FILE),
            verbose_errors: false,
        }
    }

    /// Set the base URL. A trailing slash is stripped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Set the outbound call timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the cache file path.
    pub fn with_cache_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.cache_path = path.into();
        self
    }

    /// Enable or disable detailed remote error messages.
    pub fn with_verbose_errors(mut self, verbose: bool) -> Self {
        self.verbose_errors = verbose;
        self
    }
}

// Keeps the key out of logs.
impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("cache_path", &self.cache_path)
            .field("verbose_errors", &self.verbose_errors)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::new("key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.cache_path, PathBuf::from(DEFAULT_CACHE_FILE));
        assert!(!config.verbose_errors);
    }

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let config = Config::new("key").with_base_url("http://localhost:8080/");
        assert_eq!(config.base_url, "http://localhost:8080");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config::new("super-secret");
        let rendered = format!("{:?}", config);
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
