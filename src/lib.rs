//! # coinstats-mcp
//!
//! MCP (Model Context Protocol) server for the CoinStats public API.
//!
//! This crate exposes a fixed catalog of CoinStats endpoints as MCP tools, so an
//! agent calls typed operations instead of composing HTTP requests. It implements
//! the MCP protocol over stdin/stdout using JSON-RPC 2.0.
//!
//! ## Features
//!
//! - **Coins, tickers, wallets, exchanges, news, markets and portfolios** as tools
//! - **Declarative catalog**: each tool is an [`EndpointDescriptor`] with a path
//!   template, an HTTP method and a parameter list
//! - **Request translation**: `{placeholder}` substitution, query vs. JSON body
//!   by method, and the `~` filter syntax of the coin listing
//! - **Local share-token cache**: two tools that persist a portfolio share token
//!   in a JSON file
//!
//! ## Usage
//!
//! The server is typically run as an executable and configured in AI tools like Claude Desktop:
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "coinstats": {
//!       "command": "/path/to/coinstats-mcp",
//!       "env": { "COINSTATS_API_KEY": "<your key>" }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use coinstats_mcp::{Config, McpServer, McpSession, ToolRegistry};
//!
//! # async fn run() -> coinstats_mcp::Result<()> {
//! let session = McpSession::new(Config::new("api-key"))?;
//! let mut server = McpServer::new(session, ToolRegistry::new());
//!
//! // Reads from stdin, writes to stdout
//! server.run().await?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod cache;
mod config;
mod content;
mod convert;
mod endpoint;
mod error;
mod invoke;
mod params;
mod server;
mod session;
mod tools;
mod translate;

pub use cache::CacheStore;
pub use config::{Config, DEFAULT_BASE_URL, DEFAULT_CACHE_FILE, DEFAULT_TIMEOUT};
pub use content::{ToolContent, ToolResult, GENERIC_FAILURE};
pub use endpoint::{EndpointDescriptor, HttpMethod, LocalOp, RemoteEndpoint, Route};
pub use error::{McpError, Result};
pub use invoke::RemoteInvoker;
pub use params::{Param, ParamKind};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use session::McpSession;
pub use tools::{catalog, ToolDef, ToolRegistry};
pub use translate::{translate, ResolvedRequest, COIN_LIST_PATH};
