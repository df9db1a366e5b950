//! MCP server for the CoinStats API.
//!
//! Run with `COINSTATS_API_KEY=... coinstats-mcp`.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use coinstats_mcp::{Config, McpServer, McpSession, ToolRegistry, DEFAULT_BASE_URL, DEFAULT_CACHE_FILE};
use tracing_subscriber::EnvFilter;

/// MCP server for the CoinStats API.
///
/// Exposes CoinStats endpoints as MCP tools for AI agents.
/// Communicates via JSON-RPC 2.0 over stdin/stdout.
#[derive(Parser)]
#[command(name = "coinstats-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// CoinStats API key, sent as X-API-KEY.
    #[arg(long, env = "COINSTATS_API_KEY", hide_env_values = true)]
    api_key: String,

    /// Root URL of the CoinStats API.
    #[arg(long, env = "COINSTATS_API_BASE", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Path of the local cache file used by the share-token tools.
    #[arg(long, env = "COINSTATS_MCP_CACHE", value_name = "PATH", default_value = DEFAULT_CACHE_FILE)]
    cache_file: PathBuf,

    /// Timeout for each API call, in seconds.
    #[arg(long, value_name = "SECS", default_value_t = 30)]
    timeout_secs: u64,

    /// Report remote failure details to the agent instead of a generic message.
    #[arg(long)]
    verbose_errors: bool,

    /// Enable debug logging to stderr.
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the protocol.
    let directive = if args.verbose {
        "coinstats_mcp=debug"
    } else {
        "coinstats_mcp=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(args.api_key)
        .with_base_url(args.base_url)
        .with_cache_path(args.cache_file)
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_verbose_errors(args.verbose_errors);

    let session = match McpSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: Failed to set up API client: {}", e);
            std::process::exit(1);
        }
    };

    let registry = ToolRegistry::new();
    tracing::info!(
        tools = registry.tools().len(),
        base_url = %session.base_url(),
        timeout = ?session.config().timeout,
        "CoinStats MCP server running on stdio"
    );

    let mut server = McpServer::new(session, registry);
    if let Err(e) = server.run().await {
        eprintln!("Error: Server error: {}", e);
        std::process::exit(1);
    }
}
