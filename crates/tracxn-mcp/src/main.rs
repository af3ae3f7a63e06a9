//! Tracxn MCP Server - Entry Point
//!
//! Provides both stdio and HTTP transports.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use tracxn_mcp::config::{ApiEnvironment, Config, api, mask_token};
use tracxn_mcp::{TracxnClient, server::McpServer};

#[derive(Parser, Debug)]
#[command(name = "tracxn-mcp")]
#[command(about = "MCP server for the Tracxn API")]
#[command(version)]
struct Cli {
    /// Tracxn access token
    #[arg(long, env = "TRACXN_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    /// Use the production API instead of the playground
    #[arg(
        long,
        env = "TRACXN_USE_PRODUCTION",
        action = clap::ArgAction::SetTrue,
        value_parser = clap::builder::BoolishValueParser::new()
    )]
    production: bool,

    /// Transport mode: stdio or http
    #[arg(long, default_value = "stdio")]
    transport: Transport,

    /// HTTP server port (only used with --transport http)
    #[arg(long, default_value = "8000", env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum Transport {
    /// Standard input/output
    #[default]
    Stdio,
    /// JSON-RPC over HTTP POST
    Http,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let Some(token) = cli.access_token.filter(|t| !t.trim().is_empty()) else {
        eprintln!("Error: {} environment variable is required", api::ACCESS_TOKEN_VAR);
        std::process::exit(1);
    };

    let environment = ApiEnvironment::from_flag(cli.production);
    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        transport = ?cli.transport,
        environment = ?environment,
        "Starting Tracxn MCP server"
    );
    tracing::info!("Using Tracxn API key: {}", mask_token(&token));

    let config = Config::new(Some(token), environment);
    let client = TracxnClient::new(config)?;
    let server = McpServer::new(client);

    match cli.transport {
        Transport::Stdio => {
            tracing::info!("Running in stdio mode");
            server.run_stdio().await?;
        }
        Transport::Http => {
            tracing::info!(port = cli.port, "Running in HTTP mode");
            server.run_http(cli.port).await?;
        }
    }

    Ok(())
}
