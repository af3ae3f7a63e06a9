//! Tracxn MCP Server
//!
//! A Model Context Protocol (MCP) server for the Tracxn company-intelligence
//! API. Lets LLM agents search companies, funding rounds, investors,
//! acquisitions and the Tracxn sector taxonomy.
//!
//! # Features
//!
//! - **12 MCP Tools**: company search and lookup, deal flow, taxonomy, and
//!   request diagnostics
//! - **Typed dispatch**: tool arguments are decoded once into per-tool structs
//! - **Normalized output**: compact, defaulted JSON projections of upstream data
//!
//! # Example
//!
//! ```no_run
//! use tracxn_mcp::{client::TracxnClient, config::Config, tools};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     let client = TracxnClient::new(config)?;
//!     let ctx = tools::ToolContext::new(std::sync::Arc::new(client));
//!
//!     let text = tools::dispatch(&ctx, "company_lookup", serde_json::json!({"domain": "crowdstrike.com"})).await?;
//!     println!("{text}");
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod normalize;
pub mod query;
pub mod server;
pub mod tools;

pub use client::TracxnClient;
pub use config::Config;
pub use error::{ClientError, ToolError};
