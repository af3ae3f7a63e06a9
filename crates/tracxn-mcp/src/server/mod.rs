//! MCP server implementation.
//!
//! Provides both stdio (for desktop MCP clients) and HTTP transports. Both
//! feed parsed JSON-RPC requests through [`handle_request`].

pub mod prompts;
pub mod stdio;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use serde_json::{Value, json};

use crate::client::TracxnClient;
use crate::tools::{self, ToolContext, ToolKind};

use transport::{JsonRpcRequest, JsonRpcResponse, McpToolInfo};

/// Protocol version answered when the client does not name one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Name reported in `serverInfo` and health checks.
pub const SERVER_NAME: &str = "tracxn-mcp";

pub const PARSE_ERROR: i32 = -32700;
pub const METHOD_NOT_FOUND: i32 = -32601;
pub const INVALID_PARAMS: i32 = -32602;

/// MCP server for Tracxn.
pub struct McpServer {
    /// Tool execution context.
    ctx: ToolContext,
}

impl McpServer {
    /// Create a new MCP server.
    #[must_use]
    pub fn new(client: TracxnClient) -> Self {
        Self { ctx: ToolContext::new(Arc::new(client)) }
    }

    /// Run the server in stdio mode.
    ///
    /// # Errors
    ///
    /// Returns error on I/O failure.
    pub async fn run_stdio(self) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in stdio mode");
        tracing::info!("Registered {} tools", ToolKind::ALL.len());

        stdio::run_stdio(self.ctx).await
    }

    /// Run the server in HTTP mode.
    ///
    /// # Errors
    ///
    /// Returns error on server failure.
    pub async fn run_http(self, port: u16) -> anyhow::Result<()> {
        tracing::info!("Starting MCP server in HTTP mode on port {}", port);
        tracing::info!("Registered {} tools", ToolKind::ALL.len());

        let router = transport::create_router(self.ctx);
        let addr = SocketAddr::from(([0, 0, 0, 0], port));

        tracing::info!("HTTP server listening on http://{}", addr);

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }

    /// Get tool context for execution.
    #[must_use]
    pub const fn context(&self) -> &ToolContext {
        &self.ctx
    }
}

impl std::fmt::Debug for McpServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("McpServer").field("tools", &ToolKind::ALL.len()).finish()
    }
}

/// Handle one JSON-RPC message. Notifications (no `id`) get no response.
pub async fn handle_request(ctx: &ToolContext, req: JsonRpcRequest) -> Option<JsonRpcResponse> {
    let Some(id) = req.id else {
        tracing::debug!(method = %req.method, "Notification received");
        return None;
    };
    let id = Some(id);

    let response = match req.method.as_str() {
        "initialize" => JsonRpcResponse::success(id, initialize_result(&req.params)),
        "ping" => JsonRpcResponse::success(id, json!({})),
        "tools/list" => JsonRpcResponse::success(id, tools_list()),
        "tools/call" => handle_tools_call(id, &req.params, ctx).await,
        "prompts/list" => JsonRpcResponse::success(id, json!({ "prompts": prompts::PROMPTS })),
        "prompts/get" => handle_prompts_get(id, &req.params),
        _ => JsonRpcResponse::error(id, METHOD_NOT_FOUND, format!("Method not found: {}", req.method)),
    };
    Some(response)
}

fn initialize_result(params: &Value) -> Value {
    let protocol_version = params
        .get("protocolVersion")
        .and_then(Value::as_str)
        .unwrap_or(DEFAULT_PROTOCOL_VERSION);

    tracing::info!("MCP initialize: protocol version {}", protocol_version);

    json!({
        "protocolVersion": protocol_version,
        "capabilities": {
            "tools": { "listChanged": false },
            "prompts": { "listChanged": false }
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        }
    })
}

fn tools_list() -> Value {
    let tool_list: Vec<McpToolInfo> = ToolKind::ALL
        .iter()
        .map(|kind| McpToolInfo {
            name: kind.name().to_string(),
            description: kind.description().to_string(),
            input_schema: kind.input_schema(),
        })
        .collect();

    json!({ "tools": tool_list })
}

async fn handle_tools_call(id: Option<Value>, params: &Value, ctx: &ToolContext) -> JsonRpcResponse {
    let Some(tool_name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
    };

    let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

    match tools::dispatch(ctx, tool_name, arguments).await {
        Ok(text) => JsonRpcResponse::success(id, tool_content(text, false)),
        Err(e) => {
            tracing::error!(tool = %tool_name, error = %e, "Tool execution failed");
            JsonRpcResponse::success(id, tool_content(e.to_user_message(), true))
        }
    }
}

fn tool_content(text: String, is_error: bool) -> Value {
    json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error
    })
}

fn handle_prompts_get(id: Option<Value>, params: &Value) -> JsonRpcResponse {
    let Some(name) = params.get("name").and_then(Value::as_str) else {
        return JsonRpcResponse::error(id, INVALID_PARAMS, "Missing 'name' parameter");
    };
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);

    match prompts::render(name, &arguments) {
        Some(prompt) => JsonRpcResponse::success(id, prompt),
        None => JsonRpcResponse::error(id, INVALID_PARAMS, format!("Unknown prompt: {name}")),
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to install CTRL+C handler");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
