//! Error types for the Tracxn MCP server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.
//! The `Display` texts are part of the tool contract: they are what a caller reads.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// No access token configured; no request was attempted.
    #[error("TRACXN_ACCESS_TOKEN environment variable is not set")]
    MissingToken,

    /// Rate limited by the Tracxn API (429 response). Never retried.
    #[error("Tracxn API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// Any non-200 status other than 429, with the raw response text.
    #[error("API returned status code {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body
        body: String,
    },

    /// Network, TLS, timeout or body decoding failure.
    #[error("API call failed: {0}")]
    Transport(String),
}

impl ClientError {
    /// Create an HTTP status error.
    #[must_use]
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http { status, body: body.into() }
    }

    /// Create a transport error from any displayable failure.
    #[must_use]
    pub fn transport(err: impl std::fmt::Display) -> Self {
        Self::Transport(err.to_string())
    }

    /// Status code when the upstream answered with a non-success status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited => Some(429),
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        Self::transport(err)
    }
}

/// Errors from MCP tool dispatch, raised before any upstream call.
#[derive(thiserror::Error, Debug)]
pub enum ToolError {
    /// No tool with this name is registered.
    #[error("Unknown tool '{0}'")]
    UnknownTool(String),

    /// A required argument is absent or empty.
    #[error("{message}")]
    MissingArgument {
        /// Human readable description of what is missing
        message: String,
    },

    /// Arguments had the wrong shape or type.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(#[source] serde_json::Error),

    /// JSON serialization error while rendering a result
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a missing-argument error.
    #[must_use]
    pub fn missing(message: impl Into<String>) -> Self {
        Self::MissingArgument { message: message.into() }
    }

    /// Create a missing-argument error for a single required field.
    #[must_use]
    pub fn required(field: &str) -> Self {
        Self::missing(format!("{field} is required"))
    }

    /// Convert to a user-friendly error message for MCP response.
    #[must_use]
    pub fn to_user_message(&self) -> String {
        format!("Error: {self}")
    }
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for tool operations.
pub type ToolResult<T> = Result<T, ToolError>;
