//! Configuration for the Tracxn MCP server.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Playground (sandbox) API root.
    pub const PLAYGROUND_API: &str = "https://platform.tracxn.com/api/2.2/playground";

    /// Production API root.
    pub const PRODUCTION_API: &str = "https://platform.tracxn.com/api/2.2";

    /// Environment variable carrying the access token.
    pub const ACCESS_TOKEN_VAR: &str = "TRACXN_ACCESS_TOKEN";

    /// Environment variable switching to the production root.
    pub const USE_PRODUCTION_VAR: &str = "TRACXN_USE_PRODUCTION";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

    /// Hard cap on page size for every tool.
    pub const MAX_PAGE_SIZE: i64 = 20;

    /// Page size used when the caller does not pass `limit`.
    pub const DEFAULT_PAGE_SIZE: i64 = 5;

    /// Upper bound on the over-fetched page used for local funding filtering.
    pub const MAX_FUNDED_FETCH: u32 = 100;

    /// Characters of a request body echoed into the log.
    pub const LOG_BODY_CHARS: usize = 500;
}

/// Which Tracxn API root requests are sent to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiEnvironment {
    /// Sandbox data set, safe for experimentation.
    #[default]
    Playground,
    /// Live data set.
    Production,
}

impl ApiEnvironment {
    /// Root URL for this environment.
    #[must_use]
    pub const fn base_url(self) -> &'static str {
        match self {
            Self::Playground => api::PLAYGROUND_API,
            Self::Production => api::PRODUCTION_API,
        }
    }

    /// Pick production when the flag is set.
    #[must_use]
    pub const fn from_flag(production: bool) -> Self {
        if production { Self::Production } else { Self::Playground }
    }
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// Tracxn access token, forwarded verbatim in the `accesstoken` header.
    pub access_token: Option<String>,

    /// Selected environment.
    pub environment: ApiEnvironment,

    /// API root the endpoint path is appended to (overridable for mock servers).
    pub api_base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration.
    #[must_use]
    pub fn new(access_token: Option<String>, environment: ApiEnvironment) -> Self {
        Self {
            access_token: access_token.filter(|t| !t.trim().is_empty()),
            environment,
            api_base_url: environment.base_url().to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            access_token: Some("test-token".to_string()),
            environment: ApiEnvironment::Playground,
            api_base_url: format!("{}/api/2.2/playground", base_url.trim_end_matches('/')),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns error if environment variables are invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        let access_token = std::env::var(api::ACCESS_TOKEN_VAR).ok();
        let production = std::env::var(api::USE_PRODUCTION_VAR)
            .map(|v| parse_flag(&v))
            .unwrap_or(false);
        Ok(Self::new(access_token, ApiEnvironment::from_flag(production)))
    }

    /// Check if an access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.as_deref().is_some_and(|t| !t.trim().is_empty())
    }

    /// Validate the API root.
    ///
    /// # Errors
    ///
    /// Returns error when `api_base_url` is not an absolute http(s) URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        let parsed = url::Url::parse(&self.api_base_url)?;
        anyhow::ensure!(
            matches!(parsed.scheme(), "http" | "https"),
            "API root must use http or https, got '{}'",
            parsed.scheme()
        );
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None, ApiEnvironment::default())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("has_access_token", &self.has_access_token())
            .field("environment", &self.environment)
            .field("api_base_url", &self.api_base_url)
            .finish()
    }
}

/// Mask a token for logging: first and last four characters only.
#[must_use]
pub fn mask_token(token: &str) -> String {
    let chars: Vec<char> = token.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{head}...{tail}")
    } else {
        "***invalid***".to_string()
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
