//! Tracxn API client.
//!
//! Every Tracxn route is a POST with a JSON body. The client classifies the
//! outcome and hands back either the parsed JSON or a [`ClientError`]:
//! - 200 -> parsed body
//! - 429 -> [`ClientError::RateLimited`] (no retry)
//! - anything else -> [`ClientError::Http`] with the raw text
//! - I/O and decode failures -> [`ClientError::Transport`]

mod exchange;

pub use exchange::{DebugExchange, DebugRequest, DebugResponse};

use std::collections::BTreeMap;

use reqwest::Client;
use reqwest::header::{CACHE_CONTROL, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::{Config, api, mask_token};
use crate::error::{ClientError, ClientResult};

/// Header carrying the access token. Tracxn requires the lowercase spelling.
pub const ACCESS_TOKEN_HEADER: &str = "accesstoken";

/// Tracxn API client.
#[derive(Clone)]
pub struct TracxnClient {
    /// HTTP client with default headers.
    client: Client,

    /// Access token (optional until a call is made).
    access_token: Option<String>,

    /// API root without trailing slash.
    base_url: String,
}

impl TracxnClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        let access_token = if config.has_access_token() { config.access_token } else { None };

        Ok(Self {
            client,
            access_token,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Check if an access token is configured.
    #[must_use]
    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    /// Full URL for an endpoint path such as `companies` or `companies/search`.
    #[must_use]
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }

    /// POST a JSON body to an endpoint and return the parsed 200 response.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] without touching the network when no
    /// token is configured, otherwise the classified upstream failure.
    pub async fn post_json(&self, endpoint: &str, body: &Value) -> ClientResult<Value> {
        let token = self.access_token.as_deref().ok_or(ClientError::MissingToken)?;
        let url = self.endpoint_url(endpoint);

        tracing::info!(endpoint, url = %url, "Making request to Tracxn API");
        tracing::info!(body = %truncate_for_log(&body.to_string()), "Request data");

        let response = self
            .client
            .post(&url)
            .header(ACCESS_TOKEN_HEADER, token)
            .json(body)
            .send()
            .await
            .inspect_err(|e| tracing::error!(endpoint, error = %e, "Exception in API call"))?;

        let response = self.handle_response(response).await?;
        let value: Value = response.json().await?;
        Ok(value)
    }

    /// POST a body and capture the whole exchange for troubleshooting.
    ///
    /// Any HTTP status is reported rather than classified. Only a missing token
    /// is an error; transport failures are recorded inside the exchange.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingToken`] when no token is configured.
    pub async fn exchange(&self, endpoint: &str, body: &Value) -> ClientResult<DebugExchange> {
        let token = self.access_token.as_deref().ok_or(ClientError::MissingToken)?;
        let url = self.endpoint_url(endpoint);

        let mut request_headers = BTreeMap::new();
        request_headers.insert(ACCESS_TOKEN_HEADER.to_string(), mask_token(token));
        request_headers.insert("cache-control".to_string(), "no-cache".to_string());
        request_headers.insert("content-type".to_string(), "application/json".to_string());

        let request = DebugRequest { url: url.clone(), headers: request_headers, data: body.clone() };

        tracing::info!(endpoint, url = %url, "Debug call to Tracxn API");

        let sent = self.client.post(&url).header(ACCESS_TOKEN_HEADER, token).json(body).send().await;

        let response = match sent {
            Ok(response) => {
                let status = response.status().as_u16();
                let headers = response
                    .headers()
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("<binary>").to_string()))
                    .collect();
                match response.text().await {
                    Ok(text) => DebugResponse::from_status(status, headers, &text),
                    Err(e) => DebugResponse::exception(&e),
                }
            }
            Err(e) => DebugResponse::exception(&e),
        };

        Ok(DebugExchange { request, response })
    }

    /// Handle API response status codes.
    async fn handle_response(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<reqwest::Response> {
        let status = response.status().as_u16();
        tracing::info!(status, "Tracxn API response status");

        match status {
            200 => Ok(response),
            429 => {
                let text = response.text().await.unwrap_or_default();
                tracing::error!(body = %text, "Rate limit exceeded");
                Err(ClientError::RateLimited)
            }
            _ => {
                let text = response.text().await.unwrap_or_default();
                tracing::error!(status, body = %text, "Error from Tracxn API");
                Err(ClientError::http(status, text))
            }
        }
    }
}

impl std::fmt::Debug for TracxnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TracxnClient")
            .field("has_access_token", &self.has_access_token())
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Truncate to the log budget on a char boundary.
fn truncate_for_log(text: &str) -> String {
    match text.char_indices().nth(api::LOG_BODY_CHARS) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}
