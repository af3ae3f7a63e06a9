//! Raw request/response capture for the `debug_api_call` tool.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

/// A single captured call.
#[derive(Debug, Clone, Serialize)]
pub struct DebugExchange {
    pub request: DebugRequest,
    pub response: DebugResponse,
}

/// What was sent. The token header is masked.
#[derive(Debug, Clone, Serialize)]
pub struct DebugRequest {
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub data: Value,
}

/// What came back. `body` is set for 200, `error` otherwise.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DebugResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headers: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

impl DebugResponse {
    /// Build from a received response. Non-JSON text is kept as a string.
    #[must_use]
    pub fn from_status(status: u16, headers: BTreeMap<String, String>, text: &str) -> Self {
        let payload =
            serde_json::from_str::<Value>(text).unwrap_or_else(|_| Value::String(text.to_string()));
        let (body, error) = if status == 200 { (Some(payload), None) } else { (None, Some(payload)) };
        Self { status_code: Some(status), headers: Some(headers), body, error }
    }

    /// Build from a failure that produced no response.
    #[must_use]
    pub fn exception(err: &dyn std::fmt::Display) -> Self {
        Self { error: Some(Value::String(format!("Exception: {err}"))), ..Self::default() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_goes_to_body() {
        let resp = DebugResponse::from_status(200, BTreeMap::new(), r#"{"result": []}"#);
        assert_eq!(resp.body, Some(serde_json::json!({"result": []})));
        assert!(resp.error.is_none());
    }

    #[test]
    fn test_non_json_error_kept_as_text() {
        let resp = DebugResponse::from_status(400, BTreeMap::new(), "bad sort");
        assert_eq!(resp.error, Some(Value::String("bad sort".into())));
        let rendered = serde_json::to_value(&resp).unwrap();
        assert!(rendered.get("body").is_none());
        assert_eq!(rendered["status_code"], 400);
    }
}
