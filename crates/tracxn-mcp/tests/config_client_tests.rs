//! Configuration and client tests.
//!
//! Tests actual behavior, not constants.

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use tracxn_mcp::client::TracxnClient;
use tracxn_mcp::config::{ApiEnvironment, Config, api, mask_token};
use tracxn_mcp::error::ClientError;

// =============================================================================
// Config Behavior Tests
// =============================================================================

#[test]
fn test_config_default_has_no_token() {
    let config = Config::default();
    assert!(!config.has_access_token());
    assert_eq!(config.api_base_url, api::PLAYGROUND_API);
}

#[test]
fn test_config_environment_selection() {
    assert_eq!(ApiEnvironment::from_flag(false), ApiEnvironment::Playground);
    assert_eq!(ApiEnvironment::from_flag(true), ApiEnvironment::Production);

    let config = Config::new(Some("tok".to_string()), ApiEnvironment::Production);
    assert_eq!(config.api_base_url, "https://platform.tracxn.com/api/2.2");
}

#[test]
fn test_config_debug_hides_token() {
    let config = Config::new(Some("super-secret-token".to_string()), ApiEnvironment::Playground);
    let debug = format!("{config:?}");
    assert!(!debug.contains("super-secret-token"));
    assert!(debug.contains("has_access_token: true"));
}

#[test]
fn test_for_testing_points_at_mock_root() {
    let config = Config::for_testing("http://127.0.0.1:1234/");
    assert_eq!(config.api_base_url, "http://127.0.0.1:1234/api/2.2/playground");
}

#[test]
fn test_mask_token() {
    assert_eq!(mask_token("abcdefghijkl"), "abcd...ijkl");
    assert_eq!(mask_token("abcdefgh"), "***invalid***");
    assert_eq!(mask_token(""), "***invalid***");
}

// =============================================================================
// Client Behavior Tests
// =============================================================================

#[test]
fn test_client_rejects_non_http_root() {
    let mut config = Config::default();
    config.api_base_url = "ftp://example.com/api".to_string();
    assert!(TracxnClient::new(config).is_err());
}

#[test]
fn test_endpoint_url_joins_paths() {
    let client = TracxnClient::new(Config::for_testing("http://localhost:1")).unwrap();
    assert_eq!(client.endpoint_url("companies"), "http://localhost:1/api/2.2/playground/companies");
    assert_eq!(
        client.endpoint_url("/companies/search"),
        "http://localhost:1/api/2.2/playground/companies/search"
    );
}

#[tokio::test]
async fn test_post_json_sends_token_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.2/playground/feeds"))
        .and(header("accesstoken", "test-token"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": []})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = TracxnClient::new(Config::for_testing(&mock_server.uri())).unwrap();
    let value = client.post_json("feeds", &json!({"size": 1})).await.unwrap();
    assert_eq!(value, json!({"result": []}));
}

#[tokio::test]
async fn test_post_json_classifies_statuses() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/2.2/playground/investors"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/2.2/playground/companies"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad token"))
        .mount(&mock_server)
        .await;

    let client = TracxnClient::new(Config::for_testing(&mock_server.uri())).unwrap();

    let err = client.post_json("investors", &json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::RateLimited));

    let err = client.post_json("companies", &json!({})).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "API returned status code 401: bad token");
}

#[tokio::test]
async fn test_missing_token_never_hits_network() {
    let mut config = Config::for_testing("http://127.0.0.1:9");
    config.access_token = None;
    let client = TracxnClient::new(config).unwrap();
    assert!(!client.has_access_token());

    let err = client.post_json("companies", &json!({})).await.unwrap_err();
    assert!(matches!(err, ClientError::MissingToken));
    assert_eq!(err.to_string(), "TRACXN_ACCESS_TOKEN environment variable is not set");
}
