//! Shared helpers for the wiremock-backed integration tests.
//!
//! ```ignore
//! let (server, client) = common::setup().await;
//! Mock::given(method("GET"))
//!     .and(path("/bill/117/hr/3076"))
//!     .respond_with(common::json_ok(json!({"bill": {}})))
//!     .mount(&server)
//!     .await;
//! ```

#![allow(dead_code)]

use std::time::Duration;

use congress_api::{ApiConfig, CongressClient};
use serde_json::Value;
use wiremock::{MockServer, Request, ResponseTemplate};

pub use wiremock::matchers::{header, method, path, query_param, query_param_is_missing};
pub use wiremock::Mock;

pub const TEST_KEY: &str = "test-api-key";

/// Config pointing at `server` with retries that do not sleep.
pub fn config(server: &MockServer) -> ApiConfig {
    ApiConfig::new(TEST_KEY)
        .with_base_url(server.uri())
        .with_retry_backoff(Duration::ZERO)
}

pub async fn setup() -> (MockServer, CongressClient) {
    let server = MockServer::start().await;
    let client = CongressClient::new(config(&server)).expect("client should build");
    (server, client)
}

pub fn json_ok(body: Value) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(body)
}

pub async fn requests(server: &MockServer) -> Vec<Request> {
    server.received_requests().await.unwrap_or_default()
}

/// Value of `name` in the request's query string.
pub fn query_value(request: &Request, name: &str) -> Option<String> {
    request
        .url
        .query_pairs()
        .find(|(k, _)| k == name)
        .map(|(_, v)| v.into_owned())
}
