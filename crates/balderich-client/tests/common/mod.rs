/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for balderich-client tests

#![allow(dead_code)]

use balderich_client::{AuthConfig, ClientConfig, NssClient};
use wiremock::{Match, MockServer, Request};

pub const TEST_KEY: &str = "test-key";
pub const TEST_SECRET: &str = "test-secret";

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Credentials shared by all integration tests
pub fn test_auth() -> AuthConfig {
    AuthConfig::new(TEST_KEY, TEST_SECRET)
}

/// Client pointed at `{server}/v2/api/`
pub fn client_for(server: &MockServer) -> NssClient {
    NssClient::with_config(
        test_auth(),
        ClientConfig::default().with_base_url(format!("{}/v2/api/", server.uri())),
    )
    .expect("client init")
}

/// Matches requests whose `sign` parameter is valid for their own `key` and `time`
pub struct ValidSignature;

impl Match for ValidSignature {
    fn matches(&self, request: &Request) -> bool {
        let query = |name: &str| {
            request
                .url
                .query_pairs()
                .find(|(key, _)| key == name)
                .map(|(_, value)| value.into_owned())
        };

        let (Some(key), Some(time), Some(sign)) = (query("key"), query("time"), query("sign"))
        else {
            return false;
        };
        let Ok(timestamp) = time.parse::<i64>() else {
            return false;
        };
        let Some(path) = request.url.path().strip_prefix("/v2/api/") else {
            return false;
        };

        key == TEST_KEY && test_auth().sign(path, Some(timestamp)).digest == sign
    }
}
