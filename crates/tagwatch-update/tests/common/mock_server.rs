//! Mock server helpers for the releases API

use tagwatch_core::RuntimeConfig;
use tagwatch_update::ReleaseClient;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::builders::release_with_tag;
use super::constants::*;

/// Runtime config pointed at `api_url` for the test repository
pub fn test_config(api_url: &str) -> RuntimeConfig {
    let mut config = RuntimeConfig::default();
    config.github.api_url = api_url.to_string();
    config.github.repo_owner = OWNER.to_string();
    config.github.repo_name = REPO.to_string();
    config.network.http_timeout_secs = 5;
    config
}

/// Release client talking to the mock server
pub fn client_for(server: &MockServer) -> ReleaseClient {
    ReleaseClient::from_config(&test_config(&server.uri())).expect("client should build")
}

/// Release client pointed at a port nothing listens on
pub fn unreachable_client() -> ReleaseClient {
    ReleaseClient::from_config(&test_config("http://127.0.0.1:9")).expect("client should build")
}

/// Serve `tag` as the latest release
pub async fn mock_latest_release(server: &MockServer, tag: &str) {
    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(release_with_tag(tag)))
        .mount(server)
        .await;
}

/// Answer the latest release endpoint with a bare status code
pub async fn mock_latest_release_status(server: &MockServer, status: u16) {
    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .respond_with(ResponseTemplate::new(status))
        .mount(server)
        .await;
}

/// Serve a raw body at the latest release endpoint
pub async fn mock_latest_release_body(server: &MockServer, body: &[u8]) {
    Mock::given(method("GET"))
        .and(path(LATEST_RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(body))
        .mount(server)
        .await;
}

/// Serve a release asset
pub async fn mock_asset(server: &MockServer, asset_path: &str, content: &[u8]) {
    Mock::given(method("GET"))
        .and(path(asset_path))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(content))
        .mount(server)
        .await;
}
