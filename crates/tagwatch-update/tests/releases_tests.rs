//! Tests for the releases fetcher against a mock API
//!
//! Tests cover:
//! - GET success, non-2xx statuses and malformed base URLs
//! - Tag extraction from release payloads
//! - Asset download with a hidden progress display
//! - Writing a fetched manifest to disk

mod common;

use common::*;
use tagwatch_update::manifest::{setup_config_dir, write_into_file, MANIFEST_DIR};
use tagwatch_update::{ProgressDisplay, UpdateError};
use tempfile::TempDir;
use wiremock::MockServer;

#[tokio::test]
async fn test_get_request_with_200() {
    let server = MockServer::start().await;
    mock_latest_release(&server, TAG_V1_1_21).await;

    let client = client_for(&server);
    let body = client
        .get_request(&server.uri(), LATEST_RELEASE_PATH)
        .await
        .expect("200 should succeed");
    assert!(!body.is_empty());
}

#[tokio::test]
async fn test_get_request_with_wrong_scheme() {
    let server = MockServer::start().await;
    let client = client_for(&server);

    let err = client
        .get_request("htts://api.github.com", LATEST_RELEASE_PATH)
        .await
        .unwrap_err();
    assert!(matches!(err, UpdateError::InvalidUrl { .. }));
}

#[tokio::test]
async fn test_get_request_with_404() {
    let server = MockServer::start().await;
    mock_latest_release_status(&server, 404).await;

    let client = client_for(&server);
    let err = client
        .get_request(&server.uri(), LATEST_RELEASE_PATH)
        .await
        .unwrap_err();
    match err {
        UpdateError::HttpStatus { status, .. } => assert_eq!(status.as_u16(), 404),
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_get_request_unreachable_host() {
    let client = unreachable_client();
    let err = client
        .get_request("http://127.0.0.1:9", LATEST_RELEASE_PATH)
        .await
        .unwrap_err();
    assert!(matches!(err, UpdateError::Http(_)));
}

#[tokio::test]
async fn test_get_latest_version() {
    let server = MockServer::start().await;
    mock_latest_release(&server, TAG_V1_1_21).await;

    let client = client_for(&server);
    let tag = client.get_latest_version(LATEST_RELEASE_PATH).await.unwrap();
    assert_eq!(tag, TAG_V1_1_21);
    assert!(tag.starts_with('v'));

    // The configured path resolves to the same endpoint
    assert_eq!(client.latest_tag().await.unwrap(), TAG_V1_1_21);
}

#[tokio::test]
async fn test_get_latest_version_with_wrong_path() {
    let server = MockServer::start().await;
    mock_latest_release(&server, TAG_V1_1_21).await;

    let client = client_for(&server);
    let result = client
        .get_latest_version("/repos/acme/widgetreleases/latest")
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_get_latest_version_with_non_json_payload() {
    let server = MockServer::start().await;
    mock_latest_release_body(&server, NOT_JSON).await;

    let client = client_for(&server);
    let err = client
        .get_latest_version(LATEST_RELEASE_PATH)
        .await
        .unwrap_err();
    assert!(matches!(err, UpdateError::InvalidPayload { .. }));
}

#[tokio::test]
async fn test_get_latest_release_keeps_metadata() {
    let server = MockServer::start().await;
    let payload = ReleasePayloadBuilder::new()
        .tag(TAG_V0_2_10)
        .name("Widget 0.2.10")
        .body("- faster checks")
        .asset(
            "manifest.yaml",
            &format!("{}{}", server.uri(), MANIFEST_ASSET_PATH),
            MANIFEST_CONTENT.len() as u64,
        )
        .build();
    wiremock::Mock::given(wiremock::matchers::method("GET"))
        .and(wiremock::matchers::path(LATEST_RELEASE_PATH))
        .respond_with(wiremock::ResponseTemplate::new(200).set_body_json(payload))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let release = client.get_latest_release(LATEST_RELEASE_PATH).await.unwrap();
    assert_eq!(release.tag_name, TAG_V0_2_10);
    assert_eq!(release.name.as_deref(), Some("Widget 0.2.10"));
    assert!(!release.prerelease);
    assert_eq!(release.assets.len(), 1);
    assert_eq!(release.assets[0].name, "manifest.yaml");
}

#[tokio::test]
async fn test_download_asset_with_hidden_progress() {
    let server = MockServer::start().await;
    mock_asset(&server, MANIFEST_ASSET_PATH, MANIFEST_CONTENT).await;

    let client = client_for(&server);
    let progress = ProgressDisplay::hidden();
    let data = client
        .download(&format!("{}{}", server.uri(), MANIFEST_ASSET_PATH), &progress)
        .await
        .unwrap();

    assert_eq!(data.as_ref(), MANIFEST_CONTENT);
    assert_eq!(progress.position(), MANIFEST_CONTENT.len() as u64);
    assert!(progress.is_finished());
}

#[tokio::test]
async fn test_download_missing_asset_fails() {
    let server = MockServer::start().await;

    let client = client_for(&server);
    let err = client
        .download(
            &format!("{}/missing.yaml", server.uri()),
            &ProgressDisplay::hidden(),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, UpdateError::HttpStatus { .. }));
}

#[tokio::test]
async fn test_fetched_payload_written_into_manifest_dir() {
    let server = MockServer::start().await;
    mock_latest_release(&server, TAG_V1_1_21).await;
    let home = TempDir::new().unwrap();

    let client = client_for(&server);
    let data = client
        .get_request(&server.uri(), LATEST_RELEASE_PATH)
        .await
        .unwrap();

    let base = setup_config_dir(home.path()).unwrap();
    let target = base.join(MANIFEST_DIR).join("version.yaml");
    write_into_file(&data, &target).unwrap();
    assert_eq!(std::fs::read(&target).unwrap(), data.as_ref());

    let missing = home.path().join("githubtest").join("version.yaml");
    assert!(write_into_file(&data, &missing).is_err());
}

#[tokio::test]
async fn test_download_with_oversized_content_length_returns() {
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Advertises far more bytes than it sends, then hangs up
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut request = [0u8; 1024];
        let _ = socket.read(&mut request).await;
        socket
            .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 100000000000000\r\n\r\nabc")
            .await
            .unwrap();
        socket.shutdown().await.unwrap();
    });

    let client = unreachable_client();
    let progress = ProgressDisplay::hidden();
    let result = client
        .download(&format!("http://{}/asset.bin", addr), &progress)
        .await;

    assert!(result.is_err(), "truncated body should be an error");
    assert_eq!(progress.length(), Some(100_000_000_000_000));
    server.await.unwrap();
}
