//! End-to-end command tests against mocked collaborators.

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gemini_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "parts": [{ "text": text }] } }
        ]
    })
}

/// Isolated home so a developer's real config never leaks into tests.
fn empty_home() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_feed_prints_mocked_snapshot() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(gemini_response("NVDA|$120.50|+2.5%\nTSLA|$250.00|-1.0%")),
        )
        .mount(&server)
        .await;

    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .arg("feed")
        .env("SOLARIA_HOME", home.path())
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_BASE_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("NVDA"))
        .stdout(predicate::str::contains("▼ -1.0%"));
}

#[test]
fn test_feed_without_provider_prints_fallback() {
    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .arg("feed")
        .env("SOLARIA_HOME", home.path())
        .env_remove("GEMINI_API_KEY")
        .env_remove("GEMINI_BASE_URL")
        .assert()
        .success()
        .stdout(predicate::str::contains("BTC-USD"))
        .stdout(predicate::str::contains("SOL-USD"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_headline_prints_mocked_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_response("NEON MARKETS NEVER SLEEP")),
        )
        .mount(&server)
        .await;

    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .arg("headline")
        .env("SOLARIA_HOME", home.path())
        .env("GEMINI_API_KEY", "test-key")
        .env("GEMINI_BASE_URL", server.uri())
        .assert()
        .success()
        .stdout(predicate::str::contains("NEON MARKETS NEVER SLEEP"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_subscribe_posts_email() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(body_string_contains("email=user%40example.com"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .args(["subscribe", "user@example.com"])
        .env("SOLARIA_HOME", home.path())
        .env("SOLARIA_NEWSLETTER_URL", format!("{}/exec", server.uri()))
        .assert()
        .success()
        .stdout(predicate::str::contains("UPLINK_ESTABLISHED_DATA_SECURE"));
}

#[test]
fn test_subscribe_transport_failure_exits_nonzero() {
    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .args(["subscribe", "user@example.com"])
        .env("SOLARIA_HOME", home.path())
        .env("SOLARIA_NEWSLETTER_URL", "http://127.0.0.1:1/exec")
        .assert()
        .failure()
        .stderr(predicate::str::contains("CONNECTION_FAILED_RETRY"));
}

#[test]
fn test_config_show_prints_defaults() {
    let home = empty_home();
    cargo_bin_cmd!("solaria")
        .args(["config", "show"])
        .env("SOLARIA_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("model = \"gemini-2.5-flash\""))
        .stdout(predicate::str::contains("feed_refresh_secs = 300"));
}
