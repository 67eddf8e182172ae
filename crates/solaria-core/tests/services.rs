//! Integration tests for the two network collaborators, backed by wiremock.

use solaria_core::config::Config;
use solaria_core::newsletter::{self, FAILURE_MESSAGE, SUCCESS_MESSAGE};
use solaria_core::providers::gemini::{GeminiClient, GeminiConfig};
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn gemini_response(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            {
                "content": {
                    "parts": [
                        { "text": text }
                    ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ]
    })
}

fn client_for(server: &MockServer) -> GeminiClient {
    let config = GeminiConfig {
        api_key: "test-api-key".to_string(),
        base_url: server.uri(),
        model: Config::DEFAULT_MODEL.to_string(),
    };
    GeminiClient::new(config)
}

#[tokio::test]
async fn test_generate_text_returns_model_output() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(format!(
            "/models/{}:generateContent",
            Config::DEFAULT_MODEL
        )))
        .and(header("x-goog-api-key", "test-api-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_response("NEON CAPITAL SURGES")),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let text = client_for(&mock_server)
        .generate_text("headline please")
        .await
        .unwrap();
    assert_eq!(text, "NEON CAPITAL SURGES");
}

#[tokio::test]
async fn test_generate_text_http_error_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let result = client_for(&mock_server).generate_text("anything").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_headline_falls_back_on_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let headline = client_for(&mock_server).news_headline().await;
    assert_eq!(headline, solaria_core::providers::gemini::HEADLINE_OFFLINE);
}

#[tokio::test]
async fn test_market_snapshot_parses_quotes() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(gemini_response(
            "NVDA|$120.50|+2.5%\nBTC-USD|$98,500|-0.8%",
        )))
        .mount(&mock_server)
        .await;

    let quotes = client_for(&mock_server).market_snapshot().await;
    assert_eq!(quotes.len(), 2);
    assert_eq!(quotes[0].symbol, "NVDA");
    assert!(!quotes[1].is_positive);
}

#[tokio::test]
async fn test_market_snapshot_falls_back_on_garbage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(gemini_response("no pipes here at all")),
        )
        .mount(&mock_server)
        .await;

    let quotes = client_for(&mock_server).market_snapshot().await;
    assert_eq!(quotes, solaria_core::feed::fallback_quotes());
}

#[tokio::test]
async fn test_subscribe_posts_form_and_succeeds() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/exec"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("email=user%40example.com"))
        .and(body_string_contains("timestamp="))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::new();
    let endpoint = format!("{}/exec", mock_server.uri());
    let outcome = newsletter::submit_email(&http, Some(&endpoint), "user@example.com").await;
    assert!(outcome.success);
    assert_eq!(outcome.message, SUCCESS_MESSAGE);
}

#[tokio::test]
async fn test_subscribe_ignores_http_status() {
    // The original transport could not read the response, so a 4xx/5xx from
    // the endpoint still counts as delivered.
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let http = reqwest::Client::new();
    let outcome = newsletter::submit_email(&http, Some(&mock_server.uri()), "a@b.c").await;
    assert!(outcome.success);
}

#[tokio::test]
async fn test_subscribe_transport_failure() {
    // Point at a port nothing listens on.
    let http = reqwest::Client::new();
    let outcome = newsletter::submit_email(&http, Some("http://127.0.0.1:1/exec"), "a@b.c").await;
    assert!(!outcome.success);
    assert_eq!(outcome.message, FAILURE_MESSAGE);
}
