//! Gemini text-generation client (Generative Language API).
//!
//! All public helpers are best-effort single shots: any failure is logged
//! and resolved to a fixed fallback value, never retried and never surfaced
//! as a crash. The page keeps running on canned data.

use anyhow::{Context, Result, bail};
use reqwest::header::{HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::warn;

use super::{resolve_api_key, resolve_base_url};
use crate::config::Config;
use crate::feed::{self, MarketQuote};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

const HEADLINE_PROMPT: &str = "Generate a single short futuristic financial news headline. \
     Max 8 words. Make it sound like Cyberpunk 2077 news.";

const SYSTEM_MESSAGE_PROMPT: &str =
    "Generate a short, cryptic, cyberpunk-style status message (max 10 words).";

const MARKET_PROMPT: &str = "Get the current live stock price and percentage change for: \
     NVIDIA (NVDA), Tesla (TSLA), Bitcoin (BTC-USD), Ethereum (ETH-USD), \
     Solana (SOL-USD), S&P 500 (SPY).\n\n\
     Format output as: SYMBOL|PRICE|CHANGE\n\
     Example: NVDA|$120.50|+2.5%";

/// Fallback headline when the provider answers but says nothing.
pub const HEADLINE_FALLBACK: &str = "MARKET VOLATILITY DETECTED IN SECTOR 7";
/// Fallback headline when the provider cannot be reached at all.
pub const HEADLINE_OFFLINE: &str = "DATA STREAM INTERRUPTED";
/// Fallback shell greeting when the provider cannot be reached.
pub const SYSTEM_MESSAGE_FALLBACK: &str = "ESTABLISHING UPLINK...";

/// Gemini API configuration.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    pub api_key: String,
    pub base_url: String,
    pub model: String,
}

impl GeminiConfig {
    /// Creates a config from the application config and environment.
    ///
    /// Authentication resolution order:
    /// 1. `[gemini] api_key` in config.toml
    /// 2. `GEMINI_API_KEY` environment variable
    ///
    /// `GEMINI_BASE_URL` overrides the base URL (used by tests).
    ///
    /// # Errors
    /// Returns an error if no API key is available or a URL is malformed.
    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = resolve_api_key(config.gemini.api_key.as_deref(), "GEMINI_API_KEY", "gemini")?;
        let base_url = resolve_base_url(
            config.gemini.base_url.as_deref(),
            "GEMINI_BASE_URL",
            DEFAULT_BASE_URL,
            "Gemini",
        )?;

        Ok(Self {
            api_key,
            base_url,
            model: config.model.clone(),
        })
    }
}

/// Gemini client.
pub struct GeminiClient {
    config: GeminiConfig,
    http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            http: reqwest::Client::new(),
        }
    }

    /// Single-shot text generation via `models/{model}:generateContent`.
    ///
    /// # Errors
    /// Returns an error if the request fails, the server answers with a
    /// non-success status, or the response carries no text part.
    pub async fn generate_text(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/models/{}:generateContent",
            self.config.base_url, self.config.model
        );
        let request = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .http
            .post(&url)
            .headers(build_headers(&self.config.api_key))
            .json(&request)
            .send()
            .await
            .context("Gemini request failed")?;

        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            bail!("Gemini returned HTTP {status}: {body}");
        }

        let value: Value = serde_json::from_str(&body)
            .with_context(|| format!("Failed to parse Gemini response JSON: {body}"))?;
        extract_text(&value).with_context(|| format!("Gemini response had no text: {body}"))
    }

    /// Fetches one news headline, falling back to canned copy on failure.
    pub async fn news_headline(&self) -> String {
        match self.generate_text(HEADLINE_PROMPT).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) => HEADLINE_FALLBACK.to_string(),
            Err(e) => {
                warn!("headline fetch failed: {e:#}");
                HEADLINE_OFFLINE.to_string()
            }
        }
    }

    /// Fetches the shell greeting message, falling back on failure.
    pub async fn system_message(&self) -> String {
        match self.generate_text(SYSTEM_MESSAGE_PROMPT).await {
            Ok(text) if !text.trim().is_empty() => text.trim().to_string(),
            Ok(_) | Err(_) => SYSTEM_MESSAGE_FALLBACK.to_string(),
        }
    }

    /// Fetches a market snapshot, falling back to the fixed quote set.
    pub async fn market_snapshot(&self) -> Vec<MarketQuote> {
        match self.generate_text(MARKET_PROMPT).await {
            Ok(text) => {
                let quotes = feed::parse_quotes(&text);
                if quotes.is_empty() {
                    warn!("market snapshot parsed to nothing, using fallback");
                    feed::fallback_quotes()
                } else {
                    quotes
                }
            }
            Err(e) => {
                warn!("market snapshot fetch failed: {e:#}");
                feed::fallback_quotes()
            }
        }
    }
}

fn build_headers(api_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(
        "x-goog-api-key",
        HeaderValue::from_str(api_key).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
    headers.insert("content-type", HeaderValue::from_static("application/json"));
    headers
}

/// Joins the text parts of the first candidate, if any.
fn extract_text(value: &Value) -> Option<String> {
    let parts = value
        .get("candidates")?
        .get(0)?
        .get("content")?
        .get("parts")?
        .as_array()?;
    let text: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.get("text").and_then(Value::as_str))
        .collect();
    if text.is_empty() {
        None
    } else {
        Some(text.join(""))
    }
}
