//! `solaria headline`: one generated news headline on stdout.

use anyhow::Result;
use solaria_core::config::Config;
use solaria_core::providers::gemini::{GeminiClient, GeminiConfig, HEADLINE_OFFLINE};

pub async fn run(config: &Config) -> Result<()> {
    let headline = match GeminiConfig::from_config(config) {
        Ok(gemini) => GeminiClient::new(gemini).news_headline().await,
        Err(_) => HEADLINE_OFFLINE.to_string(),
    };
    println!("{headline}");
    Ok(())
}
