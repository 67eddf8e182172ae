//! Effect handlers: pure async functions that return the result event.
//!
//! Handlers never touch state; the runtime spawns them and routes their
//! result back through the inbox. Provider failures degrade to fallback
//! values here so the reducer only ever sees loaded data.

use std::time::Duration;

use solaria_core::config::Config;
use solaria_core::feed::fallback_quotes;
use solaria_core::newsletter;
use solaria_core::providers::gemini::{
    GeminiClient, GeminiConfig, HEADLINE_OFFLINE, SYSTEM_MESSAGE_FALLBACK,
};
use solaria_core::script::{BOOT_COMPLETE_MS, BOOT_READY_MS, BOOT_SCRIPT};
use tokio_util::sync::CancellationToken;
use tracing::warn;

use super::inbox::UiEventSender;
use crate::events::UiEvent;

fn client_for(config: &Config) -> Option<GeminiClient> {
    match GeminiConfig::from_config(config) {
        Ok(gemini) => Some(GeminiClient::new(gemini)),
        Err(e) => {
            warn!("provider unavailable: {e:#}");
            None
        }
    }
}

pub async fn fetch_headline(config: Config) -> UiEvent {
    let headline = match client_for(&config) {
        Some(client) => client.news_headline().await,
        None => HEADLINE_OFFLINE.to_string(),
    };
    UiEvent::HeadlineLoaded(headline)
}

pub async fn fetch_feed(config: Config) -> UiEvent {
    let quotes = match client_for(&config) {
        Some(client) => client.market_snapshot().await,
        None => fallback_quotes(),
    };
    UiEvent::FeedLoaded(quotes)
}

pub async fn fetch_greeting(config: Config) -> UiEvent {
    let message = match client_for(&config) {
        Some(client) => client.system_message().await,
        None => SYSTEM_MESSAGE_FALLBACK.to_string(),
    };
    UiEvent::GreetingLoaded(message)
}

pub async fn submit_contact(config: Config, email: String) -> UiEvent {
    let http = reqwest::Client::new();
    let endpoint = config.newsletter_endpoint();
    let outcome = newsletter::submit_email(&http, endpoint.as_deref(), &email).await;
    UiEvent::ContactResult(outcome)
}

/// Plays the boot script: each line fires at its offset from sequence
/// start, then the ready mark, then completion. Cancellation (boot skip)
/// stops all pending lines at once.
pub async fn boot_sequence(tx: UiEventSender, cancel: CancellationToken) -> UiEvent {
    let mut elapsed = 0;

    for (index, line) in BOOT_SCRIPT.iter().enumerate() {
        if !pause(&cancel, line.offset_ms.saturating_sub(elapsed)).await {
            return UiEvent::BootComplete;
        }
        elapsed = line.offset_ms;
        let _ = tx.send(UiEvent::BootLine { index });
    }

    if !pause(&cancel, BOOT_READY_MS.saturating_sub(elapsed)).await {
        return UiEvent::BootComplete;
    }
    let _ = tx.send(UiEvent::BootReady);

    pause(&cancel, BOOT_COMPLETE_MS.saturating_sub(BOOT_READY_MS)).await;
    UiEvent::BootComplete
}

/// Sleeps for `ms` unless cancelled first. Returns false on cancellation.
async fn pause(cancel: &CancellationToken, ms: u64) -> bool {
    tokio::select! {
        () = cancel.cancelled() => false,
        () = tokio::time::sleep(Duration::from_millis(ms)) => true,
    }
}
