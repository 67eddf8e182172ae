//! `solaria subscribe`: submit an email to the priority-access list.

use anyhow::{Result, bail};
use solaria_core::config::Config;
use solaria_core::newsletter;

pub async fn run(config: &Config, email: &str) -> Result<()> {
    let http = reqwest::Client::new();
    let endpoint = config.newsletter_endpoint();
    let outcome = newsletter::submit_email(&http, endpoint.as_deref(), email).await;

    if outcome.success {
        println!("{}", outcome.message);
        Ok(())
    } else {
        bail!("{}", outcome.message);
    }
}
