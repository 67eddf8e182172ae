//! Config command handlers.

use anyhow::{Context, Result};
use solaria_core::config::{Config, paths};

pub fn show(config: &Config) -> Result<()> {
    let toml = toml::to_string_pretty(config).context("serialize config")?;
    print!("{toml}");
    Ok(())
}

pub fn path() {
    println!("{}", paths::config_path().display());
}
