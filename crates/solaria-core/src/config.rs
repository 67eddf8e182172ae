//! Configuration management for Solaria.
//!
//! Loads configuration from ${SOLARIA_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Provider configuration for the generative-text service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GeminiSettings {
    /// API key (falls back to the GEMINI_API_KEY env var).
    pub api_key: Option<String>,
    /// Base URL override (falls back to GEMINI_BASE_URL, then the default).
    pub base_url: Option<String>,
}

/// Newsletter endpoint configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsletterSettings {
    /// Web-app endpoint URL (falls back to SOLARIA_NEWSLETTER_URL).
    pub endpoint: Option<String>,
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The generative model used for headlines, feed data and shell banter.
    pub model: String,

    /// Seconds between market-feed refreshes on the main screen.
    pub feed_refresh_secs: u64,

    /// Seconds between news-headline refreshes on the main screen.
    pub headline_refresh_secs: u64,

    /// Disable the scramble reveal and play the boot sequence instantly.
    pub reduced_motion: bool,

    /// Generative-text provider settings.
    pub gemini: GeminiSettings,

    /// Newsletter endpoint settings.
    pub newsletter: NewsletterSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: Self::DEFAULT_MODEL.to_string(),
            feed_refresh_secs: 300,
            headline_refresh_secs: 10,
            reduced_motion: false,
            gemini: GeminiSettings::default(),
            newsletter: NewsletterSettings::default(),
        }
    }
}

impl Config {
    pub const DEFAULT_MODEL: &'static str = "gemini-2.5-flash";

    /// Loads configuration from the default path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if the file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Resolves the newsletter endpoint with precedence: env > config.
    ///
    /// Returns `None` when neither is set; the caller decides whether that
    /// is an error (the TUI degrades to the failure message instead).
    pub fn newsletter_endpoint(&self) -> Option<String> {
        if let Ok(url) = std::env::var("SOLARIA_NEWSLETTER_URL") {
            let trimmed = url.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
        self.newsletter
            .endpoint
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string)
    }
}

pub mod paths {
    //! Path resolution for Solaria configuration and data directories.
    //!
    //! SOLARIA_HOME resolution order:
    //! 1. SOLARIA_HOME environment variable (if set)
    //! 2. ~/.config/solaria (default)

    use std::path::PathBuf;

    /// Returns the Solaria home directory.
    ///
    /// Checks SOLARIA_HOME env var first, falls back to ~/.config/solaria
    pub fn solaria_home() -> PathBuf {
        if let Ok(home) = std::env::var("SOLARIA_HOME") {
            return PathBuf::from(home);
        }

        std::env::home_dir()
            .map(|h| h.join(".config").join("solaria"))
            .expect("Could not determine home directory")
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        solaria_home().join("config.toml")
    }

    /// Returns the directory used for file logging.
    pub fn logs_dir() -> PathBuf {
        solaria_home().join("logs")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_file_missing() {
        let dir = tempfile::TempDir::new().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.model, Config::DEFAULT_MODEL);
        assert_eq!(config.feed_refresh_secs, 300);
        assert!(!config.reduced_motion);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "reduced_motion = true\n\n[newsletter]\nendpoint = \"https://example.com/exec\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert!(config.reduced_motion);
        assert_eq!(config.model, Config::DEFAULT_MODEL);
        assert_eq!(
            config.newsletter.endpoint.as_deref(),
            Some("https://example.com/exec")
        );
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "model = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_newsletter_endpoint_trims_blank_config() {
        let config = Config {
            newsletter: NewsletterSettings {
                endpoint: Some("   ".to_string()),
            },
            ..Config::default()
        };
        // Blank config value and no env var -> None
        if std::env::var("SOLARIA_NEWSLETTER_URL").is_err() {
            assert!(config.newsletter_endpoint().is_none());
        }
    }
}
