//! External network collaborators.

pub mod gemini;

use anyhow::{Context, Result};

/// Resolves an API key with precedence: config > env.
///
/// # Errors
/// Returns an error if neither source provides a non-empty key.
pub fn resolve_api_key(
    config_api_key: Option<&str>,
    env_var: &str,
    config_section: &str,
) -> Result<String> {
    // Try config value first
    if let Some(key) = config_api_key {
        let trimmed = key.trim();
        if !trimmed.is_empty() {
            return Ok(trimmed.to_string());
        }
    }

    // Fall back to env var
    std::env::var(env_var).context(format!(
        "No API key available. Set {env_var} or api_key in [{config_section}]."
    ))
}

/// Resolves a base URL with precedence: env > config > default.
///
/// # Errors
/// Returns an error if the resolved URL is not well-formed.
pub fn resolve_base_url(
    config_base_url: Option<&str>,
    env_var: &str,
    default_url: &str,
    provider_name: &str,
) -> Result<String> {
    // Try env var first
    if let Ok(env_url) = std::env::var(env_var) {
        let trimmed = env_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, provider_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Try config value
    if let Some(config_url) = config_base_url {
        let trimmed = config_url.trim();
        if !trimmed.is_empty() {
            validate_url(trimmed, provider_name)?;
            return Ok(trimmed.to_string());
        }
    }

    // Default
    Ok(default_url.to_string())
}

/// Validates that a URL is well-formed.
fn validate_url(url: &str, provider_name: &str) -> Result<()> {
    url::Url::parse(url).with_context(|| format!("Invalid {provider_name} base URL: {url}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_key_wins_over_env() {
        let key = resolve_api_key(Some("from-config"), "SOLARIA_TEST_NO_SUCH_VAR", "gemini");
        assert_eq!(key.unwrap(), "from-config");
    }

    #[test]
    fn test_blank_config_key_is_ignored() {
        let key = resolve_api_key(Some("   "), "SOLARIA_TEST_NO_SUCH_VAR", "gemini");
        assert!(key.is_err());
    }

    #[test]
    fn test_base_url_falls_back_to_default() {
        let url = resolve_base_url(None, "SOLARIA_TEST_NO_SUCH_VAR", "https://example.com", "Test");
        assert_eq!(url.unwrap(), "https://example.com");
    }

    #[test]
    fn test_invalid_config_base_url_is_an_error() {
        let url = resolve_base_url(
            Some("not a url"),
            "SOLARIA_TEST_NO_SUCH_VAR",
            "https://example.com",
            "Test",
        );
        assert!(url.is_err());
    }
}
