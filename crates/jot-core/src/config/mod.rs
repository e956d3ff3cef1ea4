//! Client configuration for the notes API.
//!
//! The desktop app resolves a single base URL at startup; everything the
//! client does is addressed relative to it.

use thiserror::Error;

use crate::util::{is_http_url, normalize_text_option};

/// Environment variable holding the notes API base URL.
pub const API_URL_ENV_VAR: &str = "JOT_API_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base URL: {0}")]
    InvalidBaseUrl(&'static str),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Resolved client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
}

impl ClientConfig {
    pub fn new(base_url: impl AsRef<str>) -> ConfigResult<Self> {
        Ok(Self {
            api_base_url: normalize_base_url(base_url.as_ref())?,
        })
    }

    /// Resolve configuration from the environment.
    ///
    /// Returns `Ok(None)` when the base URL variable is unset or blank.
    pub fn from_env() -> ConfigResult<Option<Self>> {
        let Some(raw) = normalize_text_option(std::env::var(API_URL_ENV_VAR).ok()) else {
            return Ok(None);
        };
        Ok(Some(Self::new(raw)?))
    }
}

/// Normalize an API base URL: trim, strip the trailing slash, require a scheme.
pub fn normalize_base_url(raw: &str) -> ConfigResult<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidBaseUrl("base URL must not be empty"));
    }
    if !is_http_url(trimmed) {
        return Err(ConfigError::InvalidBaseUrl(
            "base URL must include http:// or https://",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_base_url_trims_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
    }

    #[test]
    fn normalize_base_url_rejects_invalid_values() {
        assert!(normalize_base_url("").is_err());
        assert!(normalize_base_url("   ").is_err());
        assert!(normalize_base_url("api.example.com").is_err());
    }

    #[test]
    fn client_config_keeps_normalized_url() {
        let config = ClientConfig::new(" http://localhost:3000/ ").unwrap();
        assert_eq!(config.api_base_url, "http://localhost:3000");
    }
}
