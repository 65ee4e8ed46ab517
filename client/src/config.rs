//! Client configuration baked in at build time.
//!
//! Optional:
//! - `BAGVO_API_URL`: API base URL, absolute (`https://...`) or
//!   origin-relative (`/api`). Default `/api`.
//! - `BAGVO_TOKEN_KEY`: `localStorage` key for the session token. Default `token`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api";
pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid API base URL: {0}")]
    InvalidApiBaseUrl(String),
    #[error("token storage key must not be empty")]
    EmptyTokenKey,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL without a trailing slash.
    pub api_base_url: String,
    pub token_storage_key: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_owned(),
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
        }
    }
}

impl ClientConfig {
    /// Build config from the compile-time environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(option_env!("BAGVO_API_URL"), option_env!("BAGVO_TOKEN_KEY"))
    }

    /// Build config from optional raw values, applying defaults for `None`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a provided value is malformed.
    pub fn from_values(api_base_url: Option<&str>, token_storage_key: Option<&str>) -> Result<Self, ConfigError> {
        let api_base_url = parse_api_base_url(api_base_url.unwrap_or(DEFAULT_API_BASE_URL))?;
        let token_storage_key = token_storage_key.unwrap_or(DEFAULT_TOKEN_STORAGE_KEY).trim();
        if token_storage_key.is_empty() {
            return Err(ConfigError::EmptyTokenKey);
        }
        Ok(Self { api_base_url, token_storage_key: token_storage_key.to_owned() })
    }
}

fn parse_api_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim();
    let valid = trimmed.starts_with('/')
        || ["http://", "https://"]
            .iter()
            .any(|scheme| trimmed.strip_prefix(scheme).is_some_and(|rest| !rest.is_empty()));
    if !valid || trimmed.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidApiBaseUrl(raw.to_owned()));
    }
    Ok(trimmed.trim_end_matches('/').to_owned())
}
