//! Host configuration parsed from environment variables.
//!
//! Optional:
//! - `HOST`: bind address, default `0.0.0.0`
//! - `PORT`: listen port, default `3000`

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("HOST must not be empty")]
    EmptyHost,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub host: String,
    pub port: u16,
}

impl HostConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(std::env::var("HOST").ok().as_deref(), std::env::var("PORT").ok().as_deref())
    }

    pub fn from_values(host: Option<&str>, port: Option<&str>) -> Result<Self, ConfigError> {
        let host = host.unwrap_or(DEFAULT_HOST).trim();
        if host.is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        let port = match port.map(str::trim) {
            None | Some("") => DEFAULT_PORT,
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw.to_owned()))?,
        };
        Ok(Self { host: host.to_owned(), port })
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
