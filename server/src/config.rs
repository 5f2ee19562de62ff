//! Server configuration parsed from environment variables.

use client::net::config::ApiConfig;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable {var}")]
    Missing { var: &'static str },
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Backend base URLs handed to the browser.
    pub api: ApiConfig,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Required:
    /// - `CONSOLE_API_BASE_URL`
    ///
    /// Optional:
    /// - `CONSOLE_AUTH_BASE_URL`: defaults to the API base
    /// - `PORT`: default 3000
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`Self::from_env`] over an arbitrary lookup. Blank values
    /// count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let api_base = get("CONSOLE_API_BASE_URL").ok_or(ConfigError::Missing { var: "CONSOLE_API_BASE_URL" })?;
        let auth_base = get("CONSOLE_AUTH_BASE_URL").unwrap_or_else(|| api_base.clone());
        let port = match get("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Self { port, api: ApiConfig::new(&api_base, &auth_base) })
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
