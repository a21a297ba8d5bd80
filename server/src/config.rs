//! Host configuration parsed from environment variables.
//!
//! The host only needs its listen port. `CALIDAD_*` client keys are baked
//! into the WASM bundle at build time; they are checked here too so a bad
//! `CALIDAD_CARD_ACTIONS` is reported at startup instead of silently falling
//! back in the browser.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use quality::ClientConfig;
use quality::config::ConfigError;

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT: {0:?}")]
    InvalidPort(String),
    #[error(transparent)]
    Client(#[from] ConfigError),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub client: ClientConfig,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `CALIDAD_*`: see [`ClientConfig::from_lookup`]
    pub fn from_env() -> Result<Self, ServerError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from a key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ServerError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = parse_port(lookup("PORT").as_deref())?;
        let client = ClientConfig::from_lookup(&lookup)?;
        Ok(Self { port, client })
    }

    pub fn log_client_config(&self) {
        tracing::info!(
            api_url = %self.client.api_url,
            locale = %self.client.locale,
            operator = %self.client.operator,
            layout = ?self.client.action_layout,
            "client configuration"
        );
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ServerError> {
    match raw.map(str::trim).filter(|v| !v.is_empty()) {
        None => Ok(DEFAULT_PORT),
        Some(value) => value.parse().map_err(|_| ServerError::InvalidPort(value.to_owned())),
    }
}
