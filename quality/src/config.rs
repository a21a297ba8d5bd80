//! Client configuration: API base URL, display locale/currency, operator
//! identity, and card action layout.
//!
//! Values come from a key lookup so the browser build can feed compile-time
//! env (`option_env!`) and native tools can feed the process environment.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::stage::ActionLayout;

pub const API_URL_VAR: &str = "CALIDAD_API_URL";
pub const LOCALE_VAR: &str = "CALIDAD_DEFAULT_LOCALE";
pub const CURRENCY_VAR: &str = "CALIDAD_DEFAULT_CURRENCY";
pub const OPERATOR_VAR: &str = "CALIDAD_OPERATOR";
pub const CARD_ACTIONS_VAR: &str = "CALIDAD_CARD_ACTIONS";

pub const DEFAULT_LOCALE: &str = "es-CO";
pub const DEFAULT_CURRENCY: &str = "COP";
pub const DEFAULT_OPERATOR: &str = "admin";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid CALIDAD_CARD_ACTIONS: {0:?} (expected `approve-reject` or `finalize`)")]
    InvalidLayout(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Prefix for every backend path. Empty means same origin.
    pub api_url: String,
    /// BCP 47 locale used for number/date display.
    pub locale: String,
    /// ISO 4217 currency code used for money display.
    pub currency: String,
    /// User id sent with reviews and comments.
    pub operator: String,
    pub action_layout: ActionLayout,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: String::new(),
            locale: DEFAULT_LOCALE.to_owned(),
            currency: DEFAULT_CURRENCY.to_owned(),
            operator: DEFAULT_OPERATOR.to_owned(),
            action_layout: ActionLayout::default(),
        }
    }
}

impl ClientConfig {
    /// Build config from a key lookup. Missing or blank keys use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidLayout`] if `CALIDAD_CARD_ACTIONS` is set
    /// to an unknown value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        let action_layout = match get(CARD_ACTIONS_VAR) {
            Some(raw) => parse_layout(&raw)?,
            None => defaults.action_layout,
        };
        Ok(Self {
            api_url: get(API_URL_VAR).unwrap_or(defaults.api_url),
            locale: get(LOCALE_VAR).unwrap_or(defaults.locale),
            currency: get(CURRENCY_VAR).unwrap_or(defaults.currency),
            operator: get(OPERATOR_VAR).unwrap_or(defaults.operator),
            action_layout,
        })
    }

    /// Build config from the process environment.
    ///
    /// # Errors
    ///
    /// See [`Self::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Parse a card layout name.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidLayout`] for unknown names.
pub fn parse_layout(raw: &str) -> Result<ActionLayout, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "approve-reject" | "approve_reject" => Ok(ActionLayout::ApproveReject),
        "finalize" => Ok(ActionLayout::Finalize),
        _ => Err(ConfigError::InvalidLayout(raw.to_owned())),
    }
}
