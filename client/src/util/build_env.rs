//! Client configuration baked in at compile time.
//!
//! The WASM bundle has no process environment, so `CALIDAD_*` values are read
//! with `option_env!` when the crate is built and resolved through the shared
//! [`ClientConfig::from_lookup`].

#[cfg(test)]
#[path = "build_env_test.rs"]
mod build_env_test;

use quality::ClientConfig;
use quality::config::CARD_ACTIONS_VAR;

type Baked = &'static [(&'static str, Option<&'static str>)];

const BAKED: Baked = &[
    ("CALIDAD_API_URL", option_env!("CALIDAD_API_URL")),
    ("CALIDAD_DEFAULT_LOCALE", option_env!("CALIDAD_DEFAULT_LOCALE")),
    ("CALIDAD_DEFAULT_CURRENCY", option_env!("CALIDAD_DEFAULT_CURRENCY")),
    ("CALIDAD_OPERATOR", option_env!("CALIDAD_OPERATOR")),
    ("CALIDAD_CARD_ACTIONS", option_env!("CALIDAD_CARD_ACTIONS")),
];

/// Config for this build.
pub fn client_config() -> ClientConfig {
    resolve(BAKED)
}

/// An invalid card layout falls back to the default layout while keeping
/// every other baked value.
fn resolve(baked: &[(&str, Option<&str>)]) -> ClientConfig {
    let lookup = |key: &str| {
        baked
            .iter()
            .find(|(name, _)| *name == key)
            .and_then(|(_, value)| value.map(str::to_owned))
    };
    ClientConfig::from_lookup(lookup).unwrap_or_else(|error| {
        tracing::warn!(%error, "using default card layout");
        ClientConfig::from_lookup(|key| if key == CARD_ACTIONS_VAR { None } else { lookup(key) })
            .unwrap_or_default()
    })
}
