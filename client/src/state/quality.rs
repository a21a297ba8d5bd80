//! Leptos binding for the shared quality store.
//!
//! DESIGN
//! ======
//! The store's actions write through [`StateCell`]. Here the cell is a
//! `RwSignal<QualityState>`, so every write re-renders whatever read it.
//! Reads inside actions are untracked; they must not subscribe the caller.

#[cfg(test)]
#[path = "quality_test.rs"]
mod quality_test;

use leptos::prelude::*;
use quality::{ClientConfig, QualityState, QualityStore, StateCell};

use crate::net::api::HttpQualityApi;

/// `RwSignal` adapter implementing [`StateCell`].
#[derive(Clone, Copy, Debug)]
pub struct QualitySignal(pub RwSignal<QualityState>);

impl StateCell for QualitySignal {
    fn update(&self, f: impl FnOnce(&mut QualityState)) {
        self.0.update(f);
    }

    fn read<R>(&self, f: impl FnOnce(&QualityState) -> R) -> R {
        self.0.with_untracked(f)
    }
}

/// Store type every component pulls from context.
pub type AppStore = QualityStore<HttpQualityApi, QualitySignal>;

/// Build the store for `config` and provide both it and its signal.
pub fn provide_quality_store(config: &ClientConfig) -> AppStore {
    let state = RwSignal::new(QualityState::default());
    let store = QualityStore::new(HttpQualityApi::new(config.api_url.clone()), QualitySignal(state));
    provide_context(state);
    provide_context(store.clone());
    store
}
