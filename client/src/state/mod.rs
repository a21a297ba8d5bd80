//! Reactive state provided through Leptos context.
//!
//! DESIGN
//! ======
//! `quality` wraps the shared store so every fetch and review flows through
//! one signal; `ui` holds dialog and draft state that never leaves the page.

pub mod quality;
pub mod ui;
