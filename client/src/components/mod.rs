//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the quality list, its cards, and the dialogs while
//! reading shared state from Leptos context providers.

pub mod alert_dialog;
pub mod modal;
pub mod nav_bar;
pub mod quality_card;
pub mod quality_comments;
pub mod quality_list;
