//! Shared domain crate for the Calidad HYP quality-review client.
//!
//! This crate owns the backend wire types, the review-stage rules that decide
//! which actions a record offers, the client-side filter, the transport-neutral
//! [`QualityApi`] seam, and the store that both the browser app and the CLI
//! drive. It performs no I/O of its own.

pub mod api;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod filter;
pub mod format;
pub mod stage;
pub mod store;
pub mod types;

pub use api::QualityApi;
pub use config::ClientConfig;
pub use error::ApiError;
pub use filter::QualityFilter;
pub use stage::{ActionLayout, CardActions, ReviewAction, ReviewOutcome, ReviewStage};
pub use store::{LocalState, QualityState, QualityStore, StateCell};
pub use types::{Comment, NewComment, QualityRecord, ReviewRequest, SessionStatus};
