//! Transport-neutral seam over the quality backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser build implements this with `gloo-net`, the CLI with `reqwest`,
//! and tests with in-memory fakes. Each method is exactly one HTTP call; there
//! is no retry or backoff at this layer.
//!
//! Futures are not required to be `Send`: browser fetch futures are tied to
//! the JS event loop.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::error::ApiError;
use crate::types::{Comment, NewComment, QualityRecord, ReviewRequest, SessionStatus};

#[async_trait::async_trait(?Send)]
pub trait QualityApi {
    /// `GET /auth/me/`
    async fn current_user(&self) -> Result<SessionStatus, ApiError>;

    /// `GET /calidad/`
    async fn list(&self) -> Result<Vec<QualityRecord>, ApiError>;

    /// `GET /calidad/item/{id}/`
    async fn get(&self, id: i64) -> Result<QualityRecord, ApiError>;

    /// `GET /calidad/vehiculo/{id_hd}/`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Decode`] when the backend answers with an empty list.
    async fn get_by_hd(&self, id_hd: i64) -> Result<QualityRecord, ApiError>;

    /// `GET /calidad/vehiculo-previo/{id_hd}/`
    async fn previous(&self, id_hd: i64) -> Result<QualityRecord, ApiError>;

    /// `GET /calidad/comentarios/{id_chip}/`
    async fn comments(&self, id_chip: i64) -> Result<Vec<Comment>, ApiError>;

    /// `POST /calidad/comentarios/`
    async fn create_comment(&self, comment: &NewComment) -> Result<Comment, ApiError>;

    /// `POST /calidad/{id}/iniciar/`; `true` when the record comes back `INICIADA`.
    async fn start(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError>;

    /// `POST /calidad/{id}/finalizar/`; `true` when the record comes back `TERMINADO`.
    async fn finalize(&self, id: i64, body: &ReviewRequest) -> Result<bool, ApiError>;
}

/// Unwrap the get-by-external-id payload into a single record.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the payload is not a record or a list of
/// records, or if the list is empty.
pub fn first_record(id_hd: i64, value: serde_json::Value) -> Result<QualityRecord, ApiError> {
    let parsed: crate::types::OneOrMany<QualityRecord> = serde_json::from_value(value)?;
    parsed
        .into_first()
        .ok_or_else(|| ApiError::Decode(format!("no record for id_hd={id_hd}")))
}
