//! Error type shared by every `QualityApi` implementation and the store.
//!
//! ERROR HANDLING
//! ==============
//! The client never classifies failures beyond what the transport reports.
//! Non-2xx responses carry the backend's `{code, message, detail}` envelope
//! when it could be decoded, so alerts can show the server's own wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::types::ErrorBody;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, DNS).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16, body: Option<ErrorBody> },
    /// The response body did not match the expected shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// A start/finalize for this record is already awaiting the backend.
    #[error("review {id} already has a request in flight")]
    Busy { id: i64 },
    /// Browser-only call made from a server-rendered context.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Build a status error, decoding the backend envelope when possible.
    #[must_use]
    pub fn from_status(status: u16, body: &str) -> Self {
        Self::Status { status, body: serde_json::from_str(body).ok() }
    }

    /// Text suitable for an alert dialog.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { body: Some(body), .. } => match body.detail.as_deref() {
                Some(detail) if !detail.is_empty() => format!("{} ({detail})", body.message),
                _ => body.message.clone(),
            },
            other => other.to_string(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Decode(error.to_string())
    }
}
