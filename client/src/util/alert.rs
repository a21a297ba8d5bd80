//! Alert and confirmation content for the review flow.
//!
//! DESIGN
//! ======
//! Message text is computed here, away from the dialogs, so the wording for
//! every action/result pair is testable without a DOM.

#[cfg(test)]
#[path = "alert_test.rs"]
mod alert_test;

use quality::{ApiError, ReviewAction};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertLevel {
    Error,
    Info,
}

impl AlertLevel {
    pub fn title(self) -> &'static str {
        match self {
            Self::Error => "Error",
            Self::Info => "Información",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Error => "alert--error",
            Self::Info => "alert--info",
        }
    }
}

/// A message waiting for the user to dismiss it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
}

impl Alert {
    pub fn error(message: impl Into<String>) -> Self {
        Self { level: AlertLevel::Error, message: message.into() }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self { level: AlertLevel::Info, message: message.into() }
    }

    pub fn title(&self) -> &'static str {
        self.level.title()
    }
}

/// A review action awaiting the yes/no confirmation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingReview {
    pub action: ReviewAction,
    pub id: i64,
}

impl PendingReview {
    pub fn prompt(&self) -> String {
        format!("¿Estás seguro de {} el proceso de calidad?", verb(self.action))
    }
}

fn verb(action: ReviewAction) -> &'static str {
    match action {
        ReviewAction::Start => "iniciar",
        ReviewAction::Approve => "aprobar",
        ReviewAction::Reject => "rechazar",
        ReviewAction::Finalize => "finalizar",
    }
}

fn done_message(action: ReviewAction) -> &'static str {
    match action {
        ReviewAction::Start => "El proceso de calidad ya ha sido iniciado.",
        ReviewAction::Approve => "El proceso de calidad ha sido aprobado.",
        ReviewAction::Reject => "El proceso de calidad ha sido rechazado.",
        ReviewAction::Finalize => "El proceso de calidad ha sido finalizado.",
    }
}

fn failed_message(action: ReviewAction) -> String {
    format!("No se pudo {} el proceso de calidad.", verb(action))
}

/// Alert shown once a confirmed review action has been answered.
///
/// A confirmed result is informational; an unconfirmed one or any error is
/// reported as an error, with the backend's wording appended when present.
pub fn review_feedback(action: ReviewAction, result: &Result<bool, ApiError>) -> Alert {
    match result {
        Ok(true) => Alert::info(done_message(action)),
        Ok(false) => Alert::error(failed_message(action)),
        Err(ApiError::Busy { .. }) => Alert::info("Ya hay una solicitud en curso para este vehículo."),
        Err(error) => Alert::error(format!("{} {}", failed_message(action), error.user_message())),
    }
}

/// Alert shown when saving a comment fails.
pub fn comment_failed(error: &ApiError) -> Alert {
    Alert::error(format!("No se pudo guardar el comentario. {}", error.user_message()))
}
