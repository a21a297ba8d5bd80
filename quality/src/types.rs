//! Wire DTOs for the quality-review backend.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's JSON exactly (Spanish, snake case) so the
//! structs deserialize without rename attributes. Every descriptive field is
//! optional; the backend omits or nulls them freely.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Status string the backend writes when a review has been started.
pub const STATUS_STARTED: &str = "INICIADA";
/// Status string the backend writes when a review has been finalized.
pub const STATUS_FINISHED: &str = "TERMINADO";
/// Status tag attached to comments typed by an operator.
pub const COMMENT_STATUS: &str = "Comentario";

/// A vehicle's quality-review entry.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityRecord {
    /// Primary key.
    pub id: i64,
    /// Chip identifier; groups comments for this record.
    pub id_chip: Option<i64>,
    /// External workshop identifier.
    pub id_hd: Option<i64>,
    /// Appointment timestamp.
    pub fecha: Option<String>,
    pub color: Option<String>,
    /// Free-text review status ("Pendiente", "Iniciada", "Terminado", ...).
    pub status: Option<String>,
    pub vehiculo: Option<String>,
    pub no_orden: Option<String>,
    pub no_placas: Option<String>,
    pub id_tecnico: Option<i64>,
    pub id_asesor: Option<i64>,
    /// Review start timestamp.
    pub fecha_hora_ini_oper: Option<String>,
    /// Review finish timestamp.
    pub fecha_hora_fin_oper: Option<String>,
    /// Review outcome; only meaningful once `fecha_hora_fin_oper` is set.
    pub status_os: Option<String>,
    pub kilometraje: Option<i64>,
    pub contacto_nombre: Option<String>,
    pub contacto_telefono: Option<String>,
    pub tmp_real: Option<i64>,
    pub tmp_original: Option<i64>,
    pub servicio: Option<String>,
    pub servicio_capturado: Option<String>,
    pub id_fase: Option<i64>,
    pub tecnico: Option<String>,
    pub asesor: Option<String>,
    /// Link to the order tracker, when the backend is configured with one.
    pub tracker_url: Option<String>,
}

impl QualityRecord {
    /// Whether the backend reports this record as started.
    #[must_use]
    pub fn reports_started(&self) -> bool {
        self.status.as_deref() == Some(STATUS_STARTED)
    }

    /// Whether the backend reports this record as finalized.
    #[must_use]
    pub fn reports_finished(&self) -> bool {
        self.status.as_deref() == Some(STATUS_FINISHED)
    }
}

/// One comment line attached to a record's chip.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub id_chip: i64,
    pub fecha: String,
    pub status: String,
    pub cve_usuario: String,
    pub id_linea: i64,
    pub comentario: String,
}

impl Comment {
    /// Stable key for keyed list rendering.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{}-{}-{}", self.id_chip, self.fecha, self.id_linea)
    }
}

/// Body of `POST /calidad/comentarios/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewComment {
    pub id_chip: i64,
    pub status: String,
    pub cve_usuario: String,
    pub comentario: String,
}

impl NewComment {
    /// Operator comment with the standard status tag.
    #[must_use]
    pub fn operator(id_chip: i64, user: &str, text: &str) -> Self {
        Self {
            id_chip,
            status: COMMENT_STATUS.to_owned(),
            cve_usuario: user.to_owned(),
            comentario: text.to_owned(),
        }
    }
}

/// Body of the start / finalize review calls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub usuario: String,
    pub status_os: Option<String>,
}

/// Body returned by the current-user check.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionStatus {
    pub status: String,
    pub message: String,
}

impl SessionStatus {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Error envelope the backend returns on non-2xx responses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(default)]
    pub detail: Option<String>,
}

/// The get-by-external-id endpoint answers with a list; older deployments
/// answer with a single object. Accept both.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    /// First element, if any.
    pub fn into_first(self) -> Option<T> {
        match self {
            Self::Many(items) => items.into_iter().next(),
            Self::One(item) => Some(item),
        }
    }
}
