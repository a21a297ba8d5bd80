//! Client-side list filter.
//!
//! Pure and synchronous: the page recomputes it on every input change over
//! the already-fetched list. No pagination, no server-side filtering.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::types::QualityRecord;

/// Status filter values offered by the page, with their labels.
pub const STATUS_OPTIONS: &[(&str, &str)] =
    &[("", "Todos"), ("Pendiente", "Pendiente"), ("Iniciada", "Proceso"), ("Terminado", "Terminado")];

/// Sub-status (outcome) filter values, shown only for finished records.
pub const SUB_STATUS_OPTIONS: &[(&str, &str)] = &[("", "Todos"), ("Aprobado", "Aprobado"), ("Rechazado", "Rechazado")];

/// Status value whose selection enables the sub-status filter.
pub const FINISHED_STATUS: &str = "Terminado";

/// Default status filter when the page opens.
pub const DEFAULT_STATUS: &str = "Pendiente";

/// Active filter inputs. Empty strings are inactive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QualityFilter {
    /// Case-insensitive exact match against `status`.
    pub status: String,
    /// Case-insensitive exact match against `status_os`.
    pub sub_status: String,
    /// Case-insensitive substring of `no_placas`.
    pub plates: String,
    /// Case-insensitive substring of `no_orden`.
    pub order: String,
}

impl QualityFilter {
    /// Filter state the page starts with.
    #[must_use]
    pub fn initial() -> Self {
        Self { status: DEFAULT_STATUS.to_owned(), ..Self::default() }
    }

    /// Change the status filter; the sub-status only applies to finished
    /// records, so it is cleared for any other status.
    pub fn set_status(&mut self, status: &str) {
        status.clone_into(&mut self.status);
        if !self.sub_status_enabled() {
            self.sub_status.clear();
        }
    }

    #[must_use]
    pub fn sub_status_enabled(&self) -> bool {
        self.status == FINISHED_STATUS
    }

    /// Whether a single record passes every active predicate.
    #[must_use]
    pub fn matches(&self, record: &QualityRecord) -> bool {
        equals_ci(&self.status, record.status.as_deref())
            && equals_ci(&self.sub_status, record.status_os.as_deref())
            && contains_ci(&self.plates, record.no_placas.as_deref())
            && contains_ci(&self.order, record.no_orden.as_deref())
    }

    /// Records passing the filter, in input order.
    #[must_use]
    pub fn apply(&self, records: &[QualityRecord]) -> Vec<QualityRecord> {
        records.iter().filter(|r| self.matches(r)).cloned().collect()
    }
}

fn equals_ci(needle: &str, field: Option<&str>) -> bool {
    needle.is_empty() || field.unwrap_or_default().to_lowercase() == needle.to_lowercase()
}

fn contains_ci(needle: &str, field: Option<&str>) -> bool {
    needle.is_empty() || field.unwrap_or_default().to_lowercase().contains(&needle.to_lowercase())
}
