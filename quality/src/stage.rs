//! Review stage derivation and the action buttons each stage offers.
//!
//! The only state machine on the client is the one implied by timestamps:
//! Pending (no start) -> InProgress (start, no finish) -> Finished (finish).
//! Transitions happen on the backend; the client re-derives the stage from
//! whatever record it last fetched.

#[cfg(test)]
#[path = "stage_test.rs"]
mod stage_test;

use crate::types::QualityRecord;

/// Outcome label for an approved review.
pub const OUTCOME_APPROVED: &str = "Aprobado";
/// Outcome label for a rejected review.
pub const OUTCOME_REJECTED: &str = "Rechazado";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewStage {
    Pending,
    InProgress,
    Finished,
}

impl ReviewStage {
    /// Derive the stage from the record's timestamps.
    ///
    /// A finish timestamp wins even if the start timestamp is missing.
    #[must_use]
    pub fn of(record: &QualityRecord) -> Self {
        if has_value(record.fecha_hora_fin_oper.as_deref()) {
            Self::Finished
        } else if has_value(record.fecha_hora_ini_oper.as_deref()) {
            Self::InProgress
        } else {
            Self::Pending
        }
    }
}

fn has_value(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.trim().is_empty())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReviewOutcome {
    Approved,
    Rejected,
}

impl ReviewOutcome {
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            OUTCOME_APPROVED => Some(Self::Approved),
            OUTCOME_REJECTED => Some(Self::Rejected),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Approved => OUTCOME_APPROVED,
            Self::Rejected => OUTCOME_REJECTED,
        }
    }
}

/// Outcome to display for a record: only once finished and only if the
/// backend reported one. Unknown outcome strings are passed through verbatim.
#[must_use]
pub fn displayed_outcome(record: &QualityRecord) -> Option<&str> {
    if ReviewStage::of(record) != ReviewStage::Finished {
        return None;
    }
    record.status_os.as_deref().filter(|s| !s.is_empty())
}

/// User-triggered review actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReviewAction {
    Start,
    Approve,
    Reject,
    /// Single-button finalize without an explicit outcome.
    Finalize,
}

impl ReviewAction {
    /// Outcome sent with the finalize call, if this action finalizes.
    #[must_use]
    pub fn outcome(self) -> Option<ReviewOutcome> {
        match self {
            Self::Approve => Some(ReviewOutcome::Approved),
            Self::Reject => Some(ReviewOutcome::Rejected),
            Self::Start | Self::Finalize => None,
        }
    }

    #[must_use]
    pub fn is_start(self) -> bool {
        matches!(self, Self::Start)
    }
}

/// Which button set an in-progress card shows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ActionLayout {
    /// Separate approve and reject buttons.
    #[default]
    ApproveReject,
    /// One finalize button.
    Finalize,
}

/// Action buttons a card renders. Comments are always available.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CardActions {
    pub actions: Vec<ReviewAction>,
}

impl CardActions {
    #[must_use]
    pub fn for_record(record: &QualityRecord, layout: ActionLayout) -> Self {
        let actions = match (ReviewStage::of(record), layout) {
            (ReviewStage::Pending, _) => vec![ReviewAction::Start],
            (ReviewStage::InProgress, ActionLayout::ApproveReject) => {
                vec![ReviewAction::Approve, ReviewAction::Reject]
            }
            (ReviewStage::InProgress, ActionLayout::Finalize) => vec![ReviewAction::Finalize],
            (ReviewStage::Finished, _) => Vec::new(),
        };
        Self { actions }
    }

    #[must_use]
    pub fn contains(&self, action: ReviewAction) -> bool {
        self.actions.contains(&action)
    }
}
