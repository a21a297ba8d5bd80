use super::*;

fn record(start: Option<&str>, finish: Option<&str>, outcome: Option<&str>) -> QualityRecord {
    QualityRecord {
        id: 1,
        fecha_hora_ini_oper: start.map(str::to_owned),
        fecha_hora_fin_oper: finish.map(str::to_owned),
        status_os: outcome.map(str::to_owned),
        ..QualityRecord::default()
    }
}

const START: &str = "2025-03-04T09:15:00";
const FINISH: &str = "2025-03-04T10:40:00";

// =============================================================
// ReviewStage
// =============================================================

#[test]
fn stage_follows_timestamps() {
    assert_eq!(ReviewStage::of(&record(None, None, None)), ReviewStage::Pending);
    assert_eq!(ReviewStage::of(&record(Some(START), None, None)), ReviewStage::InProgress);
    assert_eq!(ReviewStage::of(&record(Some(START), Some(FINISH), None)), ReviewStage::Finished);
}

#[test]
fn blank_timestamp_counts_as_missing() {
    assert_eq!(ReviewStage::of(&record(Some("  "), None, None)), ReviewStage::Pending);
}

#[test]
fn finish_without_start_is_finished() {
    assert_eq!(ReviewStage::of(&record(None, Some(FINISH), None)), ReviewStage::Finished);
}

// =============================================================
// CardActions
// =============================================================

#[test]
fn pending_shows_only_start() {
    for layout in [ActionLayout::ApproveReject, ActionLayout::Finalize] {
        let actions = CardActions::for_record(&record(None, None, None), layout);
        assert_eq!(actions.actions, vec![ReviewAction::Start]);
        assert!(!actions.contains(ReviewAction::Approve));
        assert!(!actions.contains(ReviewAction::Reject));
        assert!(!actions.contains(ReviewAction::Finalize));
    }
}

#[test]
fn in_progress_shows_approve_and_reject() {
    let actions = CardActions::for_record(&record(Some(START), None, None), ActionLayout::ApproveReject);
    assert_eq!(actions.actions, vec![ReviewAction::Approve, ReviewAction::Reject]);
    assert!(!actions.contains(ReviewAction::Start));
}

#[test]
fn in_progress_with_finalize_layout_shows_single_button() {
    let actions = CardActions::for_record(&record(Some(START), None, None), ActionLayout::Finalize);
    assert_eq!(actions.actions, vec![ReviewAction::Finalize]);
}

#[test]
fn finished_shows_no_review_actions() {
    for layout in [ActionLayout::ApproveReject, ActionLayout::Finalize] {
        let actions = CardActions::for_record(&record(Some(START), Some(FINISH), Some("Aprobado")), layout);
        assert!(actions.actions.is_empty());
    }
}

// =============================================================
// Outcome
// =============================================================

#[test]
fn outcome_displayed_only_when_finished() {
    assert_eq!(displayed_outcome(&record(Some(START), Some(FINISH), Some("Rechazado"))), Some("Rechazado"));
    assert_eq!(displayed_outcome(&record(Some(START), None, Some("Rechazado"))), None);
    assert_eq!(displayed_outcome(&record(Some(START), Some(FINISH), None)), None);
}

#[test]
fn outcome_parse_is_exact() {
    assert_eq!(ReviewOutcome::parse("Aprobado"), Some(ReviewOutcome::Approved));
    assert_eq!(ReviewOutcome::parse("Rechazado"), Some(ReviewOutcome::Rejected));
    assert_eq!(ReviewOutcome::parse("aprobado"), None);
}

#[test]
fn action_outcomes() {
    assert_eq!(ReviewAction::Approve.outcome().map(ReviewOutcome::as_str), Some("Aprobado"));
    assert_eq!(ReviewAction::Reject.outcome().map(ReviewOutcome::as_str), Some("Rechazado"));
    assert_eq!(ReviewAction::Finalize.outcome(), None);
    assert!(ReviewAction::Start.is_start());
}
