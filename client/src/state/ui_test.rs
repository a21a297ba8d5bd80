use super::*;
use quality::ReviewAction;

// =============================================================
// UiState defaults
// =============================================================

#[test]
fn ui_state_default_has_no_dialogs() {
    let state = UiState::default();
    assert!(state.alert.is_none());
    assert!(state.confirm.is_none());
    assert!(!state.comments_open);
    assert!(state.comment_draft.is_empty());
}

// =============================================================
// Comments modal
// =============================================================

#[test]
fn open_comments_without_chip_does_nothing() {
    let mut state = UiState::default();
    assert_eq!(state.open_comments(None), None);
    assert_eq!(state, UiState::default());
}

#[test]
fn open_comments_records_chip() {
    let mut state = UiState::default();
    assert_eq!(state.open_comments(Some(88)), Some(88));
    assert!(state.comments_open);
    assert_eq!(state.comment_chip, Some(88));
}

#[test]
fn close_comments_keeps_draft() {
    let mut state = UiState::default();
    state.open_comments(Some(88));
    state.comment_draft = "Rayón en puerta".into();
    state.close_comments();
    assert!(!state.comments_open);
    assert_eq!(state.comment_draft, "Rayón en puerta");
}

#[test]
fn finish_comment_resets_modal() {
    let mut state = UiState::default();
    state.open_comments(Some(88));
    state.comment_draft = "Listo".into();
    state.confirm = Some(PendingReview { action: ReviewAction::Start, id: 1 });
    state.finish_comment();
    assert!(!state.comments_open);
    assert!(state.comment_chip.is_none());
    assert!(state.comment_draft.is_empty());
    assert!(state.confirm.is_some());
}

#[test]
fn comment_submission_requires_text() {
    let mut state = UiState::default();
    state.open_comments(Some(5));
    state.comment_draft = "   ".into();
    assert_eq!(state.comment_submission(), None);
    state.comment_draft = "  Revisar frenos ".into();
    assert_eq!(state.comment_submission(), Some((5, "Revisar frenos".to_owned())));
}
