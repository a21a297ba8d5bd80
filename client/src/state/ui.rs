//! Page-local UI state: dialogs and the comment draft.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the quality store so the
//! store only ever holds what the backend returned.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::alert::{Alert, PendingReview};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    /// Alert waiting to be dismissed.
    pub alert: Option<Alert>,
    /// Review action waiting for yes/no.
    pub confirm: Option<PendingReview>,
    pub comments_open: bool,
    /// Chip whose comments the modal shows and new comments attach to.
    pub comment_chip: Option<i64>,
    pub comment_draft: String,
}

impl UiState {
    /// Open the comments modal for `chip`. Records without a chip id have no
    /// comment thread, so `None` leaves the state untouched and returns `None`.
    pub fn open_comments(&mut self, chip: Option<i64>) -> Option<i64> {
        let chip = chip?;
        self.comment_chip = Some(chip);
        self.comments_open = true;
        Some(chip)
    }

    pub fn close_comments(&mut self) {
        self.comments_open = false;
    }

    /// Reset after a comment was saved: clear the draft and chip, close the modal.
    pub fn finish_comment(&mut self) {
        self.comment_draft.clear();
        self.comment_chip = None;
        self.comments_open = false;
    }

    /// Draft ready to submit, if there is a chip and non-blank text.
    pub fn comment_submission(&self) -> Option<(i64, String)> {
        let chip = self.comment_chip?;
        let text = self.comment_draft.trim();
        (!text.is_empty()).then(|| (chip, text.to_owned()))
    }
}
