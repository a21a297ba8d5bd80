//! Client-side store: fetched data plus a loading flag, mutated only by its
//! own actions.
//!
//! DESIGN
//! ======
//! `QualityStore` pairs a [`QualityApi`] with a [`StateCell`]. The cell hides
//! the container (a Leptos signal in the browser, `Rc<RefCell<_>>` in the CLI
//! and tests) so the same action code drives both.
//!
//! Each action marks a request in flight, performs one API call, and writes
//! the result. On error it clears its in-flight mark and returns the error
//! unchanged. There is no optimistic update.
//!
//! CONCURRENCY
//! ===========
//! `loading` is derived from an in-flight counter so overlapping actions do
//! not clear each other's flag. A second start/finalize for a record that
//! already has one awaiting the backend is refused with [`ApiError::Busy`];
//! reads and comment creation stay unguarded.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::RefCell;
use std::collections::HashSet;
use std::rc::Rc;

use crate::api::QualityApi;
use crate::error::ApiError;
use crate::stage::{ReviewAction, ReviewOutcome};
use crate::types::{Comment, NewComment, QualityRecord, ReviewRequest, SessionStatus};

/// Everything the views read.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QualityState {
    pub items: Vec<QualityRecord>,
    pub item: Option<QualityRecord>,
    pub previous: Option<QualityRecord>,
    pub comments: Vec<Comment>,
    pub session: Option<SessionStatus>,
    pub loading: bool,
    in_flight: usize,
    reviewing: HashSet<i64>,
}

impl QualityState {
    /// Whether a start/finalize for `id` is awaiting the backend.
    #[must_use]
    pub fn is_reviewing(&self, id: i64) -> bool {
        self.reviewing.contains(&id)
    }

    /// Number of requests currently awaiting the backend.
    #[must_use]
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    fn begin(&mut self) {
        self.in_flight += 1;
        self.loading = true;
    }

    fn end(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.loading = self.in_flight > 0;
    }
}

/// Container the store writes into.
pub trait StateCell {
    fn update(&self, f: impl FnOnce(&mut QualityState));
    fn read<R>(&self, f: impl FnOnce(&QualityState) -> R) -> R;
}

/// Plain single-threaded container used outside the browser.
pub type LocalState = Rc<RefCell<QualityState>>;

impl StateCell for LocalState {
    fn update(&self, f: impl FnOnce(&mut QualityState)) {
        f(&mut self.borrow_mut());
    }

    fn read<R>(&self, f: impl FnOnce(&QualityState) -> R) -> R {
        f(&self.borrow())
    }
}

#[derive(Clone, Debug)]
pub struct QualityStore<A, C> {
    api: A,
    cell: C,
}

impl<A: QualityApi, C: StateCell> QualityStore<A, C> {
    pub fn new(api: A, cell: C) -> Self {
        Self { api, cell }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> QualityState {
        self.cell.read(Clone::clone)
    }

    /// Fetch the current-user check into `session`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn check_session(&self) -> Result<(), ApiError> {
        let session = self.call("check_session", self.api.current_user()).await?;
        self.settle(|s| s.session = Some(session));
        Ok(())
    }

    /// Fetch the full list into `items`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn load(&self) -> Result<(), ApiError> {
        let items = self.call("load", self.api.list()).await?;
        tracing::debug!(count = items.len(), "quality list loaded");
        self.settle(|s| s.items = items);
        Ok(())
    }

    /// Fetch one record by primary key into `item`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn load_item(&self, id: i64) -> Result<(), ApiError> {
        let item = self.call("load_item", self.api.get(id)).await?;
        self.settle(|s| s.item = Some(item));
        Ok(())
    }

    /// Fetch one record by external id into `item`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn load_by_hd(&self, id_hd: i64) -> Result<(), ApiError> {
        let item = self.call("load_by_hd", self.api.get_by_hd(id_hd)).await?;
        self.settle(|s| s.item = Some(item));
        Ok(())
    }

    /// Fetch the previous-phase snapshot into `previous`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn load_previous(&self, id_hd: i64) -> Result<(), ApiError> {
        let previous = self.call("load_previous", self.api.previous(id_hd)).await?;
        self.settle(|s| s.previous = Some(previous));
        Ok(())
    }

    /// Fetch a chip's comments into `comments`.
    ///
    /// # Errors
    ///
    /// Returns the transport or decode error from the API call.
    pub async fn load_comments(&self, id_chip: i64) -> Result<(), ApiError> {
        let comments = self.call("load_comments", self.api.comments(id_chip)).await?;
        self.settle(|s| s.comments = comments);
        Ok(())
    }

    /// Create a comment, then re-fetch that chip's comments.
    ///
    /// # Errors
    ///
    /// Returns the error from either the create call or the re-fetch.
    pub async fn create_comment(&self, comment: &NewComment) -> Result<(), ApiError> {
        self.call("create_comment", self.api.create_comment(comment)).await?;
        let reload = self.load_comments(comment.id_chip).await;
        self.settle(|_| {});
        reload
    }

    /// Start the review of record `id`. `Ok(true)` when the backend confirms.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Busy`] if a review call for `id` is in flight, or
    /// the error from the API call.
    pub async fn start(&self, id: i64, user: &str) -> Result<bool, ApiError> {
        let body = ReviewRequest { usuario: user.to_owned(), status_os: None };
        self.review(id, ReviewAction::Start, body).await
    }

    /// Finalize the review of record `id` with an optional outcome.
    /// `Ok(true)` when the backend confirms.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Busy`] if a review call for `id` is in flight, or
    /// the error from the API call.
    pub async fn finalize(&self, id: i64, user: &str, outcome: Option<ReviewOutcome>) -> Result<bool, ApiError> {
        let body = ReviewRequest {
            usuario: user.to_owned(),
            status_os: outcome.map(|o| o.as_str().to_owned()),
        };
        let action = match outcome {
            Some(ReviewOutcome::Approved) => ReviewAction::Approve,
            Some(ReviewOutcome::Rejected) => ReviewAction::Reject,
            None => ReviewAction::Finalize,
        };
        self.review(id, action, body).await
    }

    /// Dispatch a user-facing review action.
    ///
    /// # Errors
    ///
    /// Same as [`Self::start`] / [`Self::finalize`].
    pub async fn perform(&self, action: ReviewAction, id: i64, user: &str) -> Result<bool, ApiError> {
        if action.is_start() {
            self.start(id, user).await
        } else {
            self.finalize(id, user, action.outcome()).await
        }
    }

    async fn review(&self, id: i64, action: ReviewAction, body: ReviewRequest) -> Result<bool, ApiError> {
        if self.cell.read(|s| s.is_reviewing(id)) {
            tracing::warn!(id, ?action, "duplicate review request refused");
            return Err(ApiError::Busy { id });
        }
        self.cell.update(|s| {
            s.reviewing.insert(id);
        });

        let result = self
            .call("review", async {
                if action.is_start() {
                    self.api.start(id, &body).await
                } else {
                    self.api.finalize(id, &body).await
                }
            })
            .await;

        self.cell.update(|s| {
            s.reviewing.remove(&id);
        });
        let confirmed = result?;
        tracing::info!(id, ?action, confirmed, "review request answered");
        self.settle(|_| {});
        Ok(confirmed)
    }

    /// Mark a request in flight and await it. On error the mark is cleared
    /// here; on success the caller clears it through [`Self::settle`].
    async fn call<T>(
        &self,
        action: &'static str,
        request: impl Future<Output = Result<T, ApiError>>,
    ) -> Result<T, ApiError> {
        tracing::debug!(action, "quality request");
        self.cell.update(QualityState::begin);
        request.await.inspect_err(|error| {
            self.cell.update(QualityState::end);
            tracing::warn!(action, %error, "quality request failed");
        })
    }

    fn settle(&self, write: impl FnOnce(&mut QualityState)) {
        self.cell.update(|s| {
            write(s);
            s.end();
        });
    }
}
