//! The UI controller: one object built at startup that owns the page state.
//!
//! It reacts to three kinds of input: poll ticks ([`UiController::run_polling`]),
//! tab clicks ([`UiController::select_tab`]) and form submissions
//! ([`UiController::submit`]). Page state sits behind a `std::sync::Mutex`
//! that is only held between awaits, so the poll loop and a submission may
//! interleave freely.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use qa_client::{AnswerResult, QaApi, Question};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, instrument, warn};

use crate::render::{metric_cards, source_rows};
use crate::status::{PollControl, StatusEvent, StatusState};
use crate::tabs::TabSet;
use crate::view::View;

/// Shown for any failed submission; server errors and network errors look the same.
pub const ASK_FAILED_ALERT: &str =
    "An error occurred while processing your question. Please try again.";

/// Result of one form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Empty or whitespace-only question: nothing sent, nothing changed.
    Ignored,
    /// Submit control was disabled: nothing sent.
    Rejected,
    /// Answer received and rendered.
    Answered,
    /// Request failed; alert shown, previous results kept.
    Failed,
}

/// User-facing events after page load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEvent {
    TabClicked(String),
    Submit(String),
}

struct UiState<V> {
    status: StatusState,
    tabs: TabSet,
    submit_enabled: bool,
    view: V,
}

impl<V: View> UiState<V> {
    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_enabled = enabled;
        self.view.set_submit_enabled(enabled);
    }

    fn show_active_tab(&mut self) {
        let id = self.tabs.active_id().to_string();
        self.view.set_active_tab(&id);
    }

    fn render(&mut self, answer: &AnswerResult) {
        self.view
            .set_answers(&answer.source_based_summary, &answer.general_answer);
        self.view.set_sources(&source_rows(&answer.sources));
        self.view.set_metrics(&metric_cards(&answer.metrics));
        self.view.set_results_visible(true);

        self.tabs.reset();
        self.show_active_tab();
    }
}

pub struct UiController<A, V> {
    api: A,
    poll_interval: Duration,
    state: Mutex<UiState<V>>,
}

impl<A, V> UiController<A, V>
where
    A: QaApi,
    V: View,
{
    /// Builds the controller and paints the initial page.
    pub fn new(api: A, view: V, tabs: TabSet, poll_interval: Duration) -> Self {
        let mut state = UiState {
            status: StatusState::Unknown,
            tabs,
            submit_enabled: false,
            view,
        };
        state.view.set_status(&state.status.indicator());
        state.set_submit_enabled(false);
        state.view.set_loading_visible(false);
        state.view.set_results_visible(false);
        state.show_active_tab();

        Self {
            api,
            poll_interval,
            state: Mutex::new(state),
        }
    }

    fn lock(&self) -> MutexGuard<'_, UiState<V>> {
        // A panic inside a view call must not freeze the page.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, event: StatusEvent) -> PollControl {
        let mut st = self.lock();
        let transition = st.status.on(event);
        if transition.next != st.status {
            debug!(from = ?st.status, to = ?transition.next, "status transition");
        }
        st.status = transition.next;

        let indicator = st.status.indicator();
        st.view.set_status(&indicator);
        st.set_submit_enabled(indicator.submit_enabled);
        transition.poll
    }

    /// Current readiness state.
    pub fn status(&self) -> StatusState {
        self.lock().status
    }

    pub fn submit_enabled(&self) -> bool {
        self.lock().submit_enabled
    }

    /// Read access to the view (snapshots, tests).
    pub fn with_view<R>(&self, f: impl FnOnce(&V) -> R) -> R {
        f(&self.lock().view)
    }

    /// One `/status` check applied to the state machine.
    pub async fn check_status(&self) -> PollControl {
        let event = match self.api.status().await {
            Ok(report) => StatusEvent::from(&report),
            Err(e) => {
                warn!(error = %e, "status check failed");
                StatusEvent::Failed
            }
        };
        self.apply(event)
    }

    /// Checks `/status` now and then every poll interval until ready.
    ///
    /// Returns right after the ready transition; no request is issued after it.
    /// On a controller that is already ready it returns without any request.
    #[instrument(skip_all, fields(interval_ms = self.poll_interval.as_millis() as u64))]
    pub async fn run_polling(&self) {
        if self.status().is_ready() {
            debug!("already ready, not polling");
            return;
        }
        self.apply(StatusEvent::PollStarted);

        let mut ticker = tokio::time::interval(self.poll_interval);
        // A slow check delays the next one instead of bunching them up.
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;
            if self.check_status().await == PollControl::Stop {
                break;
            }
        }

        if let StatusState::Ready { document_count } = self.status() {
            info!(document_count, "server ready, polling stopped");
        }
    }

    /// Runs [`Self::run_polling`] on the runtime. Abort the handle to stop early.
    pub fn spawn_polling(self: &Arc<Self>) -> JoinHandle<()>
    where
        A: 'static,
        V: 'static,
    {
        let this = Arc::clone(self);
        tokio::spawn(async move { this.run_polling().await })
    }

    /// Tab click. Unknown ids change nothing and return `false`.
    pub fn select_tab(&self, id: &str) -> bool {
        let mut st = self.lock();
        if !st.tabs.select(id) {
            debug!(tab = id, "ignoring click on unknown tab");
            return false;
        }
        st.show_active_tab();
        true
    }

    /// Form submission with the raw contents of the question input.
    pub async fn submit(&self, raw: &str) -> SubmitOutcome {
        let question = {
            let mut st = self.lock();
            if !st.submit_enabled {
                return SubmitOutcome::Rejected;
            }
            let Some(question) = Question::parse(raw) else {
                return SubmitOutcome::Ignored;
            };

            st.view.set_loading_visible(true);
            st.view.set_results_visible(false);
            st.set_submit_enabled(false);
            question
        };

        let _cleanup = SubmitCleanup { controller: self };

        info!(question = %question, "submitting question");
        match self.api.ask(&question).await {
            Ok(answer) => {
                debug!(sources = answer.sources.len(), "rendering answer");
                self.lock().render(&answer);
                SubmitOutcome::Answered
            }
            Err(e) => {
                warn!(error = %e, "question failed");
                self.lock().view.alert(ASK_FAILED_ALERT);
                SubmitOutcome::Failed
            }
        }
    }

    /// Routes a user event to [`Self::select_tab`] or [`Self::submit`].
    pub async fn dispatch(&self, event: UiEvent) -> Option<SubmitOutcome> {
        match event {
            UiEvent::TabClicked(id) => {
                self.select_tab(&id);
                None
            }
            UiEvent::Submit(raw) => Some(self.submit(&raw).await),
        }
    }
}

/// Hides loading and re-enables submit when a submission ends, however it ends
/// (including the submit future being dropped mid-request).
struct SubmitCleanup<'a, A, V>
where
    A: QaApi,
    V: View,
{
    controller: &'a UiController<A, V>,
}

impl<A, V> Drop for SubmitCleanup<'_, A, V>
where
    A: QaApi,
    V: View,
{
    fn drop(&mut self) {
        let mut st = self.controller.lock();
        st.view.set_loading_visible(false);
        st.set_submit_enabled(true);
    }
}
