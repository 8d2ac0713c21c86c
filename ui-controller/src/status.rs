//! Readiness state machine driven by `/status` checks.
//!
//! ```text
//! Unknown  --PollStarted--> Polling
//! Polling  --NotReady-----> Polling
//! Error    --NotReady-----> Retrying --NotReady--> Retrying
//! any      --Failed-------> Error     (except Ready)
//! any      --Ready--------> Ready     (absorbing)
//! ```
//!
//! `Ready` is absorbing and is the only transition that stops the poll timer.
//! `Error` keeps the timer running; the next tick re-runs the check.
//! Once an error was seen the dot stays red until the server is ready.

use qa_client::StatusReport;
use serde::Serialize;

pub const INITIALIZING_TEXT: &str = "System initializing...";
pub const UNREACHABLE_TEXT: &str = "Error connecting to server";
pub const UNKNOWN_TEXT: &str = "Checking system status...";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StatusState {
    #[default]
    Unknown,
    Polling,
    Ready { document_count: u64 },
    Error,
    /// Initializing again after an error.
    Retrying,
}

/// Inputs of the state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    /// The poll loop started.
    PollStarted,
    /// Server answered but is still initializing.
    NotReady,
    /// Server answered `"ready"`.
    Ready { document_count: u64 },
    /// Transport or decode failure.
    Failed,
}

impl From<&StatusReport> for StatusEvent {
    fn from(report: &StatusReport) -> Self {
        if report.is_ready() {
            StatusEvent::Ready {
                document_count: report.document_count,
            }
        } else {
            StatusEvent::NotReady
        }
    }
}

/// What the poll loop must do after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollControl {
    Continue,
    Stop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: StatusState,
    pub poll: PollControl,
}

/// CSS-like modifier of the status dot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusDot {
    #[default]
    Neutral,
    Ready,
    Error,
}

/// Everything the status bar shows for one state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusIndicator {
    pub dot: StatusDot,
    pub text: String,
    pub submit_enabled: bool,
}

impl StatusState {
    /// The single transition function.
    pub fn on(self, event: StatusEvent) -> Transition {
        use StatusEvent as E;
        use StatusState as S;

        let next = match (self, event) {
            (S::Ready { .. }, _) => self,
            (_, E::Ready { document_count }) => S::Ready { document_count },
            (_, E::Failed) => S::Error,
            (S::Error | S::Retrying, E::PollStarted | E::NotReady) => S::Retrying,
            (_, E::PollStarted | E::NotReady) => S::Polling,
        };

        let poll = match (self, next) {
            (S::Ready { .. }, _) => PollControl::Continue,
            (_, S::Ready { .. }) => PollControl::Stop,
            _ => PollControl::Continue,
        };

        Transition { next, poll }
    }

    pub fn is_ready(self) -> bool {
        matches!(self, StatusState::Ready { .. })
    }

    pub fn indicator(self) -> StatusIndicator {
        match self {
            StatusState::Unknown => StatusIndicator {
                dot: StatusDot::Neutral,
                text: UNKNOWN_TEXT.into(),
                submit_enabled: false,
            },
            StatusState::Polling => StatusIndicator {
                dot: StatusDot::Neutral,
                text: INITIALIZING_TEXT.into(),
                submit_enabled: false,
            },
            StatusState::Retrying => StatusIndicator {
                dot: StatusDot::Error,
                text: INITIALIZING_TEXT.into(),
                submit_enabled: false,
            },
            StatusState::Ready { document_count } => StatusIndicator {
                dot: StatusDot::Ready,
                text: format!("Ready ({document_count} documents indexed)"),
                submit_enabled: true,
            },
            StatusState::Error => StatusIndicator {
                dot: StatusDot::Error,
                text: UNREACHABLE_TEXT.into(),
                submit_enabled: false,
            },
        }
    }
}
