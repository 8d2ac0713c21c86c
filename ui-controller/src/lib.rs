//! UI controller for the document QA client.
//!
//! Polls the server until it is ready, keeps one results tab active, submits
//! questions and renders answers, sources and metrics through a [`View`].
//!
//! # Example
//! ```no_run
//! use std::sync::Arc;
//!
//! use qa_client::{QaClientConfig, QaHttpClient};
//! use ui_controller::{DEFAULT_TABS, PageModel, TabSet, UiController};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cfg = QaClientConfig::from_env()?;
//! let ui = Arc::new(UiController::new(
//!     QaHttpClient::new(&cfg)?,
//!     PageModel::default(),
//!     TabSet::new(DEFAULT_TABS)?,
//!     cfg.poll_interval,
//! ));
//!
//! ui.run_polling().await;
//! ui.submit("What is the refund policy?").await;
//! ui.with_view(|page| println!("{}", page.source_answer));
//! # Ok(()) }
//! ```

pub mod controller;
pub mod error;
pub mod render;
pub mod status;
pub mod tabs;
pub mod view;

pub use controller::{ASK_FAILED_ALERT, SubmitOutcome, UiController, UiEvent};
pub use error::ControllerError;
pub use render::{MetricCard, SourceRow};
pub use status::{PollControl, StatusDot, StatusEvent, StatusIndicator, StatusState};
pub use tabs::{DEFAULT_TABS, TabSet};
pub use view::{PageModel, View};
