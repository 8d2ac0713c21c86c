//! Presentation boundary of the controller.
//!
//! Every method corresponds to one mutation of the page contract
//! (`status-dot`/`status-text`, `submit-btn`, `loading`, `results`,
//! `source-answer`/`general-answer`, `source-list`, `metrics-data`,
//! `.tab-btn`/`.tab-pane`). The controller never reads back from the view.

use serde::Serialize;

use crate::render::{MetricCard, SourceRow};
use crate::status::{StatusDot, StatusIndicator};

pub trait View: Send {
    fn set_status(&mut self, indicator: &StatusIndicator);
    fn set_submit_enabled(&mut self, enabled: bool);
    fn set_loading_visible(&mut self, visible: bool);
    fn set_results_visible(&mut self, visible: bool);
    /// Both answers as plain text.
    fn set_answers(&mut self, source_based_summary: &str, general_answer: &str);
    /// Replaces the whole `source-list`.
    fn set_sources(&mut self, rows: &[SourceRow]);
    /// Replaces the whole `metrics-data`.
    fn set_metrics(&mut self, cards: &[MetricCard]);
    /// Activates one tab control and its pane, deactivating all others.
    fn set_active_tab(&mut self, tab_id: &str);
    /// Blocking user notification.
    fn alert(&mut self, message: &str);
}

/// In-memory page, field names follow the element ids.
///
/// Starts the way the page loads: nothing known yet, submit disabled,
/// loading and results hidden.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageModel {
    pub status_dot: StatusDot,
    pub status_text: String,
    pub submit_btn_disabled: bool,
    pub loading_hidden: bool,
    pub results_hidden: bool,
    pub source_answer: String,
    pub general_answer: String,
    pub source_list: Vec<SourceRow>,
    pub metrics_data: Vec<MetricCard>,
    pub active_tab: Option<String>,
    /// Alerts shown so far, oldest first.
    pub alerts: Vec<String>,
}

impl Default for PageModel {
    fn default() -> Self {
        Self {
            status_dot: StatusDot::Neutral,
            status_text: String::new(),
            submit_btn_disabled: true,
            loading_hidden: true,
            results_hidden: true,
            source_answer: String::new(),
            general_answer: String::new(),
            source_list: Vec::new(),
            metrics_data: Vec::new(),
            active_tab: None,
            alerts: Vec::new(),
        }
    }
}

impl View for PageModel {
    fn set_status(&mut self, indicator: &StatusIndicator) {
        self.status_dot = indicator.dot;
        self.status_text.clone_from(&indicator.text);
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.submit_btn_disabled = !enabled;
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.loading_hidden = !visible;
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.results_hidden = !visible;
    }

    fn set_answers(&mut self, source_based_summary: &str, general_answer: &str) {
        self.source_answer = source_based_summary.to_string();
        self.general_answer = general_answer.to_string();
    }

    fn set_sources(&mut self, rows: &[SourceRow]) {
        self.source_list = rows.to_vec();
    }

    fn set_metrics(&mut self, cards: &[MetricCard]) {
        self.metrics_data = cards.to_vec();
    }

    fn set_active_tab(&mut self, tab_id: &str) {
        self.active_tab = Some(tab_id.to_string());
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}
