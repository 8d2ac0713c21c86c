//! Terminal rendition of the page.
//!
//! Keeps a [`PageModel`] as the source of truth and prints what changed:
//! the status line, the loading spinner, the active pane and alerts.

use std::time::Duration;

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use ui_controller::{MetricCard, PageModel, SourceRow, StatusDot, StatusIndicator, View};

const LOADING_MESSAGE: &str = "Searching documents and generating answers...";

#[derive(Default)]
pub struct TerminalView {
    page: PageModel,
    spinner: Option<ProgressBar>,
}

impl TerminalView {
    pub fn new() -> Self {
        Self::default()
    }

    fn status_line(&self) -> String {
        let dot = match self.page.status_dot {
            StatusDot::Neutral => "●".yellow(),
            StatusDot::Ready => "●".green(),
            StatusDot::Error => "●".red(),
        };
        format!("{dot} {}", self.page.status_text)
    }

    /// Plain-text body of a pane, `None` for ids without content.
    pub fn pane_text(&self, tab_id: &str) -> Option<String> {
        let p = &self.page;
        match tab_id {
            "answer" => Some(format!(
                "{}\n{}\n\n{}\n{}",
                "Answer from your documents".bold(),
                p.source_answer,
                "General answer".bold(),
                p.general_answer
            )),
            "sources" => {
                if p.source_list.is_empty() {
                    return Some("No relevant passages found.".to_string());
                }
                let rows: Vec<String> = p.source_list.iter().map(format_source).collect();
                Some(rows.join("\n\n"))
            }
            "metrics" => {
                let cards: Vec<String> = p.metrics_data.iter().map(format_metric).collect();
                Some(cards.join("\n"))
            }
            _ => None,
        }
    }

    /// Runs `print` with the spinner line cleared, then redraws it.
    fn emit(&self, print: impl FnOnce()) {
        match &self.spinner {
            Some(pb) => pb.suspend(print),
            None => print(),
        }
    }

    fn tab_bar(active: &str) -> String {
        // The bar only lists panes this view knows how to draw.
        let bar: Vec<String> = ["answer", "sources", "metrics"]
            .iter()
            .map(|id| {
                if *id == active {
                    format!("[{id}]").bold().to_string()
                } else {
                    format!(" {id} ").dimmed().to_string()
                }
            })
            .collect();
        bar.join(" ")
    }
}

fn format_source(row: &SourceRow) -> String {
    format!(
        "{} {}  {}\n  {}",
        row.file_label.cyan().bold(),
        row.page.dimmed(),
        row.score,
        row.text
    )
}

fn format_metric(card: &MetricCard) -> String {
    format!("{:<24} {}", card.label, card.display_value().bold())
}

impl View for TerminalView {
    fn set_status(&mut self, indicator: &StatusIndicator) {
        let changed =
            self.page.status_dot != indicator.dot || self.page.status_text != indicator.text;
        self.page.set_status(indicator);
        if changed {
            let line = self.status_line();
            self.emit(|| println!("{line}"));
        }
    }

    fn set_submit_enabled(&mut self, enabled: bool) {
        self.page.set_submit_enabled(enabled);
    }

    fn set_loading_visible(&mut self, visible: bool) {
        self.page.set_loading_visible(visible);
        if visible {
            let pb = ProgressBar::new_spinner();
            if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                pb.set_style(style.tick_chars("-\\|/ "));
            }
            pb.set_message(LOADING_MESSAGE);
            pb.enable_steady_tick(Duration::from_millis(80));
            self.spinner = Some(pb);
        } else if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
    }

    fn set_results_visible(&mut self, visible: bool) {
        self.page.set_results_visible(visible);
    }

    fn set_answers(&mut self, source_based_summary: &str, general_answer: &str) {
        self.page.set_answers(source_based_summary, general_answer);
    }

    fn set_sources(&mut self, rows: &[SourceRow]) {
        self.page.set_sources(rows);
    }

    fn set_metrics(&mut self, cards: &[MetricCard]) {
        self.page.set_metrics(cards);
    }

    fn set_active_tab(&mut self, tab_id: &str) {
        self.page.set_active_tab(tab_id);
        if self.page.results_hidden {
            return;
        }
        if let Some(body) = self.pane_text(tab_id) {
            let bar = Self::tab_bar(tab_id);
            self.emit(|| println!("{bar}\n{body}\n"));
        }
    }

    fn alert(&mut self, message: &str) {
        self.page.alert(message);
        self.emit(|| eprintln!("{} {message}", "!".red().bold()));
    }
}
