//! Turns an [`AnswerResult`](qa_client::AnswerResult) into display rows and cards.
//!
//! All values are plain text; nothing from the server is interpreted as markup.

use qa_client::{Metrics, Source};
use serde::Serialize;

/// Two-decimal fixed notation used for scores, averages and durations.
pub fn fixed2(value: f64) -> String {
    format!("{value:.2}")
}

/// One entry of `source-list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SourceRow {
    /// Trailing path segment of the source file.
    pub file_label: String,
    /// `Page {page}`.
    pub page: String,
    /// `Score: {score:.2}`.
    pub score: String,
    /// Full passage text.
    pub text: String,
}

impl From<&Source> for SourceRow {
    fn from(source: &Source) -> Self {
        Self {
            file_label: source.file_name().to_string(),
            page: format!("Page {}", source.page),
            score: format!("Score: {}", fixed2(source.score)),
            text: source.text.clone(),
        }
    }
}

/// Rows in server order.
pub fn source_rows(sources: &[Source]) -> Vec<SourceRow> {
    sources.iter().map(SourceRow::from).collect()
}

/// One entry of `metrics-data`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricCard {
    pub label: &'static str,
    pub value: String,
    pub unit: Option<&'static str>,
}

impl MetricCard {
    fn plain(label: &'static str, value: impl ToString) -> Self {
        Self {
            label,
            value: value.to_string(),
            unit: None,
        }
    }

    fn seconds(label: &'static str, value: f64) -> Self {
        Self {
            label,
            value: fixed2(value),
            unit: Some("s"),
        }
    }

    /// Value as displayed, unit included (`"1.23 s"`).
    pub fn display_value(&self) -> String {
        match self.unit {
            Some(unit) => format!("{} {unit}", self.value),
            None => self.value.clone(),
        }
    }
}

/// The six metric cards, always in this order.
pub fn metric_cards(m: &Metrics) -> Vec<MetricCard> {
    vec![
        MetricCard::plain("Total Documents", m.total_documents),
        MetricCard::plain("Documents with Matches", m.documents_with_matches),
        MetricCard::plain("Relevant Passages", m.relevant_passages),
        MetricCard::plain("Average Score", fixed2(m.avg_score)),
        MetricCard::seconds("Search Duration", m.search_duration),
        MetricCard::seconds("Total Duration", m.total_duration),
    ]
}
