//! Wire types for `/status` and `/ask`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Status value the server reports once its index is loaded.
pub const READY_STATUS: &str = "ready";

/// Response payload for `GET /status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusReport {
    /// `"ready"` once the index is loaded, anything else while initializing.
    pub status: String,
    /// Number of distinct indexed documents (0 while initializing).
    #[serde(default)]
    pub document_count: u64,
}

impl StatusReport {
    pub fn is_ready(&self) -> bool {
        self.status == READY_STATUS
    }
}

/// A trimmed, non-empty user question.
///
/// The only way to build one is [`Question::parse`], so an empty question can
/// never reach the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question(String);

impl Question {
    /// Trims `raw`; returns `None` when nothing is left.
    ///
    /// ```
    /// use qa_client::Question;
    ///
    /// assert!(Question::parse(" \t\n").is_none());
    /// assert_eq!(Question::parse("  why?  ").unwrap().as_str(), "why?");
    /// ```
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Request payload for `POST /ask`.
#[derive(Debug, Serialize)]
pub struct AskRequest<'a> {
    /// Natural language question.
    pub question: &'a str,
}

/// Response payload for `POST /ask`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerResult {
    /// Echo of the processed question; older servers omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
    /// Answer synthesized from the retrieved passages.
    pub source_based_summary: String,
    /// Answer from the model without retrieval context.
    pub general_answer: String,
    /// Retrieved passages, best first.
    pub sources: Vec<Source>,
    /// Request statistics.
    pub metrics: Metrics,
}

/// One retrieved passage with its provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    /// Path of the document on the server.
    pub file: String,
    /// Page number or page label.
    pub page: PageRef,
    /// Relevance score.
    pub score: f64,
    /// Passage text.
    pub text: String,
}

impl Source {
    /// Trailing path segment of [`Source::file`] (everything after the last `/`).
    ///
    /// ```
    /// use qa_client::{PageRef, Source};
    ///
    /// let s = Source { file: "docs/2024/a.pdf".into(), page: PageRef::Number(1), score: 0.5, text: String::new() };
    /// assert_eq!(s.file_name(), "a.pdf");
    /// ```
    pub fn file_name(&self) -> &str {
        self.file.rsplit('/').next().unwrap_or(&self.file)
    }
}

/// Page reference as sent by the server.
///
/// PDF loaders report either a numeric page or a printed label such as `"iv"`;
/// the server falls back to `"Unknown"` when neither exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageRef {
    Number(u64),
    Label(String),
}

impl fmt::Display for PageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageRef::Number(n) => write!(f, "{n}"),
            PageRef::Label(s) => f.write_str(s),
        }
    }
}

/// Summary statistics of a single ask request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub total_documents: u64,
    pub documents_with_matches: u64,
    /// Sent by the server but not rendered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub documents_with_no_matches: Option<u64>,
    pub relevant_passages: u64,
    pub avg_score: f64,
    /// Seconds spent in retrieval.
    pub search_duration: f64,
    /// Seconds spent on the whole request server-side.
    pub total_duration: f64,
}
