//! reqwest-backed client for the QA server.
//!
//! - `GET  {endpoint}/status` — readiness and indexed document count
//! - `POST {endpoint}/ask`    — question in, answers/sources/metrics out
//!
//! Any non-2xx status is an [`ApiError::HttpStatus`]; a body that does not
//! match the expected shape is an [`ApiError::Decode`].

use std::time::Instant;

use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

use crate::api::QaApi;
use crate::config::client_config::QaClientConfig;
use crate::error_handler::{ApiError, QaClientError, Result, make_snippet};
use crate::models::{AnswerResult, AskRequest, Question, StatusReport};

/// Thin client that reuses a single HTTP connection pool.
#[derive(Debug, Clone)]
pub struct QaHttpClient {
    client: reqwest::Client,
    url_status: String,
    url_ask: String,
}

impl QaHttpClient {
    /// Creates a client from the given config.
    ///
    /// # Errors
    /// [`QaClientError::HttpTransport`] if the HTTP client cannot be built.
    pub fn new(cfg: &QaClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(cfg.timeout).build()?;

        debug!(
            endpoint = %cfg.endpoint,
            timeout_secs = cfg.timeout.as_secs(),
            "QaHttpClient initialized"
        );

        Ok(Self {
            client,
            url_status: cfg.status_url(),
            url_ask: cfg.ask_url(),
        })
    }

    /// Checks the status code, then decodes the JSON body.
    async fn decode<T: DeserializeOwned>(resp: reqwest::Response, url: &str) -> Result<T> {
        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            let snippet = make_snippet(&text);
            warn!(%url, %status, %snippet, "QA server returned non-success status");
            return Err(ApiError::HttpStatus {
                status,
                url: url.to_string(),
                snippet,
            }
            .into());
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|e| {
            QaClientError::from(ApiError::Decode {
                url: url.to_string(),
                reason: e.to_string(),
            })
        })
    }
}

impl QaApi for QaHttpClient {
    #[instrument(level = "debug", skip_all)]
    async fn status(&self) -> Result<StatusReport> {
        debug!("GET {}", self.url_status);
        let resp = self.client.get(&self.url_status).send().await?;
        let report: StatusReport = Self::decode(resp, &self.url_status).await?;
        debug!(status = %report.status, document_count = report.document_count, "status received");
        Ok(report)
    }

    #[instrument(skip_all, fields(question_len = question.as_str().len()))]
    async fn ask(&self, question: &Question) -> Result<AnswerResult> {
        let started = Instant::now();
        debug!("POST {}", self.url_ask);

        let body = AskRequest {
            question: question.as_str(),
        };
        // `.json()` also sets `Content-Type: application/json`.
        let resp = self.client.post(&self.url_ask).json(&body).send().await?;
        let answer: AnswerResult = Self::decode(resp, &self.url_ask).await?;

        debug!(
            sources = answer.sources.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "answer received"
        );
        Ok(answer)
    }
}
