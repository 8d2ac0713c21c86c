//! Client configuration loaded from environment variables.
//!
//! # Environment variables
//!
//! - `QA_SERVER_URL`       = base URL of the QA server (default `http://127.0.0.1:5000`)
//! - `QA_TIMEOUT_SECS`     = per-request timeout in seconds (default `120`)
//! - `QA_POLL_INTERVAL_MS` = status poll interval in milliseconds (default `5000`)

use std::time::Duration;

use crate::error_handler::{
    ConfigError, QaClientError, env_opt, env_opt_u64, validate_http_endpoint,
};

/// Default server address; matches the port the QA web app listens on.
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
/// Answer synthesis runs two LLM calls server-side, so keep this generous.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;
/// Interval between `/status` checks until the server reports ready.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 5000;

/// Connection and polling settings for [`crate::QaHttpClient`] and the UI controller.
///
/// # Examples
///
/// ```
/// use qa_client::QaClientConfig;
///
/// let cfg = QaClientConfig::new("http://localhost:5000/").unwrap();
/// assert_eq!(cfg.endpoint, "http://localhost:5000");
/// assert_eq!(cfg.poll_interval.as_millis(), 5000);
/// ```
#[derive(Debug, Clone)]
pub struct QaClientConfig {
    /// Base URL without trailing slash (e.g., `http://127.0.0.1:5000`).
    pub endpoint: String,

    /// Timeout applied to every request.
    pub timeout: Duration,

    /// Delay between two `/status` checks while the server is not ready.
    pub poll_interval: Duration,
}

impl QaClientConfig {
    /// Builds a config for `endpoint` with default timeout and poll interval.
    ///
    /// # Errors
    /// [`ConfigError::InvalidFormat`] if `endpoint` is not an http(s) URL.
    pub fn new(endpoint: impl Into<String>) -> Result<Self, QaClientError> {
        let endpoint = endpoint.into();
        let endpoint = endpoint.trim().trim_end_matches('/').to_string();
        validate_http_endpoint("QA_SERVER_URL", &endpoint)?;

        Ok(Self {
            endpoint,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
        })
    }

    /// Overrides the poll interval.
    ///
    /// # Errors
    /// [`ConfigError::OutOfRange`] for a zero interval (tokio intervals reject it).
    pub fn with_poll_interval(mut self, interval: Duration) -> Result<Self, QaClientError> {
        if interval.is_zero() {
            return Err(ConfigError::OutOfRange {
                field: "poll_interval",
                detail: "expected a non-zero duration",
            }
            .into());
        }
        self.poll_interval = interval;
        Ok(self)
    }

    /// Overrides the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Loads the config from the environment, falling back to defaults.
    ///
    /// # Errors
    /// - [`ConfigError::InvalidFormat`] if `QA_SERVER_URL` is not http(s)
    /// - [`ConfigError::InvalidNumber`] if a numeric variable does not parse
    /// - [`ConfigError::OutOfRange`] if `QA_POLL_INTERVAL_MS` is `0`
    pub fn from_env() -> Result<Self, QaClientError> {
        let endpoint = env_opt("QA_SERVER_URL").unwrap_or_else(|| DEFAULT_SERVER_URL.into());
        let timeout = env_opt_u64("QA_TIMEOUT_SECS")?.unwrap_or(DEFAULT_TIMEOUT_SECS);
        let poll_ms = env_opt_u64("QA_POLL_INTERVAL_MS")?.unwrap_or(DEFAULT_POLL_INTERVAL_MS);

        Self::new(endpoint)?
            .with_poll_interval(Duration::from_millis(poll_ms))
            .map(|cfg| cfg.with_timeout(Duration::from_secs(timeout)))
    }

    /// Full URL of the readiness endpoint.
    pub fn status_url(&self) -> String {
        format!("{}/status", self.endpoint)
    }

    /// Full URL of the question endpoint.
    pub fn ask_url(&self) -> String {
        format!("{}/ask", self.endpoint)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_trimmed_and_urls_built() {
        let cfg = QaClientConfig::new(" http://qa.local:5000/ ").unwrap();
        assert_eq!(cfg.status_url(), "http://qa.local:5000/status");
        assert_eq!(cfg.ask_url(), "http://qa.local:5000/ask");
    }

    #[test]
    fn zero_poll_interval_is_rejected() {
        let err = QaClientConfig::new(DEFAULT_SERVER_URL)
            .unwrap()
            .with_poll_interval(Duration::ZERO)
            .unwrap_err();
        assert!(matches!(
            err,
            QaClientError::Config(ConfigError::OutOfRange { field: "poll_interval", .. })
        ));
    }

    #[test]
    fn missing_scheme_is_rejected() {
        assert!(QaClientConfig::new("qa.local:5000").is_err());
    }
}
