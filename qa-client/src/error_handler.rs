//! Unified error handling for `qa-client`.
//!
//! This module exposes a single top-level error type [`QaClientError`] for the
//! whole library, and groups domain-specific errors in nested enums
//! ([`ConfigError`], [`ApiError`]). Small helpers for reading/validating
//! environment variables are provided and return the unified [`Result<T>`] alias.
//!
//! All messages include the prefix `[QA Client]` to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, QaClientError>;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `qa-client` crate.
///
/// Variants wrap the config and API sub-enums plus the raw HTTP transport
/// failure. The UI treats every variant of a request failure the same way;
/// the distinction only matters for logs.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum QaClientError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Non-success status or undecodable payload from the QA server.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Underlying HTTP transport error (connection refused, timeout, ...).
    #[error("[QA Client] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A number failed to parse (timeouts, intervals).
    #[error("[QA Client] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `QA_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[QA Client] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `QA_SERVER_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// A numeric field was outside of the allowed range.
    #[error("[QA Client] {field} is out of range: {detail}")]
    OutOfRange {
        /// Field name (e.g., `poll_interval`).
        field: &'static str,
        /// Description of the expected range.
        detail: &'static str,
    },
}

/* ------------------------------------------------------------------------- */
/* API errors                                                                */
/* ------------------------------------------------------------------------- */

/// Errors produced while talking to `/status` and `/ask`.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ApiError {
    /// Server returned a non-successful HTTP status.
    #[error("[QA Client] HTTP {status} from {url}: {snippet}")]
    HttpStatus {
        /// HTTP status code.
        status: StatusCode,
        /// Request URL.
        url: String,
        /// Short snippet of the response body (trimmed).
        snippet: String,
    },

    /// Response payload could not be decoded as expected.
    #[error("[QA Client] decode error from {url}: {reason}")]
    Decode {
        /// Request URL.
        url: String,
        /// Underlying serde message.
        reason: String,
    },
}

/// Maximum number of characters kept from an error body.
const SNIPPET_MAX_CHARS: usize = 240;

/// Collapses whitespace and cuts a response body down to a log-friendly snippet.
pub fn make_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= SNIPPET_MAX_CHARS {
        flat
    } else {
        let mut cut: String = flat.chars().take(SNIPPET_MAX_CHARS).collect();
        cut.push('…');
        cut
    }
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Reads an optional, non-empty environment variable (`None` if unset/blank).
pub fn env_opt(name: &'static str) -> Option<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Some(v.trim().to_string()),
        _ => None,
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`QaClientError::Config`] with [`ConfigError::InvalidNumber`] if the
/// variable is set but not a valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match env_opt(name) {
        Some(v) => v.parse::<u64>().map(Some).map_err(|_| {
            QaClientError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        None => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation helpers                                                        */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`QaClientError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snippet_flattens_and_truncates() {
        assert_eq!(make_snippet("  {\"error\":\n  \"No question provided\"}  "), "{\"error\": \"No question provided\"}");

        let long = "x".repeat(500);
        let s = make_snippet(&long);
        assert_eq!(s.chars().count(), SNIPPET_MAX_CHARS + 1);
        assert!(s.ends_with('…'));
    }

    #[test]
    fn endpoint_scheme_is_checked() {
        assert!(validate_http_endpoint("QA_SERVER_URL", "http://localhost:5000").is_ok());
        assert!(validate_http_endpoint("QA_SERVER_URL", "https://qa.example").is_ok());
        let err = validate_http_endpoint("QA_SERVER_URL", "localhost:5000").unwrap_err();
        assert!(matches!(
            err,
            QaClientError::Config(ConfigError::InvalidFormat { var: "QA_SERVER_URL", .. })
        ));
    }
}
