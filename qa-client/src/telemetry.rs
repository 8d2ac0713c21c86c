//! Log formatting shared by the QA client binaries.

use std::io::{self, IsTerminal};

use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, Layer, fmt};

/// RFC3339 UTC timer implemented via `chrono`.
/// Example output: `2025-09-12T10:20:30Z`
#[derive(Clone, Debug, Default)]
struct ChronoRfc3339Utc;

impl FormatTime for ChronoRfc3339Utc {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        let now = chrono::Utc::now();
        let s = now.to_rfc3339_opts(chrono::SecondsFormat::Secs, true);
        w.write_str(&s)
    }
}

/// Build a compact formatting layer that writes to **stderr**.
///
/// - RFC3339 UTC timestamps
/// - target (module path) and level
/// - ANSI colors only when stderr is a terminal
///
/// stdout is left to the page renderer, so log lines never interleave with it.
pub fn layer<S>() -> impl Layer<S> + Send + Sync
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    let use_ansi = io::stderr().is_terminal();

    fmt::layer()
        .compact()
        .with_writer(io::stderr)
        .with_timer(ChronoRfc3339Utc)
        .with_level(true)
        .with_target(true)
        .with_ansi(use_ansi)
}

/// `EnvFilter` from `RUST_LOG`, or `default` when it is unset or invalid.
pub fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn layer_and_filter_compose_into_a_subscriber() {
        let subscriber = tracing_subscriber::registry()
            .with(env_filter("qa_client=debug"))
            .with(layer());
        tracing::subscriber::with_default(subscriber, || {
            tracing::debug!(target: "qa_client", "telemetry smoke line");
        });
    }

    #[test]
    fn timer_writes_rfc3339_utc() {
        let mut out = String::new();
        ChronoRfc3339Utc
            .format_time(&mut Writer::new(&mut out))
            .unwrap();
        assert!(out.ends_with('Z'), "{out}");
        assert!(chrono::DateTime::parse_from_rfc3339(&out).is_ok(), "{out}");
    }
}
