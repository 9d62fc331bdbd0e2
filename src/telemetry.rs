//! Tracing subscriber set-up for the `qscore` binary
//!
//! The library only emits events; installing a subscriber is the binary's job.

use thiserror::Error;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

/// Used when neither `RUST_LOG` nor `--log-level` is given
pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Error)]
pub enum TelemetryError {
    #[error("invalid log level/filter '{value}': unable to build EnvFilter")]
    EnvFilter {
        value: String,
        #[source]
        source: ParseError,
    },

    #[error("telemetry error: {0}")]
    Subscriber(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Filter from `RUST_LOG` when set, otherwise from `log_level`
pub fn env_filter(log_level: &str) -> Result<EnvFilter, TelemetryError> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(log_level).map_err(|source| TelemetryError::EnvFilter {
            value: log_level.to_string(),
            source,
        }),
    }
}

/// Install a compact fmt subscriber on stderr so `--json` stdout stays clean
pub fn init(log_level: &str, ansi: bool) -> Result<(), TelemetryError> {
    let filter = env_filter(log_level)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .with_ansi(ansi)
        .try_init()
        .map_err(TelemetryError::Subscriber)
}
