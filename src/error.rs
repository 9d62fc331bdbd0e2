//! Errors for loading payloads and setting up the binary
//!
//! Scoring itself cannot fail; only the edges around it can.

use std::path::PathBuf;

use thiserror::Error;

use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid --as-of date '{0}': expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("failed to serialize report: {0}")]
    Output(#[source] serde_json::Error),

    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
}

pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_offending_input() {
        let err = CliError::Io {
            path: PathBuf::from("missing.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert_eq!(err.to_string(), "failed to read missing.json: not found");

        let err = CliError::InvalidDate("tomorrow".into());
        assert!(err.to_string().contains("'tomorrow'"));
    }
}
