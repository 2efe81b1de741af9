//! Harness error type.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("failed to read fixture file {path}: {source}")]
    FixtureRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse fixture JSON: {0}")]
    FixtureParse(#[from] serde_json::Error),

    #[error("unsupported fixture schema version {found} (expected {expected})")]
    SchemaVersion { found: String, expected: String },

    #[error("failed to write report {path}: {source}")]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
