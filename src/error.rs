//! Structured error types for the export run, built with `thiserror`.
//!
//! Malformed field values never appear here: they are recovered at the
//! ingestion boundary (normalized to "Unknown" or skip-and-count) and never
//! abort the run. Everything below is fatal and propagates to `main`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// The record source path is missing or unreadable.
    #[error("cannot read record source {path}: {source}")]
    SourceUnavailable {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The output path cannot be written (covers the temp file and the final
    /// rename over the destination).
    #[error("cannot write output {path}: {source}")]
    OutputWrite {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Report serialization failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
