//! Error taxonomy for pull runs.
//!
//! A run fails with at most one fatal error; everything else (missing
//! destination files, optional artifacts without a configured path) is
//! reported and skipped without unwinding the pipeline.

use thiserror::Error;

/// Fatal errors that abort the whole pull.
#[derive(Debug, Error)]
pub enum PullError {
    /// The remote service answered with a non-success status.
    #[error("{message} ({code})")]
    Remote { message: String, code: String },

    /// A required destination path could not be resolved for a language.
    #[error("undefined path for language '{language}'")]
    UndefinedPath { language: String },

    /// The exported payload is not a valid translation catalog.
    #[error("failed to parse payload for '{language}': {source}")]
    Payload {
        language: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("request to the remote service failed")]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
