//! Ingestion error types.
//!
//! These are store-wide, fatal conditions. A single malformed row is not an
//! ingestion error; the store skips it with a warning.

use thiserror::Error;

/// Result type for ingestion operations.
pub type IngestResult<T> = Result<T, IngestError>;

/// Ingestion errors.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("cannot load data, no filename provided")]
    NoFilenameProvided,

    #[error("cannot read source file '{path}': {reason}")]
    SourceUnreadable { path: String, reason: String },

    #[error("source file '{path}' has no header row")]
    MissingHeader { path: String },
}

impl IngestError {
    /// The stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            IngestError::NoFilenameProvided => "NEO_INGEST_NO_FILENAME",
            IngestError::SourceUnreadable { .. } => "NEO_INGEST_SOURCE_UNREADABLE",
            IngestError::MissingHeader { .. } => "NEO_INGEST_MISSING_HEADER",
        }
    }
}
