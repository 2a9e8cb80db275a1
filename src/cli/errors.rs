//! CLI-specific error types.
//!
//! The CLI surfaces the underlying error codes unchanged; every variant
//! prints to stderr and exits non-zero.

use std::io;

use thiserror::Error;

use crate::ingest::IngestError;
use crate::query::QueryError;
use crate::search::SearchError;

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Query(#[from] QueryError),

    #[error("{0}")]
    Search(#[from] SearchError),

    #[error("{0}")]
    Ingest(#[from] IngestError),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}
