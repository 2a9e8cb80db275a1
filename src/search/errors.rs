//! Search execution error types.
//!
//! The only runtime failure inside a search is a filter expression that
//! cannot be built or evaluated. Query validation failures happen earlier,
//! in `QuerySpec::build`, before a search ever starts.

use std::fmt;

use crate::query::QueryError;

/// Result type for search execution.
pub type SearchResult<T> = Result<T, SearchError>;

/// Search failure. Aborts the search; no partial results are returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// A filter expression failed during predicate construction
    Filter {
        /// The raw expression that failed
        expression: String,
        /// The underlying query error
        source: QueryError,
    },
}

impl SearchError {
    pub fn filter(expression: impl Into<String>, source: QueryError) -> Self {
        SearchError::Filter {
            expression: expression.into(),
            source,
        }
    }

    /// The underlying query error.
    pub fn query_error(&self) -> &QueryError {
        match self {
            SearchError::Filter { source, .. } => source,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::Filter { expression, source } => {
                write!(f, "search aborted on filter '{}': {}", expression, source)
            }
        }
    }
}

impl std::error::Error for SearchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SearchError::Filter { source, .. } => Some(source),
        }
    }
}
