//! Query validation error types.
//!
//! Error codes:
//! - NEO_QUERY_INVALID_RETURN_TYPE (REJECT)
//! - NEO_QUERY_INVALID_LIMIT (REJECT)
//! - NEO_QUERY_INVALID_DATE (REJECT)
//! - NEO_QUERY_CONFLICTING_DATE_SELECTORS (REJECT)
//! - NEO_QUERY_MALFORMED_FILTER (REJECT)
//! - NEO_QUERY_UNKNOWN_FILTER_FIELD (REJECT)
//! - NEO_QUERY_INVALID_FILTER_VALUE (REJECT)
//!
//! All query errors reject the request before or during a search; none are
//! recoverable mid-search.

use std::fmt;

/// Result type for query construction and filter evaluation.
pub type QueryResult<T> = Result<T, QueryError>;

/// Query-specific error codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryErrorCode {
    /// Return-kind token not one of the recognized set
    InvalidReturnType,
    /// Limit did not parse as a non-negative integer
    InvalidLimit,
    /// Date selector did not parse as an ISO-8601 calendar date
    InvalidDate,
    /// Both a single-date selector and a range selector were supplied
    ConflictingDateSelectors,
    /// Filter expression was not three colon-separated parts
    MalformedFilterExpression,
    /// Filter named a field outside the filterable set
    UnknownFilterField,
    /// Filter literal did not parse for the field's type
    InvalidFilterValue,
}

impl QueryErrorCode {
    /// The stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            QueryErrorCode::InvalidReturnType => "NEO_QUERY_INVALID_RETURN_TYPE",
            QueryErrorCode::InvalidLimit => "NEO_QUERY_INVALID_LIMIT",
            QueryErrorCode::InvalidDate => "NEO_QUERY_INVALID_DATE",
            QueryErrorCode::ConflictingDateSelectors => "NEO_QUERY_CONFLICTING_DATE_SELECTORS",
            QueryErrorCode::MalformedFilterExpression => "NEO_QUERY_MALFORMED_FILTER",
            QueryErrorCode::UnknownFilterField => "NEO_QUERY_UNKNOWN_FILTER_FIELD",
            QueryErrorCode::InvalidFilterValue => "NEO_QUERY_INVALID_FILTER_VALUE",
        }
    }
}

impl fmt::Display for QueryErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Query error with message and optional offending input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryError {
    code: QueryErrorCode,
    message: String,
    /// The parameter or expression fragment that failed, if applicable
    input: Option<String>,
}

impl QueryError {
    pub fn new(code: QueryErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            input: None,
        }
    }

    /// Attaches the offending input fragment.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    pub fn invalid_return_type(token: impl Into<String>) -> Self {
        let token = token.into();
        Self::new(
            QueryErrorCode::InvalidReturnType,
            format!("unrecognized return kind '{}'", token),
        )
        .with_input(token)
    }

    pub fn invalid_limit(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::new(
            QueryErrorCode::InvalidLimit,
            format!("limit must be a non-negative integer, got '{}'", raw),
        )
        .with_input(raw)
    }

    pub fn invalid_date(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::new(
            QueryErrorCode::InvalidDate,
            format!("'{}' is not an ISO-8601 calendar date", raw),
        )
        .with_input(raw)
    }

    pub fn conflicting_date_selectors() -> Self {
        Self::new(
            QueryErrorCode::ConflictingDateSelectors,
            "a query may use a single date or a date range, not both",
        )
    }

    pub fn malformed_filter(expr: impl Into<String>) -> Self {
        let expr = expr.into();
        Self::new(
            QueryErrorCode::MalformedFilterExpression,
            format!(
                "filter expression '{}' is not of the form field:operator:value",
                expr
            ),
        )
        .with_input(expr)
    }

    pub fn unknown_filter_field(field: impl Into<String>) -> Self {
        let field = field.into();
        Self::new(
            QueryErrorCode::UnknownFilterField,
            format!("'{}' is not a filterable field", field),
        )
        .with_input(field)
    }

    pub fn invalid_filter_value(field: &str, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        Self::new(
            QueryErrorCode::InvalidFilterValue,
            format!("'{}' is not a valid value for filter field '{}'", raw, field),
        )
        .with_input(raw)
    }

    pub fn code(&self) -> QueryErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn input(&self) -> Option<&str> {
        self.input.as_deref()
    }
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for QueryError {}
