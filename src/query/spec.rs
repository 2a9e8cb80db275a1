//! Query specification: raw parameters normalized into an immutable spec.
//!
//! `QuerySpec::build` is pure: no I/O, no store lookups. It fails fast on
//! the first invalid parameter so a search never starts from a partially
//! valid spec. Filter expressions stay raw strings here;
//! they are parsed into predicates at application time.

use chrono::NaiveDate;

use super::errors::{QueryError, QueryResult};

/// Which entity kind a search returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKind {
    /// The celestial objects themselves
    #[default]
    Object,
    /// The embedded approach events of the surviving objects
    Event,
}

impl ReturnKind {
    /// Parses a return-kind token (ASCII case-insensitive).
    pub fn parse(token: &str) -> QueryResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "object" => Ok(ReturnKind::Object),
            "event" => Ok(ReturnKind::Event),
            _ => Err(QueryError::invalid_return_type(token.trim())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReturnKind::Object => "object",
            ReturnKind::Event => "event",
        }
    }
}

/// The active date-selection mode of a validated spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateSelection {
    /// Single-date lookup
    Equals(NaiveDate),
    /// Inclusive range scan
    Range(NaiveDate, NaiveDate),
    /// Exactly one half of the range pair was supplied: documented no-match
    HalfRange,
    /// No date selector at all: documented no-match
    Unselected,
}

/// Raw query parameters as supplied by the caller.
///
/// Everything is text at this level; `QuerySpec::build` does the parsing.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pub date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub limit: Option<String>,
    pub filters: Vec<String>,
    pub return_kind: Option<String>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_start_date(mut self, date: impl Into<String>) -> Self {
        self.start_date = Some(date.into());
        self
    }

    pub fn with_end_date(mut self, date: impl Into<String>) -> Self {
        self.end_date = Some(date.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn with_filter(mut self, expr: impl Into<String>) -> Self {
        self.filters.push(expr.into());
        self
    }

    pub fn with_return_kind(mut self, kind: impl Into<String>) -> Self {
        self.return_kind = Some(kind.into());
        self
    }
}

/// Validated, immutable query descriptor.
#[derive(Debug, Clone, PartialEq)]
pub struct QuerySpec {
    date_equals: Option<NaiveDate>,
    date_start: Option<NaiveDate>,
    date_end: Option<NaiveDate>,
    filters: Vec<String>,
    limit: Option<usize>,
    return_kind: ReturnKind,
}

impl QuerySpec {
    /// Normalizes raw parameters into a spec.
    ///
    /// Validation rules:
    /// - `return_kind` defaults to Object; unrecognized tokens reject
    /// - `limit` must parse as a non-negative integer
    /// - date selectors must parse as ISO-8601 calendar dates
    /// - a single date and a range (even a partial one) may not be combined
    /// - filter expressions stay raw; their structure is checked when the
    ///   predicates are built
    pub fn build(params: QueryParams) -> QueryResult<QuerySpec> {
        let return_kind = match &params.return_kind {
            Some(token) => ReturnKind::parse(token)?,
            None => ReturnKind::default(),
        };

        let limit = match &params.limit {
            Some(raw) => {
                let parsed = raw
                    .trim()
                    .parse::<usize>()
                    .map_err(|_| QueryError::invalid_limit(raw.trim()))?;
                Some(parsed)
            }
            None => None,
        };

        if params.date.is_some() && (params.start_date.is_some() || params.end_date.is_some()) {
            return Err(QueryError::conflicting_date_selectors());
        }

        let date_equals = parse_date_opt(&params.date)?;
        let date_start = parse_date_opt(&params.start_date)?;
        let date_end = parse_date_opt(&params.end_date)?;

        Ok(QuerySpec {
            date_equals,
            date_start,
            date_end,
            filters: params.filters,
            limit,
            return_kind,
        })
    }

    /// The active date-selection mode.
    pub fn date_selection(&self) -> DateSelection {
        match (self.date_equals, self.date_start, self.date_end) {
            (Some(date), _, _) => DateSelection::Equals(date),
            (None, Some(start), Some(end)) => DateSelection::Range(start, end),
            (None, Some(_), None) | (None, None, Some(_)) => DateSelection::HalfRange,
            (None, None, None) => DateSelection::Unselected,
        }
    }

    /// Raw filter expressions in supply order.
    pub fn filters(&self) -> &[String] {
        &self.filters
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn return_kind(&self) -> ReturnKind {
        self.return_kind
    }
}

fn parse_date_opt(raw: &Option<String>) -> QueryResult<Option<NaiveDate>> {
    match raw {
        Some(text) => text
            .trim()
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(|_| QueryError::invalid_date(text.trim())),
        None => Ok(None),
    }
}
