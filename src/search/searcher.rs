//! Search orchestrator.
//!
//! Execution flow (strict order):
//! 1. Date selection against the store's date index
//! 2. Predicate filtering, one condition at a time, in supply order
//! 3. Projection to the requested return kind
//! 4. Truncation to the requested count
//!
//! The scoped trace logs search begin, every stage's effect on the
//! candidate set, and search end on every exit path, including aborts.

use crate::observability::{Logger, SearchScope};
use crate::query::{DateSelection, FilterCondition, QuerySpec, ReturnKind};
use crate::store::{CelestialObject, RecordStore};

use super::errors::{SearchError, SearchResult};
use super::result::{SearchMatch, SearchOutcome};

/// Executes validated query specs against a read-only record store.
pub struct Searcher<'a> {
    store: &'a RecordStore,
    logger: &'a Logger,
}

impl<'a> Searcher<'a> {
    /// Creates a searcher over a store with an injected logger.
    pub fn new(store: &'a RecordStore, logger: &'a Logger) -> Self {
        Self { store, logger }
    }

    /// Runs one search. Deterministic: same store + same spec = same result.
    ///
    /// A filter failure aborts the whole search; no partial results are
    /// returned. A half range or a missing date selector yields an empty
    /// outcome by policy, not an error.
    pub fn search(&self, spec: &QuerySpec) -> SearchResult<SearchOutcome> {
        let selection = spec.date_selection();
        let scope = SearchScope::begin(
            self.logger,
            &[
                ("mode", selection_name(selection)),
                ("return_kind", spec.return_kind().as_str()),
                ("filters", &spec.filters().len().to_string()),
            ],
        );

        // Step 1: date selection
        let total = self.store.record_count();
        let mut candidates: Vec<&CelestialObject> = match selection {
            DateSelection::Equals(date) => self.store.lookup_by_date(date),
            DateSelection::Range(start, end) => self.store.objects_in_date_range(start, end),
            // Documented no-match policies, not errors
            DateSelection::HalfRange | DateSelection::Unselected => Vec::new(),
        };
        let scanned_count = candidates.len();
        scope.stage("date_selection", total, scanned_count);

        // Step 2: predicate filtering, in supply order
        for expr in spec.filters() {
            let condition = FilterCondition::parse(expr)
                .map_err(|source| SearchError::filter(expr, source))?;
            let before = candidates.len();
            candidates = condition.apply(candidates);
            scope.stage_detail("filter", &condition.to_string(), before, candidates.len());
        }

        // Step 3: projection
        let mut matches: Vec<SearchMatch> = match spec.return_kind() {
            ReturnKind::Object => candidates
                .into_iter()
                .map(|object| SearchMatch::Object(object.clone()))
                .collect(),
            ReturnKind::Event => candidates
                .into_iter()
                .map(|object| SearchMatch::Event(object.approach_event()))
                .collect(),
        };

        // Step 4: truncation, prefix-stable
        let before = matches.len();
        let limit_applied = spec.limit().is_some_and(|limit| matches.len() > limit);
        if let Some(limit) = spec.limit() {
            matches.truncate(limit);
        }
        scope.stage("truncation", before, matches.len());

        scope.complete(matches.len());
        Ok(SearchOutcome {
            matches,
            scanned_count,
            limit_applied,
        })
    }
}

fn selection_name(selection: DateSelection) -> &'static str {
    match selection {
        DateSelection::Equals(_) => "equals",
        DateSelection::Range(_, _) => "range",
        DateSelection::HalfRange => "half_range",
        DateSelection::Unselected => "unselected",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::{QueryErrorCode, QueryParams};
    use serde_json::json;

    fn store_with(rows: Vec<serde_json::Value>) -> RecordStore {
        let mut store = RecordStore::new();
        store.index_all(rows, &Logger::silent());
        store
    }

    fn row(id: &str, name: &str, date: &str, diameter: &str, hazardous: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "estimated_diameter_min_kilometers": diameter,
            "is_potentially_hazardous_asteroid": hazardous,
            "close_approach_date": date,
            "miss_distance_kilometers": "1000.0",
        })
    }

    fn search(store: &RecordStore, params: QueryParams) -> SearchResult<SearchOutcome> {
        let logger = Logger::silent();
        let spec = QuerySpec::build(params).unwrap();
        Searcher::new(store, &logger).search(&spec)
    }

    #[test]
    fn test_equals_mode_returns_that_date_only() {
        let store = store_with(vec![
            row("1", "a", "2020-01-01", "0.5", "True"),
            row("2", "b", "2020-01-02", "0.5", "True"),
        ]);

        let outcome = search(&store, QueryParams::new().with_date("2020-01-01")).unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.matches[0].name(), "a");
    }

    #[test]
    fn test_no_date_selector_is_empty() {
        let store = store_with(vec![row("1", "a", "2020-01-01", "0.5", "True")]);
        let outcome = search(&store, QueryParams::new()).unwrap();
        assert!(outcome.is_empty());
    }

    #[test]
    fn test_half_range_is_empty() {
        let store = store_with(vec![row("1", "a", "2020-01-01", "0.5", "True")]);
        let outcome =
            search(&store, QueryParams::new().with_start_date("2020-01-01")).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(outcome.scanned_count, 0);
    }

    #[test]
    fn test_range_ascending_union() {
        let store = store_with(vec![
            row("3", "late", "2020-01-03", "0.5", "True"),
            row("1", "early", "2020-01-01", "0.5", "True"),
            row("9", "out", "2020-02-01", "0.5", "True"),
        ]);

        let outcome = search(
            &store,
            QueryParams::new()
                .with_start_date("2020-01-01")
                .with_end_date("2020-01-31"),
        )
        .unwrap();
        let names: Vec<&str> = outcome.iter().map(SearchMatch::name).collect();
        assert_eq!(names, vec!["early", "late"]);
    }

    #[test]
    fn test_filters_applied_in_order_before_truncation() {
        let store = store_with(vec![
            row("1", "small", "2020-01-01", "0.1", "True"),
            row("2", "big-safe", "2020-01-01", "0.9", "False"),
            row("3", "big-hazard", "2020-01-01", "0.9", "True"),
        ]);

        let outcome = search(
            &store,
            QueryParams::new()
                .with_date("2020-01-01")
                .with_filter("diameter:>=:0.5")
                .with_filter("is_hazardous:==:true")
                .with_limit("5"),
        )
        .unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.matches[0].name(), "big-hazard");
        assert!(!outcome.limit_applied);
    }

    #[test]
    fn test_filter_error_aborts_whole_search() {
        let store = store_with(vec![row("1", "a", "2020-01-01", "0.5", "True")]);

        let err = search(
            &store,
            QueryParams::new()
                .with_date("2020-01-01")
                .with_filter("bogus:>=:1"),
        )
        .unwrap_err();
        assert_eq!(err.query_error().code(), QueryErrorCode::UnknownFilterField);
    }

    #[test]
    fn test_truncation_keeps_first_ingested() {
        let store = store_with(vec![
            row("1", "first", "2020-01-01", "0.5", "True"),
            row("2", "second", "2020-01-01", "0.5", "True"),
        ]);

        let outcome = search(
            &store,
            QueryParams::new().with_date("2020-01-01").with_limit("1"),
        )
        .unwrap();
        assert_eq!(outcome.len(), 1);
        assert_eq!(outcome.matches[0].name(), "first");
        assert!(outcome.limit_applied);
    }

    #[test]
    fn test_event_projection() {
        let store = store_with(vec![row("1", "a", "2020-01-01", "0.5", "True")]);

        let outcome = search(
            &store,
            QueryParams::new()
                .with_date("2020-01-01")
                .with_return_kind("event"),
        )
        .unwrap();
        assert_eq!(outcome.len(), 1);
        let m = &outcome.matches[0];
        assert_eq!(m.id(), None);
        assert_eq!(m.name(), "a");
        assert_eq!(m.miss_distance_km(), 1000.0);
    }

    #[test]
    fn test_limit_zero_returns_nothing() {
        let store = store_with(vec![row("1", "a", "2020-01-01", "0.5", "True")]);

        let outcome = search(
            &store,
            QueryParams::new().with_date("2020-01-01").with_limit("0"),
        )
        .unwrap();
        assert!(outcome.is_empty());
        assert!(outcome.limit_applied);
    }
}
