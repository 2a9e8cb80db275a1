//! Result types for search execution.

use chrono::NaiveDate;

use crate::store::{ApproachEvent, CelestialObject};

/// One element of a search result: either the object itself or its embedded
/// approach event, depending on the spec's return kind.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchMatch {
    Object(CelestialObject),
    Event(ApproachEvent),
}

impl SearchMatch {
    /// The object's identifier. Events carry no id of their own.
    pub fn id(&self) -> Option<&str> {
        match self {
            SearchMatch::Object(object) => Some(&object.id),
            SearchMatch::Event(_) => None,
        }
    }

    /// The object's name (for events, the owning object's name).
    pub fn name(&self) -> &str {
        match self {
            SearchMatch::Object(object) => &object.name,
            SearchMatch::Event(event) => &event.neo_name,
        }
    }

    /// The approach date (for objects, the embedded snapshot's date).
    pub fn close_approach_date(&self) -> NaiveDate {
        match self {
            SearchMatch::Object(object) => object.close_approach_date,
            SearchMatch::Event(event) => event.close_approach_date,
        }
    }

    /// The miss distance in kilometers.
    pub fn miss_distance_km(&self) -> f64 {
        match self {
            SearchMatch::Object(object) => object.miss_distance_km,
            SearchMatch::Event(event) => event.miss_distance_km,
        }
    }
}

/// Result of one search, in final order.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Matches after filtering, projection and truncation
    pub matches: Vec<SearchMatch>,
    /// Candidates produced by date selection, before filtering
    pub scanned_count: usize,
    /// Whether the limit cut the sequence short
    pub limit_applied: bool,
}

impl SearchOutcome {
    /// An outcome with no matches (the documented no-match policies).
    pub fn empty() -> Self {
        Self {
            matches: Vec::new(),
            scanned_count: 0,
            limit_applied: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SearchMatch> {
        self.matches.iter()
    }
}
