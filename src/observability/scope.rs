//! Scoped search tracing.
//!
//! A `SearchScope` logs a begin event on creation, one event per pipeline
//! stage, and a completion event when the search finishes. If the scope is
//! dropped without completing (the error path), the drop handler records the
//! abandonment, so every search trace is closed on every exit path.

use std::cell::Cell;

use super::logger::Logger;

/// A scope that traces one search from begin to completion.
///
/// - `SEARCH_BEGIN` on creation
/// - `SEARCH_STAGE` per pipeline stage via [`SearchScope::stage`]
/// - `SEARCH_COMPLETE` via [`SearchScope::complete`]
/// - `SEARCH_ABORTED` on drop if never completed
pub struct SearchScope<'a> {
    logger: &'a Logger,
    completed: Cell<bool>,
}

impl<'a> SearchScope<'a> {
    /// Opens a scope and logs `SEARCH_BEGIN` with the given fields.
    pub fn begin(logger: &'a Logger, fields: &[(&str, &str)]) -> Self {
        logger.info("SEARCH_BEGIN", fields);
        Self {
            logger,
            completed: Cell::new(false),
        }
    }

    /// Logs the effect of one pipeline stage on the candidate set.
    pub fn stage(&self, stage: &str, before: usize, after: usize) {
        self.logger.info(
            "SEARCH_STAGE",
            &[
                ("stage", stage),
                ("candidates_in", &before.to_string()),
                ("candidates_out", &after.to_string()),
            ],
        );
    }

    /// Logs a stage with an extra detail field (e.g. which filter ran).
    pub fn stage_detail(&self, stage: &str, detail: &str, before: usize, after: usize) {
        self.logger.info(
            "SEARCH_STAGE",
            &[
                ("stage", stage),
                ("detail", detail),
                ("candidates_in", &before.to_string()),
                ("candidates_out", &after.to_string()),
            ],
        );
    }

    /// Closes the scope successfully, logging `SEARCH_COMPLETE`.
    pub fn complete(self, returned: usize) {
        self.completed.set(true);
        self.logger
            .info("SEARCH_COMPLETE", &[("returned", &returned.to_string())]);
    }

    /// Whether the scope has been completed.
    pub fn is_completed(&self) -> bool {
        self.completed.get()
    }
}

impl Drop for SearchScope<'_> {
    fn drop(&mut self) {
        if !self.completed.get() {
            self.logger
                .warn("SEARCH_ABORTED", &[("reason", "scope dropped before completion")]);
        }
    }
}
