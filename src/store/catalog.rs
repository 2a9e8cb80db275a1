//! The record store: arena of typed records plus the date and name indexes.
//!
//! Built once from ingestion rows, then read-only. The store has no removal
//! operation; later rows for a recurring name overwrite the name entry, and
//! malformed rows are skipped with a warning rather than aborting the load.

use chrono::NaiveDate;
use serde_json::Value;

use crate::observability::Logger;

use super::index::{DateIndex, NameIndex, Slot};
use super::record::CelestialObject;

/// Counts reported by one ingestion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IngestSummary {
    /// Rows that became indexed records
    pub indexed: usize,
    /// Rows skipped as malformed
    pub skipped: usize,
}

/// In-memory store of close-approach records.
#[derive(Debug, Default)]
pub struct RecordStore {
    objects: Vec<CelestialObject>,
    by_date: DateIndex,
    by_name: NameIndex,
}

impl RecordStore {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            by_date: DateIndex::new(),
            by_name: NameIndex::new(),
        }
    }

    /// Builds the indexes from raw attribute mappings, one per approach
    /// event. Malformed rows are skipped and logged at WARN; they never
    /// abort ingestion.
    pub fn index_all<I>(&mut self, rows: I, logger: &Logger) -> IngestSummary
    where
        I: IntoIterator<Item = Value>,
    {
        let mut summary = IngestSummary {
            indexed: 0,
            skipped: 0,
        };

        for (row_number, row) in rows.into_iter().enumerate() {
            match CelestialObject::from_row(&row) {
                Ok(object) => {
                    self.insert(object);
                    summary.indexed += 1;
                }
                Err(err) => {
                    logger.warn(
                        "ROW_SKIPPED",
                        &[
                            ("row", &row_number.to_string()),
                            ("reason", &err.to_string()),
                        ],
                    );
                    summary.skipped += 1;
                }
            }
        }

        logger.info(
            "INGEST_COMPLETE",
            &[
                ("indexed", &summary.indexed.to_string()),
                ("skipped", &summary.skipped.to_string()),
            ],
        );
        summary
    }

    /// Appends one record to the arena and both indexes.
    fn insert(&mut self, object: CelestialObject) {
        let slot: Slot = self.objects.len();
        self.by_date.insert(object.close_approach_date, slot);
        self.by_name.insert(object.name.clone(), slot);
        self.objects.push(object);
    }

    /// Objects whose approach date equals `date`, in insertion order.
    /// Unknown dates yield an empty vector, never an error.
    pub fn lookup_by_date(&self, date: NaiveDate) -> Vec<&CelestialObject> {
        self.by_date
            .lookup(date)
            .iter()
            .map(|&slot| &self.objects[slot])
            .collect()
    }

    /// The current record for a name, if any.
    pub fn lookup_by_name(&self, name: &str) -> Option<&CelestialObject> {
        self.by_name.lookup(name).map(|slot| &self.objects[slot])
    }

    /// Objects approaching within `[start, end]` inclusive, ascending by
    /// date, insertion order within a date.
    pub fn objects_in_date_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<&CelestialObject> {
        self.by_date
            .lookup_range(start, end)
            .into_iter()
            .map(|slot| &self.objects[slot])
            .collect()
    }

    /// Total number of ingested records (including overwritten names).
    pub fn record_count(&self) -> usize {
        self.objects.len()
    }

    /// Number of distinct names.
    pub fn name_count(&self) -> usize {
        self.by_name.name_count()
    }

    /// Number of distinct approach dates.
    pub fn date_count(&self) -> usize {
        self.by_date.date_count()
    }
}
