//! Record store: typed close-approach records and the indexes over them.
//!
//! Ingestion hands the store one raw attribute mapping per approach event.
//! The store parses each mapping into a typed [`CelestialObject`] carrying
//! its embedded [`ApproachEvent`], then indexes it by approach date and by
//! name. The store is built once per load and read-only afterwards.

pub mod catalog;
pub mod index;
pub mod record;

pub use catalog::{IngestSummary, RecordStore};
pub use record::{ApproachEvent, CelestialObject, RowError};
