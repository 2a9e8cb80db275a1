//! Ingestion adapter: reads the delimited source file into raw attribute
//! mappings for the record store.
//!
//! This is a thin I/O layer. Per-row problems (missing keys, bad values)
//! are the store's skip-and-warn concern; this module only fails on
//! store-wide conditions: no file name, unreadable source, missing header.

pub mod errors;
pub mod reader;

pub use errors::{IngestError, IngestResult};
pub use reader::load_records;
