//! Ingestion Integrity Tests
//!
//! The reader and store together: a full load from a delimited file,
//! malformed rows skipped without aborting, recurring names overwriting,
//! and the fatal ingestion error conditions.

use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use neodb::ingest::{load_records, IngestError};
use neodb::observability::Logger;
use neodb::store::RecordStore;
use tempfile::NamedTempFile;

// =============================================================================
// Helper Functions
// =============================================================================

const HEADER: &str = "id,name,estimated_diameter_min_kilometers,\
is_potentially_hazardous_asteroid,close_approach_date,miss_distance_kilometers";

fn write_source(rows: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{}", HEADER).unwrap();
    for row in rows {
        writeln!(file, "{}", row).unwrap();
    }
    file
}

fn load_into_store(path: &Path) -> (RecordStore, usize, usize) {
    let rows = load_records(path).unwrap();
    let mut store = RecordStore::new();
    let summary = store.index_all(rows, &Logger::silent());
    (store, summary.indexed, summary.skipped)
}

// =============================================================================
// Full Load
// =============================================================================

/// A clean file loads every row into both indexes.
#[test]
fn test_clean_load() {
    let file = write_source(&[
        "1,(2019 PQ),0.02,False,2020-01-01,58390568.0",
        "2,(2020 AB),0.15,True,2020-01-02,12000.5",
    ]);
    let (store, indexed, skipped) = load_into_store(file.path());

    assert_eq!(indexed, 2);
    assert_eq!(skipped, 0);
    assert_eq!(store.record_count(), 2);

    let object = store.lookup_by_name("(2020 AB)").unwrap();
    assert_eq!(object.id, "2");
    assert!(object.is_hazardous);
    assert_eq!(object.miss_distance_km, 12000.5);
    assert_eq!(
        object.close_approach_date,
        NaiveDate::from_ymd_opt(2020, 1, 2).unwrap()
    );
}

/// Malformed rows are skipped; the rest of the load proceeds.
#[test]
fn test_malformed_rows_skipped_not_fatal() {
    let file = write_source(&[
        "1,(2019 PQ),0.02,False,2020-01-01,58390568.0",
        // bad date
        "2,(bad date),0.02,False,January 1st,100.0",
        // bad diameter
        "3,(bad diameter),huge,False,2020-01-03,100.0",
        // short row, required keys absent
        "4,(short row)",
        "5,(2020 CD),0.3,True,2020-01-05,100.0",
    ]);
    let (store, indexed, skipped) = load_into_store(file.path());

    assert_eq!(indexed, 2);
    assert_eq!(skipped, 3);
    assert!(store.lookup_by_name("(2019 PQ)").is_some());
    assert!(store.lookup_by_name("(bad date)").is_none());
    assert!(store.lookup_by_name("(2020 CD)").is_some());
}

/// A recurring name keeps one name entry pointing at the latest snapshot,
/// while the date index retains every ingested approach.
#[test]
fn test_recurring_name_overwrites() {
    let file = write_source(&[
        "9,(repeat),0.1,False,2020-01-01,100.0",
        "9,(repeat),0.1,False,2020-03-01,900.0",
    ]);
    let (store, indexed, _) = load_into_store(file.path());

    assert_eq!(indexed, 2);
    assert_eq!(store.name_count(), 1);

    let current = store.lookup_by_name("(repeat)").unwrap();
    assert_eq!(
        current.close_approach_date,
        NaiveDate::from_ymd_opt(2020, 3, 1).unwrap()
    );
    assert_eq!(current.miss_distance_km, 900.0);

    assert_eq!(
        store
            .lookup_by_date(NaiveDate::from_ymd_opt(2020, 1, 1).unwrap())
            .len(),
        1
    );
}

/// Quoted names containing commas survive the reader intact.
#[test]
fn test_quoted_name_with_comma() {
    let file = write_source(&["1,\"(2019 PQ, provisional)\",0.02,False,2020-01-01,100.0"]);
    let (store, indexed, _) = load_into_store(file.path());

    assert_eq!(indexed, 1);
    assert!(store.lookup_by_name("(2019 PQ, provisional)").is_some());
}

// =============================================================================
// Fatal Conditions
// =============================================================================

/// No filename at all is the dedicated ingestion error.
#[test]
fn test_no_filename() {
    let err = load_records(Path::new("")).unwrap_err();
    assert!(matches!(err, IngestError::NoFilenameProvided));
    assert_eq!(err.code(), "NEO_INGEST_NO_FILENAME");
}

/// An unreadable source is fatal, not a skip.
#[test]
fn test_unreadable_source() {
    let err = load_records(Path::new("/definitely/not/here.csv")).unwrap_err();
    assert!(matches!(err, IngestError::SourceUnreadable { .. }));
}

/// A file with no header cannot be interpreted.
#[test]
fn test_empty_file_missing_header() {
    let file = NamedTempFile::new().unwrap();
    let err = load_records(file.path()).unwrap_err();
    assert!(matches!(err, IngestError::MissingHeader { .. }));
}
