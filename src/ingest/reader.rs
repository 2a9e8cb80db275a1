//! Delimited-file reader.
//!
//! The source is a header row naming the columns, followed by one
//! comma-separated record per approach event. Fields may be wrapped in
//! double quotes; a doubled quote inside a quoted field is a literal quote.
//! Each record becomes a JSON object keyed by the header names, with every
//! value as a string; typing happens in the store's record parser.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde_json::{Map, Value};

use super::errors::{IngestError, IngestResult};

/// Reads all records from a delimited source file.
///
/// An empty or missing path is `NoFilenameProvided`; an unopenable file is
/// `SourceUnreadable`; a file with no header row is `MissingHeader`. Rows
/// with a different field count than the header are passed through anyway;
/// the store skips rows missing required keys and logs them.
pub fn load_records(path: &Path) -> IngestResult<Vec<Value>> {
    if path.as_os_str().is_empty() {
        return Err(IngestError::NoFilenameProvided);
    }

    let file = File::open(path).map_err(|e| IngestError::SourceUnreadable {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let mut lines = BufReader::new(file).lines();

    let header_line = match lines.next() {
        Some(Ok(line)) => line,
        Some(Err(e)) => {
            return Err(IngestError::SourceUnreadable {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
        }
        None => {
            return Err(IngestError::MissingHeader {
                path: path.display().to_string(),
            })
        }
    };
    let header = split_fields(&header_line);
    if header.is_empty() || header.iter().all(|h| h.is_empty()) {
        return Err(IngestError::MissingHeader {
            path: path.display().to_string(),
        });
    }

    let mut records = Vec::new();
    for line in lines {
        let line = line.map_err(|e| IngestError::SourceUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(row_to_object(&header, split_fields(&line)));
    }

    Ok(records)
}

/// Zips header names with row fields into a JSON object. Missing trailing
/// fields simply leave their keys absent.
fn row_to_object(header: &[String], fields: Vec<String>) -> Value {
    let mut object = Map::with_capacity(header.len());
    for (name, field) in header.iter().zip(fields) {
        object.insert(name.clone(), Value::String(field));
    }
    Value::Object(object)
}

/// Splits one line into fields, honoring double-quote quoting.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                // Doubled quote inside a quoted field is a literal quote
                if chars.peek() == Some(&'"') {
                    chars.next();
                    current.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            c => current.push(c),
        }
    }
    fields.push(current);
    fields
}
