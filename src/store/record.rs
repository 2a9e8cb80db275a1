//! Typed records for near-Earth objects and their close approaches.
//!
//! Raw ingestion rows are open-ended attribute mappings; only the fields
//! below are consumed. Extra keys are ignored, never stored.

use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

/// Row key for the object's identifier.
pub const FIELD_ID: &str = "id";
/// Row key for the object's name.
pub const FIELD_NAME: &str = "name";
/// Row key for the minimum estimated diameter in kilometers.
pub const FIELD_DIAMETER_MIN_KM: &str = "estimated_diameter_min_kilometers";
/// Row key for the hazard flag.
pub const FIELD_IS_HAZARDOUS: &str = "is_potentially_hazardous_asteroid";
/// Row key for the close-approach date (ISO-8601).
pub const FIELD_APPROACH_DATE: &str = "close_approach_date";
/// Row key for the miss distance in kilometers.
pub const FIELD_MISS_DISTANCE_KM: &str = "miss_distance_kilometers";

/// A single recorded close approach: the owning object's name, the approach
/// date and the miss distance.
#[derive(Debug, Clone, PartialEq)]
pub struct ApproachEvent {
    /// Name of the object this approach belongs to
    pub neo_name: String,
    /// Calendar date of the approach
    pub close_approach_date: NaiveDate,
    /// Miss distance in kilometers
    pub miss_distance_km: f64,
}

/// A near-Earth object with exactly one embedded approach-event snapshot.
///
/// `id` and `name` are both stable identifiers. Re-ingesting a name replaces
/// the whole record, snapshot included; history is not accumulated.
#[derive(Debug, Clone, PartialEq)]
pub struct CelestialObject {
    /// Opaque unique identifier from the source data set
    pub id: String,
    /// Name, used as a secondary unique key
    pub name: String,
    /// Minimum estimated diameter in kilometers (non-negative)
    pub diameter_min_km: f64,
    /// Whether the object is flagged potentially hazardous
    pub is_hazardous: bool,
    /// Date of the embedded approach event
    pub close_approach_date: NaiveDate,
    /// Miss distance of the embedded approach event in kilometers
    pub miss_distance_km: f64,
}

impl CelestialObject {
    /// Parses one raw attribute mapping into a typed record.
    ///
    /// The row must be a JSON object carrying all required keys. Numeric and
    /// boolean values may arrive either typed or as strings (delimited
    /// sources carry everything as text). Negative diameters or distances
    /// are rejected.
    pub fn from_row(row: &Value) -> Result<Self, RowError> {
        let map = row.as_object().ok_or(RowError::NotAnObject)?;

        let id = require_string(map, FIELD_ID)?;
        let name = require_string(map, FIELD_NAME)?;
        let diameter_min_km = require_non_negative(map, FIELD_DIAMETER_MIN_KM)?;
        let is_hazardous = require_bool(map, FIELD_IS_HAZARDOUS)?;
        let close_approach_date = require_date(map, FIELD_APPROACH_DATE)?;
        let miss_distance_km = require_non_negative(map, FIELD_MISS_DISTANCE_KM)?;

        Ok(Self {
            id,
            name,
            diameter_min_km,
            is_hazardous,
            close_approach_date,
            miss_distance_km,
        })
    }

    /// The embedded approach-event snapshot.
    pub fn approach_event(&self) -> ApproachEvent {
        ApproachEvent {
            neo_name: self.name.clone(),
            close_approach_date: self.close_approach_date,
            miss_distance_km: self.miss_distance_km,
        }
    }
}

/// Why a raw row could not become a typed record.
///
/// Surfaced only as a skip-and-warn log line during ingestion; a bad row
/// never aborts the load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowError {
    /// The row was not a JSON object
    NotAnObject,
    /// A required key was absent
    MissingField(&'static str),
    /// A key was present but its value could not be interpreted
    InvalidField {
        field: &'static str,
        reason: String,
    },
}

impl fmt::Display for RowError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowError::NotAnObject => write!(f, "row is not an object"),
            RowError::MissingField(field) => write!(f, "missing required field '{}'", field),
            RowError::InvalidField { field, reason } => {
                write!(f, "invalid value for '{}': {}", field, reason)
            }
        }
    }
}

impl std::error::Error for RowError {}

fn require<'a>(
    map: &'a serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<&'a Value, RowError> {
    match map.get(field) {
        Some(Value::Null) | None => Err(RowError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

fn require_string(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, RowError> {
    let value = require(map, field)?;
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.trim().to_string()),
        Value::String(_) => Err(RowError::InvalidField {
            field,
            reason: "empty string".to_string(),
        }),
        // Numeric ids arrive as numbers when the source is typed
        Value::Number(n) => Ok(n.to_string()),
        other => Err(RowError::InvalidField {
            field,
            reason: format!("expected string, got {}", json_kind(other)),
        }),
    }
}

fn require_non_negative(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<f64, RowError> {
    let value = require(map, field)?;
    let parsed = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    match parsed {
        Some(v) if v >= 0.0 => Ok(v),
        Some(v) => Err(RowError::InvalidField {
            field,
            reason: format!("negative value {}", v),
        }),
        None => Err(RowError::InvalidField {
            field,
            reason: format!("expected number, got {}", json_kind(value)),
        }),
    }
}

fn require_bool(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<bool, RowError> {
    let value = require(map, field)?;
    match value {
        Value::Bool(b) => Ok(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(RowError::InvalidField {
                field,
                reason: format!("expected boolean, got '{}'", other),
            }),
        },
        other => Err(RowError::InvalidField {
            field,
            reason: format!("expected boolean, got {}", json_kind(other)),
        }),
    }
}

fn require_date(
    map: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<NaiveDate, RowError> {
    let value = require(map, field)?;
    let text = value.as_str().ok_or_else(|| RowError::InvalidField {
        field,
        reason: format!("expected ISO-8601 date string, got {}", json_kind(value)),
    })?;
    text.trim()
        .parse::<NaiveDate>()
        .map_err(|e| RowError::InvalidField {
            field,
            reason: format!("'{}' is not an ISO-8601 date: {}", text, e),
        })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
