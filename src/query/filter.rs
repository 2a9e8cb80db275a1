//! Filter predicates over celestial objects.
//!
//! A predicate is built from one raw `field:operator:value` expression:
//! exactly three colon-separated parts, no escaping of colons in the value.
//! Field names, operators and the parsed literal are closed variants; raw
//! tokens are validated once at construction, never re-parsed per candidate.

use std::fmt;

use crate::store::CelestialObject;

use super::errors::{QueryError, QueryResult};

/// Fields a filter may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    /// Minimum estimated diameter in kilometers
    Diameter,
    /// Miss distance in kilometers
    Distance,
    /// Potentially-hazardous flag
    Hazardous,
}

impl FilterField {
    /// Parses a field token (ASCII case-insensitive).
    pub fn parse(token: &str) -> QueryResult<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "diameter" => Ok(FilterField::Diameter),
            "distance" => Ok(FilterField::Distance),
            "is_hazardous" => Ok(FilterField::Hazardous),
            _ => Err(QueryError::unknown_filter_field(token.trim())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterField::Diameter => "diameter",
            FilterField::Distance => "distance",
            FilterField::Hazardous => "is_hazardous",
        }
    }
}

/// Comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Gte,
    Gt,
    Lte,
    Lt,
    Eq,
}

impl CompareOp {
    /// Parses an operator token.
    ///
    /// Unrecognized tokens take the equality default rather than an error.
    pub fn parse(token: &str) -> Self {
        match token.trim() {
            ">=" => CompareOp::Gte,
            ">" => CompareOp::Gt,
            "<=" => CompareOp::Lte,
            "<" => CompareOp::Lt,
            "==" => CompareOp::Eq,
            // Default branch: any other token means equality
            _ => CompareOp::Eq,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CompareOp::Gte => ">=",
            CompareOp::Gt => ">",
            CompareOp::Lte => "<=",
            CompareOp::Lt => "<",
            CompareOp::Eq => "==",
        }
    }

    /// Applies the operator to a numeric field value and literal.
    fn compare(&self, actual: f64, literal: f64) -> bool {
        match self {
            CompareOp::Gte => actual >= literal,
            CompareOp::Gt => actual > literal,
            CompareOp::Lte => actual <= literal,
            CompareOp::Lt => actual < literal,
            CompareOp::Eq => actual == literal,
        }
    }
}

/// Parsed filter literal, typed per target field.
#[derive(Debug, Clone, Copy, PartialEq)]
enum FilterValue {
    Number(f64),
    Flag(bool),
}

/// One immutable field/operator/value condition.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCondition {
    field: FilterField,
    op: CompareOp,
    value: FilterValue,
}

impl FilterCondition {
    /// Builds a condition from a raw `field:operator:value` expression.
    pub fn parse(expr: &str) -> QueryResult<Self> {
        let mut parts = expr.splitn(3, ':');
        let (field_token, op_token, value_token) = match (parts.next(), parts.next(), parts.next())
        {
            (Some(f), Some(o), Some(v)) => (f, o, v),
            _ => return Err(QueryError::malformed_filter(expr)),
        };

        let field = FilterField::parse(field_token)?;
        let op = CompareOp::parse(op_token);
        let value = match field {
            FilterField::Diameter | FilterField::Distance => {
                let number = value_token
                    .trim()
                    .parse::<f64>()
                    .map_err(|_| QueryError::invalid_filter_value(field.as_str(), value_token.trim()))?;
                FilterValue::Number(number)
            }
            // The hazard flag ignores the operator; the case-insensitive
            // literal "false" is false, anything else is true.
            FilterField::Hazardous => {
                FilterValue::Flag(!value_token.trim().eq_ignore_ascii_case("false"))
            }
        };

        Ok(Self { field, op, value })
    }

    pub fn field(&self) -> FilterField {
        self.field
    }

    pub fn op(&self) -> CompareOp {
        self.op
    }

    /// Whether one candidate satisfies the condition.
    pub fn matches(&self, object: &CelestialObject) -> bool {
        match (self.field, self.value) {
            (FilterField::Diameter, FilterValue::Number(literal)) => {
                self.op.compare(object.diameter_min_km, literal)
            }
            (FilterField::Distance, FilterValue::Number(literal)) => {
                self.op.compare(object.miss_distance_km, literal)
            }
            (FilterField::Hazardous, FilterValue::Flag(literal)) => {
                object.is_hazardous == literal
            }
            // Construction pairs each field with its literal type
            _ => false,
        }
    }

    /// Narrows a candidate sequence, keeping order.
    pub fn apply<'a>(&self, candidates: Vec<&'a CelestialObject>) -> Vec<&'a CelestialObject> {
        candidates
            .into_iter()
            .filter(|object| self.matches(object))
            .collect()
    }
}

impl fmt::Display for FilterCondition {
    /// Renders the canonical expression form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            FilterValue::Number(n) => {
                write!(f, "{}:{}:{}", self.field.as_str(), self.op.as_str(), n)
            }
            FilterValue::Flag(b) => {
                write!(f, "{}:{}:{}", self.field.as_str(), self.op.as_str(), b)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::errors::QueryErrorCode;
    use chrono::NaiveDate;

    fn object(diameter: f64, hazardous: bool, distance: f64) -> CelestialObject {
        CelestialObject {
            id: "1".to_string(),
            name: "test".to_string(),
            diameter_min_km: diameter,
            is_hazardous: hazardous,
            close_approach_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            miss_distance_km: distance,
        }
    }

    #[test]
    fn test_parse_three_parts_required() {
        assert_eq!(
            FilterCondition::parse("diameter:>=").unwrap_err().code(),
            QueryErrorCode::MalformedFilterExpression
        );
        assert_eq!(
            FilterCondition::parse("diameter").unwrap_err().code(),
            QueryErrorCode::MalformedFilterExpression
        );
    }

    #[test]
    fn test_parse_unknown_field() {
        assert_eq!(
            FilterCondition::parse("bogus:>=:1").unwrap_err().code(),
            QueryErrorCode::UnknownFilterField
        );
    }

    #[test]
    fn test_parse_bad_numeric_value() {
        assert_eq!(
            FilterCondition::parse("diameter:>=:wide").unwrap_err().code(),
            QueryErrorCode::InvalidFilterValue
        );
    }

    #[test]
    fn test_unrecognized_operator_defaults_to_equality() {
        let condition = FilterCondition::parse("diameter:~:0.5").unwrap();
        assert_eq!(condition.op(), CompareOp::Eq);
        assert!(condition.matches(&object(0.5, false, 0.0)));
        assert!(!condition.matches(&object(0.6, false, 0.0)));
    }

    #[test]
    fn test_diameter_comparisons() {
        let candidates = vec![object(0.5, true, 1000.0)];

        let keep = FilterCondition::parse("diameter:>=:0.4").unwrap();
        assert_eq!(keep.apply(candidates.iter().collect()).len(), 1);

        let drop = FilterCondition::parse("diameter:>=:0.6").unwrap();
        assert!(drop.apply(candidates.iter().collect()).is_empty());

        let lt = FilterCondition::parse("diameter:<:0.6").unwrap();
        assert_eq!(lt.apply(candidates.iter().collect()).len(), 1);
    }

    #[test]
    fn test_distance_comparisons() {
        let candidates = vec![object(0.5, true, 1000.0)];

        let lte = FilterCondition::parse("distance:<=:1000").unwrap();
        assert_eq!(lte.apply(candidates.iter().collect()).len(), 1);

        let gt = FilterCondition::parse("distance:>:1000").unwrap();
        assert!(gt.apply(candidates.iter().collect()).is_empty());
    }

    #[test]
    fn test_hazardous_ignores_operator() {
        let hazardous = object(0.5, true, 1000.0);
        let safe = object(0.5, false, 1000.0);

        // Operator token is irrelevant for the flag field
        let wants_true = FilterCondition::parse("is_hazardous:>=:true").unwrap();
        assert!(wants_true.matches(&hazardous));
        assert!(!wants_true.matches(&safe));

        let wants_false = FilterCondition::parse("is_hazardous:==:false").unwrap();
        assert!(!wants_false.matches(&hazardous));
        assert!(wants_false.matches(&safe));
    }

    #[test]
    fn test_hazardous_literal_anything_but_false_is_true() {
        let hazardous = object(0.5, true, 1000.0);

        assert!(FilterCondition::parse("is_hazardous:==:True")
            .unwrap()
            .matches(&hazardous));
        assert!(FilterCondition::parse("is_hazardous:==:yes")
            .unwrap()
            .matches(&hazardous));
        assert!(!FilterCondition::parse("is_hazardous:==:FALSE")
            .unwrap()
            .matches(&hazardous));
    }

    #[test]
    fn test_value_with_no_colon_escaping() {
        // The third part is everything after the second colon.
        let err = FilterCondition::parse("diameter:>=:0.5:extra").unwrap_err();
        assert_eq!(err.code(), QueryErrorCode::InvalidFilterValue);
    }

    #[test]
    fn test_apply_preserves_order() {
        let a = object(0.5, true, 1.0);
        let b = object(0.7, true, 2.0);
        let c = object(0.9, true, 3.0);
        let condition = FilterCondition::parse("diameter:>:0.6").unwrap();

        let out = condition.apply(vec![&c, &a, &b]);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].diameter_min_km, 0.9);
        assert_eq!(out[1].diameter_min_km, 0.7);
    }
}
