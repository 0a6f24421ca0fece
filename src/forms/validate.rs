//! Schema evaluation
//!
//! Per-field checks run in declaration order (presence, then type, then
//! bounds; the first failure wins). Cross-field refinements run afterwards,
//! but only once every operand has passed its own checks.

use chrono::{DateTime, NaiveDate};
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};
use std::collections::HashMap;

use super::catalog::{INVALID_CHOICE, INVALID_DATE, INVALID_NUMBER, INVALID_TEXT};
use super::error::FormError;
use super::records::{FormKind, Record};
use super::schema::{FieldKind, FieldSpec, Refinement, Schema};
use super::values::FormValues;

/// A message attached to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Inline errors of one submission attempt, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach `message` to `field` unless it already carries one
    pub fn add(&mut self, field: &str, message: &str) {
        if self.get(field).is_none() {
            self.errors.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
        }
    }

    /// Message attached to `field`, if any
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Offending field names, in detection order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.iter().map(|e| e.field.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for error in &self.errors {
            map.serialize_entry(&error.field, &error.message)?;
        }
        map.end()
    }
}

/// Validate `values` against the schema of `kind` and build the typed record
pub fn validate(kind: FormKind, values: &FormValues) -> Result<Record, FormError> {
    validate_with(&super::catalog::schema(kind), values)
}

/// Validate `values` against an explicit schema
pub fn validate_with(schema: &Schema, values: &FormValues) -> Result<Record, FormError> {
    let mut errors = ValidationErrors::new();
    let mut normalized = Map::new();
    let mut dates: HashMap<&'static str, NaiveDate> = HashMap::new();

    for spec in &schema.fields {
        match check_field(spec, values.present(spec.name)) {
            Ok(Checked::Absent) => {
                normalized.insert(spec.name.to_string(), Value::Null);
            }
            Ok(Checked::Date(date)) => {
                dates.insert(spec.name, date);
                normalized.insert(spec.name.to_string(), Value::from(date.to_string()));
            }
            Ok(Checked::Value(value)) => {
                normalized.insert(spec.name.to_string(), value);
            }
            Err(message) => errors.add(spec.name, message),
        }
    }

    for refinement in &schema.refinements {
        if refinement.operands().iter().any(|f| errors.contains(f)) {
            continue;
        }
        if !refinement_holds(refinement, &dates) {
            errors.add(refinement.target(), refinement.message());
        }
    }

    if !errors.is_empty() {
        tracing::debug!(
            form = %schema.kind,
            fields = ?errors.fields().collect::<Vec<_>>(),
            "Form validation failed"
        );
        return Err(FormError::Invalid(errors));
    }

    Record::decode(schema.kind, normalized)
}

/// Outcome of a single field's checks
enum Checked {
    Absent,
    Date(NaiveDate),
    Value(Value),
}

fn check_field(spec: &FieldSpec, value: Option<&Value>) -> Result<Checked, &'static str> {
    let value = match value {
        Some(v) => v,
        None => {
            return match spec.required {
                Some(message) => Err(message),
                None => Ok(Checked::Absent),
            }
        }
    };

    match &spec.kind {
        FieldKind::Date => parse_date(value).map(Checked::Date).ok_or(INVALID_DATE),
        FieldKind::Text => value
            .as_str()
            .map(|s| Checked::Value(Value::from(s)))
            .ok_or(INVALID_TEXT),
        FieldKind::Choice { options } => {
            let choice = value.as_str().ok_or(INVALID_CHOICE)?;
            if options.contains(&choice) {
                Ok(Checked::Value(Value::from(choice)))
            } else {
                Err(spec.required.unwrap_or(INVALID_CHOICE))
            }
        }
        FieldKind::Number { .. } => {
            let number = parse_number(value).ok_or(INVALID_NUMBER)?;
            if let Some(min) = spec.min {
                if number < min.value {
                    return Err(min.message);
                }
            }
            if let Some(max) = spec.max {
                if number > max.value {
                    return Err(max.message);
                }
            }
            Ok(Checked::Value(Value::from(number)))
        }
    }
}

fn refinement_holds(refinement: &Refinement, dates: &HashMap<&'static str, NaiveDate>) -> bool {
    match refinement {
        Refinement::NotBefore { earlier, later, .. } => match (dates.get(earlier), dates.get(later)) {
            (Some(start), Some(end)) => end >= start,
            // An optional operand left empty has nothing to compare
            _ => true,
        },
    }
}

/// Accepts `YYYY-MM-DD` or an RFC 3339 timestamp (its calendar date)
pub fn parse_date(value: &Value) -> Option<NaiveDate> {
    let s = value.as_str()?.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
}

/// Accepts JSON numbers and numeric strings; rejects non-finite values
pub fn parse_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog::{
        self, API_GRAVITY_RANGE, DATE_ORDER, NON_NEGATIVE, WATER_SEDIMENT_RANGE,
    };

    fn valid_production() -> FormValues {
        FormValues::defaults(&catalog::schema(FormKind::Production))
            .with("date", "2024-05-10")
            .with("crude_production", 12450)
            .with("injection", 8200)
            .with("api_gravity", 18.5)
            .with("water_and_sediments", 2.8)
    }

    fn valid_historical() -> FormValues {
        FormValues::defaults(&catalog::schema(FormKind::Historical))
            .with("start_date", "2024-01-01")
            .with("end_date", "2024-01-31")
            .with("daily_production", 12000)
    }

    #[test]
    fn test_valid_production() {
        let record = validate(FormKind::Production, &valid_production()).unwrap();
        match record {
            Record::Production(p) => {
                assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
                assert_eq!(p.crude_production, 12450.0);
                assert_eq!(p.api_gravity, 18.5);
                assert_eq!(p.gas_pumping, 0.0);
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_negative_value_blocks_exactly_that_field() {
        let schema = catalog::schema(FormKind::Production);
        let numeric: Vec<_> = schema
            .fields
            .iter()
            .filter(|f| f.min.map(|b| b.value == 0.0).unwrap_or(false))
            .map(|f| f.name)
            .collect();
        assert_eq!(numeric.len(), 9);

        for name in numeric {
            let values = valid_production().with(name, -1.0);
            let err = validate(FormKind::Production, &values).unwrap_err();
            let errors = err.field_errors().unwrap();

            assert_eq!(errors.len(), 1, "field {}", name);
            assert!(errors.contains(name));
        }
    }

    #[test]
    fn test_non_negative_message() {
        let values = valid_production().with("diluent_consumed", -5);
        let err = validate(FormKind::Production, &values).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("diluent_consumed"), Some(NON_NEGATIVE));
    }

    #[test]
    fn test_percentage_range() {
        let values = valid_production().with("api_gravity", 100.5);
        let err = validate(FormKind::Production, &values).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("api_gravity"), Some(API_GRAVITY_RANGE));

        let values = valid_production().with("water_and_sediments", -0.1);
        let err = validate(FormKind::Production, &values).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("water_and_sediments"),
            Some(WATER_SEDIMENT_RANGE)
        );

        // Inclusive bounds
        let values = valid_production()
            .with("api_gravity", 100)
            .with("water_and_sediments", 0);
        assert!(validate(FormKind::Production, &values).is_ok());
    }

    #[test]
    fn test_numeric_strings_accepted() {
        let values = valid_production().with("crude_production", "1500.5");
        match validate(FormKind::Production, &values).unwrap() {
            Record::Production(p) => assert_eq!(p.crude_production, 1500.5),
            other => panic!("unexpected record {:?}", other),
        }

        let values = valid_production().with("crude_production", "mucho");
        let err = validate(FormKind::Production, &values).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("crude_production"), Some(INVALID_NUMBER));
    }

    #[test]
    fn test_missing_date() {
        let mut values = valid_production();
        values.clear("date");
        let err = validate(FormKind::Production, &values).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("date"), Some(catalog::DATE_REQUIRED));
    }

    #[test]
    fn test_end_before_start() {
        let values = valid_historical().with("end_date", "2023-12-31");
        let err = validate(FormKind::Historical, &values).unwrap_err();
        let errors = err.field_errors().unwrap();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("end_date"), Some(DATE_ORDER));
        assert!(!errors.contains("start_date"));
    }

    #[test]
    fn test_end_before_start_reported_alongside_field_errors() {
        let values = valid_historical()
            .with("end_date", "2023-12-31")
            .with("daily_injection", -10);
        let err = validate(FormKind::Historical, &values).unwrap_err();
        let errors = err.field_errors().unwrap();

        assert_eq!(errors.get("end_date"), Some(DATE_ORDER));
        assert_eq!(errors.get("daily_injection"), Some(NON_NEGATIVE));
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_same_day_range_is_valid() {
        let values = valid_historical().with("end_date", "2024-01-01");
        assert!(validate(FormKind::Historical, &values).is_ok());
    }

    #[test]
    fn test_choice_outside_catalog() {
        let values = FormValues::defaults(&catalog::schema(FormKind::Field))
            .with("date", "2024-05-10")
            .with("field", "Campo Lunar")
            .with("area", "Bloque 4");
        let err = validate(FormKind::Field, &values).unwrap_err();
        assert_eq!(
            err.field_errors().unwrap().get("field"),
            Some(catalog::FIELD_REQUIRED)
        );
    }

    #[test]
    fn test_well_optional_fields() {
        let base = FormValues::defaults(&catalog::schema(FormKind::WellStatus))
            .with("date", "2024-05-10")
            .with("well_name", "Pozo Norte")
            .with("well_number", "PN-014")
            .with("category", catalog::WELL_CATEGORIES[0])
            .with("status", catalog::WELL_STATUSES[0]);

        // Optional fields left at defaults
        match validate(FormKind::WellStatus, &base).unwrap() {
            Record::WellStatus(w) => {
                assert_eq!(w.production, Some(0.0));
                assert_eq!(w.observations, None);
                assert_eq!(w.last_maintenance, None);
            }
            other => panic!("unexpected record {:?}", other),
        }

        // Present optional values still honor their constraints
        let mut cleared = base.clone().with("production", -3);
        let err = validate(FormKind::WellStatus, &cleared).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("production"), Some(NON_NEGATIVE));

        cleared.clear("production");
        let cleared = cleared.with("last_maintenance", "ayer");
        let err = validate(FormKind::WellStatus, &cleared).unwrap_err();
        assert_eq!(err.field_errors().unwrap().get("last_maintenance"), Some(INVALID_DATE));
    }

    #[test]
    fn test_required_text() {
        let values = FormValues::defaults(&catalog::schema(FormKind::WellStatus))
            .with("date", "2024-05-10")
            .with("category", catalog::WELL_CATEGORIES[1])
            .with("status", catalog::WELL_STATUSES[2]);
        let err = validate(FormKind::WellStatus, &values).unwrap_err();
        let errors = err.field_errors().unwrap();

        assert_eq!(errors.fields().collect::<Vec<_>>(), vec!["well_name", "well_number"]);
    }

    #[test]
    fn test_rfc3339_dates() {
        let values = valid_production().with("date", "2024-05-10T03:00:00Z");
        match validate(FormKind::Production, &values).unwrap() {
            Record::Production(p) => {
                assert_eq!(p.date, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap())
            }
            other => panic!("unexpected record {:?}", other),
        }
    }

    #[test]
    fn test_errors_serialize_as_map() {
        let mut errors = ValidationErrors::new();
        errors.add("end_date", DATE_ORDER);
        errors.add("end_date", "second message ignored");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "end_date": DATE_ORDER }));
    }
}
