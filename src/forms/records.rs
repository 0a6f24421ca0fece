//! Validated form records
//!
//! Value objects produced by a successful validation. They are handed to a
//! [`SubmissionSink`](super::SubmissionSink) and then discarded.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::FormError;

/// The five data-entry forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    /// Daily production totals
    Production,
    /// Per-field production
    Field,
    /// Per-station production
    Station,
    /// Well status by category
    #[serde(rename = "well")]
    WellStatus,
    /// Historical daily averages over a date range
    Historical,
}

impl FormKind {
    /// All forms, in admin display order
    pub fn all() -> &'static [FormKind] {
        &[
            FormKind::Production,
            FormKind::Field,
            FormKind::Station,
            FormKind::WellStatus,
            FormKind::Historical,
        ]
    }

    /// Stable key used in URLs and serialized records
    pub fn key(&self) -> &'static str {
        match self {
            FormKind::Production => "production",
            FormKind::Field => "field",
            FormKind::Station => "station",
            FormKind::WellStatus => "well",
            FormKind::Historical => "historical",
        }
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FormKind {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormKind::all()
            .iter()
            .copied()
            .find(|kind| kind.key() == s)
            .ok_or_else(|| FormError::UnknownForm(s.to_string()))
    }
}

/// Daily production entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    pub date: NaiveDate,
    pub crude_production: f64,
    pub injection: f64,
    pub mechanical_pumping: f64,
    pub electric_pumping: f64,
    pub gas_pumping: f64,
    pub diluent_received: f64,
    pub diluent_consumed: f64,
    pub api_gravity: f64,
    pub water_and_sediments: f64,
}

impl ProductionRecord {
    /// Sum of the three artificial-lift sub-totals
    pub fn total_pumping(&self) -> f64 {
        self.mechanical_pumping + self.electric_pumping + self.gas_pumping
    }

    /// Diluent received minus diluent consumed
    pub fn diluent_balance(&self) -> f64 {
        self.diluent_received - self.diluent_consumed
    }
}

/// Production entry for a named field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRecord {
    pub date: NaiveDate,
    pub field: String,
    pub area: String,
    pub crude_production: f64,
    pub mechanical_pumping: f64,
    pub electric_pumping: f64,
    pub gas_pumping: f64,
    pub injection: f64,
}

/// Production entry for a named station
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRecord {
    pub date: NaiveDate,
    pub station: String,
    pub field: String,
    pub crude_production: f64,
    pub mechanical_pumping: f64,
    pub electric_pumping: f64,
    pub gas_pumping: f64,
    pub injection: f64,
}

/// Status update for a single well
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellRecord {
    pub date: NaiveDate,
    pub well_name: String,
    pub well_number: String,
    pub category: String,
    pub status: String,
    #[serde(default)]
    pub production: Option<f64>,
    #[serde(default)]
    pub last_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub next_maintenance: Option<NaiveDate>,
    #[serde(default)]
    pub observations: Option<String>,
}

/// Daily averages over an inclusive date range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalRecord {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub daily_production: f64,
    pub daily_injection: f64,
    pub daily_pumping: f64,
    pub diluent_consumption: f64,
}

impl HistoricalRecord {
    /// Number of calendar days covered, both ends included
    pub fn days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

/// Any validated record, tagged with the form it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "form", rename_all = "lowercase")]
pub enum Record {
    Production(ProductionRecord),
    Field(FieldRecord),
    Station(StationRecord),
    #[serde(rename = "well")]
    WellStatus(WellRecord),
    Historical(HistoricalRecord),
}

impl Record {
    pub fn kind(&self) -> FormKind {
        match self {
            Record::Production(_) => FormKind::Production,
            Record::Field(_) => FormKind::Field,
            Record::Station(_) => FormKind::Station,
            Record::WellStatus(_) => FormKind::WellStatus,
            Record::Historical(_) => FormKind::Historical,
        }
    }

    /// Decode normalized field values into the typed record for `kind`
    pub(crate) fn decode(
        kind: FormKind,
        values: serde_json::Map<String, serde_json::Value>,
    ) -> Result<Self, FormError> {
        let value = serde_json::Value::Object(values);
        let record = match kind {
            FormKind::Production => Record::Production(serde_json::from_value(value)?),
            FormKind::Field => Record::Field(serde_json::from_value(value)?),
            FormKind::Station => Record::Station(serde_json::from_value(value)?),
            FormKind::WellStatus => Record::WellStatus(serde_json::from_value(value)?),
            FormKind::Historical => Record::Historical(serde_json::from_value(value)?),
        };
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_kind_keys_round_trip() {
        for kind in FormKind::all() {
            assert_eq!(kind.key().parse::<FormKind>().unwrap(), *kind);
        }
        assert!("pozos".parse::<FormKind>().is_err());
    }

    #[test]
    fn test_record_tag_uses_form_key() {
        let record = Record::Historical(HistoricalRecord {
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
            daily_production: 12000.0,
            daily_injection: 8000.0,
            daily_pumping: 4800.0,
            diluent_consumption: 280.0,
        });

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["form"], "historical");
        assert_eq!(json["start_date"], "2024-01-01");
        assert_eq!(record.kind(), FormKind::Historical);
    }

    #[test]
    fn test_historical_days_inclusive() {
        let record = HistoricalRecord {
            start_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            end_date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
            daily_production: 0.0,
            daily_injection: 0.0,
            daily_pumping: 0.0,
            diluent_consumption: 0.0,
        };
        assert_eq!(record.days(), 1);
    }
}
