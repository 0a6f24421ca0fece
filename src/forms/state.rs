//! Mounted form state
//!
//! One `FormState` exists per mounted form. It owns the current field values
//! and the inline errors of the last submission attempt.

use serde::Serialize;

use super::catalog;
use super::error::FormError;
use super::notify::{Notification, Notifier};
use super::records::{FormKind, Record};
use super::schema::Schema;
use super::sink::SubmissionSink;
use super::validate::{validate_with, ValidationErrors};
use super::values::FormValues;

/// Result of an accepted submission
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submitted {
    pub record: Record,
    pub notification: Notification,
}

#[derive(Debug, Clone)]
pub struct FormState {
    schema: Schema,
    values: FormValues,
    errors: ValidationErrors,
}

impl FormState {
    /// Mount `kind` with its declared defaults
    pub fn new(kind: FormKind) -> Self {
        let schema = catalog::schema(kind);
        let values = schema.defaults();
        Self {
            schema,
            values,
            errors: ValidationErrors::new(),
        }
    }

    /// Mount with pre-filled values
    pub fn with_values(kind: FormKind, values: FormValues) -> Self {
        let mut state = Self::new(kind);
        state.values = values;
        state
    }

    pub fn kind(&self) -> FormKind {
        self.schema.kind
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update one control's value. Inline errors stay until the next submit.
    pub fn set(&mut self, name: &str, value: impl Into<serde_json::Value>) {
        self.values.set(name, value);
    }

    /// Empty one control
    pub fn clear(&mut self, name: &str) {
        self.values.clear(name);
    }

    /// Back to schema defaults, errors cleared
    pub fn reset(&mut self) {
        self.values = self.schema.defaults();
        self.errors = ValidationErrors::new();
    }

    /// Validate, hand the record to `sink`, notify and reset.
    ///
    /// On validation failure the inline errors are stored, the values are kept
    /// and neither the sink nor the notifier is touched. A sink failure keeps
    /// the values too and emits no notification.
    pub fn submit(
        &mut self,
        sink: &dyn SubmissionSink,
        notifier: &mut dyn Notifier,
    ) -> Result<Submitted, FormError> {
        let record = match validate_with(&self.schema, &self.values) {
            Ok(record) => record,
            Err(FormError::Invalid(errors)) => {
                self.errors = errors.clone();
                return Err(FormError::Invalid(errors));
            }
            Err(e) => return Err(e),
        };
        self.errors = ValidationErrors::new();

        if let Err(e) = sink.accept(&record) {
            tracing::warn!(form = %self.kind(), error = %e, "Submission sink failed");
            return Err(FormError::Sink(e));
        }

        let notification = catalog::success_notification(self.kind());
        notifier.notify(notification.clone());
        self.reset();

        Ok(Submitted {
            record,
            notification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::catalog::{DATE_ORDER, SAVED_TITLE};
    use crate::forms::sink::{CollectingSink, SinkError};

    struct FailingSink;

    impl SubmissionSink for FailingSink {
        fn accept(&self, _record: &Record) -> Result<(), SinkError> {
            Err(SinkError::Unavailable("offline".to_string()))
        }
    }

    fn filled_production() -> FormState {
        let mut state = FormState::new(FormKind::Production);
        state.set("date", "2024-05-10");
        state.set("crude_production", 12450);
        state.set("injection", 8200);
        state.set("api_gravity", 18.5);
        state
    }

    #[test]
    fn test_submit_success_resets() {
        let sink = CollectingSink::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut state = filled_production();

        let submitted = state.submit(&sink, &mut notes).unwrap();

        assert_eq!(sink.len(), 1);
        assert_eq!(sink.records()[0], submitted.record);
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, SAVED_TITLE);
        assert_eq!(
            notes[0].description,
            "Los datos de producción han sido registrados exitosamente"
        );
        assert_eq!(state.values(), &state.schema().defaults());
        assert!(state.errors().is_empty());
    }

    #[test]
    fn test_submit_invalid_keeps_values() {
        let sink = CollectingSink::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut state = filled_production();
        state.set("injection", -1);
        let before = state.values().clone();

        let err = state.submit(&sink, &mut notes).unwrap_err();

        assert!(matches!(err, FormError::Invalid(_)));
        assert!(sink.is_empty());
        assert!(notes.is_empty());
        assert_eq!(state.values(), &before);
        assert!(state.errors().contains("injection"));
    }

    #[test]
    fn test_historical_order_error() {
        let sink = CollectingSink::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut state = FormState::new(FormKind::Historical);
        state.set("start_date", "2024-02-01");
        state.set("end_date", "2024-01-01");

        assert!(state.submit(&sink, &mut notes).is_err());
        assert_eq!(state.errors().get("end_date"), Some(DATE_ORDER));
        assert!(sink.is_empty());

        // Fixing the range clears the error on the next attempt
        state.set("end_date", "2024-02-29");
        let submitted = state.submit(&sink, &mut notes).unwrap();
        match submitted.record {
            Record::Historical(h) => assert_eq!(h.days(), 29),
            other => panic!("unexpected record {:?}", other),
        }
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_sink_failure_keeps_values() {
        let mut notes: Vec<Notification> = Vec::new();
        let mut state = filled_production();
        let before = state.values().clone();

        let err = state.submit(&FailingSink, &mut notes).unwrap_err();

        assert!(matches!(err, FormError::Sink(_)));
        assert!(notes.is_empty());
        assert_eq!(state.values(), &before);
    }

    #[test]
    fn test_reset_clears_errors() {
        let sink = CollectingSink::new();
        let mut notes: Vec<Notification> = Vec::new();
        let mut state = FormState::new(FormKind::Station);

        assert!(state.submit(&sink, &mut notes).is_err());
        assert!(!state.errors().is_empty());

        state.reset();
        assert!(state.errors().is_empty());
    }
}
