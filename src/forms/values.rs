//! Raw form values
//!
//! What a bound control set hands over before validation: loosely typed JSON
//! scalars keyed by field name. Numbers may arrive as numbers or numeric
//! strings, dates as ISO 8601 strings.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use super::schema::{FieldDefault, Schema};

/// Raw, unvalidated field values of one form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormValues(BTreeMap<String, Value>);

impl FormValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declared defaults of `schema`: zeroed numerics, empty strings,
    /// cleared dates and selections.
    pub fn defaults(schema: &Schema) -> Self {
        let mut values = Self::new();
        for field in &schema.fields {
            match field.default {
                FieldDefault::Unset => {}
                FieldDefault::Zero => {
                    values.0.insert(field.name.to_string(), Value::from(0.0));
                }
                FieldDefault::Empty => {
                    values.0.insert(field.name.to_string(), Value::from(""));
                }
            }
        }
        values
    }

    /// Builder: set a value
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(name.into(), value.into());
    }

    /// Clear a value (the control is emptied)
    pub fn clear(&mut self, name: &str) {
        self.0.remove(name);
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// The value of `name`, treating null and blank strings as absent
    pub fn present(&self, name: &str) -> Option<&Value> {
        match self.0.get(name)? {
            Value::Null => None,
            Value::String(s) if s.is_empty() => None,
            value => Some(value),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FormValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
