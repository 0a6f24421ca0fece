//! Declarative form schemas
//!
//! A schema lists the fields of one data-entry form in display order, each
//! with its kind, presence rule and numeric bounds, plus the cross-field
//! refinements evaluated after the per-field checks.

use serde::Serialize;

use super::records::FormKind;
use super::values::FormValues;

/// What kind of input control a field is bound to
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldKind {
    /// Calendar date (ISO 8601 `YYYY-MM-DD`)
    Date,
    /// Free text
    Text,
    /// Numeric input
    Number {
        /// Input step hint for the control
        step: f64,
    },
    /// Selection from a fixed list
    Choice {
        options: &'static [&'static str],
    },
}

/// A numeric bound with the message shown when it is violated
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bound {
    pub value: f64,
    pub message: &'static str,
}

impl Bound {
    pub const fn new(value: f64, message: &'static str) -> Self {
        Self { value, message }
    }
}

/// Value a field takes when the form is (re)initialized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldDefault {
    /// No value (cleared date, unselected choice)
    Unset,
    /// Numeric zero
    Zero,
    /// Empty string
    Empty,
}

/// One field of a form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Human-readable label
    pub label: &'static str,
    pub kind: FieldKind,
    /// Message shown when a required field is missing. `None` marks the
    /// field optional: absent values skip every check.
    pub required: Option<&'static str>,
    pub min: Option<Bound>,
    pub max: Option<Bound>,
    pub default: FieldDefault,
}

impl FieldSpec {
    fn new(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: None,
            min: None,
            max: None,
            default: FieldDefault::Unset,
        }
    }

    /// Required calendar date
    pub fn date(name: &'static str, label: &'static str, required: &'static str) -> Self {
        Self::new(name, label, FieldKind::Date).required(required)
    }

    /// Required non-empty text, defaulting to the empty string
    pub fn text(name: &'static str, label: &'static str, required: &'static str) -> Self {
        Self::new(name, label, FieldKind::Text)
            .required(required)
            .default_to(FieldDefault::Empty)
    }

    /// Required selection from `options`
    pub fn choice(
        name: &'static str,
        label: &'static str,
        options: &'static [&'static str],
        required: &'static str,
    ) -> Self {
        Self::new(name, label, FieldKind::Choice { options }).required(required)
    }

    /// Required number, defaulting to zero
    pub fn number(name: &'static str, label: &'static str) -> Self {
        Self::new(name, label, FieldKind::Number { step: 1.0 })
            .required(super::catalog::NUMBER_REQUIRED)
            .default_to(FieldDefault::Zero)
    }

    /// Builder: mark required with the given message
    pub fn required(mut self, message: &'static str) -> Self {
        self.required = Some(message);
        self
    }

    /// Builder: mark optional
    pub fn optional(mut self) -> Self {
        self.required = None;
        self
    }

    /// Builder: lower bound (inclusive)
    pub fn min(mut self, value: f64, message: &'static str) -> Self {
        self.min = Some(Bound::new(value, message));
        self
    }

    /// Builder: upper bound (inclusive)
    pub fn max(mut self, value: f64, message: &'static str) -> Self {
        self.max = Some(Bound::new(value, message));
        self
    }

    /// Builder: input step for numeric fields
    pub fn step(mut self, step: f64) -> Self {
        if let FieldKind::Number { step: ref mut s } = self.kind {
            *s = step;
        }
        self
    }

    /// Builder: reset value
    pub fn default_to(mut self, default: FieldDefault) -> Self {
        self.default = default;
        self
    }

    pub fn is_required(&self) -> bool {
        self.required.is_some()
    }
}

/// Cross-field rule, evaluated after every per-field check
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "rule", rename_all = "snake_case")]
pub enum Refinement {
    /// Date field `later` must not precede date field `earlier`.
    /// The message attaches to `later`.
    NotBefore {
        earlier: &'static str,
        later: &'static str,
        message: &'static str,
    },
}

impl Refinement {
    /// Field the failure message is attached to
    pub fn target(&self) -> &'static str {
        match self {
            Refinement::NotBefore { later, .. } => later,
        }
    }

    /// Fields that must individually pass before the rule is evaluated
    pub fn operands(&self) -> [&'static str; 2] {
        match self {
            Refinement::NotBefore { earlier, later, .. } => [earlier, later],
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Refinement::NotBefore { message, .. } => message,
        }
    }
}

/// Complete declaration of one data-entry form
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schema {
    pub kind: FormKind,
    pub title: &'static str,
    pub fields: Vec<FieldSpec>,
    pub refinements: Vec<Refinement>,
}

impl Schema {
    pub fn new(kind: FormKind, title: &'static str) -> Self {
        Self {
            kind,
            title,
            fields: Vec::new(),
            refinements: Vec::new(),
        }
    }

    /// Builder: append a field
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Builder: append a cross-field rule
    pub fn refine(mut self, refinement: Refinement) -> Self {
        self.refinements.push(refinement);
        self
    }

    /// Look up a field by wire name
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Values the form takes when (re)initialized
    pub fn defaults(&self) -> FormValues {
        FormValues::defaults(self)
    }

    /// Field names in declaration order
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().map(|f| f.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders() {
        let spec = FieldSpec::number("api_gravity", "°API")
            .step(0.1)
            .min(0.0, "low")
            .max(100.0, "high");

        assert!(spec.is_required());
        assert_eq!(spec.default, FieldDefault::Zero);
        assert_eq!(spec.kind, FieldKind::Number { step: 0.1 });
        assert_eq!(spec.max.map(|b| b.value), Some(100.0));

        let optional = FieldSpec::number("production", "Producción").optional();
        assert!(!optional.is_required());
    }

    #[test]
    fn test_refinement_target() {
        let rule = Refinement::NotBefore {
            earlier: "start_date",
            later: "end_date",
            message: "order",
        };
        assert_eq!(rule.target(), "end_date");
        assert_eq!(rule.operands(), ["start_date", "end_date"]);
    }
}
