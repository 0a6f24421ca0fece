//! Categorical filters
//!
//! A [`Filter`] holds one [`Selection`] per dimension and keeps the rows that
//! match every one of them. The `"todos"` sentinel matches any value, and a
//! dimension a row does not carry places no constraint on that row.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

use super::error::DashboardError;

/// Catch-all sentinel
pub const ALL: &str = "todos";

/// Either every value of a dimension or exactly one
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    One(String),
}

impl Selection {
    /// Parse a selector value; the sentinel and blank input select everything
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() || value == ALL {
            Selection::All
        } else {
            Selection::One(value.to_string())
        }
    }

    pub fn one(value: impl Into<String>) -> Self {
        Selection::One(value.into())
    }

    pub fn matches(&self, value: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::One(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => ALL,
            Selection::One(value) => value,
        }
    }
}

impl From<Option<&str>> for Selection {
    fn from(value: Option<&str>) -> Self {
        value.map(Selection::parse).unwrap_or_default()
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Selection::parse(&value))
    }
}

/// Work shift
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[default]
    All,
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub fn all() -> &'static [Shift] {
        &[Shift::All, Shift::Morning, Shift::Afternoon, Shift::Night]
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Shift::All => "Todos los turnos",
            Shift::Morning => "Mañana",
            Shift::Afternoon => "Tarde",
            Shift::Night => "Noche",
        }
    }

    pub fn selection(&self) -> Selection {
        match self {
            Shift::All => Selection::All,
            Shift::Morning => Selection::one("morning"),
            Shift::Afternoon => Selection::one("afternoon"),
            Shift::Night => Selection::one("night"),
        }
    }
}

impl FromStr for Shift {
    type Err = DashboardError;

    /// Accepts both shift vocabularies used by the production views
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | ALL | "all" => Ok(Shift::All),
            "mañana" | "manana" | "matutino" | "morning" => Ok(Shift::Morning),
            "tarde" | "vespertino" | "afternoon" => Ok(Shift::Afternoon),
            "noche" | "nocturno" | "night" => Ok(Shift::Night),
            other => Err(DashboardError::UnknownShift(other.to_string())),
        }
    }
}

/// A categorical attribute rows may carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Field,
    Shift,
    Category,
}

/// Rows that expose categorical attributes to filters
pub trait Categorized {
    /// Value of `dimension`, or `None` when the row does not carry it
    fn category(&self, dimension: Dimension) -> Option<&str>;
}

/// AND-composed selections
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    selections: Vec<(Dimension, Selection)>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: constrain `dimension`, replacing any earlier selection on it
    pub fn by(mut self, dimension: Dimension, selection: Selection) -> Self {
        self.set(dimension, selection);
        self
    }

    /// Builder: constrain the shift
    pub fn shift(self, shift: Shift) -> Self {
        self.by(Dimension::Shift, shift.selection())
    }

    pub fn set(&mut self, dimension: Dimension, selection: Selection) {
        self.selections.retain(|(d, _)| *d != dimension);
        self.selections.push((dimension, selection));
    }

    pub fn selection(&self, dimension: Dimension) -> Selection {
        self.selections
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, s)| s.clone())
            .unwrap_or_default()
    }

    pub fn matches<T: Categorized>(&self, row: &T) -> bool {
        self.selections
            .iter()
            .all(|(dimension, selection)| match row.category(*dimension) {
                Some(value) => selection.matches(value),
                None => true,
            })
    }

    /// Matching rows, in dataset order
    pub fn apply<'a, T: Categorized>(&self, rows: &'a [T]) -> Vec<&'a T> {
        rows.iter().filter(|row| self.matches(*row)).collect()
    }
}
