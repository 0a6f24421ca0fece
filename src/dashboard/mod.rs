//! Dashboard projections
//!
//! Read-only views over the in-memory datasets: each view owns its selector
//! state and derives filtered, aggregated rows ready for charting.

pub mod aggregate;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod history;
pub mod overview;
pub mod sites;
pub mod wells;

use serde::{Deserialize, Serialize};
use std::str::FromStr;

pub use aggregate::{breakdown, percentage, Breakdown, CategoryTotal, SeriesStats};
pub use error::{DashboardError, DashboardResult};
pub use filter::{Categorized, Dimension, Filter, Selection, Shift, ALL};
pub use history::{
    HistoryGenerator, HistoryPoint, HistoryRange, HistoryState, HistoryView, Preset, Series,
    SeriesToggles,
};
pub use overview::{overview, Overview};
pub use sites::{by_field, by_station, SiteFilter, SiteProjection};
pub use wells::{wells, WellsView};

/// Projections served by the data API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    Overview,
    Fields,
    Stations,
    History,
    Wells,
}

impl View {
    pub fn all() -> &'static [View] {
        &[
            View::Overview,
            View::Fields,
            View::Stations,
            View::History,
            View::Wells,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            View::Overview => "overview",
            View::Fields => "fields",
            View::Stations => "stations",
            View::History => "history",
            View::Wells => "wells",
        }
    }
}

impl FromStr for View {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        View::all()
            .iter()
            .copied()
            .find(|v| v.key() == s)
            .ok_or_else(|| DashboardError::UnknownView(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct WellRow {
        category: &'static str,
        production: f64,
    }

    impl Categorized for WellRow {
        fn category(&self, dimension: Dimension) -> Option<&str> {
            match dimension {
                Dimension::Category => Some(self.category),
                _ => None,
            }
        }
    }

    #[test]
    fn test_filter_then_breakdown() {
        let mut rows = Vec::new();
        rows.extend((0..3).map(|_| WellRow { category: "A", production: 100.0 / 3.0 }));
        rows.extend((0..2).map(|_| WellRow { category: "B", production: 0.0 }));

        let only_a = Filter::new().by(Dimension::Category, Selection::one("A"));
        assert_eq!(only_a.apply(&rows).len(), 3);

        let everything = Filter::new().by(Dimension::Category, Selection::parse(ALL));
        assert_eq!(everything.apply(&rows).len(), 5);

        let totals = breakdown(&rows, |r| r.category, |r| r.production);
        assert_eq!(totals.grand_count, 5);
        assert_eq!(totals.get("A").unwrap().count_share, 60.0);
    }

    #[test]
    fn test_view_keys() {
        for view in View::all() {
            assert_eq!(view.key().parse::<View>().unwrap(), *view);
        }
        assert!("pozos".parse::<View>().is_err());
    }
}
