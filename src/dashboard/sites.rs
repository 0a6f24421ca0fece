//! Per-field and per-station production projections
//!
//! Both views filter the site rows by field (and shift, which the rows do not
//! carry), add the ESP + PCP pumping total, and summarize each field.

use serde::Serialize;

use super::aggregate::breakdown;
use super::dataset::{self, SiteRow};
use super::filter::{Dimension, Filter, Selection, Shift};

/// Site row with derived totals
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteView {
    pub name: &'static str,
    pub field: &'static str,
    pub crude: f64,
    pub pumping_esp: f64,
    pub pumping_pcp: f64,
    pub pumping_total: f64,
    pub injection: f64,
}

impl From<&SiteRow> for SiteView {
    fn from(row: &SiteRow) -> Self {
        Self {
            name: row.name,
            field: row.field,
            crude: row.crude,
            pumping_esp: row.pumping_esp,
            pumping_pcp: row.pumping_pcp,
            pumping_total: row.pumping_total(),
            injection: row.injection,
        }
    }
}

/// Summary card of one field
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldSummary {
    pub field: String,
    pub sites: usize,
    pub crude: f64,
    pub injection: f64,
}

/// Selector state of a site view
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SiteFilter {
    pub field: Selection,
    pub shift: Shift,
}

impl SiteFilter {
    pub fn new(field: Selection, shift: Shift) -> Self {
        Self { field, shift }
    }

    fn to_filter(&self) -> Filter {
        Filter::new()
            .by(Dimension::Field, self.field.clone())
            .shift(self.shift)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteProjection {
    /// Filtered rows, in dataset order
    pub rows: Vec<SiteView>,
    /// Distinct fields of the unfiltered dataset, for the selector
    pub fields: Vec<String>,
    /// One card per field present in the filtered rows
    pub summary: Vec<FieldSummary>,
}

/// Project `rows` through `filter`
pub fn project(rows: &[SiteRow], filter: &SiteFilter) -> SiteProjection {
    let kept: Vec<SiteRow> = filter
        .to_filter()
        .apply(rows)
        .into_iter()
        .cloned()
        .collect();

    let crude = breakdown(&kept, |r| r.field, |r| r.crude);
    let injection = breakdown(&kept, |r| r.field, |r| r.injection);
    let summary = crude
        .categories
        .iter()
        .map(|c| FieldSummary {
            field: c.category.clone(),
            sites: c.count,
            crude: c.total,
            injection: injection.get(&c.category).map(|i| i.total).unwrap_or(0.0),
        })
        .collect();

    let fields = breakdown(rows, |r| r.field, |_| 0.0)
        .categories
        .into_iter()
        .map(|c| c.category)
        .collect();

    SiteProjection {
        rows: kept.iter().map(SiteView::from).collect(),
        fields,
        summary,
    }
}

/// Dashboard "by field" tab
pub fn by_field(filter: &SiteFilter) -> SiteProjection {
    project(&dataset::field_rows(), filter)
}

/// Per-station view
pub fn by_station(filter: &SiteFilter) -> SiteProjection {
    project(&dataset::station_rows(), filter)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_fields() {
        let view = by_field(&SiteFilter::default());
        assert_eq!(view.rows.len(), 5);
        assert_eq!(view.fields, vec!["Norte", "Sur", "Este"]);
        assert_eq!(view.rows[0].pumping_total, 1170.0);
    }

    #[test]
    fn test_single_field() {
        let view = by_field(&SiteFilter::new(Selection::one("Sur"), Shift::All));
        assert_eq!(view.rows.len(), 2);
        assert!(view.rows.iter().all(|r| r.field == "Sur"));
        assert_eq!(view.summary.len(), 1);
        assert_eq!(view.summary[0].crude, 6000.0);
        assert_eq!(view.summary[0].injection, 3050.0);
        // Selector options always list every field
        assert_eq!(view.fields.len(), 3);
    }

    #[test]
    fn test_shift_does_not_filter() {
        let all = by_field(&SiteFilter::default());
        let night = by_field(&SiteFilter::new(Selection::All, Shift::Night));
        assert_eq!(all, night);
    }

    #[test]
    fn test_summary_sums_to_grand_total() {
        let rows = dataset::station_rows();
        let view = project(&rows, &SiteFilter::default());
        let crude: f64 = view.summary.iter().map(|s| s.crude).sum();
        let grand: f64 = rows.iter().map(|r| r.crude).sum();
        assert_eq!(crude, grand);
        assert_eq!(view.summary.iter().map(|s| s.sites).sum::<usize>(), rows.len());
    }

    #[test]
    fn test_unknown_field_is_empty() {
        let view = by_station(&SiteFilter::new(Selection::one("campo9"), Shift::All));
        assert!(view.rows.is_empty());
        assert!(view.summary.is_empty());
    }
}
