//! Category aggregation and series statistics

use serde::Serialize;

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// `part` as a percentage of `whole`, one decimal. Zero when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        round1(part * 100.0 / whole)
    }
}

/// Aggregate of one category value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    /// Number of rows in the category
    pub count: usize,
    /// Sum of the measure over those rows
    pub total: f64,
    /// Row count as a percentage of all rows
    pub count_share: f64,
    /// Measure total as a percentage of the grand total
    pub total_share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Breakdown {
    /// One entry per distinct category, in first-appearance order
    pub categories: Vec<CategoryTotal>,
    pub grand_count: usize,
    pub grand_total: f64,
}

impl Breakdown {
    pub fn get(&self, category: &str) -> Option<&CategoryTotal> {
        self.categories.iter().find(|c| c.category == category)
    }
}

/// Group `rows` by `key` and sum `measure` per group
pub fn breakdown<T, K, M>(rows: &[T], key: K, measure: M) -> Breakdown
where
    K: Fn(&T) -> &str,
    M: Fn(&T) -> f64,
{
    let mut categories: Vec<CategoryTotal> = Vec::new();
    let mut grand_total = 0.0;

    for row in rows {
        let category = key(row);
        let value = measure(row);
        grand_total += value;

        match categories.iter_mut().find(|c| c.category == category) {
            Some(entry) => {
                entry.count += 1;
                entry.total += value;
            }
            None => categories.push(CategoryTotal {
                category: category.to_string(),
                count: 1,
                total: value,
                count_share: 0.0,
                total_share: 0.0,
            }),
        }
    }

    let grand_count = rows.len();
    for entry in &mut categories {
        entry.count_share = percentage(entry.count as f64, grand_count as f64);
        entry.total_share = percentage(entry.total, grand_total);
    }

    Breakdown {
        categories,
        grand_count,
        grand_total,
    }
}

/// Summary statistics over one series
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeriesStats {
    /// Mean, rounded to the nearest unit
    pub average: f64,
    pub max: f64,
    pub min: f64,
    pub count: usize,
}

impl SeriesStats {
    /// Statistics of `values`; all zero for an empty series
    pub fn from_values<I: IntoIterator<Item = f64>>(values: I) -> Self {
        let mut count = 0usize;
        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;

        for value in values {
            count += 1;
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        if count == 0 {
            return Self {
                average: 0.0,
                max: 0.0,
                min: 0.0,
                count: 0,
            };
        }

        Self {
            average: (sum / count as f64).round(),
            max,
            min,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Well {
        category: &'static str,
        production: f64,
    }

    fn wells() -> Vec<Well> {
        let mut rows = Vec::new();
        for _ in 0..3 {
            rows.push(Well { category: "A", production: 100.0 / 3.0 });
        }
        for _ in 0..2 {
            rows.push(Well { category: "B", production: 0.0 });
        }
        rows
    }

    #[test]
    fn test_two_category_example() {
        let rows = wells();
        let result = breakdown(&rows, |w| w.category, |w| w.production);

        assert_eq!(result.grand_count, 5);
        let a = result.get("A").unwrap();
        assert_eq!(a.count, 3);
        assert_eq!(a.count_share, 60.0);
        assert!((a.total - 100.0).abs() < 1e-9);
        assert_eq!(result.get("B").unwrap().count_share, 40.0);
    }

    #[test]
    fn test_totals_sum_to_grand_total() {
        let rows = wells();
        let result = breakdown(&rows, |w| w.category, |w| w.production);

        let counts: usize = result.categories.iter().map(|c| c.count).sum();
        let totals: f64 = result.categories.iter().map(|c| c.total).sum();
        assert_eq!(counts, result.grand_count);
        assert!((totals - result.grand_total).abs() < 1e-9);
    }

    #[test]
    fn test_first_appearance_order() {
        let rows = vec![
            Well { category: "Sur", production: 1.0 },
            Well { category: "Norte", production: 1.0 },
            Well { category: "Sur", production: 1.0 },
        ];
        let result = breakdown(&rows, |w| w.category, |w| w.production);
        let order: Vec<_> = result.categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(order, vec!["Sur", "Norte"]);
    }

    #[test]
    fn test_percentage() {
        assert_eq!(percentage(156.0, 204.0), 76.5);
        assert_eq!(percentage(1.0, 0.0), 0.0);
        assert_eq!(round1(3.75), 3.8);
    }

    #[test]
    fn test_series_stats() {
        let stats = SeriesStats::from_values([10.0, 11.0, 13.0]);
        assert_eq!(stats.average, 11.0);
        assert_eq!(stats.max, 13.0);
        assert_eq!(stats.min, 10.0);
        assert_eq!(stats.count, 3);

        let empty = SeriesStats::from_values(Vec::new());
        assert_eq!(empty.count, 0);
        assert_eq!(empty.average, 0.0);
    }
}
