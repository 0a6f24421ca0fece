//! Synthetic production history
//!
//! Each calendar day of a range gets a periodic term driven by the day of
//! month plus seeded uniform jitter. The same seed and range always yield the
//! same rows.

use chrono::{Datelike, Days, Duration, NaiveDate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::str::FromStr;

use super::aggregate::SeriesStats;
use super::error::{DashboardError, DashboardResult};

/// Inclusive date range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl HistoryRange {
    /// Longest span accepted, the year preset with both ends included
    pub const MAX_DAYS: usize = Preset::Year.days() as usize + 1;

    pub fn new(from: NaiveDate, to: NaiveDate) -> DashboardResult<Self> {
        if from > to {
            return Err(DashboardError::InvalidRange { from, to });
        }
        let range = Self { from, to };
        let days = range.day_count();
        if days > Self::MAX_DAYS {
            return Err(DashboardError::RangeTooLong {
                days,
                max: Self::MAX_DAYS,
            });
        }
        Ok(range)
    }

    /// `days` back from `end`, both ends included
    pub fn ending_at(end: NaiveDate, days: u32) -> DashboardResult<Self> {
        let from = end
            .checked_sub_days(Days::new(u64::from(days)))
            .ok_or(DashboardError::DateOutOfRange { date: end, days })?;
        Self::new(from, end)
    }

    /// Number of calendar days covered
    pub fn day_count(&self) -> usize {
        ((self.to - self.from).num_days() + 1) as usize
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let from = self.from;
        (0..self.day_count() as i64).map(move |offset| from + Duration::days(offset))
    }
}

/// Quick range selections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Preset {
    Week,
    Month,
    Quarter,
    Year,
}

impl Preset {
    pub const DEFAULT: Preset = Preset::Month;

    pub fn all() -> &'static [Preset] {
        &[Preset::Week, Preset::Month, Preset::Quarter, Preset::Year]
    }

    pub const fn days(&self) -> u32 {
        match self {
            Preset::Week => 7,
            Preset::Month => 30,
            Preset::Quarter => 90,
            Preset::Year => 365,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Preset::Week => "7 días",
            Preset::Month => "30 días",
            Preset::Quarter => "90 días",
            Preset::Year => "1 año",
        }
    }

    pub fn from_days(days: u32) -> DashboardResult<Self> {
        Preset::all()
            .iter()
            .copied()
            .find(|p| p.days() == days)
            .ok_or(DashboardError::InvalidPreset(days))
    }

    pub fn range(&self, end: NaiveDate) -> DashboardResult<HistoryRange> {
        HistoryRange::ending_at(end, self.days())
    }
}

/// One generated day
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryPoint {
    pub date: NaiveDate,
    /// `dd/MM`
    pub label: String,
    pub crude: f64,
    pub pumping: f64,
    pub injection: f64,
    pub diluent: f64,
}

/// Seeded generator parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoryGenerator {
    pub seed: u64,
    pub base: f64,
    pub amplitude: f64,
    pub jitter: f64,
}

impl HistoryGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            base: 12000.0,
            amplitude: 1000.0,
            jitter: 500.0,
        }
    }

    /// One row per day of `range`
    pub fn generate(&self, range: &HistoryRange) -> Vec<HistoryPoint> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        range
            .days()
            .map(|date| {
                let phase = f64::from(date.day()) / 30.0 * 2.0 * PI;
                let variation = phase.sin() * self.amplitude + rng.gen::<f64>() * self.jitter;
                let level = self.base + variation;
                HistoryPoint {
                    date,
                    label: date.format("%d/%m").to_string(),
                    crude: level.round(),
                    pumping: (level * 0.4).round(),
                    injection: (level * 0.65).round(),
                    diluent: (200.0 + rng.gen::<f64>() * 100.0).round(),
                }
            })
            .collect()
    }
}

/// A chartable series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Series {
    Crude,
    Pumping,
    Injection,
    Diluent,
}

impl Series {
    pub fn all() -> &'static [Series] {
        &[Series::Crude, Series::Pumping, Series::Injection, Series::Diluent]
    }

    pub fn key(&self) -> &'static str {
        match self {
            Series::Crude => "crude",
            Series::Pumping => "pumping",
            Series::Injection => "injection",
            Series::Diluent => "diluent",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Series::Crude => "Producción de Crudo",
            Series::Pumping => "Bombeo",
            Series::Injection => "Inyección",
            Series::Diluent => "Diluente",
        }
    }

    pub fn value(&self, point: &HistoryPoint) -> f64 {
        match self {
            Series::Crude => point.crude,
            Series::Pumping => point.pumping,
            Series::Injection => point.injection,
            Series::Diluent => point.diluent,
        }
    }
}

impl FromStr for Series {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Series::all()
            .iter()
            .copied()
            .find(|series| series.key() == s.trim())
            .ok_or_else(|| DashboardError::UnknownSeries(s.to_string()))
    }
}

/// Which series the chart shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesToggles {
    pub crude: bool,
    pub pumping: bool,
    pub injection: bool,
    pub diluent: bool,
}

impl Default for SeriesToggles {
    fn default() -> Self {
        Self {
            crude: true,
            pumping: true,
            injection: true,
            diluent: false,
        }
    }
}

impl SeriesToggles {
    /// Everything off
    pub fn none() -> Self {
        Self {
            crude: false,
            pumping: false,
            injection: false,
            diluent: false,
        }
    }

    /// Enable exactly the listed series, e.g. `crude,diluent`
    pub fn parse_list(list: &str) -> DashboardResult<Self> {
        let mut toggles = Self::none();
        for key in list.split(',').filter(|k| !k.trim().is_empty()) {
            toggles.set(key.parse()?, true);
        }
        Ok(toggles)
    }

    pub fn is_on(&self, series: Series) -> bool {
        match series {
            Series::Crude => self.crude,
            Series::Pumping => self.pumping,
            Series::Injection => self.injection,
            Series::Diluent => self.diluent,
        }
    }

    pub fn set(&mut self, series: Series, on: bool) {
        match series {
            Series::Crude => self.crude = on,
            Series::Pumping => self.pumping = on,
            Series::Injection => self.injection = on,
            Series::Diluent => self.diluent = on,
        }
    }

    pub fn toggle(&mut self, series: Series) {
        self.set(series, !self.is_on(series));
    }

    /// Enabled series in display order
    pub fn enabled(&self) -> Vec<Series> {
        Series::all()
            .iter()
            .copied()
            .filter(|s| self.is_on(*s))
            .collect()
    }
}

/// Values of one series across the generated days
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesLine {
    pub series: Series,
    pub label: &'static str,
    pub values: Vec<f64>,
}

/// Everything the history tab renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryView {
    pub range: HistoryRange,
    pub seed: u64,
    pub points: Vec<HistoryPoint>,
    /// Lines for the enabled series only
    pub lines: Vec<SeriesLine>,
    /// Crude production statistics over the period
    pub stats: SeriesStats,
}

impl HistoryView {
    pub fn build(generator: &HistoryGenerator, range: HistoryRange, toggles: SeriesToggles) -> Self {
        let points = generator.generate(&range);
        let lines = toggles
            .enabled()
            .into_iter()
            .map(|series| SeriesLine {
                series,
                label: series.label(),
                values: points.iter().map(|p| series.value(p)).collect(),
            })
            .collect();
        let stats = SeriesStats::from_values(points.iter().map(|p| p.crude));

        Self {
            range,
            seed: generator.seed,
            points,
            lines,
            stats,
        }
    }
}

/// Filter state of a mounted history tab
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryState {
    pub generator: HistoryGenerator,
    pub range: HistoryRange,
    pub toggles: SeriesToggles,
}

impl HistoryState {
    /// Default month range ending at `selected`
    pub fn new(selected: NaiveDate, seed: u64) -> DashboardResult<Self> {
        Ok(Self {
            generator: HistoryGenerator::new(seed),
            range: Preset::DEFAULT.range(selected)?,
            toggles: SeriesToggles::default(),
        })
    }

    /// Re-anchor the range on its current end. On error the range is kept.
    pub fn apply_preset(&mut self, preset: Preset) -> DashboardResult<()> {
        self.range = preset.range(self.range.to)?;
        Ok(())
    }

    pub fn set_range(&mut self, from: NaiveDate, to: NaiveDate) -> DashboardResult<()> {
        self.range = HistoryRange::new(from, to)?;
        Ok(())
    }

    pub fn toggle(&mut self, series: Series) {
        self.toggles.toggle(series);
    }

    pub fn view(&self) -> HistoryView {
        HistoryView::build(&self.generator, self.range, self.toggles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_one_row_per_day() {
        let range = HistoryRange::new(date(2024, 2, 25), date(2024, 3, 5)).unwrap();
        let points = HistoryGenerator::new(7).generate(&range);

        assert_eq!(points.len(), 10);
        assert_eq!(points[0].label, "25/02");
        assert_eq!(points[4].date, date(2024, 2, 29));
        assert_eq!(points[9].label, "05/03");
    }

    #[test]
    fn test_same_seed_same_rows() {
        let range = Preset::Quarter.range(date(2024, 6, 30)).unwrap();
        let a = HistoryGenerator::new(42).generate(&range);
        let b = HistoryGenerator::new(42).generate(&range);
        let c = HistoryGenerator::new(43).generate(&range);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_values_within_bounds() {
        let range = Preset::Year.range(date(2024, 12, 31)).unwrap();
        for point in HistoryGenerator::new(1).generate(&range) {
            assert!(point.crude >= 11000.0 && point.crude <= 13500.0);
            assert!(point.diluent >= 200.0 && point.diluent <= 300.0);
            assert!(point.pumping < point.injection);
            assert!(point.injection < point.crude);
        }
    }

    #[test]
    fn test_default_range() {
        let state = HistoryState::new(date(2024, 5, 31), 9).unwrap();
        assert_eq!(state.range.from, date(2024, 5, 1));
        assert_eq!(state.range.day_count(), 31);
        assert_eq!(state.toggles.enabled(), vec![Series::Crude, Series::Pumping, Series::Injection]);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let mut state = HistoryState::new(date(2024, 5, 31), 9).unwrap();
        assert!(state.set_range(date(2024, 6, 1), date(2024, 5, 1)).is_err());
        assert_eq!(state.range.to, date(2024, 5, 31));
    }

    #[test]
    fn test_view_lines_follow_toggles() {
        let mut state = HistoryState::new(date(2024, 5, 31), 3).unwrap();
        state.apply_preset(Preset::Week).unwrap();
        state.toggle(Series::Diluent);
        state.toggle(Series::Pumping);

        let view = state.view();
        assert_eq!(view.points.len(), 8);
        let shown: Vec<_> = view.lines.iter().map(|l| l.series).collect();
        assert_eq!(shown, vec![Series::Crude, Series::Injection, Series::Diluent]);
        assert_eq!(view.stats.count, 8);
        assert!(view.stats.min <= view.stats.average && view.stats.average <= view.stats.max);
    }

    #[test]
    fn test_range_span_capped() {
        let year = HistoryRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        assert_eq!(year.day_count(), HistoryRange::MAX_DAYS);
        assert_eq!(Preset::Year.range(date(2024, 12, 31)).unwrap().day_count(), 366);

        let err = HistoryRange::new(date(2023, 1, 1), date(2024, 1, 2)).unwrap_err();
        assert_eq!(err, DashboardError::RangeTooLong { days: 367, max: 366 });
        assert!(HistoryRange::new(date(1, 1, 1), date(9999, 12, 31)).is_err());

        let mut state = HistoryState::new(date(2024, 5, 31), 9).unwrap();
        assert!(state.set_range(date(2020, 1, 1), date(2024, 5, 31)).is_err());
        assert_eq!(state.range.day_count(), 31);
    }

    #[test]
    fn test_range_near_min_date() {
        let end = NaiveDate::MIN + Duration::days(4);
        assert_eq!(
            HistoryRange::ending_at(end, 365),
            Err(DashboardError::DateOutOfRange { date: end, days: 365 })
        );
        assert!(Preset::Week.range(end).is_err());
        assert!(HistoryState::new(end, 1).is_err());

        let range = HistoryRange::ending_at(end, 4).unwrap();
        assert_eq!(range.from, NaiveDate::MIN);

        let mut state = HistoryState::new(date(2024, 5, 31), 9).unwrap();
        state.range = range;
        assert!(state.apply_preset(Preset::Year).is_err());
        assert_eq!(state.range, range);
    }

    #[test]
    fn test_presets_and_series_parse() {
        assert_eq!(Preset::from_days(90).unwrap(), Preset::Quarter);
        assert!(Preset::from_days(14).is_err());

        let toggles = SeriesToggles::parse_list("crude,diluent").unwrap();
        assert_eq!(toggles.enabled(), vec![Series::Crude, Series::Diluent]);
        assert!(SeriesToggles::parse_list("gas").is_err());
    }
}
