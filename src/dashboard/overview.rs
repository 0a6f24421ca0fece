//! Daily overview projection

use chrono::NaiveDate;
use serde::Serialize;

use super::aggregate::percentage;
use super::dataset::{self, DailySnapshot, DAILY_TARGET, UTILIZATION};

/// One KPI card
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Kpi {
    pub title: &'static str,
    pub value: f64,
    pub unit: &'static str,
    /// Percent change versus the previous day
    pub change: f64,
}

impl Kpi {
    pub fn is_positive(&self) -> bool {
        self.change >= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiluentBalance {
    pub received: f64,
    pub consumed: f64,
    /// Received minus consumed
    pub balance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Efficiency {
    pub utilization: f64,
    pub daily_target: f64,
    /// Crude production deviation from the target, percent with one decimal
    pub vs_target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Overview {
    pub date: NaiveDate,
    pub total_crude: f64,
    pub crude_change: f64,
    pub kpis: Vec<Kpi>,
    pub api_gravity: f64,
    pub water_and_sediments: f64,
    pub diluent: DiluentBalance,
    pub efficiency: Efficiency,
}

/// Overview for `date`
pub fn overview(date: NaiveDate) -> Overview {
    project(date, &dataset::daily_snapshot())
}

/// Project a daily snapshot into overview cards
pub fn project(date: NaiveDate, snapshot: &DailySnapshot) -> Overview {
    let changes = dataset::daily_changes();
    const UNIT: &str = "bbl/día";

    let kpis = vec![
        Kpi {
            title: "Producción de Crudo",
            value: snapshot.total_crude,
            unit: UNIT,
            change: changes.crude,
        },
        Kpi {
            title: "Inyección Total",
            value: snapshot.injection,
            unit: UNIT,
            change: changes.injection,
        },
        Kpi {
            title: "Bombeo Total",
            value: snapshot.pumping,
            unit: UNIT,
            change: changes.pumping,
        },
        Kpi {
            title: "Diluente Consumido",
            value: snapshot.diluent_consumed,
            unit: UNIT,
            change: changes.diluent,
        },
    ];

    Overview {
        date,
        total_crude: snapshot.total_crude,
        crude_change: changes.crude,
        kpis,
        api_gravity: snapshot.api_gravity,
        water_and_sediments: snapshot.water_and_sediments,
        diluent: DiluentBalance {
            received: snapshot.diluent_received,
            consumed: snapshot.diluent_consumed,
            balance: snapshot.diluent_received - snapshot.diluent_consumed,
        },
        efficiency: Efficiency {
            utilization: UTILIZATION,
            daily_target: DAILY_TARGET,
            vs_target: percentage(snapshot.total_crude - DAILY_TARGET, DAILY_TARGET),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overview_cards() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        let view = overview(date);

        assert_eq!(view.date, date);
        assert_eq!(view.kpis.len(), 4);
        assert_eq!(view.kpis[0].value, 12450.0);
        assert!(!view.kpis[2].is_positive());
        assert_eq!(view.diluent.balance, 35.0);
        assert_eq!(view.efficiency.vs_target, 3.8);
        assert_eq!(view.efficiency.utilization, 98.5);
    }

    #[test]
    fn test_below_target() {
        let mut snapshot = dataset::daily_snapshot();
        snapshot.total_crude = 11400.0;
        let view = project(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), &snapshot);
        assert_eq!(view.efficiency.vs_target, -5.0);
    }
}
