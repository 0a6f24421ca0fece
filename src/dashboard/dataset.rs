//! In-memory production datasets
//!
//! Fixed, read-only rows backing the dashboard views until a data service
//! exists.

use serde::Serialize;

use super::filter::{Categorized, Dimension};

/// Daily production snapshot shown on the overview
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailySnapshot {
    pub total_crude: f64,
    pub injection: f64,
    pub pumping: f64,
    pub diluent_received: f64,
    pub diluent_consumed: f64,
    pub api_gravity: f64,
    pub water_and_sediments: f64,
}

/// Day-over-day change, in percent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyChanges {
    pub crude: f64,
    pub injection: f64,
    pub pumping: f64,
    pub diluent: f64,
}

pub fn daily_snapshot() -> DailySnapshot {
    DailySnapshot {
        total_crude: 12450.0,
        injection: 8200.0,
        pumping: 4850.0,
        diluent_received: 320.0,
        diluent_consumed: 285.0,
        api_gravity: 18.5,
        water_and_sediments: 2.8,
    }
}

pub fn daily_changes() -> DailyChanges {
    DailyChanges {
        crude: 5.2,
        injection: 2.1,
        pumping: -1.5,
        diluent: 0.8,
    }
}

/// Plant utilization reported for the day, in percent
pub const UTILIZATION: f64 = 98.5;

/// Daily crude production target, bbl
pub const DAILY_TARGET: f64 = 12000.0;

/// One production site (field tab) or station (station view)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SiteRow {
    pub name: &'static str,
    /// Field the site belongs to
    pub field: &'static str,
    pub crude: f64,
    pub pumping_esp: f64,
    pub pumping_pcp: f64,
    pub injection: f64,
}

impl SiteRow {
    const fn new(
        name: &'static str,
        field: &'static str,
        crude: f64,
        pumping_esp: f64,
        pumping_pcp: f64,
        injection: f64,
    ) -> Self {
        Self {
            name,
            field,
            crude,
            pumping_esp,
            pumping_pcp,
            injection,
        }
    }

    /// ESP plus PCP pumping
    pub fn pumping_total(&self) -> f64 {
        self.pumping_esp + self.pumping_pcp
    }
}

impl Categorized for SiteRow {
    fn category(&self, dimension: Dimension) -> Option<&str> {
        match dimension {
            Dimension::Field => Some(self.field),
            Dimension::Shift | Dimension::Category => None,
        }
    }
}

pub fn field_rows() -> Vec<SiteRow> {
    vec![
        SiteRow::new("Campo A-1", "Norte", 2450.0, 850.0, 320.0, 1240.0),
        SiteRow::new("Campo A-2", "Norte", 1850.0, 650.0, 280.0, 980.0),
        SiteRow::new("Campo B-1", "Sur", 3200.0, 1200.0, 450.0, 1650.0),
        SiteRow::new("Campo B-2", "Sur", 2800.0, 980.0, 380.0, 1400.0),
        SiteRow::new("Campo C-1", "Este", 1950.0, 720.0, 290.0, 1050.0),
    ]
}

pub fn station_rows() -> Vec<SiteRow> {
    vec![
        SiteRow::new("Estación A-1", "campo1", 3200.0, 850.0, 420.0, 2100.0),
        SiteRow::new("Estación A-2", "campo1", 2800.0, 720.0, 380.0, 1850.0),
        SiteRow::new("Estación B-1", "campo2", 2950.0, 780.0, 450.0, 1950.0),
        SiteRow::new("Estación B-2", "campo2", 2200.0, 580.0, 320.0, 1420.0),
        SiteRow::new("Estación C-1", "campo3", 1300.0, 350.0, 180.0, 850.0),
    ]
}

/// Field keys of the station dataset with their display labels
pub const STATION_FIELDS: &[(&str, &str)] = &[
    ("campo1", "Campo 1"),
    ("campo2", "Campo 2"),
    ("campo3", "Campo 3"),
];

/// One weekday of a category's trend
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrendPoint {
    pub day: &'static str,
    pub count: u32,
    pub production: f64,
}

/// Wells grouped by operating category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellCategory {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub count: u32,
    pub production: f64,
    pub trend: Vec<TrendPoint>,
}

const WEEKDAYS: [&str; 5] = ["Lun", "Mar", "Mié", "Jue", "Vie"];

fn trend(counts: [u32; 5], production: [f64; 5]) -> Vec<TrendPoint> {
    WEEKDAYS
        .into_iter()
        .zip(counts)
        .zip(production)
        .map(|((day, count), production)| TrendPoint {
            day,
            count,
            production,
        })
        .collect()
}

pub fn well_categories() -> Vec<WellCategory> {
    vec![
        WellCategory {
            id: 1,
            name: "Pozos Activos",
            description: "Pozos en operación normal",
            count: 156,
            production: 12450.0,
            trend: trend(
                [158, 157, 156, 157, 156],
                [12200.0, 12350.0, 12180.0, 12400.0, 12450.0],
            ),
        },
        WellCategory {
            id: 2,
            name: "Pozos Inactivos - Daños Menores",
            description: "Requieren mantenimiento menor",
            count: 23,
            production: 0.0,
            trend: trend([20, 22, 24, 23, 23], [0.0; 5]),
        },
        WellCategory {
            id: 3,
            name: "Pozos Inactivos - Daños Mayores",
            description: "Requieren reparación mayor",
            count: 8,
            production: 0.0,
            trend: trend([9, 8, 8, 8, 8], [0.0; 5]),
        },
        WellCategory {
            id: 4,
            name: "Pozos en Evaluación",
            description: "En proceso de análisis técnico",
            count: 5,
            production: 0.0,
            trend: trend([4, 5, 5, 5, 5], [0.0; 5]),
        },
        WellCategory {
            id: 5,
            name: "Pozos Abandonados",
            description: "Fuera de operación permanente",
            count: 12,
            production: 0.0,
            trend: trend([12; 5], [0.0; 5]),
        },
    ]
}

/// Target number of active wells
pub const ACTIVE_WELL_TARGET: u32 = 160;
