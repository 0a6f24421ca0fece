//! Wells-by-category projection

use serde::Serialize;

use super::aggregate::{percentage, round1};
use super::dataset::{self, TrendPoint, WellCategory, ACTIVE_WELL_TARGET};

/// Category card with derived shares
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryCard {
    pub id: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub count: u32,
    pub production: f64,
    /// Share of all wells, one decimal
    pub share: f64,
    /// Production per well, only for producing categories
    pub average_production: Option<f64>,
    pub trend: Vec<TrendPoint>,
    /// Follow-up checklist for the inactive categories
    pub actions: Option<ActionList>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellsSummary {
    pub total_wells: u32,
    pub total_production: f64,
    pub active_wells: u32,
    pub active_target: u32,
    pub active_share: f64,
    /// Categories 2 and 3
    pub inactive_share: f64,
    /// Total production per active well, rounded
    pub average_per_active: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WellsView {
    pub categories: Vec<CategoryCard>,
    pub summary: WellsSummary,
}

/// Recommended actions for a category id
pub fn actions_for(id: u8) -> Option<ActionList> {
    match id {
        2 => Some(ActionList {
            title: "Acciones Recomendadas",
            items: &[
                "Programar mantenimiento preventivo",
                "Revisión de equipos de bombeo",
                "Limpieza de líneas de producción",
            ],
        }),
        3 => Some(ActionList {
            title: "Acciones Urgentes",
            items: &[
                "Reparación de equipos críticos",
                "Reemplazo de componentes dañados",
                "Evaluación de viabilidad económica",
            ],
        }),
        _ => None,
    }
}

pub fn wells() -> WellsView {
    project(&dataset::well_categories())
}

pub fn project(categories: &[WellCategory]) -> WellsView {
    let total_wells: u32 = categories.iter().map(|c| c.count).sum();
    let total_production: f64 = categories.iter().map(|c| c.production).sum();
    let count_of = |id: u8| {
        categories
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.count)
            .unwrap_or(0)
    };

    let active_wells = count_of(1);
    let inactive = count_of(2) + count_of(3);
    let total = f64::from(total_wells);

    let cards = categories
        .iter()
        .map(|c| CategoryCard {
            id: c.id,
            name: c.name,
            description: c.description,
            count: c.count,
            production: c.production,
            share: percentage(f64::from(c.count), total),
            average_production: (c.production > 0.0 && c.count > 0)
                .then(|| round1(c.production / f64::from(c.count))),
            trend: c.trend.clone(),
            actions: actions_for(c.id),
        })
        .collect();

    let average_per_active = if active_wells == 0 {
        0.0
    } else {
        (total_production / f64::from(active_wells)).round()
    };

    WellsView {
        categories: cards,
        summary: WellsSummary {
            total_wells,
            total_production,
            active_wells,
            active_target: ACTIVE_WELL_TARGET,
            active_share: percentage(f64::from(active_wells), total),
            inactive_share: percentage(f64::from(inactive), total),
            average_per_active,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary() {
        let view = wells();
        let s = &view.summary;

        assert_eq!(s.total_wells, 204);
        assert_eq!(s.total_production, 12450.0);
        assert_eq!(s.active_wells, 156);
        assert_eq!(s.active_share, 76.5);
        assert_eq!(s.inactive_share, 15.2);
        assert_eq!(s.average_per_active, 80.0);
        assert_eq!(s.active_target, 160);
    }

    #[test]
    fn test_category_counts_sum_to_total() {
        let view = wells();
        let counts: u32 = view.categories.iter().map(|c| c.count).sum();
        assert_eq!(counts, view.summary.total_wells);
    }

    #[test]
    fn test_cards() {
        let view = wells();
        assert_eq!(view.categories[0].average_production, Some(79.8));
        assert_eq!(view.categories[1].average_production, None);
        assert_eq!(view.categories[1].share, 11.3);
        assert_eq!(view.categories[1].actions.as_ref().unwrap().title, "Acciones Recomendadas");
        assert_eq!(view.categories[2].actions.as_ref().unwrap().items.len(), 3);
        assert!(view.categories[3].actions.is_none());
    }

    #[test]
    fn test_two_category_share() {
        let categories = vec![
            WellCategory {
                id: 1,
                name: "A",
                description: "",
                count: 3,
                production: 100.0,
                trend: Vec::new(),
            },
            WellCategory {
                id: 2,
                name: "B",
                description: "",
                count: 2,
                production: 0.0,
                trend: Vec::new(),
            },
        ];
        let view = project(&categories);
        assert_eq!(view.summary.total_wells, 5);
        assert_eq!(view.categories[0].share, 60.0);
        assert_eq!(view.summary.active_share, 60.0);
    }

    #[test]
    fn test_empty_dataset() {
        let view = project(&[]);
        assert_eq!(view.summary.total_wells, 0);
        assert_eq!(view.summary.active_share, 0.0);
        assert_eq!(view.summary.average_per_active, 0.0);
    }
}
