//! Dashboard Routes
//!
//! Read-only projections over the production datasets.
//!
//! - GET /api/v1/dashboard/overview?date=
//! - GET /api/v1/dashboard/fields?field=&shift=
//! - GET /api/v1/dashboard/stations?field=&shift=
//! - GET /api/v1/dashboard/history?date=&days=&from=&to=&series=&seed=
//! - GET /api/v1/dashboard/wells

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;

use crate::api::dto::{HistoryQuery, OverviewQuery, SitesQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::dashboard::{
    self, HistoryGenerator, HistoryRange, HistoryView, Overview, Preset, Selection,
    SeriesToggles, Shift, SiteFilter, SiteProjection, WellsView,
};

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

fn site_filter(query: &SitesQuery) -> ApiResult<SiteFilter> {
    let shift: Shift = match &query.shift {
        Some(s) => s.parse()?,
        None => Shift::All,
    };
    Ok(SiteFilter::new(
        Selection::from(query.field.as_deref()),
        shift,
    ))
}

/// GET /api/v1/dashboard/overview
pub async fn overview(Query(query): Query<OverviewQuery>) -> Json<Overview> {
    Json(dashboard::overview(query.date.unwrap_or_else(today)))
}

/// GET /api/v1/dashboard/fields
pub async fn fields(Query(query): Query<SitesQuery>) -> ApiResult<Json<SiteProjection>> {
    Ok(Json(dashboard::by_field(&site_filter(&query)?)))
}

/// GET /api/v1/dashboard/stations
pub async fn stations(Query(query): Query<SitesQuery>) -> ApiResult<Json<SiteProjection>> {
    Ok(Json(dashboard::by_station(&site_filter(&query)?)))
}

/// GET /api/v1/dashboard/history
///
/// An explicit `from`/`to` pair wins over `date` + `days`.
pub async fn history(
    State(state): State<Arc<AppState>>,
    Query(query): Query<HistoryQuery>,
) -> ApiResult<Json<HistoryView>> {
    let range = match (query.from, query.to) {
        (Some(from), Some(to)) => HistoryRange::new(from, to)?,
        (None, None) => {
            let preset = match query.days {
                Some(days) => Preset::from_days(days)?,
                None => state.config.dashboard.default_preset(),
            };
            preset.range(query.date.unwrap_or_else(today))?
        }
        _ => {
            return Err(ApiError::Validation(
                "from and to must be given together".to_string(),
            ))
        }
    };

    let toggles = match &query.series {
        Some(list) => SeriesToggles::parse_list(list)?,
        None => SeriesToggles::default(),
    };

    let seed = query.seed.unwrap_or_else(|| state.history_seed());
    let generator = HistoryGenerator::new(seed);

    tracing::debug!(seed, days = range.day_count(), "Generating history");

    Ok(Json(HistoryView::build(&generator, range, toggles)))
}

/// GET /api/v1/dashboard/wells
pub async fn wells() -> Json<WellsView> {
    Json(dashboard::wells())
}
