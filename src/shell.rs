//! Navigation shell
//!
//! Two pages, each with single-selection tabs. A page owns exactly one
//! mounted panel; switching tabs drops the old panel and mounts a fresh one,
//! so view filters and form input never survive a tab change.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dashboard::{overview, DashboardResult, HistoryState, Overview, SiteFilter};
use crate::forms::{FormKind, FormState};

pub const DASHBOARD_TITLE: &str = "Dashboard de Producción Petrolera";
pub const DASHBOARD_SUBTITLE: &str = "Monitoreo y análisis en tiempo real";
pub const ADMIN_TITLE: &str = "Panel de Administración";
pub const ADMIN_SUBTITLE: &str = "Gestión y carga de datos de producción";

/// Application routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Dashboard,
    Admin,
    NotFound(String),
}

impl Route {
    pub fn parse(path: &str) -> Self {
        match path.trim_end_matches('/') {
            "" => Route::Dashboard,
            "/admin" => Route::Admin,
            _ => Route::NotFound(path.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Route::Dashboard => "/",
            Route::Admin => "/admin",
            Route::NotFound(path) => path,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashboardTab {
    #[default]
    Overview,
    Fields,
    History,
    Wells,
}

impl DashboardTab {
    pub fn all() -> &'static [DashboardTab] {
        &[
            DashboardTab::Overview,
            DashboardTab::Fields,
            DashboardTab::History,
            DashboardTab::Wells,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "overview",
            DashboardTab::Fields => "fields",
            DashboardTab::History => "history",
            DashboardTab::Wells => "wells",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DashboardTab::Overview => "Visión General",
            DashboardTab::Fields => "Por Campo",
            DashboardTab::History => "Histórico",
            DashboardTab::Wells => "Pozos",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Production,
    Stations,
    Wells,
    Historical,
}

impl AdminTab {
    pub fn all() -> &'static [AdminTab] {
        &[
            AdminTab::Production,
            AdminTab::Stations,
            AdminTab::Wells,
            AdminTab::Historical,
        ]
    }

    pub fn key(&self) -> &'static str {
        match self {
            AdminTab::Production => "production",
            AdminTab::Stations => "stations",
            AdminTab::Wells => "wells",
            AdminTab::Historical => "historical",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Production => "Producción Diaria",
            AdminTab::Stations => "Datos por Estación",
            AdminTab::Wells => "Estado de Pozos",
            AdminTab::Historical => "Datos Históricos",
        }
    }

    /// Form mounted under this tab
    pub fn form(&self) -> FormKind {
        match self {
            AdminTab::Production => FormKind::Production,
            AdminTab::Stations => FormKind::Station,
            AdminTab::Wells => FormKind::WellStatus,
            AdminTab::Historical => FormKind::Historical,
        }
    }
}

/// State of the mounted dashboard panel
#[derive(Debug, Clone, PartialEq)]
pub enum DashboardPanel {
    Overview,
    Fields(SiteFilter),
    History(HistoryState),
    Wells,
}

impl DashboardPanel {
    fn mount(tab: DashboardTab, selected_date: NaiveDate, seed: u64) -> DashboardResult<Self> {
        Ok(match tab {
            DashboardTab::Overview => DashboardPanel::Overview,
            DashboardTab::Fields => DashboardPanel::Fields(SiteFilter::default()),
            DashboardTab::History => {
                DashboardPanel::History(HistoryState::new(selected_date, seed)?)
            }
            DashboardTab::Wells => DashboardPanel::Wells,
        })
    }

    pub fn tab(&self) -> DashboardTab {
        match self {
            DashboardPanel::Overview => DashboardTab::Overview,
            DashboardPanel::Fields(_) => DashboardTab::Fields,
            DashboardPanel::History(_) => DashboardTab::History,
            DashboardPanel::Wells => DashboardTab::Wells,
        }
    }
}

/// Dashboard page: selected date plus one mounted panel
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardShell {
    selected_date: NaiveDate,
    seed: u64,
    panel: DashboardPanel,
}

impl DashboardShell {
    pub fn new(selected_date: NaiveDate, seed: u64) -> Self {
        Self {
            selected_date,
            seed,
            panel: DashboardPanel::Overview,
        }
    }

    pub fn tab(&self) -> DashboardTab {
        self.panel.tab()
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    /// Change the date. A mounted history panel keeps the range it was
    /// mounted with.
    pub fn set_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    /// Switch tabs. Returns `false` when `tab` is already active. When the
    /// new panel cannot be mounted for the selected date the old one stays.
    pub fn select(&mut self, tab: DashboardTab) -> DashboardResult<bool> {
        if tab == self.tab() {
            return Ok(false);
        }
        self.panel = DashboardPanel::mount(tab, self.selected_date, self.seed)?;
        tracing::debug!(to = tab.key(), "Dashboard tab switched");
        Ok(true)
    }

    pub fn panel(&self) -> &DashboardPanel {
        &self.panel
    }

    pub fn panel_mut(&mut self) -> &mut DashboardPanel {
        &mut self.panel
    }

    pub fn overview(&self) -> Overview {
        overview(self.selected_date)
    }
}

/// Admin page: one mounted form
#[derive(Debug, Clone)]
pub struct AdminShell {
    tab: AdminTab,
    form: FormState,
}

impl Default for AdminShell {
    fn default() -> Self {
        Self::new()
    }
}

impl AdminShell {
    pub fn new() -> Self {
        let tab = AdminTab::default();
        Self {
            tab,
            form: FormState::new(tab.form()),
        }
    }

    pub fn tab(&self) -> AdminTab {
        self.tab
    }

    /// Switch tabs. Returns `false` when `tab` is already active.
    pub fn select(&mut self, tab: AdminTab) -> bool {
        if tab == self.tab {
            return false;
        }
        tracing::debug!(from = self.tab.key(), to = tab.key(), "Admin tab switched");
        self.tab = tab;
        self.form = FormState::new(tab.form());
        true
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }
}

/// The mounted page
#[derive(Debug, Clone)]
pub enum Page {
    Dashboard(DashboardShell),
    Admin(AdminShell),
    NotFound(String),
}

/// Top-level navigation state
#[derive(Debug, Clone)]
pub struct App {
    today: NaiveDate,
    seed: u64,
    route: Route,
    page: Page,
}

impl App {
    /// Start on the dashboard with `today` selected
    pub fn new(today: NaiveDate, seed: u64) -> Self {
        Self {
            today,
            seed,
            route: Route::Dashboard,
            page: Page::Dashboard(DashboardShell::new(today, seed)),
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn page_mut(&mut self) -> &mut Page {
        &mut self.page
    }

    /// Go to `path`, mounting a fresh page even when it is the current one
    pub fn navigate(&mut self, path: &str) -> &mut Page {
        let route = Route::parse(path);
        self.page = match &route {
            Route::Dashboard => Page::Dashboard(DashboardShell::new(self.today, self.seed)),
            Route::Admin => Page::Admin(AdminShell::new()),
            Route::NotFound(path) => {
                tracing::warn!(path = %path, "Route not found");
                Page::NotFound(path.clone())
            }
        };
        self.route = route;
        &mut self.page
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Preset, Selection, Series};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_routes() {
        assert_eq!(Route::parse("/"), Route::Dashboard);
        assert_eq!(Route::parse(""), Route::Dashboard);
        assert_eq!(Route::parse("/admin"), Route::Admin);
        assert_eq!(Route::parse("/admin/"), Route::Admin);
        assert_eq!(Route::parse("/pozos"), Route::NotFound("/pozos".to_string()));
    }

    #[test]
    fn test_dashboard_defaults_to_overview() {
        let shell = DashboardShell::new(date(2024, 5, 10), 1);
        assert_eq!(shell.tab(), DashboardTab::Overview);
        assert_eq!(shell.overview().date, date(2024, 5, 10));
    }

    #[test]
    fn test_tab_switch_resets_filters() {
        let mut shell = DashboardShell::new(date(2024, 5, 10), 1);
        assert!(shell.select(DashboardTab::Fields).unwrap());

        if let DashboardPanel::Fields(filter) = shell.panel_mut() {
            filter.field = Selection::one("Sur");
        }
        // Re-selecting the active tab keeps state
        assert!(!shell.select(DashboardTab::Fields).unwrap());
        assert_eq!(
            shell.panel(),
            &DashboardPanel::Fields(SiteFilter::new(Selection::one("Sur"), Default::default()))
        );

        shell.select(DashboardTab::Wells).unwrap();
        shell.select(DashboardTab::Fields).unwrap();
        assert_eq!(shell.panel(), &DashboardPanel::Fields(SiteFilter::default()));
    }

    #[test]
    fn test_history_panel_range() {
        let mut shell = DashboardShell::new(date(2024, 5, 31), 5);
        shell.select(DashboardTab::History).unwrap();

        if let DashboardPanel::History(state) = shell.panel_mut() {
            state.apply_preset(Preset::Week).unwrap();
            state.toggle(Series::Diluent);
        }

        // Date change leaves the mounted range alone
        shell.set_date(date(2024, 6, 15));
        match shell.panel() {
            DashboardPanel::History(state) => {
                assert_eq!(state.range.to, date(2024, 5, 31));
                assert_eq!(state.range.day_count(), 8);
            }
            other => panic!("unexpected panel {:?}", other),
        }

        // Remounting picks up the new date and default toggles
        shell.select(DashboardTab::Overview).unwrap();
        shell.select(DashboardTab::History).unwrap();
        match shell.panel() {
            DashboardPanel::History(state) => {
                assert_eq!(state.range.to, date(2024, 6, 15));
                assert_eq!(state.range.day_count(), 31);
                assert!(!state.toggles.diluent);
            }
            other => panic!("unexpected panel {:?}", other),
        }
    }

    #[test]
    fn test_history_unmountable_date_keeps_panel() {
        let mut shell = DashboardShell::new(date(2024, 5, 31), 5);
        shell.set_date(NaiveDate::MIN);

        assert!(shell.select(DashboardTab::History).is_err());
        assert_eq!(shell.tab(), DashboardTab::Overview);

        shell.set_date(date(2024, 5, 31));
        assert!(shell.select(DashboardTab::History).unwrap());
    }

    #[test]
    fn test_admin_tab_switch_drops_input() {
        let mut shell = AdminShell::new();
        assert_eq!(shell.form().kind(), FormKind::Production);

        shell.form_mut().set("crude_production", 900);
        shell.select(AdminTab::Wells);
        assert_eq!(shell.form().kind(), FormKind::WellStatus);

        shell.select(AdminTab::Production);
        assert_eq!(shell.form().values(), &shell.form().schema().defaults());
    }

    #[test]
    fn test_admin_tabs_skip_field_form() {
        let forms: Vec<_> = AdminTab::all().iter().map(|t| t.form()).collect();
        assert!(!forms.contains(&FormKind::Field));
        assert_eq!(forms.len(), 4);
    }

    #[test]
    fn test_navigate_remounts() {
        let mut app = App::new(date(2024, 5, 10), 2);
        if let Page::Dashboard(shell) = app.page_mut() {
            shell.select(DashboardTab::Wells).unwrap();
        }

        app.navigate("/admin");
        assert_eq!(app.route(), &Route::Admin);
        assert!(matches!(app.page(), Page::Admin(_)));

        app.navigate("/");
        match app.page() {
            Page::Dashboard(shell) => assert_eq!(shell.tab(), DashboardTab::Overview),
            other => panic!("unexpected page {:?}", other),
        }

        app.navigate("/reportes");
        assert!(matches!(app.page(), Page::NotFound(_)));
    }
}
