//! Dashboard Page
//!
//! Read-only production views: daily overview, per-field breakdown, synthetic
//! history and wells by category. The page owns a `DashboardShell`; switching
//! tabs remounts the panel, so filters start over on every visit.

use chrono::NaiveDate;
use leptos::*;
use petrodash::dashboard::{
    by_field, wells, HistoryGenerator, HistoryRange, HistoryState, HistoryView, Preset, Selection,
    Series, SeriesToggles, Shift, SiteFilter, SiteProjection,
};
use petrodash::shell::{
    DashboardPanel, DashboardShell, DashboardTab, DASHBOARD_SUBTITLE, DASHBOARD_TITLE,
};

use crate::components::chart::series_color;
use crate::components::kpi_card::format_number;
use crate::components::{BarChart, HistoryChart, KpiCard, TabBar};
use crate::state::global::use_global_state;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_global_state();
    let shell = create_rw_signal(DashboardShell::new(state.today, state.seed));
    let tab = create_memo(move |_| shell.with(|s| s.tab()));

    let on_select = move |key: &'static str| {
        if let Some(tab) = DashboardTab::all().iter().find(|t| t.key() == key) {
            if let Some(Err(e)) = shell.try_update(|s| s.select(*tab)) {
                state.show_error("Fecha fuera de rango", e.to_string());
            }
        }
    };

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex flex-wrap items-center justify-between gap-4">
                <div>
                    <h1 class="text-3xl font-bold">{DASHBOARD_TITLE}</h1>
                    <p class="text-gray-400 mt-1">{DASHBOARD_SUBTITLE}</p>
                </div>

                // Date selector
                <input
                    type="date"
                    prop:value=move || shell.with(|s| s.selected_date().to_string())
                    on:change=move |ev| {
                        if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                            shell.update(|s| s.set_date(date));
                        }
                    }
                    class="bg-gray-700 rounded-lg px-4 py-2 text-white border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>

            <TabBar
                tabs=DashboardTab::all().iter().map(|t| (t.key(), t.label())).collect()
                active=Signal::derive(move || tab.get().key())
                on_select=on_select
            />

            // Mounted panel
            {move || match tab.get() {
                DashboardTab::Overview => view! { <OverviewPanel shell=shell /> }.into_view(),
                DashboardTab::Fields => view! { <FieldsPanel shell=shell /> }.into_view(),
                DashboardTab::History => view! { <HistoryPanel shell=shell /> }.into_view(),
                DashboardTab::Wells => view! { <WellsPanel /> }.into_view(),
            }}
        </div>
    }
}

// ============================================
// OVERVIEW
// ============================================

#[component]
fn OverviewPanel(shell: RwSignal<DashboardShell>) -> impl IntoView {
    let overview = create_memo(move |_| shell.with(|s| s.overview()));

    view! {
        <div class="space-y-8">
            <section>
                <h2 class="text-lg font-semibold mb-4">
                    {move || format!("Producción del {}", overview.get().date.format("%d/%m/%Y"))}
                </h2>
                <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                    {move || overview.get().kpis.into_iter().map(|kpi| view! {
                        <KpiCard title=kpi.title value=kpi.value unit=kpi.unit change=kpi.change />
                    }).collect_view()}
                </div>
            </section>

            <div class="grid md:grid-cols-3 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Variables Físicas"</h2>
                    <Stat label="°API" value=Signal::derive(move || format_number(overview.get().api_gravity)) />
                    <Stat
                        label="% AyS"
                        value=Signal::derive(move || format!("{}%", format_number(overview.get().water_and_sediments)))
                    />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Balance de Diluente"</h2>
                    <Stat label="Recibido" value=Signal::derive(move || format_number(overview.get().diluent.received)) />
                    <Stat label="Consumido" value=Signal::derive(move || format_number(overview.get().diluent.consumed)) />
                    <Stat label="Balance" value=Signal::derive(move || format_number(overview.get().diluent.balance)) />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Eficiencia Operacional"</h2>
                    <Stat
                        label="Utilización"
                        value=Signal::derive(move || format!("{}%", format_number(overview.get().efficiency.utilization)))
                    />
                    <Stat
                        label="Meta diaria"
                        value=Signal::derive(move || format_number(overview.get().efficiency.daily_target))
                    />
                    <Stat
                        label="vs Meta"
                        value=Signal::derive(move || format!("{:+.1}%", overview.get().efficiency.vs_target))
                    />
                </section>
            </div>
        </div>
    }
}

#[component]
fn Stat(label: &'static str, #[prop(into)] value: Signal<String>) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
            <span class="text-gray-400">{label}</span>
            <span class="font-semibold">{value}</span>
        </div>
    }
}

// ============================================
// FIELDS
// ============================================

fn site_filter(shell: &DashboardShell) -> SiteFilter {
    match shell.panel() {
        DashboardPanel::Fields(filter) => filter.clone(),
        _ => SiteFilter::default(),
    }
}

fn update_site_filter(shell: RwSignal<DashboardShell>, apply: impl FnOnce(&mut SiteFilter)) {
    shell.update(|s| {
        if let DashboardPanel::Fields(filter) = s.panel_mut() {
            apply(filter);
        }
    });
}

#[component]
fn FieldsPanel(shell: RwSignal<DashboardShell>) -> impl IntoView {
    let filter = create_memo(move |_| shell.with(site_filter));
    let projection = create_memo(move |_| by_field(&filter.get()));
    let field_options = by_field(&SiteFilter::default()).fields;

    let select_class = "bg-gray-700 rounded-lg px-4 py-2 text-white border border-gray-600 \
                        focus:border-primary-500 focus:outline-none";

    view! {
        <div class="space-y-8">
            // Filters
            <div class="flex flex-wrap gap-4">
                <select
                    prop:value=move || filter.get().field.as_str().to_string()
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        update_site_filter(shell, |f| f.field = Selection::parse(&value));
                    }
                    class=select_class
                >
                    <option value=Selection::All.as_str().to_string()>"Todos los campos"</option>
                    {field_options.into_iter().map(|field| view! {
                        <option value=field.clone()>{field.clone()}</option>
                    }).collect_view()}
                </select>

                <select
                    prop:value=move || filter.get().shift.selection().as_str().to_string()
                    on:change=move |ev| {
                        let shift = event_target_value(&ev).parse::<Shift>().unwrap_or_default();
                        update_site_filter(shell, |f| f.shift = shift);
                    }
                    class=select_class
                >
                    {Shift::all().iter().map(|shift| view! {
                        <option value=shift.selection().as_str().to_string()>{shift.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                {move || projection.get().summary.into_iter().map(|summary| view! {
                    <div class="bg-gray-800 rounded-lg p-4 border border-gray-700">
                        <p class="text-gray-400 text-sm">{summary.field}</p>
                        <p class="text-2xl font-bold mt-2">{format_number(summary.crude)}" bbl"</p>
                        <p class="text-gray-400 text-sm mt-1">
                            {format!("{} pozos · Inyección {}", summary.sites, format_number(summary.injection))}
                        </p>
                    </div>
                }).collect_view()}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Producción de Crudo"</h2>
                    {move || view! { <BarChart items=crude_bars(&projection.get()) /> }}
                </section>

                <section class="bg-gray-800 rounded-xl p-6 overflow-x-auto">
                    <h2 class="text-xl font-semibold mb-4">"Detalle"</h2>
                    <SiteTable projection=projection />
                </section>
            </div>
        </div>
    }
}

fn crude_bars(projection: &SiteProjection) -> Vec<(String, f64)> {
    projection
        .rows
        .iter()
        .map(|row| (row.name.to_string(), row.crude))
        .collect()
}

#[component]
fn SiteTable(#[prop(into)] projection: Signal<SiteProjection>) -> impl IntoView {
    view! {
        <table class="w-full text-sm">
            <thead class="text-gray-400">
                <tr>
                    <th class="text-left py-2">"Pozo"</th>
                    <th class="text-right">"Crudo"</th>
                    <th class="text-right">"BES"</th>
                    <th class="text-right">"BCP"</th>
                    <th class="text-right">"Bombeo"</th>
                    <th class="text-right">"Inyección"</th>
                </tr>
            </thead>
            <tbody>
                {move || projection.get().rows.into_iter().map(|row| view! {
                    <tr class="border-t border-gray-700">
                        <td class="py-2">{row.name}</td>
                        <td class="text-right">{format_number(row.crude)}</td>
                        <td class="text-right">{format_number(row.pumping_esp)}</td>
                        <td class="text-right">{format_number(row.pumping_pcp)}</td>
                        <td class="text-right">{format_number(row.pumping_total)}</td>
                        <td class="text-right">{format_number(row.injection)}</td>
                    </tr>
                }).collect_view()}
            </tbody>
        </table>
    }
}

// ============================================
// HISTORY
// ============================================

fn history_state(shell: &DashboardShell) -> Option<HistoryState> {
    match shell.panel() {
        DashboardPanel::History(history) => Some(history.clone()),
        _ => None,
    }
}

fn update_history<R>(
    shell: RwSignal<DashboardShell>,
    apply: impl FnOnce(&mut HistoryState) -> R,
) -> Option<R> {
    shell
        .try_update(|s| match s.panel_mut() {
            DashboardPanel::History(history) => Some(apply(history)),
            _ => None,
        })
        .flatten()
}

#[component]
fn HistoryPanel(shell: RwSignal<DashboardShell>) -> impl IntoView {
    let state = use_global_state();
    let history = create_memo(move |_| shell.with(history_state));
    let view_data = create_memo(move |_| match history.get() {
        Some(h) => h.view(),
        None => HistoryView::build(
            &HistoryGenerator::new(state.seed),
            HistoryRange { from: state.today, to: state.today },
            SeriesToggles::none(),
        ),
    });
    let range = move || history.get().map(|h| h.range);

    let set_bound = move |from: Option<NaiveDate>, to: Option<NaiveDate>| {
        let Some(current) = range() else {
            return;
        };
        let from = from.unwrap_or(current.from);
        let to = to.unwrap_or(current.to);

        if let Some(Err(e)) = update_history(shell, |h| h.set_range(from, to)) {
            state.show_error("Rango inválido", e.to_string());
        }
    };

    view! {
        <div class="space-y-8">
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                // Range presets
                <div class="flex flex-wrap items-center gap-2">
                    {Preset::all().iter().map(|preset| {
                        let preset = *preset;
                        view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    if let Some(Err(e)) = update_history(shell, |h| h.apply_preset(preset)) {
                                        state.show_error("Rango inválido", e.to_string());
                                    }
                                }
                                class=move || {
                                    let base = "px-4 py-2 rounded-lg text-sm font-medium transition-colors";
                                    let active = range().map(|r| r.day_count() == preset.days() as usize);
                                    if active == Some(true) {
                                        format!("{} bg-primary-600 text-white", base)
                                    } else {
                                        format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                    }
                                }
                            >
                                {preset.label()}
                            </button>
                        }
                    }).collect_view()}

                    // Custom range
                    <input
                        type="date"
                        prop:value=move || range().map(|r| r.from.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                                set_bound(Some(date), None);
                            }
                        }
                        class="bg-gray-700 rounded-lg px-3 py-2 text-white border border-gray-600"
                    />
                    <span class="text-gray-400">"a"</span>
                    <input
                        type="date"
                        prop:value=move || range().map(|r| r.to.to_string()).unwrap_or_default()
                        on:change=move |ev| {
                            if let Ok(date) = event_target_value(&ev).parse::<NaiveDate>() {
                                set_bound(None, Some(date));
                            }
                        }
                        class="bg-gray-700 rounded-lg px-3 py-2 text-white border border-gray-600"
                    />
                </div>

                // Series toggles
                <div class="flex flex-wrap gap-4">
                    {Series::all().iter().map(|series| {
                        let series = *series;
                        view! {
                            <label class="flex items-center space-x-2 cursor-pointer">
                                <input
                                    type="checkbox"
                                    prop:checked=move || history.get().map(|h| h.toggles.is_on(series)).unwrap_or(false)
                                    on:change=move |_| {
                                        update_history(shell, |h| h.toggle(series));
                                    }
                                />
                                <span
                                    class="w-3 h-3 rounded-full"
                                    style=format!("background-color: {}", series_color(series))
                                />
                                <span class="text-sm text-gray-300">{series.label()}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>

                <HistoryChart view=view_data />
            </section>

            <HistoryStats view=view_data />
        </div>
    }
}

#[component]
fn HistoryStats(#[prop(into)] view: Signal<HistoryView>) -> impl IntoView {
    let stat = move |pick: fn(&HistoryView) -> f64| Signal::derive(move || format_number(view.with(pick)));

    view! {
        <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
            <div class="bg-gray-800 rounded-lg p-4">
                <p class="text-gray-400 text-sm">"Días"</p>
                <p class="text-2xl font-bold mt-2">{move || view.with(|v| v.points.len())}</p>
            </div>
            <div class="bg-gray-800 rounded-lg p-4">
                <p class="text-gray-400 text-sm">"Promedio de Crudo"</p>
                <p class="text-2xl font-bold mt-2">{stat(|v| v.stats.average)}</p>
            </div>
            <div class="bg-gray-800 rounded-lg p-4">
                <p class="text-gray-400 text-sm">"Máximo"</p>
                <p class="text-2xl font-bold mt-2">{stat(|v| v.stats.max)}</p>
            </div>
            <div class="bg-gray-800 rounded-lg p-4">
                <p class="text-gray-400 text-sm">"Mínimo"</p>
                <p class="text-2xl font-bold mt-2">{stat(|v| v.stats.min)}</p>
            </div>
        </div>
    }
}

// ============================================
// WELLS
// ============================================

#[component]
fn WellsPanel() -> impl IntoView {
    let view_data = wells();
    let summary = view_data.summary;
    let active_wells = summary.active_wells as f64;
    let active_target = format!("meta {}", summary.active_target);
    let production_bars: Vec<(String, f64)> = view_data
        .categories
        .iter()
        .map(|card| (card.name.to_string(), card.production))
        .collect();

    view! {
        <div class="space-y-8">
            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <KpiCard title="Pozos activos" value=active_wells unit=active_target />
                <KpiCard title="% Activos" value=summary.active_share unit="%" />
                <KpiCard title="% Inactivos" value=summary.inactive_share unit="%" />
                <KpiCard title="Promedio por pozo activo" value=summary.average_per_active unit="bbl" />
            </div>

            <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                {view_data.categories.into_iter().map(|card| {
                    let trend = card.trend.iter().map(|p| p.count as f64).collect::<Vec<_>>();
                    let count = card.count as f64;
                    view! {
                        <div class="space-y-2">
                            <KpiCard
                                title=format!("Categoría {}: {}", card.id, card.name)
                                value=count
                                unit=format!("{}%", format_number(card.share))
                                trend=trend
                            />
                            <p class="text-gray-400 text-sm px-1">{card.description}</p>
                            {card.average_production.map(|avg| view! {
                                <p class="text-sm px-1">{format!("Promedio: {} bbl/pozo", format_number(avg))}</p>
                            })}
                            {card.actions.map(|actions| view! {
                                <div class="bg-gray-800 rounded-lg p-4 border border-yellow-700">
                                    <p class="font-semibold mb-2">{actions.title}</p>
                                    <ul class="list-disc list-inside text-sm text-gray-300">
                                        {actions.items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
                                    </ul>
                                </div>
                            })}
                        </div>
                    }
                }).collect_view()}
            </div>

            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">
                    {format!("Producción por Categoría ({} bbl)", format_number(summary.total_production))}
                </h2>
                <BarChart items=production_bars color="#4CAF50" />
            </section>
        </div>
    }
}
