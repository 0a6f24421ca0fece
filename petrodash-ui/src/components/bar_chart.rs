//! Horizontal bar chart for category comparisons

use leptos::*;

use super::kpi_card::format_number;

/// One bar per `(label, value)`, scaled to the largest value
#[component]
pub fn BarChart(
    items: Vec<(String, f64)>,
    #[prop(default = "#FF9800")]
    color: &'static str,
) -> impl IntoView {
    let max = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    if items.is_empty() {
        return view! {
            <p class="text-gray-400 text-sm">"Sin datos para los filtros seleccionados"</p>
        }
        .into_view();
    }

    view! {
        <div class="space-y-3">
            {items.into_iter().map(|(label, value)| {
                let width = if max > 0.0 { value / max * 100.0 } else { 0.0 };
                view! {
                    <div>
                        <div class="flex justify-between text-sm mb-1">
                            <span class="text-gray-300">{label}</span>
                            <span class="font-semibold">{format_number(value)}</span>
                        </div>
                        <div class="bg-gray-700 rounded h-3">
                            <div
                                class="rounded h-3"
                                style=format!("width: {:.1}%; background-color: {}", width, color)
                            />
                        </div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_view()
}
