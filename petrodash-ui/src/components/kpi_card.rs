//! KPI Card Component
//!
//! Displays one indicator with its value and day-over-day change.

use leptos::*;

/// Indicator card
#[component]
pub fn KpiCard(
    #[prop(into)]
    title: String,
    value: f64,
    /// Unit label shown next to the title
    #[prop(into, optional)]
    unit: String,
    /// Percentage change vs the previous day
    #[prop(optional)]
    change: Option<f64>,
    /// Recent values for the sparkline
    #[prop(optional)]
    trend: Vec<f64>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            // Header with indicator name
            <div class="flex items-center justify-between">
                <span class="text-gray-400 text-sm">{title}</span>
                <span class="text-gray-500 text-xs">{unit}</span>
            </div>

            // Current value
            <div class="text-3xl font-bold mt-2">{format_number(value)}</div>

            // Trend indicator
            {change.map(|change| {
                let (arrow, color) = if change > 0.0 {
                    ("↑", "text-green-400")
                } else if change < 0.0 {
                    ("↓", "text-red-400")
                } else {
                    ("→", "text-gray-400")
                };

                view! {
                    <div class="mt-2">
                        <span class=format!("text-sm {}", color)>
                            {arrow}
                            " "
                            {format!("{:+.1}%", change)}
                            " vs ayer"
                        </span>
                    </div>
                }
            })}

            {(!trend.is_empty()).then(|| view! { <MiniSparkline values=trend /> })}
        </div>
    }
}

/// Mini sparkline (simplified bar chart)
#[component]
fn MiniSparkline(values: Vec<f64>) -> impl IntoView {
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let range = if (max - min).abs() < 0.01 { 1.0 } else { max - min };

    view! {
        <div class="flex items-end space-x-1 h-8 mt-3">
            {values.into_iter().map(|value| {
                let height_percent = ((value - min) / range * 80.0 + 20.0) as i32;
                view! {
                    <div
                        class="flex-1 bg-primary-500 rounded-t opacity-70"
                        style=format!("height: {}%", height_percent)
                    />
                }
            }).collect_view()}
        </div>
    }
}

/// Thousands-separated, one decimal only when the value has one
pub fn format_number(value: f64) -> String {
    let rounded = (value * 10.0).round() / 10.0;
    let whole = rounded.trunc().abs() as u64;
    let digits = whole.to_string();

    let mut grouped = String::new();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }

    let sign = if rounded < 0.0 { "-" } else { "" };
    let fraction = ((rounded.abs() - whole as f64) * 10.0).round() as u64;
    if fraction == 0 {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{},{}", sign, grouped, fraction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(12450.0), "12.450");
        assert_eq!(format_number(98.5), "98,5");
        assert_eq!(format_number(150.0), "150");
        assert_eq!(format_number(-1234.0), "-1.234");
        assert_eq!(format_number(0.0), "0");
    }
}
