//! Chart Component
//!
//! Daily history chart using HTML5 Canvas.

use leptos::*;
use petrodash::dashboard::{HistoryView, Series};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Line color of a series
pub fn series_color(series: Series) -> &'static str {
    match series {
        Series::Crude => "#FF9800",
        Series::Pumping => "#4CAF50",
        Series::Injection => "#2196F3",
        Series::Diluent => "#9C27B0",
    }
}

/// History line chart; redraws whenever `view` changes
#[component]
pub fn HistoryChart(
    #[prop(into)]
    view: Signal<HistoryView>,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    create_effect(move |_| {
        let view = view.get();
        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, &view);
        }
    });

    view! {
        <div class="relative">
            <canvas
                node_ref=canvas_ref
                width="800"
                height="400"
                class="w-full h-64 md:h-96 rounded-lg"
            />
        </div>
    }
}

/// Draw the chart on canvas
fn draw_chart(canvas: &HtmlCanvasElement, view: &HistoryView) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 60.0;
    let margin_right = 20.0;
    let margin_top = 20.0;
    let margin_bottom = 40.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let values = view.lines.iter().flat_map(|line| line.values.iter().copied());
    let (mut y_min, mut y_max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if view.lines.is_empty() || view.points.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("Seleccione al menos una serie", width / 2.0 - 100.0, height / 2.0);
        return;
    }

    // Add padding to y range
    let y_padding = if y_max > y_min { (y_max - y_min) * 0.1 } else { 1.0 };
    y_min -= y_padding;
    y_max += y_padding;

    // Grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&"#9ca3af".into()); // gray-400
    ctx.set_font("12px sans-serif");

    for i in 0..=5 {
        let y = margin_top + (i as f64 / 5.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = y_max - (i as f64 / 5.0) * (y_max - y_min);
        let _ = ctx.fill_text(&format!("{:.0}", value), 5.0, y + 4.0);
    }

    let count = view.points.len();
    let x_at = |i: usize| {
        if count > 1 {
            margin_left + (i as f64 / (count - 1) as f64) * chart_width
        } else {
            margin_left + chart_width / 2.0
        }
    };
    // Canvas y grows downward
    let y_at = |v: f64| margin_top + ((y_max - v) / (y_max - y_min)) * chart_height;

    for line in &view.lines {
        ctx.set_stroke_style(&series_color(line.series).into());
        ctx.set_line_width(2.0);
        ctx.begin_path();

        for (i, value) in line.values.iter().enumerate() {
            if i == 0 {
                ctx.move_to(x_at(i), y_at(*value));
            } else {
                ctx.line_to(x_at(i), y_at(*value));
            }
        }

        ctx.stroke();
    }

    // X-axis labels, at most six
    ctx.set_fill_style(&"#9ca3af".into());
    let step = (count / 6).max(1);
    for (i, point) in view.points.iter().enumerate().step_by(step) {
        let _ = ctx.fill_text(&point.label, x_at(i) - 15.0, height - 10.0);
    }
}
