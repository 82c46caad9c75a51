//! Chart Component
//!
//! Category bar chart using HTML5 Canvas.

use leptos::*;
use marketplace_dashboard::chart::{layout_bars, ChartArea, ValueAxis, DEFAULT_TICKS};
use marketplace_dashboard::format::{format_count, format_number, NumberLocale};
use marketplace_dashboard::model::ChartDatum;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

const BAR_COLOR: &str = "#8884d8";
const BACKGROUND: &str = "#1f2937"; // gray-800
const GRID_COLOR: &str = "#374151"; // gray-700
const LABEL_COLOR: &str = "#9ca3af"; // gray-400

/// Longest category label drawn under a bar
const MAX_LABEL_CHARS: usize = 14;

/// Category distribution bar chart
#[component]
pub fn BarChart(
    data: Vec<ChartDatum>,
    locale: NumberLocale,
) -> impl IntoView {
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvas is mounted
    create_effect(move |_| {
        if let Some(canvas) = canvas_ref.get() {
            draw_bar_chart(&canvas, &data, locale);
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
fn draw_bar_chart(canvas: &HtmlCanvasElement, data: &[ChartDatum], locale: NumberLocale) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let area = ChartArea {
        width: canvas.width() as f64,
        height: canvas.height() as f64,
        ..ChartArea::default()
    };

    // Clear canvas
    ctx.set_fill_style(&BACKGROUND.into());
    ctx.fill_rect(0.0, 0.0, area.width, area.height);

    if data.is_empty() {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("Sin datos de categorías", area.width / 2.0, area.height / 2.0);
        return;
    }

    let max_value = data.iter().map(|datum| datum.value).max().unwrap_or(0);
    let axis = ValueAxis::fit(max_value, DEFAULT_TICKS);

    // Dashed horizontal grid with y-axis labels
    let dash = js_sys::Array::of2(&JsValue::from_f64(3.0), &JsValue::from_f64(3.0));
    let _ = ctx.set_line_dash(&dash);
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_font("12px sans-serif");
    ctx.set_text_align("right");

    for tick in axis.ticks() {
        let y = axis.y_for(tick, &area);
        ctx.begin_path();
        ctx.move_to(area.margin_left, y);
        ctx.line_to(area.width - area.margin_right, y);
        ctx.stroke();

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&format_number(tick, locale), area.margin_left - 8.0, y + 4.0);
    }
    let _ = ctx.set_line_dash(&js_sys::Array::new());

    // Bars with their value on top and category underneath
    ctx.set_text_align("center");
    for bar in layout_bars(data, &axis, &area) {
        ctx.set_fill_style(&BAR_COLOR.into());
        ctx.fill_rect(bar.x, bar.y, bar.width, bar.height);

        ctx.set_fill_style(&"#e5e7eb".into());
        let _ = ctx.fill_text(&format_count(bar.value, locale), bar.center_x(), bar.y - 6.0);

        ctx.set_fill_style(&LABEL_COLOR.into());
        let _ = ctx.fill_text(&short_label(&bar.name), bar.center_x(), area.baseline() + 20.0);
    }
}

fn short_label(name: &str) -> String {
    if name.chars().count() <= MAX_LABEL_CHARS {
        name.to_string()
    } else {
        let head: String = name.chars().take(MAX_LABEL_CHARS - 1).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_label() {
        assert_eq!(short_label("Books"), "Books");
        assert_eq!(short_label("Home & Kitchen Appliances"), "Home & Kitche…");
        assert_eq!(short_label("Electrónica y más"), "Electrónica y…");
    }
}
