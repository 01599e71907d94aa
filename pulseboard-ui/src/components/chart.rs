//! Chart Component
//!
//! Bar, line and pie charts of `category -> value` drawn on HTML5 Canvas.
//! Geometry is computed by the pure functions below; the canvas code only
//! paints what they return.

use leptos::*;
use std::f64::consts::PI;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::api::Record;
use crate::state::use_dashboard_state;

/// Pie slice colors, cycled by record index
pub const PALETTE: [&str; 4] = ["#0088FE", "#00C49F", "#FFBB28", "#FF8042"];

const BAR_COLOR: &str = "#8884d8";
const LINE_COLOR: &str = "#82ca9d";
const GRID_COLOR: &str = "#e5e7eb";
const LABEL_COLOR: &str = "#6b7280";

const CANVAS_WIDTH: u32 = 400;
const CANVAS_HEIGHT: u32 = 300;

const MARGIN_LEFT: f64 = 50.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 20.0;
const MARGIN_BOTTOM: f64 = 40.0;

const GRID_LINES: usize = 4;
const BAR_FILL: f64 = 0.7;
const PIE_RADIUS: f64 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
    Pie,
}

impl ChartKind {
    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar Chart",
            ChartKind::Line => "Line Chart",
            ChartKind::Pie => "Pie Chart",
        }
    }
}

/// Palette color for the slice at `index`
pub fn palette_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Drawable region inside the axis margins
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlotArea {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    pub fn for_canvas(width: f64, height: f64) -> Self {
        Self {
            left: MARGIN_LEFT,
            top: MARGIN_TOP,
            width: (width - MARGIN_LEFT - MARGIN_RIGHT).max(0.0),
            height: (height - MARGIN_TOP - MARGIN_BOTTOM).max(0.0),
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Width of one category band
    fn band(&self, count: usize) -> f64 {
        self.width / count.max(1) as f64
    }

    /// Horizontal center of the band at `index`
    pub fn band_center(&self, index: usize, count: usize) -> f64 {
        self.left + (index as f64 + 0.5) * self.band(count)
    }
}

/// Y-axis range. Always includes zero and is never empty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min: f64,
    pub max: f64,
}

impl Bounds {
    /// Canvas y for `value` (canvas y grows downward)
    pub fn y(&self, value: f64, plot: &PlotArea) -> f64 {
        plot.top + (self.max - value) / (self.max - self.min) * plot.height
    }

    /// Axis value of grid line `i` of `count`, top to bottom
    pub fn tick(&self, i: usize, count: usize) -> f64 {
        self.max - (i as f64 / count as f64) * (self.max - self.min)
    }
}

pub fn value_bounds(values: &[f64]) -> Bounds {
    let min = values.iter().copied().fold(0.0_f64, f64::min);
    let max = values.iter().copied().fold(0.0_f64, f64::max);

    if max - min < f64::EPSILON {
        Bounds {
            min,
            max: min + 1.0,
        }
    } else {
        Bounds { min, max }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// One bar per value, growing from the zero line
pub fn bar_rects(values: &[f64], plot: &PlotArea) -> Vec<BarRect> {
    let bounds = value_bounds(values);
    let band = plot.band(values.len());
    let width = band * BAR_FILL;
    let zero = bounds.y(0.0, plot);

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let top = bounds.y(value, plot);
            BarRect {
                x: plot.left + i as f64 * band + (band - width) / 2.0,
                y: top.min(zero),
                width,
                height: (top - zero).abs(),
            }
        })
        .collect()
}

/// Line vertices, one per value at the center of its band
pub fn line_points(values: &[f64], plot: &PlotArea) -> Vec<(f64, f64)> {
    let bounds = value_bounds(values);

    values
        .iter()
        .enumerate()
        .map(|(i, &value)| (plot.band_center(i, values.len()), bounds.y(value, plot)))
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PieSlice {
    pub start: f64,
    pub end: f64,
    pub color: &'static str,
}

impl PieSlice {
    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }
}

/// Slice angles in radians, clockwise from 12 o'clock.
///
/// Negative values get an empty slice but still consume a palette index.
pub fn pie_slices(values: &[f64]) -> Vec<PieSlice> {
    let total: f64 = values.iter().map(|v| v.max(0.0)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let mut angle = -PI / 2.0;
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let sweep = value.max(0.0) / total * 2.0 * PI;
            let slice = PieSlice {
                start: angle,
                end: angle + sweep,
                color: palette_color(i),
            };
            angle += sweep;
            slice
        })
        .collect()
}

fn tick_label(value: f64, bounds: &Bounds) -> String {
    if bounds.max - bounds.min >= 10.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.1}", value)
    }
}

/// Canvas chart of every record
#[component]
pub fn Chart(kind: ChartKind) -> impl IntoView {
    let state = use_dashboard_state();
    let canvas_ref = create_node_ref::<html::Canvas>();

    // Redraw when records change or the canvas mounts
    create_effect(move |_| {
        let records = state.records.get();

        if let Some(canvas) = canvas_ref.get() {
            draw_chart(&canvas, kind, &records);
        }
    });

    view! {
        <div class="bg-white rounded-2xl shadow-md p-5 m-2 flex-1 min-w-[250px] text-center">
            <h3 class="text-lg font-semibold mb-3">{kind.title()}</h3>
            <canvas
                node_ref=canvas_ref
                width=CANVAS_WIDTH
                height=CANVAS_HEIGHT
                class="w-full max-w-[400px] mx-auto"
            />
            <ChartLegend kind=kind />
        </div>
    }
}

#[component]
fn ChartLegend(kind: ChartKind) -> impl IntoView {
    let state = use_dashboard_state();

    let swatch = |color: &'static str, label: String| {
        view! {
            <div class="flex items-center space-x-2">
                <div class="w-3 h-3 rounded-sm" style=format!("background-color: {}", color) />
                <span class="text-sm text-gray-600">{label}</span>
            </div>
        }
    };

    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-3">
            {move || match kind {
                ChartKind::Bar => swatch(BAR_COLOR, "value".to_string()).into_view(),
                ChartKind::Line => swatch(LINE_COLOR, "value".to_string()).into_view(),
                ChartKind::Pie => state
                    .records
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(idx, record)| swatch(palette_color(idx), record.category))
                    .collect_view(),
            }}
        </div>
    }
}

fn draw_chart(canvas: &HtmlCanvasElement, kind: ChartKind, records: &[Record]) {
    let ctx = match canvas.get_context("2d") {
        Ok(Some(ctx)) => match ctx.dyn_into::<CanvasRenderingContext2d>() {
            Ok(ctx) => ctx,
            Err(_) => return,
        },
        _ => return,
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    if records.is_empty() {
        ctx.set_fill_style(&LABEL_COLOR.into());
        ctx.set_font("16px sans-serif");
        ctx.set_text_align("center");
        let _ = ctx.fill_text("No data yet", width / 2.0, height / 2.0);
        return;
    }

    let values: Vec<f64> = records.iter().map(|r| r.value).collect();

    match kind {
        ChartKind::Bar => {
            let plot = PlotArea::for_canvas(width, height);
            draw_axes(&ctx, &plot, &value_bounds(&values), records);

            ctx.set_fill_style(&BAR_COLOR.into());
            for rect in bar_rects(&values, &plot) {
                ctx.fill_rect(rect.x, rect.y, rect.width, rect.height);
            }
        }
        ChartKind::Line => {
            let plot = PlotArea::for_canvas(width, height);
            draw_axes(&ctx, &plot, &value_bounds(&values), records);

            let points = line_points(&values, &plot);
            ctx.set_stroke_style(&LINE_COLOR.into());
            ctx.set_line_width(3.0);
            ctx.begin_path();
            for (i, &(x, y)) in points.iter().enumerate() {
                if i == 0 {
                    ctx.move_to(x, y);
                } else {
                    ctx.line_to(x, y);
                }
            }
            ctx.stroke();

            ctx.set_fill_style(&LINE_COLOR.into());
            for (x, y) in points {
                ctx.begin_path();
                let _ = ctx.arc(x, y, 4.0, 0.0, PI * 2.0);
                ctx.fill();
            }
        }
        ChartKind::Pie => draw_pie(&ctx, width, height, &values),
    }
}

fn draw_axes(ctx: &CanvasRenderingContext2d, plot: &PlotArea, bounds: &Bounds, records: &[Record]) {
    ctx.set_stroke_style(&GRID_COLOR.into());
    ctx.set_line_width(1.0);
    ctx.set_fill_style(&LABEL_COLOR.into());
    ctx.set_font("12px sans-serif");

    ctx.set_text_align("right");
    for i in 0..=GRID_LINES {
        let y = plot.top + (i as f64 / GRID_LINES as f64) * plot.height;
        ctx.begin_path();
        ctx.move_to(plot.left, y);
        ctx.line_to(plot.right(), y);
        ctx.stroke();

        let label = tick_label(bounds.tick(i, GRID_LINES), bounds);
        let _ = ctx.fill_text(&label, plot.left - 6.0, y + 4.0);
    }

    ctx.set_text_align("center");
    for (i, record) in records.iter().enumerate() {
        let x = plot.band_center(i, records.len());
        let _ = ctx.fill_text(&record.category, x, plot.bottom() + 18.0);
    }
}

fn draw_pie(ctx: &CanvasRenderingContext2d, width: f64, height: f64, values: &[f64]) {
    let cx = width / 2.0;
    let cy = height / 2.0;

    ctx.set_font("12px sans-serif");
    ctx.set_text_align("center");

    for (slice, value) in pie_slices(values).iter().zip(values) {
        if slice.end <= slice.start {
            continue;
        }

        ctx.set_fill_style(&slice.color.into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, PIE_RADIUS, slice.start, slice.end);
        ctx.close_path();
        ctx.fill();

        // Value label just outside the slice
        let mid = slice.mid();
        let lx = cx + (PIE_RADIUS + 18.0) * mid.cos();
        let ly = cy + (PIE_RADIUS + 18.0) * mid.sin();
        let _ = ctx.fill_text(&value.to_string(), lx, ly + 4.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    fn square_plot() -> PlotArea {
        PlotArea {
            left: 0.0,
            top: 0.0,
            width: 100.0,
            height: 100.0,
        }
    }

    #[test]
    fn test_palette_cycles() {
        assert_eq!(palette_color(0), "#0088FE");
        assert_eq!(palette_color(3), "#FF8042");
        assert_eq!(palette_color(4), "#0088FE");
        assert_eq!(palette_color(5), "#00C49F");
    }

    #[test]
    fn test_value_bounds_include_zero() {
        assert_eq!(value_bounds(&[]), Bounds { min: 0.0, max: 1.0 });
        assert_eq!(value_bounds(&[0.0, 0.0]), Bounds { min: 0.0, max: 1.0 });
        assert_eq!(value_bounds(&[5.0, 10.0]), Bounds { min: 0.0, max: 10.0 });
        assert_eq!(value_bounds(&[-5.0, 10.0]), Bounds { min: -5.0, max: 10.0 });
        assert_eq!(value_bounds(&[-3.0, -1.0]), Bounds { min: -3.0, max: 0.0 });
    }

    #[test]
    fn test_plot_area_for_canvas() {
        let plot = PlotArea::for_canvas(400.0, 300.0);
        assert_eq!(plot.left, 50.0);
        assert_eq!(plot.width, 330.0);
        assert_eq!(plot.bottom(), 260.0);
    }

    #[test]
    fn test_bar_rects() {
        let bars = bar_rects(&[50.0, 100.0], &square_plot());
        assert_eq!(bars.len(), 2);

        assert_close(bars[0].width, 35.0);
        assert_close(bars[0].x, 7.5);
        assert_close(bars[0].y, 50.0);
        assert_close(bars[0].height, 50.0);

        assert_close(bars[1].x, 57.5);
        assert_close(bars[1].y, 0.0);
        assert_close(bars[1].height, 100.0);
    }

    #[test]
    fn test_negative_bar_hangs_below_zero() {
        let bars = bar_rects(&[-50.0, 50.0], &square_plot());

        // zero line sits halfway down
        assert_close(bars[0].y, 50.0);
        assert_close(bars[0].height, 50.0);
        assert_close(bars[1].y, 0.0);
        assert_close(bars[1].height, 50.0);
    }

    #[test]
    fn test_line_points() {
        let points = line_points(&[10.0, 20.0], &square_plot());
        assert_eq!(points.len(), 2);
        assert_close(points[0].0, 25.0);
        assert_close(points[0].1, 50.0);
        assert_close(points[1].0, 75.0);
        assert_close(points[1].1, 0.0);
    }

    #[test]
    fn test_pie_slices() {
        let slices = pie_slices(&[1.0, 1.0, 2.0]);
        assert_eq!(slices.len(), 3);

        assert_close(slices[0].start, -PI / 2.0);
        assert_close(slices[0].end, 0.0);
        assert_close(slices[1].end, PI / 2.0);
        assert_close(slices[2].end, 3.0 * PI / 2.0);
        assert_close(slices[2].mid(), PI);

        assert_eq!(slices[2].color, "#FFBB28");
    }

    #[test]
    fn test_pie_slices_skip_non_positive() {
        assert!(pie_slices(&[]).is_empty());
        assert!(pie_slices(&[0.0, -4.0]).is_empty());

        let slices = pie_slices(&[-1.0, 3.0]);
        assert_close(slices[0].end - slices[0].start, 0.0);
        assert_close(slices[1].end - slices[1].start, 2.0 * PI);
        assert_eq!(slices[1].color, "#00C49F");
    }

    #[test]
    fn test_tick_labels() {
        let wide = Bounds { min: 0.0, max: 100.0 };
        assert_eq!(tick_label(wide.tick(1, 4), &wide), "75");

        let narrow = Bounds { min: 0.0, max: 1.0 };
        assert_eq!(tick_label(narrow.tick(2, 4), &narrow), "0.5");
    }
}
