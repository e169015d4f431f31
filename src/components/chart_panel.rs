//! Inline SVG rendering of simulated chart payloads.
//!
//! A message stores only the chart configuration (kind, title, point
//! count); the data series is regenerated when the panel mounts, from
//! a seed derived from the owning message, so a chart keeps the same
//! series across re-renders instead of reshuffling on every append.

#[cfg(test)]
#[path = "chart_panel_test.rs"]
mod chart_panel_test;

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::sim::chart_data::{self, ChartPoint};
use crate::state::message::{ChartKind, ChartSpec};

const CHART_COLORS: [&str; 7] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff8042", "#0088FE", "#00C49F", "#FFBB28",
];

const WIDTH: f64 = 320.0;
const HEIGHT: f64 = 180.0;

/// Chart embedded in an assistant message bubble. `seed` pins the data
/// series to the message that owns the chart.
#[component]
pub fn ChartPanel(spec: ChartSpec, seed: u64) -> impl IntoView {
    let points = chart_data::generate(spec.point_count, &mut SmallRng::seed_from_u64(seed));

    let body = match spec.kind {
        ChartKind::Line => line_chart(&points).into_any(),
        ChartKind::Bar => bar_chart(&points).into_any(),
        ChartKind::Pie => pie_chart(&points).into_any(),
        ChartKind::Area => area_chart(&points).into_any(),
    };

    view! {
        <div class="chart-panel">
            <h3 class="chart-panel__title">{spec.title}</h3>
            <svg class="chart-panel__svg" viewBox=format!("0 0 {WIDTH} {HEIGHT}")>
                {body}
            </svg>
        </div>
    }
}

fn line_chart(points: &[ChartPoint]) -> impl IntoView {
    let value = polyline_points(&series(points, |p| p.value), 1000);
    let sales = polyline_points(&series(points, |p| p.sales), 800);
    view! {
        <polyline points=value fill="none" stroke=CHART_COLORS[0]/>
        <polyline points=sales fill="none" stroke=CHART_COLORS[1]/>
    }
}

fn bar_chart(points: &[ChartPoint]) -> impl IntoView {
    let slot = WIDTH / points.len().max(1) as f64;
    let bar = slot * 0.35;
    points
        .iter()
        .enumerate()
        .map(|(i, p)| {
            let x = i as f64 * slot + slot * 0.1;
            let value_h = scaled(p.value, 1000);
            let profit_h = scaled(p.profit, 500);
            view! {
                <rect
                    x=fmt(x)
                    y=fmt(HEIGHT - value_h)
                    width=fmt(bar)
                    height=fmt(value_h)
                    fill=CHART_COLORS[0]
                />
                <rect
                    x=fmt(x + bar)
                    y=fmt(HEIGHT - profit_h)
                    width=fmt(bar)
                    height=fmt(profit_h)
                    fill=CHART_COLORS[1]
                />
            }
        })
        .collect::<Vec<_>>()
}

fn pie_chart(points: &[ChartPoint]) -> impl IntoView {
    pie_slices(points)
        .into_iter()
        .enumerate()
        .map(|(i, d)| {
            view! { <path d=d fill=CHART_COLORS[i % CHART_COLORS.len()]/> }
        })
        .collect::<Vec<_>>()
}

fn area_chart(points: &[ChartPoint]) -> impl IntoView {
    let revenue = area_polygon(&series(points, |p| p.revenue), 1200);
    let profit = area_polygon(&series(points, |p| p.profit), 500);
    view! {
        <polygon points=revenue fill=CHART_COLORS[0] style="opacity: 0.6"/>
        <polygon points=profit fill=CHART_COLORS[1] style="opacity: 0.6"/>
    }
}

fn series(points: &[ChartPoint], field: impl Fn(&ChartPoint) -> u32) -> Vec<u32> {
    points.iter().map(field).collect()
}

/// Height of `value` normalized against `max`.
fn scaled(value: u32, max: u32) -> f64 {
    f64::from(value) / f64::from(max) * HEIGHT
}

fn fmt(value: f64) -> String {
    format!("{value:.1}")
}

/// "x,y x,y ..." pairs spanning the full width, y flipped so larger
/// values sit higher.
fn polyline_points(values: &[u32], max: u32) -> String {
    let step = if values.len() > 1 {
        WIDTH / (values.len() - 1) as f64
    } else {
        0.0
    };
    values
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{:.1},{:.1}", i as f64 * step, HEIGHT - scaled(*v, max)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Polyline closed down to the baseline on both ends.
fn area_polygon(values: &[u32], max: u32) -> String {
    if values.is_empty() {
        return String::new();
    }
    format!("0,{HEIGHT} {} {WIDTH},{HEIGHT}", polyline_points(values, max))
}

/// Path data for one pie slice per point, proportional to `value`.
/// Sweeps are clamped just short of a full turn so a single-slice pie
/// still draws a visible arc.
fn pie_slices(points: &[ChartPoint]) -> Vec<String> {
    let total: f64 = points.iter().map(|p| f64::from(p.value)).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    let (cx, cy) = (WIDTH / 2.0, HEIGHT / 2.0);
    let r = HEIGHT * 0.45;
    let mut angle = -std::f64::consts::FRAC_PI_2;

    points
        .iter()
        .map(|p| {
            let sweep = (f64::from(p.value) / total * std::f64::consts::TAU)
                .min(std::f64::consts::TAU - 1e-4);
            let (x0, y0) = (cx + r * angle.cos(), cy + r * angle.sin());
            let end = angle + sweep;
            let (x1, y1) = (cx + r * end.cos(), cy + r * end.sin());
            let large = i32::from(sweep > std::f64::consts::PI);
            angle = end;
            format!("M {cx:.1} {cy:.1} L {x0:.1} {y0:.1} A {r:.1} {r:.1} 0 {large} 1 {x1:.1} {y1:.1} Z")
        })
        .collect()
}
