//! SVG charts for the ROI calculator
//!
//! Geometry is computed here in plain functions; the components only place
//! the shapes.

use leptos::prelude::*;
use mab_core::{ComparisonRow, TimelinePoint};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

const WIDTH: f64 = 600.0;
const HEIGHT: f64 = 260.0;
const PADDING: f64 = 40.0;

/// Drawing area inside the SVG viewBox
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Plot {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Default for Plot {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
        }
    }
}

impl Plot {
    fn inner_width(&self) -> f64 {
        self.padding.mul_add(-2.0, self.width)
    }

    fn inner_height(&self) -> f64 {
        self.padding.mul_add(-2.0, self.height)
    }

    fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

/// Value range covered by the y axis; always includes zero
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YScale {
    pub min: f64,
    pub max: f64,
}

impl YScale {
    pub fn covering(values: impl IntoIterator<Item = f64>) -> Self {
        let (min, max) = values
            .into_iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Self { min, max }
    }

    /// y coordinate of `value` within `plot`
    pub fn y(&self, value: f64, plot: &Plot) -> f64 {
        let span = (self.max - self.min).max(1.0);
        plot.padding + (self.max - value) / span * plot.inner_height()
    }
}

fn to_f64(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

/// `points` attribute for a polyline through `values`, evenly spaced
pub fn polyline(values: &[f64], scale: &YScale, plot: &Plot) -> String {
    let steps = values.len().saturating_sub(1).max(1) as f64;

    values
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let x = (i as f64 / steps).mul_add(plot.inner_width(), plot.padding);
            format!("{x:.1},{:.1}", scale.y(*v, plot))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// A rectangle in viewBox units
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Side-by-side (as-is, optimized) bars for each comparison row
pub fn bar_pairs(rows: &[ComparisonRow], plot: &Plot) -> Vec<(Bar, Bar)> {
    let scale = YScale::covering(rows.iter().flat_map(|r| [to_f64(r.as_is), to_f64(r.optimized)]));
    let slot = plot.inner_width() / rows.len().max(1) as f64;
    let bar_width = slot * 0.35;
    let baseline = scale.y(0.0, plot);

    let bar = |x: f64, value: f64| {
        let top = scale.y(value, plot);
        Bar {
            x,
            y: top.min(baseline),
            width: bar_width,
            height: (baseline - top).abs(),
        }
    };

    rows.iter()
        .enumerate()
        .map(|(i, row)| {
            let left = (i as f64).mul_add(slot, plot.padding) + slot * 0.15;
            (bar(left, to_f64(row.as_is)), bar(left + bar_width, to_f64(row.optimized)))
        })
        .collect()
}

/// Short money label for axis ticks: `$950`, `$12K`, `$1.2M`
pub fn compact_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let abs = value.abs();

    if abs >= 1_000_000.0 {
        format!("{sign}${:.1}M", abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{sign}${:.0}K", abs / 1_000.0)
    } else {
        format!("{sign}${abs:.0}")
    }
}

/// Cumulative savings over the projection months
#[component]
pub fn SavingsChart(timeline: Vec<TimelinePoint>) -> impl IntoView {
    let plot = Plot::default();
    let savings: Vec<f64> = timeline.iter().map(|p| to_f64(p.savings)).collect();
    let break_even: Vec<f64> = timeline.iter().map(|p| to_f64(p.break_even)).collect();
    let scale = YScale::covering(savings.iter().chain(&break_even).copied());
    let zero = scale.y(0.0, &plot);

    let labels = timeline
        .iter()
        .enumerate()
        .filter(|(i, _)| i % 3 == 0)
        .map(|(i, p)| {
            let steps = timeline.len().saturating_sub(1).max(1) as f64;
            let x = (i as f64 / steps).mul_add(plot.inner_width(), plot.padding);
            view! {
                <text x=format!("{x:.1}") y=format!("{:.1}", plot.height - 10.0) class="axis-label">
                    {format!("M{}", p.month)}
                </text>
            }
        })
        .collect_view();

    view! {
        <svg class="chart savings-chart" viewBox=plot.view_box() role="img">
            <line
                class="baseline"
                x1=format!("{:.1}", plot.padding)
                x2=format!("{:.1}", plot.width - plot.padding)
                y1=format!("{zero:.1}")
                y2=format!("{zero:.1}")
            />
            <text x="4" y=format!("{:.1}", plot.padding) class="axis-label">
                {compact_currency(scale.max)}
            </text>
            <text x="4" y=format!("{zero:.1}") class="axis-label">"$0"</text>
            <polyline class="series savings" fill="none" points=polyline(&savings, &scale, &plot) />
            <polyline class="series break-even" fill="none" points=polyline(&break_even, &scale, &plot) />
            {labels}
        </svg>
    }
}

/// Current versus optimized cost per category
#[component]
pub fn ComparisonChart(rows: Vec<ComparisonRow>) -> impl IntoView {
    let plot = Plot::default();

    let bars = bar_pairs(&rows, &plot)
        .into_iter()
        .zip(rows)
        .map(|((as_is, optimized), row)| {
            view! {
                <g class="comparison">
                    <rect class="as-is" x=format!("{:.1}", as_is.x) y=format!("{:.1}", as_is.y)
                        width=format!("{:.1}", as_is.width) height=format!("{:.1}", as_is.height) />
                    <rect class="optimized" x=format!("{:.1}", optimized.x) y=format!("{:.1}", optimized.y)
                        width=format!("{:.1}", optimized.width) height=format!("{:.1}", optimized.height) />
                    <text x=format!("{:.1}", as_is.x) y=format!("{:.1}", plot.height - 10.0) class="axis-label">
                        {row.category}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart comparison-chart" viewBox=plot.view_box() role="img">
            {bars}
        </svg>
    }
}
