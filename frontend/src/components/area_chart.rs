use chrono::Local;
use leptos::prelude::*;

use catalog_types::format::{format_value, long_date_time, short_date};
use catalog_types::{ChartFrame, ChartLayout, ChartPoint};

const STROKE: &str = "#0073c5";
const GRADIENT_ID: &str = "colorValue";

fn num(v: f64) -> String {
    format!("{v:.2}")
}

/// Single-series area chart with a vertical gradient fill and a hover
/// tooltip. Points are drawn in the order given.
#[component]
pub fn AreaChart(points: Vec<ChartPoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let layout = ChartLayout::compute(&values, ChartFrame::default());
    let frame = layout.frame;
    let hovered: RwSignal<Option<usize>> = RwSignal::new(None);

    let grid = layout
        .y_ticks
        .iter()
        .map(|tick| {
            view! {
                <line
                    x1=num(frame.plot_left())
                    x2=num(frame.plot_right())
                    y1=num(tick.y)
                    y2=num(tick.y)
                    class="chart-grid"
                    stroke-dasharray="3 3"
                />
                <text
                    x=num(frame.plot_left() - 8.0)
                    y=num(tick.y)
                    text-anchor="end"
                    dominant-baseline="middle"
                    class="chart-tick"
                >
                    {tick.label.clone()}
                </text>
            }
        })
        .collect_view();

    let x_labels = layout
        .x_ticks
        .iter()
        .map(|&i| {
            view! {
                <line
                    x1=num(layout.xs[i])
                    x2=num(layout.xs[i])
                    y1=num(frame.plot_top())
                    y2=num(frame.plot_bottom())
                    class="chart-grid"
                    stroke-dasharray="3 3"
                />
                <text
                    x=num(layout.xs[i])
                    y=num(frame.plot_bottom() + 18.0)
                    text-anchor="middle"
                    class="chart-tick"
                >
                    {short_date(&points[i].timestamp, &Local)}
                </text>
            }
        })
        .collect_view();

    let hover_targets = layout
        .hover_bands()
        .into_iter()
        .enumerate()
        .map(|(i, (x, width))| {
            view! {
                <rect
                    x=num(x)
                    y=num(frame.plot_top())
                    width=num(width)
                    height=num(frame.plot_bottom() - frame.plot_top())
                    fill="transparent"
                    class="chart-hover-band"
                    on:mouseenter=move |_| hovered.set(Some(i))
                />
            }
        })
        .collect_view();

    let xs = StoredValue::new(layout.xs.clone());
    let ys = StoredValue::new(layout.ys.clone());
    let samples = StoredValue::new(points);

    let active_dot = move || {
        hovered.get().map(|i| {
            view! {
                <circle
                    cx=num(xs.with_value(|xs| xs[i]))
                    cy=num(ys.with_value(|ys| ys[i]))
                    r="6"
                    fill=STROKE
                    stroke="#0056a3"
                    stroke-width="2"
                    pointer-events="none"
                />
            }
        })
    };

    let tooltip = move || {
        hovered.get().map(|i| {
            let (label, value) = samples.with_value(|pts| {
                (long_date_time(&pts[i].timestamp, &Local), format_value(pts[i].value))
            });
            let left = xs.with_value(|xs| xs[i]) / frame.width * 100.0;
            let top = ys.with_value(|ys| ys[i]) / frame.height * 100.0;
            view! {
                <div
                    class="chart-tooltip"
                    style:left=format!("{left:.2}%")
                    style:top=format!("{top:.2}%")
                >
                    <div class="chart-tooltip-label">{label}</div>
                    <div class="chart-tooltip-value">"value : " {value}</div>
                </div>
            }
        })
    };

    view! {
        <div class="chart" on:mouseleave=move |_| hovered.set(None)>
            <svg
                viewBox=format!("0 0 {} {}", frame.width, frame.height)
                class="chart-svg"
            >
                <defs>
                    <linearGradient id=GRADIENT_ID x1="0" y1="0" x2="0" y2="1">
                        <stop offset="5%" stop-color=STROKE stop-opacity="0.4"/>
                        <stop offset="95%" stop-color=STROKE stop-opacity="0"/>
                    </linearGradient>
                </defs>
                {grid}
                {x_labels}
                <path d=layout.area_path.clone() fill=format!("url(#{GRADIENT_ID})") stroke="none"/>
                <path d=layout.line_path.clone() fill="none" stroke=STROKE stroke-width="2"/>
                {hover_targets}
                {active_dot}
            </svg>
            {tooltip}
        </div>
    }
}
