//! Geometry for the time-series area chart.
//!
//! Points sit on a category axis: evenly spaced by index in response order,
//! not by time. The y domain always includes zero so the filled area has a
//! baseline to close against.

use std::fmt::{Display, Write as _};

use chrono::TimeZone;

use crate::format::{format_value, long_date};
use crate::model::{TimeSeriesPoint, Timestamp};

/// A sample plus its derived display date. The raw timestamp is kept as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPoint {
    pub timestamp: Timestamp,
    pub value: f64,
    pub date: String,
}

impl ChartPoint {
    pub fn derive<Tz>(point: TimeSeriesPoint, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let date = long_date(&point.timestamp, tz);
        Self {
            timestamp: point.timestamp,
            value: point.value,
            date,
        }
    }
}

/// Outer size of the SVG and the margins around the plot area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartFrame {
    pub width: f64,
    pub height: f64,
    pub margin_top: f64,
    pub margin_right: f64,
    pub margin_bottom: f64,
    pub margin_left: f64,
    /// Inset of the first and last point from the plot edges.
    pub x_padding: f64,
    pub y_tick_count: usize,
    pub max_x_labels: usize,
}

impl Default for ChartFrame {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin_top: 10.0,
            margin_right: 30.0,
            margin_bottom: 30.0,
            margin_left: 60.0,
            x_padding: 10.0,
            y_tick_count: 5,
            max_x_labels: 8,
        }
    }
}

impl ChartFrame {
    pub fn plot_left(&self) -> f64 {
        self.margin_left
    }

    pub fn plot_right(&self) -> f64 {
        self.width - self.margin_right
    }

    pub fn plot_top(&self) -> f64 {
        self.margin_top
    }

    pub fn plot_bottom(&self) -> f64 {
        self.height - self.margin_bottom
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct YTick {
    pub y: f64,
    pub value: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub frame: ChartFrame,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub baseline: f64,
    pub y_ticks: Vec<YTick>,
    /// Indices of the points whose date gets an axis label.
    pub x_ticks: Vec<usize>,
    pub line_path: String,
    pub area_path: String,
}

impl ChartLayout {
    pub fn compute(values: &[f64], frame: ChartFrame) -> Self {
        let xs = x_positions(values.len(), &frame);

        let (lo, hi) = values
            .iter()
            .fold((0.0_f64, 0.0_f64), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let ticks = nice_ticks(lo, hi, frame.y_tick_count);
        let (dmin, dmax) = match (ticks.first(), ticks.last()) {
            (Some(&a), Some(&b)) if b > a => (a, b),
            _ => (0.0, 1.0),
        };
        let scale_y = |v: f64| {
            frame.plot_bottom() - (v - dmin) / (dmax - dmin) * (frame.plot_bottom() - frame.plot_top())
        };

        let ys: Vec<f64> = values.iter().map(|&v| scale_y(v)).collect();
        let baseline = scale_y(0.0);
        let y_ticks = ticks
            .iter()
            .map(|&value| YTick {
                y: scale_y(value),
                value,
                label: format_value(value),
            })
            .collect();

        let line_path = monotone_path(&xs, &ys);
        let area_path = match (xs.first(), xs.last()) {
            (Some(first), Some(last)) => format!(
                "{line_path}L{},{}L{},{}Z",
                coord(*last),
                coord(baseline),
                coord(*first),
                coord(baseline)
            ),
            _ => String::new(),
        };

        Self {
            x_ticks: thin_labels(values.len(), frame.max_x_labels),
            frame,
            xs,
            ys,
            baseline,
            y_ticks,
            line_path,
            area_path,
        }
    }

    /// Horizontal hover strip `(x, width)` per point: each reaches halfway
    /// to its neighbours and the outer ones run to the plot edges.
    pub fn hover_bands(&self) -> Vec<(f64, f64)> {
        let n = self.xs.len();
        (0..n)
            .map(|i| {
                let left = if i == 0 {
                    self.frame.plot_left()
                } else {
                    (self.xs[i - 1] + self.xs[i]) / 2.0
                };
                let right = if i + 1 == n {
                    self.frame.plot_right()
                } else {
                    (self.xs[i] + self.xs[i + 1]) / 2.0
                };
                (left, right - left)
            })
            .collect()
    }
}

fn x_positions(n: usize, frame: &ChartFrame) -> Vec<f64> {
    let left = frame.plot_left() + frame.x_padding;
    let right = frame.plot_right() - frame.x_padding;
    match n {
        0 => Vec::new(),
        1 => vec![(left + right) / 2.0],
        _ => {
            let step = (right - left) / (n - 1) as f64;
            (0..n).map(|i| left + step * i as f64).collect()
        }
    }
}

/// Round tick values covering `[lo, hi]`, stepping by 1, 2, 2.5 or 5 times a
/// power of ten.
pub fn nice_ticks(lo: f64, hi: f64, count: usize) -> Vec<f64> {
    let count = count.max(2);
    let (lo, hi) = if hi > lo { (lo, hi) } else { (lo, lo + 1.0) };
    let raw = (hi - lo) / (count - 1) as f64;
    let magnitude = 10f64.powi(raw.log10().floor() as i32);
    let step = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let start = (lo / step).floor();
    let end = (hi / step).ceil();
    let mut ticks = Vec::new();
    let mut k = start;
    while k <= end {
        // 0.0 rather than -0.0 at the origin
        ticks.push(k * step + 0.0);
        k += 1.0;
    }
    ticks
}

fn thin_labels(n: usize, budget: usize) -> Vec<usize> {
    if n == 0 {
        return Vec::new();
    }
    let stride = n.div_ceil(budget.max(1));
    let mut picked: Vec<usize> = (0..n).step_by(stride).collect();
    let last = n - 1;
    if picked.last() != Some(&last) {
        if let Some(&prev) = picked.last() {
            if prev != 0 && last - prev < stride {
                picked.pop();
            }
        }
        picked.push(last);
    }
    picked
}

fn coord(v: f64) -> String {
    format!("{v:.2}")
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Monotone cubic interpolation along x: the curve never overshoots the
/// data between two samples.
fn monotone_path(xs: &[f64], ys: &[f64]) -> String {
    let n = xs.len().min(ys.len());
    let mut path = String::new();
    if n == 0 {
        return path;
    }
    let _ = write!(path, "M{},{}", coord(xs[0]), coord(ys[0]));
    if n == 1 {
        return path;
    }
    if n == 2 {
        let _ = write!(path, "L{},{}", coord(xs[1]), coord(ys[1]));
        return path;
    }

    let mut tangents = vec![0.0; n];
    for i in 1..n - 1 {
        let h0 = xs[i] - xs[i - 1];
        let h1 = xs[i + 1] - xs[i];
        let s0 = (ys[i] - ys[i - 1]) / h0;
        let s1 = (ys[i + 1] - ys[i]) / h1;
        let p = (s0 * h1 + s1 * h0) / (h0 + h1);
        let t = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
        tangents[i] = if t.is_finite() { t } else { 0.0 };
    }
    let end_tangent = |h: f64, dy: f64, t: f64| if h != 0.0 { (3.0 * dy / h - t) / 2.0 } else { t };
    tangents[0] = end_tangent(xs[1] - xs[0], ys[1] - ys[0], tangents[1]);
    tangents[n - 1] = end_tangent(xs[n - 1] - xs[n - 2], ys[n - 1] - ys[n - 2], tangents[n - 2]);

    for i in 0..n - 1 {
        let dx = (xs[i + 1] - xs[i]) / 3.0;
        let _ = write!(
            path,
            "C{},{},{},{},{},{}",
            coord(xs[i] + dx),
            coord(ys[i] + dx * tangents[i]),
            coord(xs[i + 1] - dx),
            coord(ys[i + 1] - dx * tangents[i + 1]),
            coord(xs[i + 1]),
            coord(ys[i + 1])
        );
    }
    path
}
