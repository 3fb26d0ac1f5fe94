//! Display formatting shared by every page.

use std::fmt::Display;

use chrono::TimeZone;

use crate::model::Timestamp;

/// Characters of description shown on a list card.
pub const EXCERPT_CHARS: usize = 30;

pub const INVALID_DATE: &str = "Invalid Date";

/// `"{h}h {m}m"`, or just `"{m}m"` under an hour. Seconds are truncated.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}

/// Group digits in threes with `,` (en-US).
pub fn format_thousands(n: i64) -> String {
    let grouped = group_digits(&n.unsigned_abs().to_string());
    if n < 0 {
        format!("-{grouped}")
    } else {
        grouped
    }
}

fn group_digits(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Grouped integer part plus at most three fraction digits, trailing zeros
/// dropped. Mirrors `Number.prototype.toLocaleString()` for en-US.
pub fn format_value(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = format!("{:.3}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let nonzero = int_part.bytes().any(|b| b != b'0') || !frac.is_empty();

    let mut out = String::new();
    if value < 0.0 && nonzero {
        out.push('-');
    }
    out.push_str(&group_digits(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// `+` only for strictly positive differences; zero and negatives render bare.
pub fn format_delta(delta: i128) -> String {
    if delta > 0 {
        format!("+{delta}")
    } else {
        delta.to_string()
    }
}

/// Naive character slice with an ellipsis always appended.
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    let mut excerpt: String = text.chars().take(max_chars).collect();
    excerpt.push_str("...");
    excerpt
}

// ── Dates ────────────────────────────────────────────────────────────────

fn format_in<Tz>(ts: &Timestamp, tz: &Tz, pattern: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    ts.resolve_in(tz)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Axis tick label, e.g. `24 Oct`.
pub fn short_date<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ts, tz, "%d %b")
}

/// Derived per-point date, e.g. `24 Oct 2023`.
pub fn long_date<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ts, tz, "%d %b %Y")
}

/// Tooltip label, e.g. `24 Oct 2023, 14:30`.
pub fn long_date_time<Tz>(ts: &Timestamp, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format_in(ts, tz, "%d %b %Y, %H:%M")
}
