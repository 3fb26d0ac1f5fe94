use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Asset collection ─────────────────────────────────────────────────────

/// One media item from the asset endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub provider: String,
    /// Running time in seconds.
    #[serde(default)]
    pub duration: u64,
    #[serde(default)]
    pub asset_image: String,
    #[serde(default)]
    pub video_image: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub total_views: ViewCounts,
    pub prev_total_views: ViewCounts,
}

impl Asset {
    /// The video still when present, otherwise the poster image.
    pub fn display_image(&self) -> &str {
        if self.video_image.is_empty() {
            &self.asset_image
        } else {
            &self.video_image
        }
    }

    /// Case-insensitive, whitespace-trimmed name equality.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.trim().to_lowercase() == query.trim().to_lowercase()
    }
}

/// A view-count snapshot: the `total` plus one count per provider, in the
/// order the payload declares them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewCounts {
    pub total: i64,
    #[serde(flatten)]
    pub providers: IndexMap<String, i64>,
}

impl ViewCounts {
    pub fn provider(&self, key: &str) -> Option<i64> {
        self.providers.get(key).copied()
    }
}

// ── Time series ──────────────────────────────────────────────────────────

/// The endpoint has served both epoch milliseconds and ISO strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Millis(i64),
    Text(String),
}

impl Timestamp {
    /// Resolve to an instant, reading zone-less strings in `tz`.
    pub fn resolve_in<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        match self {
            Timestamp::Millis(ms) => tz.timestamp_millis_opt(*ms).single(),
            Timestamp::Text(raw) => parse_text(raw.trim(), tz),
        }
    }
}

fn parse_text<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Tz>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(tz));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return tz.from_local_datetime(&naive).earliest();
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return tz.from_local_datetime(&date.and_hms_opt(0, 0, 0)?).earliest();
    }
    raw.parse::<i64>()
        .ok()
        .and_then(|ms| tz.timestamp_millis_opt(ms).single())
}

/// One `(timestamp, value)` sample.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub timestamp: Timestamp,
    pub value: f64,
}
