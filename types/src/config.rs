/// Public read-only endpoint serving the asset collection.
pub const DEFAULT_ASSETS_URL: &str =
    "https://my-json-server.typicode.com/alb90/aieng-tech-test-assets/data";

/// Public read-only endpoint serving the time-series collection.
pub const DEFAULT_TIME_SERIES_URL: &str =
    "https://my-json-server.typicode.com/alb90/aieng-tech-test-timeseries/data";

/// The two GET endpoints the viewer reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub assets: &'static str,
    pub time_series: &'static str,
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            assets: DEFAULT_ASSETS_URL,
            time_series: DEFAULT_TIME_SERIES_URL,
        }
    }
}

impl Endpoints {
    /// Apply build-time overrides (`option_env!` values). Blank overrides are
    /// ignored.
    pub fn with_overrides(assets: Option<&'static str>, time_series: Option<&'static str>) -> Self {
        let pick = |over: Option<&'static str>, default: &'static str| {
            over.map(str::trim).filter(|u| !u.is_empty()).unwrap_or(default)
        };
        Self {
            assets: pick(assets, DEFAULT_ASSETS_URL),
            time_series: pick(time_series, DEFAULT_TIME_SERIES_URL),
        }
    }
}
