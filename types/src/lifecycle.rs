//! Fetch-on-mount lifecycle shared by the three pages.
//!
//! A page starts in [`FetchState::Loading`], issues one request, and settles
//! into either `Error` or `Ready`. There is no refresh: the only way back to
//! `Loading` is a remount.

use std::fmt::Display;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::TimeZone;
use tracing::{debug, error};

use crate::catalog::find_asset;
use crate::chart::ChartPoint;
use crate::errors::FetchError;
use crate::model::Asset;
use crate::routes::decode_name_param;
use crate::source::CatalogSource;

pub const LOADING_ASSETS: &str = "Loading movies...";
pub const LOADING_ASSET_DETAIL: &str = "Loading movie details...";
pub const LOADING_TIME_SERIES: &str = "Loading time series data...";

pub const ASSETS_FAILED: &str = "Failed to load movies. Please try again later.";
pub const ASSET_DETAIL_FAILED: &str = "Failed to load movie details. Please try again later.";
pub const TIME_SERIES_FAILED: &str = "Failed to load time series data. Please try again later.";

pub const INVALID_NAME: &str = "Invalid movie name";
pub const NOT_FOUND: &str = "Movie not found";

#[derive(Debug, Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Error(String),
    Ready(T),
}

impl<T> FetchState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            FetchState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FetchState::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F>(self, op: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            FetchState::Loading => FetchState::Loading,
            FetchState::Error(message) => FetchState::Error(message),
            FetchState::Ready(data) => FetchState::Ready(op(data)),
        }
    }
}

/// One-shot flag owned by a mounted component. Re-running the mount hook
/// on the same instance does not fire a second request.
#[derive(Debug, Default)]
pub struct MountGuard {
    fired: AtomicBool,
}

impl MountGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` the first time only.
    pub fn try_arm(&self) -> bool {
        !self.fired.swap(true, Ordering::AcqRel)
    }
}

/// Cancelled when the owning component is disposed. A result that arrives
/// after that is dropped instead of written to dead state.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }

    /// Hand `state` to `apply` unless the token was cancelled meanwhile.
    /// Returns whether it was applied.
    pub fn deliver<T>(&self, state: T, apply: impl FnOnce(T)) -> bool {
        if self.is_cancelled() {
            debug!("dropping fetch result that arrived after unmount");
            return false;
        }
        apply(state);
        true
    }
}

/// Turn a fetch outcome into a page state. The underlying error is logged;
/// the user only ever sees `failure_message`.
pub fn settle<T>(result: Result<T, FetchError>, failure_message: &str) -> FetchState<T> {
    match result {
        Ok(data) => FetchState::Ready(data),
        Err(err) => {
            error!(error = %err, "{failure_message}");
            FetchState::Error(failure_message.to_string())
        }
    }
}

// ── Page loaders ─────────────────────────────────────────────────────────

pub async fn load_asset_list<S: CatalogSource>(source: &S) -> FetchState<Vec<Asset>> {
    let state = settle(source.fetch_assets().await, ASSETS_FAILED);
    if let FetchState::Ready(assets) = &state {
        debug!(count = assets.len(), "asset list loaded");
    }
    state
}

/// `raw_name` is the still-encoded `:name` route parameter.
pub async fn load_asset_detail<S: CatalogSource>(source: &S, raw_name: Option<&str>) -> FetchState<Asset> {
    let name = match decode_name_param(raw_name) {
        Ok(Some(name)) => name,
        Ok(None) => return FetchState::Error(INVALID_NAME.to_string()),
        Err(err) => {
            error!(error = %err, raw = ?raw_name, "{ASSET_DETAIL_FAILED}");
            return FetchState::Error(ASSET_DETAIL_FAILED.to_string());
        }
    };

    match settle(source.fetch_assets().await, ASSET_DETAIL_FAILED) {
        FetchState::Ready(assets) => match find_asset(&assets, &name) {
            Some(asset) => FetchState::Ready(asset.clone()),
            None => {
                debug!(name = %name, scanned = assets.len(), "no asset matches route name");
                FetchState::Error(NOT_FOUND.to_string())
            }
        },
        FetchState::Error(message) => FetchState::Error(message),
        FetchState::Loading => FetchState::Loading,
    }
}

/// Points keep response order; each gets its display date in `tz`.
pub async fn load_time_series<S, Tz>(source: &S, tz: &Tz) -> FetchState<Vec<ChartPoint>>
where
    S: CatalogSource,
    Tz: TimeZone,
    Tz::Offset: Display,
{
    settle(source.fetch_time_series().await, TIME_SERIES_FAILED)
        .map(|points| points.into_iter().map(|p| ChartPoint::derive(p, tz)).collect())
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use chrono::Utc;
    use futures::executor::block_on;
    use super::*;
    use crate::model::{TimeSeriesPoint, Timestamp};

    /// In-memory endpoint pair that counts requests.
    struct FakeSource {
        assets: Result<&'static str, FetchError>,
        series: Result<Vec<TimeSeriesPoint>, FetchError>,
        calls: Cell<usize>,
    }

    impl FakeSource {
        fn with_assets(assets: &'static str) -> Self {
            Self {
                assets: Ok(assets),
                series: Ok(Vec::new()),
                calls: Cell::new(0),
            }
        }

        fn failing(err: FetchError) -> Self {
            Self {
                assets: Err(err.clone()),
                series: Err(err),
                calls: Cell::new(0),
            }
        }

        fn with_series(series: Vec<TimeSeriesPoint>) -> Self {
            Self {
                assets: Ok("[]"),
                series: Ok(series),
                calls: Cell::new(0),
            }
        }
    }

    impl CatalogSource for FakeSource {
        async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            let body = self.assets.clone()?;
            serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
        }

        async fn fetch_time_series(&self) -> Result<Vec<TimeSeriesPoint>, FetchError> {
            self.calls.set(self.calls.get() + 1);
            self.series.clone()
        }
    }

    fn movie_a() -> &'static str {
        r#"[{
            "name": "Movie A",
            "provider": "Netflix",
            "description": "A great movie about AI and humanity.",
            "duration": 7200,
            "genre": ["Drama", "Sci-Fi"],
            "assetImage": "movie-a.jpg",
            "videoImage": "",
            "totalViews": { "total": 100000, "netflix": 20000, "prime": 30000, "hulu": 50000 },
            "prevTotalViews": { "total": 95000, "netflix": 15000, "prime": 25000, "hulu": 55000 }
        }]"#
    }

    #[test]
    fn mount_guard_fires_once() {
        let guard = MountGuard::new();
        assert!(guard.try_arm());
        assert!(!guard.try_arm());
        assert!(!guard.try_arm());
    }

    #[test]
    fn cancelled_token_drops_late_results() {
        let token = CancelToken::new();
        let observer = token.clone();
        let mut seen = None;
        token.cancel();
        assert!(observer.is_cancelled());
        assert!(!observer.deliver(FetchState::Ready(1), |s| seen = Some(s)));
        assert_eq!(seen, None);
    }

    #[test]
    fn live_token_delivers() {
        let token = CancelToken::new();
        let mut seen = None;
        assert!(token.deliver(FetchState::Ready(1), |s| seen = Some(s)));
        assert_eq!(seen, Some(FetchState::Ready(1)));
    }

    #[test]
    fn state_helpers() {
        let loading: FetchState<u8> = FetchState::Loading;
        assert!(loading.is_loading());
        assert_eq!(FetchState::Ready(3).map(|n: u8| n * 2).data(), Some(&6));
        let failed: FetchState<u8> = FetchState::Error("boom".into());
        assert_eq!(failed.error(), Some("boom"));
        assert_eq!(failed.data(), None);
    }

    #[test]
    fn empty_collection_is_ready_with_no_items() {
        let source = FakeSource::with_assets("[]");
        let state = block_on(load_asset_list(&source));
        assert_eq!(state, FetchState::Ready(Vec::new()));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn list_failure_shows_static_message() {
        let source = FakeSource::failing(FetchError::Network("connection reset".into()));
        let state = block_on(load_asset_list(&source));
        assert_eq!(state, FetchState::Error(ASSETS_FAILED.to_string()));
    }

    #[test]
    fn non_success_status_shows_static_message() {
        let source = FakeSource::failing(FetchError::Status(500));
        let state = block_on(load_asset_detail(&source, Some("Movie%20A")));
        assert_eq!(state, FetchState::Error(ASSET_DETAIL_FAILED.to_string()));
    }

    #[test]
    fn malformed_body_shows_static_message() {
        let source = FakeSource::with_assets(r#"{ "unexpected": true }"#);
        let state = block_on(load_asset_list(&source));
        assert_eq!(state.error(), Some(ASSETS_FAILED));
    }

    #[test]
    fn missing_name_never_fetches() {
        let source = FakeSource::with_assets(movie_a());
        assert_eq!(
            block_on(load_asset_detail(&source, None)),
            FetchState::Error(INVALID_NAME.to_string())
        );
        assert_eq!(
            block_on(load_asset_detail(&source, Some(""))),
            FetchState::Error(INVALID_NAME.to_string())
        );
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn encoded_padded_name_matches() {
        let source = FakeSource::with_assets(movie_a());
        let state = block_on(load_asset_detail(&source, Some("%20%20movie%20A%20%20")));
        assert_eq!(state.data().map(|a| a.name.as_str()), Some("Movie A"));
        assert_eq!(source.calls.get(), 1);
    }

    #[test]
    fn detail_route_renders_movie_a() {
        let source = FakeSource::with_assets(movie_a());
        let asset = match block_on(load_asset_detail(&source, Some("Movie%20A"))) {
            FetchState::Ready(asset) => asset,
            other => panic!("expected ready state, got {other:?}"),
        };
        let detail = crate::catalog::AssetDetail::try_from(&asset).unwrap();
        assert_eq!(detail.name, "Movie A");
        assert_eq!(detail.duration_line(), "Duration: 2h 0m");
        assert!(detail.genres.iter().any(|g| g == "Drama"));
        assert_eq!(detail.total_views, "Total Views: 100,000 (Previous: 95,000)");
    }

    #[test]
    fn malformed_escape_fails_without_fetching() {
        let source = FakeSource::with_assets(movie_a());
        let state = block_on(load_asset_detail(&source, Some("%E0%A4%A")));
        assert_eq!(state, FetchState::Error(ASSET_DETAIL_FAILED.to_string()));
        assert_eq!(source.calls.get(), 0);
    }

    #[test]
    fn unknown_name_is_not_found() {
        let source = FakeSource::with_assets(movie_a());
        let state = block_on(load_asset_detail(&source, Some("UnknownMovie")));
        assert_eq!(state, FetchState::Error(NOT_FOUND.to_string()));
    }

    #[test]
    fn every_detail_mount_refetches() {
        let source = FakeSource::with_assets(movie_a());
        block_on(load_asset_detail(&source, Some("Movie%20A")));
        block_on(load_asset_detail(&source, Some("Movie%20A")));
        assert_eq!(source.calls.get(), 2);
    }

    #[test]
    fn time_series_keeps_order_and_derives_dates() {
        let source = FakeSource::with_series(vec![
            TimeSeriesPoint {
                timestamp: Timestamp::Text("2023-10-25T00:00:00Z".into()),
                value: 2000.0,
            },
            TimeSeriesPoint {
                timestamp: Timestamp::Millis(1_698_105_600_000),
                value: 1000.0,
            },
        ]);
        let points = match block_on(load_time_series(&source, &Utc)) {
            FetchState::Ready(points) => points,
            other => panic!("expected ready state, got {other:?}"),
        };
        let dates: Vec<&str> = points.iter().map(|p| p.date.as_str()).collect();
        assert_eq!(dates, vec!["25 Oct 2023", "24 Oct 2023"]);
        assert_eq!(points[1].timestamp, Timestamp::Millis(1_698_105_600_000));
    }

    #[test]
    fn time_series_failure_shows_static_message() {
        let source = FakeSource::failing(FetchError::Network("Failed fetch".into()));
        let state = block_on(load_time_series(&source, &Utc));
        assert_eq!(state, FetchState::Error(TIME_SERIES_FAILED.to_string()));
        assert!(!state.is_loading());
        assert!(state.data().is_none());
    }
}
