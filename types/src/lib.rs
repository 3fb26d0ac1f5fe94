//! Browser-independent half of the asset catalog viewer: wire models,
//! display formatting, lookup, chart geometry and the fetch lifecycle.
//! Everything here builds and tests on the native target.

pub mod catalog;
pub mod chart;
pub mod config;
pub mod errors;
pub mod format;
pub mod lifecycle;
pub mod model;
pub mod routes;
pub mod source;

pub use catalog::{AssetCard, AssetDetail, ProviderStat, find_asset};
pub use chart::{ChartFrame, ChartLayout, ChartPoint};
pub use config::Endpoints;
pub use errors::{FetchError, RenderError};
pub use lifecycle::{CancelToken, FetchState, MountGuard};
pub use model::{Asset, TimeSeriesPoint, Timestamp, ViewCounts};
pub use source::CatalogSource;
