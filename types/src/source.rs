use std::future::Future;

use crate::errors::FetchError;
use crate::model::{Asset, TimeSeriesPoint};

/// Where the pages read their data from.
///
/// Each call is one GET against a read-only endpoint. The returned futures
/// are not `Send`: in the browser everything runs on the UI thread.
pub trait CatalogSource {
    fn fetch_assets(&self) -> impl Future<Output = Result<Vec<Asset>, FetchError>>;

    fn fetch_time_series(&self) -> impl Future<Output = Result<Vec<TimeSeriesPoint>, FetchError>>;
}
