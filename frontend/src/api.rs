use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use catalog_types::{Asset, CatalogSource, Endpoints, FetchError, TimeSeriesPoint};

/// The two read-only JSON endpoints, reached with plain GETs.
#[derive(Debug, Clone, Copy)]
pub struct HttpCatalog {
    endpoints: Endpoints,
}

impl HttpCatalog {
    /// Endpoints baked in at build time; `CATALOG_ASSETS_URL` and
    /// `CATALOG_TIMESERIES_URL` override the public defaults.
    pub fn from_env() -> Self {
        Self {
            endpoints: Endpoints::with_overrides(
                option_env!("CATALOG_ASSETS_URL"),
                option_env!("CATALOG_TIMESERIES_URL"),
            ),
        }
    }
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let resp = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(FetchError::Status(resp.status()));
    }
    // Read the body before parsing so a dropped connection and a bad payload stay distinct errors.
    let body = resp
        .text()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))
}

impl CatalogSource for HttpCatalog {
    async fn fetch_assets(&self) -> Result<Vec<Asset>, FetchError> {
        get_json(self.endpoints.assets).await
    }

    async fn fetch_time_series(&self) -> Result<Vec<TimeSeriesPoint>, FetchError> {
        get_json(self.endpoints.time_series).await
    }
}
