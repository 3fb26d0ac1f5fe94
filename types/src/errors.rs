//! Error types for fetching and rendering catalog data.
//!
//! Neither type is shown to the user verbatim: fetch failures are logged and
//! replaced by a static per-page message, and render failures surface in the
//! top-level error panel.

use thiserror::Error;

/// Why a request to one of the catalog endpoints failed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("HTTP error! Status: {0}")]
    Status(u16),

    /// The body was not the expected JSON shape.
    #[error("Data parsing error: {0}")]
    Decode(String),
}

/// A fetched record that cannot be turned into a view.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RenderError {
    #[error("asset '{asset}' has no previous view count for provider '{provider}'")]
    MissingSnapshot { asset: String, provider: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_mentions_the_code() {
        assert_eq!(FetchError::Status(503).to_string(), "HTTP error! Status: 503");
    }

    #[test]
    fn missing_snapshot_names_asset_and_provider() {
        let err = RenderError::MissingSnapshot {
            asset: "Movie A".into(),
            provider: "hulu".into(),
        };
        assert!(err.to_string().contains("Movie A"));
        assert!(err.to_string().contains("hulu"));
    }
}
