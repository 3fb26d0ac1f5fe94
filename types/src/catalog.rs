//! Lookup and view shaping for the list and detail pages.

use crate::errors::RenderError;
use crate::format::{EXCERPT_CHARS, format_delta, format_duration, format_thousands, truncate_description};
use crate::model::Asset;
use crate::routes::asset_href;

/// Linear scan for the first asset whose trimmed name matches `name`
/// case-insensitively.
pub fn find_asset<'a>(assets: &'a [Asset], name: &str) -> Option<&'a Asset> {
    assets.iter().find(|a| a.matches_name(name))
}

// ── List card ────────────────────────────────────────────────────────────

/// Everything a summary card on the list page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetCard {
    pub href: String,
    pub image: String,
    pub name: String,
    pub provider: String,
    pub duration: String,
    pub excerpt: String,
    pub genres: Vec<String>,
}

impl From<&Asset> for AssetCard {
    fn from(asset: &Asset) -> Self {
        Self {
            href: asset_href(&asset.name),
            image: asset.display_image().to_string(),
            name: asset.name.clone(),
            provider: asset.provider.clone(),
            duration: format_duration(asset.duration),
            excerpt: truncate_description(&asset.description, EXCERPT_CHARS),
            genres: asset.genre.clone(),
        }
    }
}

// ── Detail page ──────────────────────────────────────────────────────────

/// Current count and period-over-period change for one provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderStat {
    pub key: String,
    pub label: String,
    pub current: String,
    pub delta: String,
}

impl ProviderStat {
    /// `"20,000 (+5000)"`
    pub fn summary(&self) -> String {
        format!("{} ({})", self.current, self.delta)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AssetDetail {
    pub image: String,
    pub name: String,
    pub provider: String,
    pub description: String,
    pub duration: String,
    pub genres: Vec<String>,
    pub total_views: String,
    pub providers: Vec<ProviderStat>,
}

impl AssetDetail {
    pub fn duration_line(&self) -> String {
        format!("Duration: {}", self.duration)
    }
}

impl TryFrom<&Asset> for AssetDetail {
    type Error = RenderError;

    fn try_from(asset: &Asset) -> Result<Self, Self::Error> {
        let providers = asset
            .total_views
            .providers
            .iter()
            .map(|(key, &current)| {
                let prev = asset.prev_total_views.provider(key).ok_or_else(|| {
                    RenderError::MissingSnapshot {
                        asset: asset.name.clone(),
                        provider: key.clone(),
                    }
                })?;
                Ok(ProviderStat {
                    key: key.clone(),
                    label: key.to_uppercase(),
                    current: format_thousands(current),
                    delta: format_delta(i128::from(current) - i128::from(prev)),
                })
            })
            .collect::<Result<Vec<_>, RenderError>>()?;

        Ok(Self {
            image: asset.display_image().to_string(),
            name: asset.name.clone(),
            provider: asset.provider.clone(),
            description: asset.description.clone(),
            duration: format_duration(asset.duration),
            genres: asset.genre.clone(),
            total_views: format!(
                "Total Views: {} (Previous: {})",
                format_thousands(asset.total_views.total),
                format_thousands(asset.prev_total_views.total)
            ),
            providers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie_a() -> Asset {
        serde_json::from_str(r#"{
            "name": "Movie A",
            "provider": "Netflix",
            "description": "A great movie about AI and humanity.",
            "duration": 7200,
            "genre": ["Drama", "Sci-Fi"],
            "assetImage": "movie-a.jpg",
            "videoImage": "",
            "totalViews": { "total": 100000, "netflix": 20000, "prime": 30000, "hulu": 50000 },
            "prevTotalViews": { "total": 95000, "netflix": 15000, "prime": 30000, "hulu": 55000 }
        }"#)
        .unwrap()
    }

    #[test]
    fn lookup_is_case_insensitive_and_trimmed() {
        let assets = vec![movie_a()];
        assert!(find_asset(&assets, "  Movie A  ").is_some());
        assert!(find_asset(&assets, "movie a").is_some());
        assert!(find_asset(&assets, "UnknownMovie").is_none());
        assert!(find_asset(&[], "Movie A").is_none());
    }

    #[test]
    fn lookup_returns_first_match_in_response_order() {
        let mut second = movie_a();
        second.provider = "Other".into();
        second.name = "MOVIE A".into();
        let assets = vec![movie_a(), second];
        assert_eq!(find_asset(&assets, "movie a").unwrap().provider, "Netflix");
    }

    #[test]
    fn card_fields() {
        let card = AssetCard::from(&movie_a());
        assert_eq!(card.href, "/assets/Movie%20A");
        assert_eq!(card.image, "movie-a.jpg");
        assert_eq!(card.duration, "2h 0m");
        assert_eq!(card.excerpt, "A great movie about AI and hum...");
        assert_eq!(card.genres, vec!["Drama", "Sci-Fi"]);
    }

    #[test]
    fn detail_summary_lines() {
        let detail = AssetDetail::try_from(&movie_a()).unwrap();
        assert_eq!(detail.name, "Movie A");
        assert_eq!(detail.duration_line(), "Duration: 2h 0m");
        assert_eq!(detail.total_views, "Total Views: 100,000 (Previous: 95,000)");
        assert!(detail.genres.iter().any(|g| g == "Drama"));
    }

    #[test]
    fn provider_stats_follow_payload_order_and_sign_rule() {
        let detail = AssetDetail::try_from(&movie_a()).unwrap();
        let labels: Vec<&str> = detail.providers.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["NETFLIX", "PRIME", "HULU"]);

        let summaries: Vec<String> = detail.providers.iter().map(ProviderStat::summary).collect();
        assert_eq!(summaries, vec!["20,000 (+5000)", "30,000 (0)", "50,000 (-5000)"]);
    }

    #[test]
    fn extreme_snapshots_do_not_overflow_the_delta() {
        let mut asset = movie_a();
        asset.total_views.providers.insert("netflix".into(), i64::MAX);
        asset.prev_total_views.providers.insert("netflix".into(), -1);
        let detail = AssetDetail::try_from(&asset).unwrap();
        assert_eq!(detail.providers[0].delta, "+9223372036854775808");
    }

    #[test]
    fn missing_previous_provider_count_is_a_render_error() {
        let mut asset = movie_a();
        asset.prev_total_views.providers.shift_remove("hulu");
        let err = AssetDetail::try_from(&asset).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingSnapshot {
                asset: "Movie A".into(),
                provider: "hulu".into()
            }
        );
    }
}
