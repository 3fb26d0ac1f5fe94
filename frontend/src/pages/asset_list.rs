use leptos::prelude::*;
use leptos_router::components::A;

use catalog_types::lifecycle::{LOADING_ASSETS, load_asset_list};
use catalog_types::{AssetCard, FetchState};

use crate::api::HttpCatalog;
use crate::components::status::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch_on_mount;

#[component]
pub fn AssetListPage() -> impl IntoView {
    let state = use_fetch_on_mount(|| async {
        let source = HttpCatalog::from_env();
        load_asset_list(&source).await
    });

    view! {
        <div>
            {move || match state.get() {
                FetchState::Loading => view! { <LoadingSpinner caption=LOADING_ASSETS/> }.into_any(),
                FetchState::Error(message) => view! { <ErrorAlert message=message/> }.into_any(),
                FetchState::Ready(assets) => view! {
                    <div class="container page">
                        <div class="movies-title-container">
                            <h1 class="movies-title">"Movies"</h1>
                        </div>
                        <div class="card-grid">
                            {assets
                                .iter()
                                .map(|asset| view! { <AssetCardView card=AssetCard::from(asset)/> })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}

#[component]
fn AssetCardView(card: AssetCard) -> impl IntoView {
    view! {
        <div class="card card-custom">
            <A href=card.href>
                <img src=card.image alt=card.name.clone() class="asset-list-card-image"/>
                <div class="card-body">
                    <h5 class="card-title" data-testid="asset-title">{card.name}</h5>
                    <h6 class="card-subtitle text-muted">{card.provider}</h6>
                    <h6 class="card-subtitle small">{card.duration}</h6>
                    <p class="card-text">{card.excerpt}</p>
                    <div>
                        {card
                            .genres
                            .into_iter()
                            .map(|genre| view! { <span class="badge">{genre}</span> })
                            .collect_view()}
                    </div>
                </div>
            </A>
        </div>
    }
}
