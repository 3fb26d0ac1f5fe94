use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use catalog_types::lifecycle::{LOADING_ASSET_DETAIL, load_asset_detail};
use catalog_types::routes::ASSETS;
use catalog_types::{AssetDetail, FetchState};

use crate::api::HttpCatalog;
use crate::components::status::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch_on_mount;

#[component]
pub fn AssetDetailPage() -> impl IntoView {
    let raw_name = use_params_map().with_untracked(|params| params.get("name"));
    let state = use_fetch_on_mount(move || {
        let raw_name = raw_name.clone();
        async move {
            let source = HttpCatalog::from_env();
            load_asset_detail(&source, raw_name.as_deref()).await
        }
    });

    view! {
        <div>
            {move || match state.get() {
                FetchState::Loading => {
                    view! { <LoadingSpinner caption=LOADING_ASSET_DETAIL/> }.into_any()
                }
                FetchState::Error(message) => view! {
                    <ErrorAlert message=message>
                        <div class="text-center">
                            <A href=ASSETS>
                                <span class="btn btn-primary">"Back to Movies List"</span>
                            </A>
                        </div>
                    </ErrorAlert>
                }
                .into_any(),
                FetchState::Ready(asset) => AssetDetail::try_from(&asset)
                    .inspect_err(|err| tracing::error!(error = %err, "cannot render asset detail"))
                    .map(|detail| view! { <AssetDetailView detail=detail/> })
                    .into_any(),
            }}
        </div>
    }
}

#[component]
fn AssetDetailView(detail: AssetDetail) -> impl IntoView {
    let background = format!("background-image: url({})", detail.image);
    let duration = detail.duration_line();

    view! {
        <div class="asset-detail-background loaded" style=background>
            <div class="container custom-container">
                <nav class="breadcrumb">
                    <A href=ASSETS>"Movies"</A>
                    <span class="breadcrumb-sep">"/"</span>
                    <span class="breadcrumb-active" data-testid="movie-title">{detail.name.clone()}</span>
                </nav>

                <div class="card detail-card">
                    <div class="detail-row">
                        <img src=detail.image alt=detail.name.clone() class="asset-detail-image"/>
                        <div class="detail-body">
                            <h2>{detail.name}</h2>
                            <h6 class="text-muted">{detail.provider}</h6>
                            <p>{detail.description}</p>
                            <p>{duration}</p>
                            <p>
                                <strong>"Genres: "</strong>
                                {detail
                                    .genres
                                    .into_iter()
                                    .map(|genre| view! { <span class="badge">{genre}</span> })
                                    .collect_view()}
                            </p>

                            <h5 class="view-stats-title">"View Stats"</h5>
                            <p>{detail.total_views}</p>
                            <div class="provider-stats">
                                {detail
                                    .providers
                                    .into_iter()
                                    .map(|stat| {
                                        view! {
                                            <div class="providerkey-container">
                                                <strong>{stat.label.clone()}</strong>
                                                <p>{stat.summary()}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
