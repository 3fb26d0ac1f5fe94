use chrono::Local;
use leptos::prelude::*;

use catalog_types::FetchState;
use catalog_types::lifecycle::{LOADING_TIME_SERIES, load_time_series};

use crate::api::HttpCatalog;
use crate::components::area_chart::AreaChart;
use crate::components::status::{ErrorAlert, LoadingSpinner};
use crate::fetch::use_fetch_on_mount;

#[component]
pub fn TimeSeriesPage() -> impl IntoView {
    let state = use_fetch_on_mount(|| async {
        let source = HttpCatalog::from_env();
        load_time_series(&source, &Local).await
    });

    view! {
        <div>
            {move || match state.get() {
                FetchState::Loading => {
                    view! { <LoadingSpinner caption=LOADING_TIME_SERIES/> }.into_any()
                }
                FetchState::Error(message) => view! { <ErrorAlert message=message/> }.into_any(),
                FetchState::Ready(points) => view! {
                    <div class="container page time-series-custom-container">
                        <div class="card time-series-card">
                            <h3 class="time-series-title">"Time Series Explorer"</h3>
                            <p class="text-center text-muted">
                                "Visualize the time-based data values over a date range"
                            </p>
                            <AreaChart points=points/>
                        </div>
                    </div>
                }
                .into_any(),
            }}
        </div>
    }
}
