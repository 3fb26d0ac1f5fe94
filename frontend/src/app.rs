use leptos::prelude::*;
use leptos_router::{
    components::{Redirect, Route, Router, Routes},
    path,
};

use catalog_types::routes::ASSETS;

use crate::components::header::Header;
use crate::components::status::ErrorPanel;
use crate::pages::{
    asset_detail::AssetDetailPage, asset_list::AssetListPage, not_found::NotFoundPage,
    timeseries::TimeSeriesPage,
};

#[component]
pub fn App() -> impl IntoView {
    // Bumped by the error panel's retry; rebuilding the boundary remounts
    // the routed page, which then fetches again on its own.
    let generation = RwSignal::new(0_u32);
    let retry = Callback::new(move |_| generation.update(|g| *g += 1));

    view! {
        <Router>
            <div id="app">
                <Header/>
                <main class="page-offset">
                    {move || {
                        generation.track();
                        view! {
                            <ErrorBoundary fallback=move |_| view! { <ErrorPanel on_retry=retry/> }>
                                <Routes fallback=NotFoundPage>
                                    <Route path=path!("/") view=|| view! { <Redirect path=ASSETS/> }/>
                                    <Route path=path!("/assets") view=AssetListPage/>
                                    <Route path=path!("/assets/:name") view=AssetDetailPage/>
                                    <Route path=path!("/timeseries") view=TimeSeriesPage/>
                                </Routes>
                            </ErrorBoundary>
                        }
                    }}
                </main>
            </div>
        </Router>
    }
}
