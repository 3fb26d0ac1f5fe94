use leptos::prelude::*;
use leptos_router::hooks::use_location;

use catalog_types::routes::{ASSETS, TIME_SERIES, nav_section};

#[component]
pub fn Header() -> impl IntoView {
    let pathname = use_location().pathname;
    let section = move || pathname.with(|p| nav_section(p));

    view! {
        <header class="navbar">
            <div class="container navbar-inner">
                <a href=ASSETS class="navbar-brand">
                    <img src="/logo.svg" alt="Logo" class="header-logo-image"/>
                </a>
                <nav class="navbar-nav">
                    <a href=ASSETS class="nav-link" class:active=move || section() == Some(ASSETS)>
                        "Assets"
                    </a>
                    <a href=TIME_SERIES class="nav-link" class:active=move || section() == Some(TIME_SERIES)>
                        "Timeseries"
                    </a>
                </nav>
            </div>
        </header>
    }
}
