use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use catalog_types::routes::ASSETS;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let navigate = use_navigate();
    let go_home = move |_| {
        navigate(
            ASSETS,
            NavigateOptions {
                replace: true,
                ..Default::default()
            },
        )
    };

    view! {
        <div class="notfound-wrapper">
            <h1 class="notfound-code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="text-muted">
                "Oops! The page you are looking for does not exist. You can go back to the home page to continue exploring."
            </p>
            <button class="btn btn-primary btn-lg" on:click=go_home>
                "Go Back Home"
            </button>
        </div>
    }
}
