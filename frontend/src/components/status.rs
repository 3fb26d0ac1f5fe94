use leptos::prelude::*;

#[component]
pub fn LoadingSpinner(caption: &'static str) -> impl IntoView {
    view! {
        <div class="status status--loading">
            <div class="spinner" role="status"></div>
            <p class="status-caption">{caption}</p>
        </div>
    }
}

/// Inline alert for a page whose fetch failed or found nothing.
#[component]
pub fn ErrorAlert(message: String, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    view! {
        <div class="container status">
            <div class="alert alert-danger" role="alert">{message}</div>
            {children.map(|c| c())}
        </div>
    }
}

/// Shown by the top-level boundary when a page fails to render.
#[component]
pub fn ErrorPanel(on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="container status">
            <div class="error-panel">
                <h2>"Something went wrong"</h2>
                <p class="text-muted">"This page could not be displayed."</p>
                <button class="btn btn-primary" on:click=move |_| on_retry.run(())>
                    "Try again"
                </button>
            </div>
        </div>
    }
}
