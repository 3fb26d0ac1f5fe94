use std::future::Future;

use leptos::prelude::*;
use leptos::task::spawn_local;

use catalog_types::{CancelToken, FetchState, MountGuard};

/// Run `load` once after the calling component mounts and expose its
/// progress as a signal.
///
/// The guard keeps a re-run of the mount effect from sending a second
/// request. The token is cancelled on cleanup, so a response that lands
/// after the page is gone is dropped rather than written.
pub fn use_fetch_on_mount<T, F, Fut>(load: F) -> ReadSignal<FetchState<T>>
where
    T: Send + Sync + 'static,
    F: Fn() -> Fut + 'static,
    Fut: Future<Output = FetchState<T>> + 'static,
{
    let state = RwSignal::new(FetchState::Loading);
    let guard = MountGuard::new();
    let token = CancelToken::new();

    on_cleanup({
        let token = token.clone();
        move || token.cancel()
    });

    Effect::new(move |_| {
        if !guard.try_arm() {
            return;
        }
        let token = token.clone();
        let pending = load();
        spawn_local(async move {
            let outcome = pending.await;
            token.deliver(outcome, |s| {
                let _ = state.try_set(s);
            });
        });
    });

    state.read_only()
}
