use leptos::*;
use leptos_meta::*;
use leptos_router::{use_location, Route as RouterRoute, Router, Routes};
use storefront_host::StorefrontServices;
use storefront_runtime::{
    load_catalog, use_storefront_runtime, Route, StorefrontAction, StorefrontProvider,
    StorefrontShell,
};

/// Action that brings the runtime back in line with a path the browser moved to on its own
/// (back/forward). `None` when the page already shows that route.
pub(crate) fn history_sync_action(path: &str, current: Route) -> Option<StorefrontAction> {
    let route = Route::from_path(path);
    (route != current).then_some(StorefrontAction::Navigate(route))
}

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Meta name="description" content="Premium footwear designed for comfort and style." />

        <Router>
            <Routes>
                <RouterRoute path="/*any" view=StorefrontEntry />
            </Routes>
        </Router>
    }
}

#[component]
/// Mounts the storefront for whichever path the browser loaded.
pub fn StorefrontEntry() -> impl IntoView {
    let location = use_location();
    let initial_route = Route::from_path(&location.pathname.get_untracked());

    view! {
        <StorefrontProvider
            services=StorefrontServices::default()
            catalog=load_catalog()
            initial_route=initial_route
        >
            <RouteTitle />
            <HistorySync />
            <StorefrontShell />
        </StorefrontProvider>
    }
}

#[component]
fn RouteTitle() -> impl IntoView {
    let runtime = use_storefront_runtime();
    let title = move || runtime.state.with(|state| state.route.title());

    view! { <Title text=title /> }
}

#[component]
fn HistorySync() -> impl IntoView {
    let runtime = use_storefront_runtime();

    let popstate_listener = window_event_listener(ev::popstate, move |_| {
        let Ok(path) = window().location().pathname() else {
            return;
        };
        let current = runtime.state.with_untracked(|state| state.route);
        if let Some(action) = history_sync_action(&path, current) {
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || popstate_listener.remove());
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn back_to_an_earlier_path_navigates_there() {
        assert_eq!(
            history_sync_action("/", Route::Products),
            Some(StorefrontAction::Navigate(Route::Home))
        );
        assert_eq!(
            history_sync_action("/contact", Route::About),
            Some(StorefrontAction::Navigate(Route::Contact))
        );
    }

    #[test]
    fn path_already_shown_dispatches_nothing() {
        assert_eq!(history_sync_action("/products", Route::Products), None);
        assert_eq!(history_sync_action("/products/", Route::Products), None);
    }

    #[test]
    fn unknown_path_falls_back_to_home() {
        assert_eq!(
            history_sync_action("/no-such-page", Route::About),
            Some(StorefrontAction::Navigate(Route::Home))
        );
        assert_eq!(history_sync_action("/no-such-page", Route::Home), None);
    }
}
