//! Runtime provider and context wiring for the storefront pages.
//!
//! This module owns the long-lived reducer container, the effect queue, the catalog, and the
//! injected host services. Page composition stays in [`crate::components`].

use leptos::*;
use storefront_host::StorefrontServices;

use crate::{
    catalog::StorefrontCatalog,
    effect_executor,
    host::StorefrontHostContext,
    model::{Route, StorefrontState},
    reducer::{reduce_storefront, StorefrontAction, StorefrontEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading storefront state and dispatching [`StorefrontAction`] values.
pub struct StorefrontRuntimeContext {
    /// Host service bundle for executing reducer effects.
    pub host: StoredValue<StorefrontHostContext>,
    /// Static catalog the pages render from.
    pub catalog: StoredValue<StorefrontCatalog>,
    /// Reactive storefront state signal.
    pub state: RwSignal<StorefrontState>,
    /// Queue of effects emitted by the reducer and drained by the executor.
    pub effects: RwSignal<Vec<StorefrontEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<StorefrontAction>,
}

impl StorefrontRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: StorefrontAction) {
        self.dispatch.call(action);
    }

    /// Returns a callback that dispatches a fixed action.
    pub fn action_callback(&self, action: StorefrontAction) -> Callback<()> {
        let dispatch = self.dispatch;
        Callback::new(move |()| dispatch.call(action.clone()))
    }
}

/// Applies `action` to `state`, returning the new state only when it changed.
///
/// Reducer failures are logged and leave the caller's state untouched.
pub(crate) fn apply_action(
    state: &StorefrontState,
    catalog: &StorefrontCatalog,
    action: StorefrontAction,
) -> (Option<StorefrontState>, Vec<StorefrontEffect>) {
    let mut next = state.clone();
    match reduce_storefront(&mut next, catalog, action) {
        Ok(effects) => ((next != *state).then_some(next), effects),
        Err(err) => {
            logging::warn!("storefront reducer error: {err}");
            (None, Vec::new())
        }
    }
}

#[component]
/// Provides [`StorefrontRuntimeContext`] to descendant components.
pub fn StorefrontProvider(
    /// Injected browser or headless host bundle assembled by the entry layer.
    services: StorefrontServices,
    /// Catalog loaded by the entry layer.
    catalog: StorefrontCatalog,
    /// Route derived from the URL at mount time.
    #[prop(default = Route::Home)]
    initial_route: Route,
    children: Children,
) -> impl IntoView {
    let state = create_rw_signal(StorefrontState::new(initial_route, catalog.all_products()));
    let catalog = store_value(catalog);
    let host = store_value(StorefrontHostContext::new(services));
    let effects = create_rw_signal(Vec::<StorefrontEffect>::new());

    let dispatch = Callback::new(move |action: StorefrontAction| {
        let current = state.get_untracked();
        let (next, new_effects) =
            catalog.with_value(|catalog| apply_action(&current, catalog, action));
        if let Some(next) = next {
            state.set(next);
        }
        if !new_effects.is_empty() {
            let mut queue = effects.get_untracked();
            queue.extend(new_effects);
            effects.set(queue);
        }
    });

    let runtime = StorefrontRuntimeContext {
        host,
        catalog,
        state,
        effects,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`StorefrontRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`StorefrontProvider`].
pub fn use_storefront_runtime() -> StorefrontRuntimeContext {
    use_context::<StorefrontRuntimeContext>().expect("StorefrontRuntimeContext not provided")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::catalog::{builtin_catalog_json, parse_catalog};

    #[test]
    fn unchanged_state_is_not_republished() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let state = StorefrontState::new(Route::Home, catalog.all_products());

        let (next, effects) = apply_action(&state, &catalog, StorefrontAction::SignIn);
        assert!(next.is_none());
        assert_eq!(effects.len(), 1);

        let (next, effects) =
            apply_action(&state, &catalog, StorefrontAction::Navigate(Route::About));
        assert_eq!(next.map(|state| state.route), Some(Route::About));
        assert_eq!(effects, vec![StorefrontEffect::Navigate(Route::About)]);
    }

    #[test]
    fn reducer_errors_leave_state_alone() {
        let catalog = parse_catalog(builtin_catalog_json()).expect("catalog");
        let state = StorefrontState::new(Route::Products, catalog.all_products());
        let (next, effects) = apply_action(
            &state,
            &catalog,
            StorefrontAction::AddToCart {
                product_id: "ghost".to_string(),
            },
        );
        assert!(next.is_none());
        assert!(effects.is_empty());
    }
}
