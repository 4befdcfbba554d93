//! Host-side execution of reducer effects.
//!
//! Effects are awaited against the injected [`StorefrontServices`]; failures are logged and never
//! reach the reducer.

use leptos::{logging, spawn_local};
use storefront_host::StorefrontServices;

use crate::reducer::StorefrontEffect;

#[derive(Clone, Debug, Default)]
/// Host service bundle for storefront runtime side effects.
pub struct StorefrontHostContext {
    services: StorefrontServices,
}

impl StorefrontHostContext {
    /// Wraps an injected service bundle.
    pub fn new(services: StorefrontServices) -> Self {
        Self { services }
    }

    /// Schedules `effect` on the local executor.
    pub fn run_effect(&self, effect: StorefrontEffect) {
        let services = self.services.clone();
        spawn_local(async move {
            let label = effect_label(&effect);
            if let Err(err) = execute_effect(&services, effect).await {
                logging::warn!("storefront {label} effect failed: {err}");
            }
        });
    }
}

fn effect_label(effect: &StorefrontEffect) -> &'static str {
    match effect {
        StorefrontEffect::Notify(_) => "notify",
        StorefrontEffect::Navigate(_) => "navigate",
    }
}

/// Executes one effect against `services`.
///
/// # Errors
///
/// Returns the adapter's error message when notification or navigation fails.
pub async fn execute_effect(
    services: &StorefrontServices,
    effect: StorefrontEffect,
) -> Result<(), String> {
    match effect {
        StorefrontEffect::Notify(message) => services.notifications.notify(&message).await,
        StorefrontEffect::Navigate(route) => services.navigation.navigate(route.path()).await,
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use storefront_host::{HostStrategy, MemoryNavigationService, MemoryNotificationService};

    use super::*;
    use crate::model::Route;

    #[test]
    fn effects_reach_the_matching_service() {
        let notifications = MemoryNotificationService::default();
        let navigation = MemoryNavigationService::default();
        let services = StorefrontServices::new(
            Rc::new(notifications.clone()),
            Rc::new(navigation.clone()),
            HostStrategy::Headless,
        );

        block_on(async {
            execute_effect(&services, StorefrontEffect::Navigate(Route::Contact))
                .await
                .expect("navigate");
            execute_effect(
                &services,
                StorefrontEffect::Notify("Form has been reset!".to_string()),
            )
            .await
            .expect("notify");
        });

        assert_eq!(navigation.visited(), vec!["/contact".to_string()]);
        assert_eq!(
            notifications.delivered(),
            vec!["Form has been reset!".to_string()]
        );
    }

    #[test]
    fn effect_labels_are_stable() {
        assert_eq!(effect_label(&StorefrontEffect::Navigate(Route::Home)), "navigate");
        assert_eq!(effect_label(&StorefrontEffect::Notify(String::new())), "notify");
    }
}
