//! Host service bundle injected into the storefront runtime.

use std::rc::Rc;

use crate::{
    AlertNotificationService, HistoryNavigationService, NavigationService,
    NoopNavigationService, NoopNotificationService, NotificationService,
};

/// Stable host strategy selected by the entry layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`window.alert`, `history.pushState`).
    Browser,
    /// Headless composition with no-op or caller-supplied adapters.
    Headless,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Headless => "headless",
        }
    }
}

/// Runtime-selected service bundle.
///
/// Adapter selection happens before this bundle reaches `storefront_runtime`, which keeps the
/// runtime free of browser details.
#[derive(Clone)]
pub struct StorefrontServices {
    /// Notification delivery service.
    pub notifications: Rc<dyn NotificationService>,
    /// Route/location reflection service.
    pub navigation: Rc<dyn NavigationService>,
    /// Strategy that produced this bundle.
    pub host_strategy: HostStrategy,
}

impl StorefrontServices {
    /// Builds a bundle from explicit adapters.
    pub fn new(
        notifications: Rc<dyn NotificationService>,
        navigation: Rc<dyn NavigationService>,
        host_strategy: HostStrategy,
    ) -> Self {
        Self {
            notifications,
            navigation,
            host_strategy,
        }
    }

    /// Browser adapters.
    pub fn browser() -> Self {
        Self::new(
            Rc::new(AlertNotificationService),
            Rc::new(HistoryNavigationService),
            HostStrategy::Browser,
        )
    }

    /// No-op adapters for native builds.
    pub fn headless() -> Self {
        Self::new(
            Rc::new(NoopNotificationService),
            Rc::new(NoopNavigationService),
            HostStrategy::Headless,
        )
    }
}

impl Default for StorefrontServices {
    fn default() -> Self {
        if cfg!(target_arch = "wasm32") {
            Self::browser()
        } else {
            Self::headless()
        }
    }
}

impl std::fmt::Debug for StorefrontServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorefrontServices")
            .field("host_strategy", &self.host_strategy.as_str())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_default_bundle_is_headless() {
        let services = StorefrontServices::default();
        assert_eq!(services.host_strategy, HostStrategy::Headless);
        assert_eq!(services.host_strategy.as_str(), "headless");
    }
}
