//! Navigation service contracts plus no-op and recording adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NavigationService`].
pub type NavigationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that reflects storefront route changes into the host's location/history.
pub trait NavigationService {
    /// Moves the host location to `path` (for example `/products`).
    fn navigate<'a>(&'a self, path: &'a str) -> NavigationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigation service for hosts without a location bar.
pub struct NoopNavigationService;

impl NavigationService for NoopNavigationService {
    fn navigate<'a>(&'a self, _path: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory navigation service that records visited paths in order.
pub struct MemoryNavigationService {
    visited: Rc<RefCell<Vec<String>>>,
}

impl MemoryNavigationService {
    /// Returns every path navigated to so far.
    pub fn visited(&self) -> Vec<String> {
        self.visited.borrow().clone()
    }
}

impl NavigationService for MemoryNavigationService {
    fn navigate<'a>(&'a self, path: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            if !path.starts_with('/') {
                return Err(format!("navigation path must be absolute: {path}"));
            }
            self.visited.borrow_mut().push(path.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_navigation_tracks_current_path() {
        let service = MemoryNavigationService::default();
        let nav: &dyn NavigationService = &service;

        block_on(nav.navigate("/about")).expect("navigate");
        block_on(nav.navigate("/contact")).expect("navigate");

        assert_eq!(service.visited(), vec!["/about", "/contact"]);
    }

    #[test]
    fn memory_navigation_rejects_relative_paths() {
        let service = MemoryNavigationService::default();

        let err = block_on(service.navigate("products")).expect_err("relative path");

        assert!(err.contains("absolute"));
        assert!(service.visited().is_empty());
    }
}
