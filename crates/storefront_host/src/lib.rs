//! Host capability contracts for the storefront runtime.
//!
//! The runtime never shows pop-ups or touches browser history itself. It calls the
//! [`NotificationService`] and [`NavigationService`] contracts exposed here, and the entry layer
//! decides which adapters back them: browser adapters from [`web`], or the no-op and in-memory
//! adapters used on native targets and in tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod host;
pub mod navigation;
pub mod notifications;
pub mod web;

pub use host::{HostStrategy, StorefrontServices};
pub use navigation::{
    MemoryNavigationService, NavigationFuture, NavigationService, NoopNavigationService,
};
pub use notifications::{
    MemoryNotificationService, NoopNotificationService, NotificationFuture, NotificationService,
};
pub use web::{AlertNotificationService, HistoryNavigationService};
