//! ShoeStyle storefront runtime: catalog loading, state reducer, host effect execution, and the
//! routed page tree built on `storefront_ui` primitives.

pub mod catalog;
pub mod components;
pub mod effect_executor;
pub mod host;
pub mod model;
pub mod pages;
pub mod reducer;
pub mod runtime_context;

pub use catalog::{load_catalog, parse_catalog, CatalogError, StorefrontCatalog};
pub use components::{StorefrontProvider, StorefrontRuntimeContext, StorefrontShell};
pub use host::{execute_effect, StorefrontHostContext};
pub use model::*;
pub use reducer::{reduce_storefront, ReducerError, StorefrontAction, StorefrontEffect};
pub use runtime_context::use_storefront_runtime;
