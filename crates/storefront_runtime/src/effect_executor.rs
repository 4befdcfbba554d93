//! Effect-queue executor for reducer-emitted side effects.

use leptos::*;

use crate::runtime_context::StorefrontRuntimeContext;

/// Installs the executor that drains reducer-emitted effects in order.
pub fn install(runtime: StorefrontRuntimeContext) {
    // Clear the queue before running so effects dispatched while draining land in a fresh batch.
    create_effect(move |_| {
        let queued = runtime.effects.get();
        if queued.is_empty() {
            return;
        }

        runtime.effects.set(Vec::new());

        runtime.host.with_value(|host| {
            for effect in queued {
                host.run_effect(effect);
            }
        });
    });
}
