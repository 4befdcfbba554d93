//! Browser adapters for the host contracts.
//!
//! On non-`wasm32` targets both adapters succeed without side effects so shared code can be
//! exercised natively.

use crate::{NavigationFuture, NavigationService, NotificationFuture, NotificationService};

#[derive(Debug, Clone, Copy, Default)]
/// Notification adapter backed by `window.alert`.
pub struct AlertNotificationService;

impl NotificationService for AlertNotificationService {
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                return window
                    .alert_with_message(message)
                    .map_err(|err: JsValue| format!("alert dispatch failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = message;
                Ok(())
            }
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Navigation adapter backed by `history.pushState`.
///
/// Pushing state does not reload the document; the runtime has already swapped the page view by
/// the time this adapter runs, so it only keeps the address bar in sync.
pub struct HistoryNavigationService;

impl NavigationService for HistoryNavigationService {
    fn navigate<'a>(&'a self, path: &'a str) -> NavigationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::JsValue;
                let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
                let history = window
                    .history()
                    .map_err(|err: JsValue| format!("history unavailable: {err:?}"))?;
                let current = window.location().pathname().unwrap_or_default();
                if current == path {
                    return Ok(());
                }
                return history
                    .push_state_with_url(&JsValue::NULL, "", Some(path))
                    .map_err(|err: JsValue| format!("history push failed: {err:?}"));
            }

            #[cfg(not(target_arch = "wasm32"))]
            {
                let _ = path;
                Ok(())
            }
        })
    }
}
