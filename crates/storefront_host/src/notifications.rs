//! Notification service contracts plus no-op and recording adapters.

use std::{cell::RefCell, future::Future, pin::Pin, rc::Rc};

/// Object-safe boxed future used by [`NotificationService`].
pub type NotificationFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service for user-visible notifications (confirmations, "coming soon" placeholders).
pub trait NotificationService {
    /// Dispatches a notification message.
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op notification service for unsupported targets.
pub struct NoopNotificationService;

impl NotificationService for NoopNotificationService {
    fn notify<'a>(&'a self, _message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory notification service that records every delivered message in order.
///
/// Clones share the same log, so a test can keep one handle and give another to the runtime.
pub struct MemoryNotificationService {
    delivered: Rc<RefCell<Vec<String>>>,
}

impl MemoryNotificationService {
    /// Returns a snapshot of every message delivered so far.
    pub fn delivered(&self) -> Vec<String> {
        self.delivered.borrow().clone()
    }
}

impl NotificationService for MemoryNotificationService {
    fn notify<'a>(&'a self, message: &'a str) -> NotificationFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.delivered.borrow_mut().push(message.to_string());
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn memory_notification_service_records_in_order() {
        let service = MemoryNotificationService::default();
        let handle = service.clone();
        let service_obj: &dyn NotificationService = &service;

        block_on(service_obj.notify("first")).expect("notify");
        block_on(service_obj.notify("second")).expect("notify");

        assert_eq!(handle.delivered(), vec!["first".to_string(), "second".to_string()]);
    }

    #[test]
    fn noop_notification_service_always_succeeds() {
        assert_eq!(block_on(NoopNotificationService.notify("ignored")), Ok(()));
    }
}
